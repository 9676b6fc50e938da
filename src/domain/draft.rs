use rust_decimal::Decimal;

use super::cache::ItemCache;
use crate::models::order::OrderLineRef;

/// Id used by a line whose item hasn't been chosen yet. Real item ids start
/// at 1.
pub const UNSELECTED: i64 = 0;

/// One editable row of an order being put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftLine {
    pub item_id: i64,
    pub quantity: i32,
}

impl DraftLine {
    fn blank() -> Self {
        Self {
            item_id: UNSELECTED,
            quantity: 1,
        }
    }

    /// A line counts toward the order once an item is chosen and the
    /// quantity is positive.
    pub fn is_valid(&self) -> bool {
        self.item_id > 0 && self.quantity > 0
    }
}

/// The working state of the order-creation flow: an ordered list of lines,
/// never fewer than one.
///
/// Field writes are not validated; everything is checked at submission, and
/// the quantity ceiling is advisory input for display controls. Totals
/// computed here are estimates; the orders service recomputes the real one.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// A fresh draft holds a single blank line.
    pub fn new() -> Self {
        Self {
            lines: vec![DraftLine::blank()],
        }
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Append a blank line. There is no upper bound on line count.
    pub fn add_line(&mut self) {
        self.lines.push(DraftLine::blank());
    }

    /// Remove the line at `index`. Refused (returns `false`) when it is the
    /// only line left or `index` is out of range.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Point the line at `index` at a different item. Returns `false` for an
    /// out-of-range index.
    pub fn set_item(&mut self, index: usize, item_id: i64) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.item_id = item_id;
                true
            }
            None => false,
        }
    }

    /// Overwrite the quantity of the line at `index`. Returns `false` for an
    /// out-of-range index.
    pub fn set_quantity(&mut self, index: usize, quantity: i32) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// The lines that would actually be submitted, in draft order.
    pub fn valid_lines(&self) -> Vec<OrderLineRef> {
        self.lines
            .iter()
            .filter(|l| l.is_valid())
            .map(|l| OrderLineRef {
                id: l.item_id,
                quantity: l.quantity,
            })
            .collect()
    }

    /// Display estimate: the sum of cached price × quantity over valid
    /// lines. Lines whose item is not in the cache contribute zero. Never
    /// sent to a backend; the orders service computes the real total.
    pub fn provisional_total(&self, cache: &ItemCache) -> Decimal {
        self.lines
            .iter()
            .filter(|l| l.quantity > 0)
            .filter_map(|l| {
                cache
                    .get(l.item_id)
                    .map(|item| item.price * Decimal::from(l.quantity))
            })
            .sum()
    }

    /// Advisory ceiling for the quantity input of the line at `index`: the
    /// cached stock of its item, or 1 while the item is unresolved. The
    /// authoritative stock check happens server-side at order creation.
    pub fn max_quantity(&self, index: usize, cache: &ItemCache) -> i32 {
        self.lines
            .get(index)
            .and_then(|l| cache.get(l.item_id))
            .map(|i| i.quantity)
            .unwrap_or(1)
    }

    /// Back to a single blank line, as after a successful submission.
    pub fn reset(&mut self) {
        self.lines = vec![DraftLine::blank()];
    }
}
