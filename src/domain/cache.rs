use crate::models::item::Item;

/// The most recently fetched list of orderable items.
///
/// Only items with stock on hand are retained; a reload replaces the whole
/// list rather than merging, so a reader never sees a mix of two fetches.
/// Callers that fail a reload simply don't call [`replace_with_available`],
/// leaving the previous contents intact.
///
/// [`replace_with_available`]: ItemCache::replace_with_available
#[derive(Debug, Clone, Default)]
pub struct ItemCache {
    items: Vec<Item>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list with the items from a fresh fetch, keeping
    /// only those with `quantity > 0`.
    pub fn replace_with_available(&mut self, items: Vec<Item>) {
        self.items = items.into_iter().filter(|i| i.quantity > 0).collect();
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
