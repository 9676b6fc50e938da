use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

/// One user-triggered operation, keyed by the entity it affects where that
/// matters (each item row has its own adjustment key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    LoadItems,
    LoadItem(i64),
    CreateItem,
    AdjustItem(i64),
    LoadOrders,
    LoadOrder(i64),
    SubmitOrder,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::LoadItems => write!(f, "load items"),
            Op::LoadItem(id) => write!(f, "load item {id}"),
            Op::CreateItem => write!(f, "create item"),
            Op::AdjustItem(id) => write!(f, "adjust item {id}"),
            Op::LoadOrders => write!(f, "load orders"),
            Op::LoadOrder(id) => write!(f, "load order {id}"),
            Op::SubmitOrder => write!(f, "submit order"),
        }
    }
}

/// Tracks which operations have a request outstanding, one key per
/// operation rather than a global busy flag, so actions on unrelated rows
/// never interfere.
///
/// There is no cancellation: a key stays held until its guard drops, which
/// for a hung request is whenever that request finally resolves.
#[derive(Debug, Default)]
pub struct InFlight {
    pending: Mutex<HashSet<Op>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `op`. Returns `None` when the same operation is already
    /// outstanding; otherwise the returned guard holds the claim until it
    /// is dropped.
    pub fn begin(&self, op: Op) -> Option<OpGuard<'_>> {
        let mut pending = self.lock();
        if pending.insert(op) {
            Some(OpGuard { owner: self, op })
        } else {
            None
        }
    }

    pub fn is_pending(&self, op: Op) -> bool {
        self.lock().contains(&op)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<Op>> {
        // A poisoned set just means some holder panicked; the keys are
        // still consistent.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// RAII claim on an [`Op`]; releases the key on drop.
#[derive(Debug)]
pub struct OpGuard<'a> {
    owner: &'a InFlight,
    op: Op,
}

impl Drop for OpGuard<'_> {
    fn drop(&mut self) {
        self.owner.lock().remove(&self.op);
    }
}
