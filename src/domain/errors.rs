use thiserror::Error;

/// Client-detected input problems. Raising one of these means the operation
/// was blocked before any request went out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("add at least one item to the order")]
    EmptyOrder,
    #[error("all fields are required")]
    MissingFields,
    #[error("quantity and price must be positive")]
    NegativeAmount,
    #[error("item {0} has no stock left to remove")]
    OutOfStock(i64),
    #[error("invalid line spec '{0}', expected ITEM_ID:QTY")]
    BadLineSpec(String),
}
