use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::item::{Item, NewItem};
use crate::models::order::{Order, OrderLineRef};

/// The inventory service as the client sees it.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    async fn get_item(&self, id: i64) -> Result<Item, ApiError>;
    async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError>;
    async fn adjust_quantity(&self, id: i64, delta: i32) -> Result<Item, ApiError>;
}

/// The orders service as the client sees it.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn get_order(&self, id: i64) -> Result<Order, ApiError>;
    async fn create_order(&self, lines: &[OrderLineRef]) -> Result<Order, ApiError>;
}
