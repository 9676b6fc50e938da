pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod models;

use application::inventory::InventoryService;
use application::orders::OrderService;
use infrastructure::inventory::HttpInventoryApi;
use infrastructure::orders::HttpOrdersApi;

pub use config::ClientConfig;
pub use errors::{ApiError, ClientError};

/// Both backend services behind one handle, sharing a single connection
/// pool.
pub struct Storefront {
    pub inventory: InventoryService<HttpInventoryApi>,
    pub orders: OrderService<HttpOrdersApi>,
}

impl Storefront {
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            inventory: InventoryService::new(HttpInventoryApi::with_client(
                http.clone(),
                config.inventory_url.as_str(),
            )),
            orders: OrderService::new(HttpOrdersApi::with_client(
                http,
                config.orders_url.as_str(),
            )),
        }
    }
}
