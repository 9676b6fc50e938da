use std::env;

/// Local-development default for the inventory service.
pub const DEFAULT_INVENTORY_URL: &str = "http://localhost:8001";
/// Local-development default for the orders service.
pub const DEFAULT_ORDERS_URL: &str = "http://localhost:8002";

/// Base URLs of the two backend services. Each is independently
/// addressable; nothing requires them to live on the same host.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub inventory_url: String,
    pub orders_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            inventory_url: DEFAULT_INVENTORY_URL.to_string(),
            orders_url: DEFAULT_ORDERS_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `INVENTORY_API_URL` and `ORDERS_API_URL`, falling back to the
    /// local-development defaults. The binary calls `dotenvy::dotenv()`
    /// first, so a `.env` file works too.
    pub fn from_env() -> Self {
        Self {
            inventory_url: env::var("INVENTORY_API_URL")
                .unwrap_or_else(|_| DEFAULT_INVENTORY_URL.to_string()),
            orders_url: env::var("ORDERS_API_URL")
                .unwrap_or_else(|_| DEFAULT_ORDERS_URL.to_string()),
        }
    }
}
