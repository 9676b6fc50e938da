use async_trait::async_trait;

use super::http::{decode, normalize_base_url};
use crate::domain::ports::InventoryApi;
use crate::errors::ApiError;
use crate::models::item::{Item, NewItem, QuantityAdjustment};

/// reqwest-backed [`InventoryApi`].
///
/// Requests carry no timeout: a hung backend leaves the operation pending
/// until the connection resolves, and its in-flight key held with it.
pub struct HttpInventoryApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Share an existing client; connections are pooled per client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http,
        }
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/items", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    async fn get_item(&self, id: i64) -> Result<Item, ApiError> {
        let resp = self
            .http
            .get(format!("{}/items/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        let resp = self
            .http
            .post(format!("{}/items", self.base_url))
            .json(item)
            .send()
            .await?;
        decode(resp).await
    }

    async fn adjust_quantity(&self, id: i64, delta: i32) -> Result<Item, ApiError> {
        let resp = self
            .http
            .post(format!("{}/items/{}/adjust", self.base_url, id))
            .json(&QuantityAdjustment { delta })
            .send()
            .await?;
        decode(resp).await
    }
}
