use async_trait::async_trait;

use super::http::{decode, normalize_base_url};
use crate::domain::ports::OrdersApi;
use crate::errors::ApiError;
use crate::models::order::{CreateOrderRequest, Order, OrderLineRef};

/// reqwest-backed [`OrdersApi`].
pub struct HttpOrdersApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpOrdersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http,
        }
    }
}

#[async_trait]
impl OrdersApi for HttpOrdersApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/orders", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        let resp = self
            .http
            .get(format!("{}/orders/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    async fn create_order(&self, lines: &[OrderLineRef]) -> Result<Order, ApiError> {
        let body = CreateOrderRequest {
            items: lines.to_vec(),
        };
        let resp = self
            .http
            .post(format!("{}/orders", self.base_url))
            .json(&body)
            .send()
            .await?;
        decode(resp).await
    }
}
