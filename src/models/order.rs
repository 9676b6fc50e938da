use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a placed order: the item reference plus the name and unit
/// price the orders service snapshotted at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: i64,
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A placed order. `total` is computed by the orders service and is the
/// authoritative amount; the client displays it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub items: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub created_unix: i64,
}

impl Order {
    /// Creation time as a UTC datetime. `None` if the backend ever reports a
    /// timestamp outside chrono's representable range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_unix, 0)
    }
}

/// One element of the order-creation body. Only the id and the desired
/// quantity are sent; the backend resolves name and price itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLineRef {
    pub id: i64,
    pub quantity: i32,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn order_deserializes_backend_shape() {
        let order: Order = serde_json::from_value(json!({
            "id": 4,
            "items": [
                {"item_id": 3, "name": "Widget", "quantity": 2, "price": 9.99}
            ],
            "total": 19.98,
            "created_unix": 1700000000
        }))
        .unwrap();
        assert_eq!(order.total, dec!(19.98));
        assert_eq!(order.items[0].price, dec!(9.99));
        assert_eq!(
            order.created_at().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn create_request_sends_only_ids_and_quantities() {
        let body = CreateOrderRequest {
            items: vec![OrderLineRef { id: 3, quantity: 2 }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"items": [{"id": 3, "quantity": 2}]})
        );
    }
}
