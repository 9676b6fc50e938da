use crate::domain::draft::OrderDraft;
use crate::domain::errors::ValidationError;
use crate::domain::ops::{InFlight, Op, OpGuard};
use crate::domain::ports::OrdersApi;
use crate::errors::ClientError;
use crate::models::order::Order;

/// Read and create operations against the orders service.
pub struct OrderService<A> {
    api: A,
    flags: InFlight,
}

impl<A: OrdersApi> OrderService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            flags: InFlight::new(),
        }
    }

    /// All orders, newest first.
    pub async fn list(&self) -> Result<Vec<Order>, ClientError> {
        let _busy = self.begin(Op::LoadOrders)?;
        let mut orders = self.api.list_orders().await?;
        orders.sort_by(|a, b| b.created_unix.cmp(&a.created_unix));
        Ok(orders)
    }

    pub async fn get(&self, id: i64) -> Result<Order, ClientError> {
        let _busy = self.begin(Op::LoadOrder(id))?;
        Ok(self.api.get_order(id).await?)
    }

    /// Submit the draft's valid lines (chosen item, positive quantity).
    ///
    /// With no valid line the submission fails before any request is made.
    /// On success the draft is reset to a single blank line, ready for the
    /// next order; the caller refreshes whatever lists it renders. On
    /// failure the draft is left exactly as it was so the user can retry,
    /// and the backend's message travels up verbatim.
    pub async fn submit(&self, draft: &mut OrderDraft) -> Result<Order, ClientError> {
        let lines = draft.valid_lines();
        if lines.is_empty() {
            return Err(ValidationError::EmptyOrder.into());
        }
        let _busy = self.begin(Op::SubmitOrder)?;
        let order = self.api.create_order(&lines).await?;
        log::info!("order {} created, total {}", order.id, order.total);
        draft.reset();
        Ok(order)
    }

    fn begin(&self, op: Op) -> Result<OpGuard<'_>, ClientError> {
        self.flags.begin(op).ok_or(ClientError::Busy(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::order::{OrderLine, OrderLineRef};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeOrdersApi {
        orders: Mutex<Vec<Order>>,
        created: Mutex<Vec<Vec<OrderLineRef>>>,
        reject_with: Mutex<Option<String>>,
    }

    #[async_trait]
    impl OrdersApi for FakeOrdersApi {
        async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
            self.orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or(ApiError::Status {
                    status: StatusCode::NOT_FOUND,
                    message: "not found".to_string(),
                })
        }

        async fn create_order(&self, lines: &[OrderLineRef]) -> Result<Order, ApiError> {
            if let Some(message) = self.reject_with.lock().unwrap().clone() {
                return Err(ApiError::Status {
                    status: StatusCode::BAD_REQUEST,
                    message,
                });
            }
            self.created.lock().unwrap().push(lines.to_vec());
            Ok(Order {
                id: 1,
                items: lines
                    .iter()
                    .map(|l| OrderLine {
                        item_id: l.id,
                        name: format!("item-{}", l.id),
                        quantity: l.quantity,
                        price: dec!(9.99),
                    })
                    .collect(),
                total: dec!(19.98),
                created_unix: 1_700_000_000,
            })
        }
    }

    fn order(id: i64, created_unix: i64) -> Order {
        Order {
            id,
            items: vec![],
            total: dec!(1),
            created_unix,
        }
    }

    #[tokio::test]
    async fn blank_draft_fails_validation_without_a_request() {
        let service = OrderService::new(FakeOrdersApi::default());
        let mut draft = OrderDraft::new();
        let err = service.submit(&mut draft).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::EmptyOrder)
        ));
        assert!(service.api.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_sends_refs_and_resets_the_draft() {
        let service = OrderService::new(FakeOrdersApi::default());
        let mut draft = OrderDraft::new();
        draft.set_item(0, 3);
        draft.set_quantity(0, 2);
        draft.add_line(); // blank, filtered out of the request

        let order = service.submit(&mut draft).await.unwrap();
        assert_eq!(order.total, dec!(19.98));
        assert_eq!(
            service.api.created.lock().unwrap().as_slice(),
            &[vec![OrderLineRef { id: 3, quantity: 2 }]]
        );
        assert_eq!(draft.lines().len(), 1);
        assert!(draft.valid_lines().is_empty());
    }

    #[tokio::test]
    async fn failed_submission_preserves_the_draft() {
        let service = OrderService::new(FakeOrdersApi::default());
        *service.api.reject_with.lock().unwrap() = Some("insufficient stock".to_string());

        let mut draft = OrderDraft::new();
        draft.set_item(0, 3);
        draft.set_quantity(0, 2);
        let before = draft.lines().to_vec();

        let err = service.submit(&mut draft).await.unwrap_err();
        assert_eq!(err.to_string(), "insufficient stock");
        assert_eq!(draft.lines(), before.as_slice());
    }

    #[tokio::test]
    async fn orders_list_newest_first() {
        let service = OrderService::new(FakeOrdersApi {
            orders: Mutex::new(vec![order(1, 100), order(2, 300), order(3, 200)]),
            ..FakeOrdersApi::default()
        });
        let listed = service.list().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
