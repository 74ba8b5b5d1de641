//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use brewpos::orders::{CreatedOrder, DateFilter, NewOrder, Order, OrderId, OrderSummary};

use crate::gateway::{Acknowledgement, ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    api: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        self.api.post("orders", order).await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.api.get(&format!("orders/view/{id}")).await
    }

    async fn history(&self, filter: DateFilter) -> Result<Vec<OrderSummary>, ApiError> {
        self.api
            .get_with_query("orders/history", &[("date_filter", filter.as_str())])
            .await
    }

    async fn delete_order(&self, id: OrderId) -> Result<Acknowledgement, ApiError> {
        self.api.delete(&format!("orders/delete/{id}")).await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError>;

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;

    async fn history(&self, filter: DateFilter) -> Result<Vec<OrderSummary>, ApiError>;

    async fn delete_order(&self, id: OrderId) -> Result<Acknowledgement, ApiError>;
}

#[cfg(test)]
mod tests {
    use brewpos::{
        navigation::View,
        orders::OrderLine,
        prices::Price,
        products::ProductId,
        session::Role,
    };
    use testresult::TestResult;

    use crate::test::{StubResponse, StubServer, logged_in_client};

    use super::*;

    #[tokio::test]
    async fn create_order_posts_cart_snapshot() -> TestResult {
        let server = StubServer::start(vec![StubResponse::ok(
            "POST /api/orders",
            r#"{"message": "Order created successfully", "order_id": 17}"#,
        )])
        .await?;
        let service = HttpOrdersService::new(
            logged_in_client(&server.base_url(), Role::Seller, View::Order).await?,
        );

        let created = service
            .create_order(&NewOrder {
                items: vec![OrderLine {
                    product_id: ProductId::new(1),
                    product_name: "Latte".to_string(),
                    unit_price: Price::new(20_000),
                    quantity: 2,
                }],
                payment_method_code: "CASH".to_string(),
                customer_id: None,
            })
            .await?;

        assert_eq!(created.order_id, OrderId::new(17));

        let requests = server.requests().await;
        let body = requests.first().map(String::as_str).unwrap_or_default();

        assert!(body.contains(r#""payment_method_code":"CASH""#));
        assert!(body.contains(r#""quantity":2"#));

        Ok(())
    }

    #[tokio::test]
    async fn history_sends_date_filter() -> TestResult {
        let server = StubServer::start(vec![StubResponse::ok(
            "GET /api/orders/history?date_filter=7days",
            r#"[{"id": 5, "order_date": "2026-03-02T09:30:00", "total_quantity": 3, "total_amount": 55000.0}]"#,
        )])
        .await?;
        let service = HttpOrdersService::new(
            logged_in_client(&server.base_url(), Role::Seller, View::OrderHistory).await?,
        );

        let history = service.history(DateFilter::Last7Days).await?;

        assert_eq!(history.len(), 1);
        assert_eq!(history.first().map(|order| order.total_amount), Some(Price::new(55_000)));

        Ok(())
    }

    #[tokio::test]
    async fn missing_order_is_not_found() -> TestResult {
        let server = StubServer::start(Vec::new()).await?;
        let service = HttpOrdersService::new(
            logged_in_client(&server.base_url(), Role::Seller, View::OrderHistory).await?,
        );

        assert!(matches!(
            service.get_order(OrderId::new(404)).await,
            Err(ApiError::NotFound)
        ));
        assert_eq!(server.hits("GET /api/orders/view/404").await, 1);

        Ok(())
    }
}
