//! Order history and detail views.

use tracing::warn;

use brewpos::orders::{DateFilter, Order, OrderId, OrderSummary};

use crate::{domain::orders::OrdersService, gateway::ApiError};

/// What the order detail view shows.
#[derive(Debug)]
pub enum OrderView {
    /// The order and its lines.
    Found(Box<Order>),

    /// Dedicated state with a way back to the history list.
    NotFound(OrderId),

    /// Any other failure; the view offers a retry.
    Failed(ApiError),
}

/// Load one order for the detail view.
pub async fn view_order(service: &dyn OrdersService, id: OrderId) -> OrderView {
    match service.get_order(id).await {
        Ok(order) => OrderView::Found(Box::new(order)),
        Err(ApiError::NotFound) => OrderView::NotFound(id),
        Err(error) => {
            warn!(%id, "failed to load order: {error}");
            OrderView::Failed(error)
        }
    }
}

/// Load the history list. Failures degrade to an empty list.
pub async fn order_history(service: &dyn OrdersService, filter: DateFilter) -> Vec<OrderSummary> {
    service.history(filter).await.unwrap_or_else(|error| {
        warn!(%filter, "failed to load order history: {error}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use mockall::predicate::eq;

    use brewpos::prices::Price;

    use crate::domain::orders::MockOrdersService;

    use super::*;

    #[tokio::test]
    async fn missing_order_is_not_found_state() {
        let mut service = MockOrdersService::new();
        service
            .expect_get_order()
            .with(eq(OrderId::new(9)))
            .returning(|_| Err(ApiError::NotFound));

        let view = view_order(&service, OrderId::new(9)).await;

        assert!(matches!(view, OrderView::NotFound(id) if id == OrderId::new(9)));
    }

    #[tokio::test]
    async fn history_passes_filter() {
        let mut service = MockOrdersService::new();
        service
            .expect_history()
            .with(eq(DateFilter::Last7Days))
            .returning(|_| {
                Ok(vec![OrderSummary {
                    id: OrderId::new(1),
                    order_date: date(2026, 3, 2).at(9, 30, 0, 0),
                    total_quantity: 3,
                    total_amount: Price::new(55_000),
                }])
            });

        let history = order_history(&service, DateFilter::Last7Days).await;

        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn history_failure_is_empty() {
        let mut service = MockOrdersService::new();
        service.expect_history().returning(|_| {
            Err(ApiError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                message: String::new(),
            })
        });

        assert!(order_history(&service, DateFilter::Today).await.is_empty());
    }
}
