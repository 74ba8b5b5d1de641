//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use brewpos::{
    payments::PaymentMethod,
    products::{Category, CategoryId, Product},
};

use crate::gateway::{ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    api: ApiClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get("categories").await
    }

    async fn products(&self, category: Option<CategoryId>) -> Result<Vec<Product>, ApiError> {
        match category {
            Some(category) => {
                self.api
                    .get_with_query("products", &[("category_id", category.get())])
                    .await
            }
            None => self.api.get("products").await,
        }
    }

    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.api.get("payment-methods").await
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Products in `category`, or every product when `None`.
    async fn products(&self, category: Option<CategoryId>) -> Result<Vec<Product>, ApiError>;

    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError>;
}

#[cfg(test)]
mod tests {
    use brewpos::{
        navigation::View,
        prices::{Price, format_price},
        session::Role,
    };
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::test::{StubResponse, StubServer, logged_in_client};

    use super::*;

    #[tokio::test]
    async fn products_are_filtered_by_category() -> TestResult {
        let server = StubServer::start(vec![
            StubResponse::ok(
                "GET /api/products?category_id=2",
                r#"[{"id": 7, "name": "Tea", "price": 15000.0, "category_id": 2},
                    {"id": 8, "name": "Matcha", "price": 12500.50, "category_id": 2}]"#,
            ),
            StubResponse::ok("GET /api/products", "[]"),
        ])
        .await?;
        let service = HttpCatalogService::new(
            logged_in_client(&server.base_url(), Role::Seller, View::Order).await?,
        );

        let tea = service.products(Some(CategoryId::new(2))).await?;
        let everything = service.products(None).await?;

        assert_eq!(tea.first().map(|product| product.price), Some(Price::new(15_000)));
        assert_eq!(
            tea.get(1).map(|product| format_price(product.price, iso::USD)),
            Some(format!("12.500,50{}", iso::USD.symbol))
        );
        assert!(everything.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn payment_methods_use_backend_codes() -> TestResult {
        let server = StubServer::start(vec![StubResponse::ok(
            "GET /api/payment-methods",
            r#"[{"id": 1, "payment_method_code": "CASH", "name": "Cash"}]"#,
        )])
        .await?;
        let service = HttpCatalogService::new(
            logged_in_client(&server.base_url(), Role::Seller, View::Order).await?,
        );

        let methods = service.payment_methods().await?;

        assert_eq!(methods.first().map(|method| method.code.as_str()), Some("CASH"));

        Ok(())
    }
}
