//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use brewpos::customers::{CreatedCustomer, Customer, CustomerForm, CustomerId};

use crate::gateway::{Acknowledgement, ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct HttpCustomersService {
    api: ApiClient,
}

impl HttpCustomersService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CustomersService for HttpCustomersService {
    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        self.api.get("customers").await
    }

    async fn list_active(&self) -> Result<Vec<Customer>, ApiError> {
        self.api.get("customers/active").await
    }

    async fn create(&self, form: &CustomerForm) -> Result<CreatedCustomer, ApiError> {
        self.api.post("customers", form).await
    }

    async fn update(&self, id: CustomerId, form: &CustomerForm) -> Result<Acknowledgement, ApiError> {
        self.api.put(&format!("customers/{id}"), form).await
    }

    async fn deactivate(&self, id: CustomerId) -> Result<Acknowledgement, ApiError> {
        self.api.delete(&format!("customers/{id}")).await
    }

    async fn activate(&self, id: CustomerId) -> Result<Acknowledgement, ApiError> {
        self.api.put_empty(&format!("customers/{id}/activate")).await
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Every customer, in listing order.
    async fn list(&self) -> Result<Vec<Customer>, ApiError>;

    /// Customers that can be picked for a new order.
    async fn list_active(&self) -> Result<Vec<Customer>, ApiError>;

    async fn create(&self, form: &CustomerForm) -> Result<CreatedCustomer, ApiError>;

    async fn update(&self, id: CustomerId, form: &CustomerForm) -> Result<Acknowledgement, ApiError>;

    /// Soft delete; the backend only marks the customer inactive.
    async fn deactivate(&self, id: CustomerId) -> Result<Acknowledgement, ApiError>;

    async fn activate(&self, id: CustomerId) -> Result<Acknowledgement, ApiError>;
}

#[cfg(test)]
mod tests {
    use brewpos::{navigation::View, session::Role};
    use testresult::TestResult;

    use crate::test::{StubResponse, StubServer, logged_in_client};

    use super::*;

    #[tokio::test]
    async fn lifecycle_endpoints() -> TestResult {
        let server = StubServer::start(vec![
            StubResponse::ok(
                "POST /api/customers",
                r#"{"message": "Customer created successfully", "id": 12}"#,
            ),
            StubResponse::ok(
                "PUT /api/customers/12/activate",
                r#"{"message": "Customer activated successfully"}"#,
            ),
            StubResponse::ok(
                "PUT /api/customers/12",
                r#"{"message": "Customer updated successfully"}"#,
            ),
            StubResponse::ok(
                "DELETE /api/customers/12",
                r#"{"message": "Customer deactivated successfully"}"#,
            ),
        ])
        .await?;
        let service = HttpCustomersService::new(
            logged_in_client(&server.base_url(), Role::Admin, View::Customers).await?,
        );

        let form = CustomerForm {
            customer_name: "Mai".to_string(),
            ..CustomerForm::default()
        };

        let created = service.create(&form).await?;

        assert_eq!(created.id, CustomerId::new(12));
        assert_eq!(
            service.update(created.id, &form).await?.message,
            "Customer updated successfully"
        );
        assert_eq!(
            service.deactivate(created.id).await?.message,
            "Customer deactivated successfully"
        );
        assert_eq!(
            service.activate(created.id).await?.message,
            "Customer activated successfully"
        );

        Ok(())
    }
}
