//! Customer management view operations.

use thiserror::Error;
use tracing::{info, warn};

use brewpos::customers::{Customer, CustomerForm, CustomerFormError, CustomerId};

use crate::{domain::customers::CustomersService, gateway::ApiError};

/// Customer management failures.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// The edit form did not validate; nothing was sent.
    #[error("invalid customer")]
    Invalid(#[from] CustomerFormError),

    /// The backend listed customers but not this one.
    #[error("customer #{0} not found")]
    NotFound(CustomerId),

    /// The backend call failed.
    #[error("customer request failed")]
    Api(#[from] ApiError),
}

/// Load the customer list; failures degrade to an empty list.
pub async fn customer_list(service: &dyn CustomersService, active_only: bool) -> Vec<Customer> {
    let customers = if active_only {
        service.list_active().await
    } else {
        service.list().await
    };

    customers.unwrap_or_else(|error| {
        warn!(active_only, "failed to load customers: {error}");
        Vec::new()
    })
}

/// Look up one customer in the full listing.
///
/// # Errors
///
/// Returns [`CustomerError::Api`] when the listing fails and
/// [`CustomerError::NotFound`] when it succeeds without `id`.
pub async fn find_customer(
    service: &dyn CustomersService,
    id: CustomerId,
) -> Result<Customer, CustomerError> {
    service
        .list()
        .await?
        .into_iter()
        .find(|customer| customer.id == id)
        .ok_or(CustomerError::NotFound(id))
}

/// Create a customer, or update `existing`, from the edit form.
///
/// # Errors
///
/// Returns [`CustomerError::Invalid`] without calling the backend when the
/// form does not validate, or [`CustomerError::Api`] when the call fails.
pub async fn save_customer(
    service: &dyn CustomersService,
    existing: Option<CustomerId>,
    form: &CustomerForm,
) -> Result<CustomerId, CustomerError> {
    form.validate()?;

    let id = match existing {
        Some(id) => {
            service.update(id, form).await?;
            id
        }
        None => service.create(form).await?.id,
    };

    info!(%id, created = existing.is_none(), "customer saved");

    Ok(id)
}
