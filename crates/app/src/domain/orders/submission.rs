//! Order submission workflow.

use std::sync::Arc;

use tracing::{error, info};

use brewpos::{
    cart::Cart,
    customers::CustomerId,
    orders::{NewOrder, OrderId},
};

use crate::domain::orders::{OrdersService, SubmissionError};

/// Progress of the current order submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted, or the last result was dismissed.
    #[default]
    Idle,

    /// The request is in flight.
    Submitting,

    /// The backend accepted the order.
    Succeeded(OrderId),

    /// The backend call failed; the cart is untouched.
    Failed(String),
}

/// Validates and places orders, tracking [`SubmissionState`].
pub struct OrderSubmission {
    service: Arc<dyn OrdersService>,
    state: SubmissionState,
}

impl OrderSubmission {
    #[must_use]
    pub fn new(service: Arc<dyn OrdersService>) -> Self {
        Self {
            service,
            state: SubmissionState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Back to idle, e.g. when the user navigates away.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Submit the cart as one order.
    ///
    /// Validation happens before any request: an empty cart or a missing
    /// payment method leaves the state idle. On success the cart is cleared;
    /// on failure it is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::EmptyCart`] or
    /// [`SubmissionError::NoPaymentMethod`] for validation failures, and
    /// [`SubmissionError::Api`] when the backend call fails.
    pub async fn submit(
        &mut self,
        cart: &mut Cart,
        payment_method_code: Option<&str>,
        customer_id: Option<CustomerId>,
    ) -> Result<OrderId, SubmissionError> {
        self.state = SubmissionState::Idle;

        if !cart.has_purchasable_items() {
            return Err(SubmissionError::EmptyCart);
        }

        let payment_method_code = payment_method_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or(SubmissionError::NoPaymentMethod)?;

        let order = NewOrder {
            items: cart.snapshot(),
            payment_method_code: payment_method_code.to_string(),
            customer_id,
        };

        self.state = SubmissionState::Submitting;

        match self.service.create_order(&order).await {
            Ok(created) => {
                info!(
                    order_id = %created.order_id,
                    lines = order.items.len(),
                    payment_method_code,
                    "order placed"
                );

                cart.clear();
                self.state = SubmissionState::Succeeded(created.order_id);

                Ok(created.order_id)
            }
            Err(api) => {
                let error = SubmissionError::Api(api);

                error!("order submission failed: {error}");

                self.state = SubmissionState::Failed(error.to_string());

                Err(error)
            }
        }
    }
}
