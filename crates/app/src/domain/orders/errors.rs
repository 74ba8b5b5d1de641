//! Order submission errors.

use thiserror::Error;

use crate::gateway::ApiError;

/// Why an order was not placed.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No line has a quantity above zero.
    #[error("the cart is empty")]
    EmptyCart,

    /// No payment method is selected.
    #[error("select a payment method")]
    NoPaymentMethod,

    /// The backend rejected the order or could not be reached.
    #[error("failed to place order")]
    Api(#[from] ApiError),
}

impl SubmissionError {
    /// Caught before any request was made.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyCart | Self::NoPaymentMethod)
    }
}
