//! Payment Methods

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Payment Method Id
pub type PaymentMethodId = TypedId<PaymentMethod>;

/// A payment method offered at the till. The cart selects one by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Backend identifier
    pub id: PaymentMethodId,

    /// Stable code sent with orders
    #[serde(rename = "payment_method_code")]
    pub code: String,

    /// Display name
    pub name: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
}
