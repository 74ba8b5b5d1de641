//! Orders

use std::{fmt, str::FromStr};

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    customers::CustomerId,
    ids::TypedId,
    prices::{Price, PriceError},
    products::ProductId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// One line of a submitted order, snapshotted from the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product identifier
    pub product_id: ProductId,

    /// Product name at submission time
    pub product_name: String,

    /// Unit price at submission time
    pub unit_price: Price,

    /// Ordered quantity
    pub quantity: u32,
}

impl OrderLine {
    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the multiplication overflows.
    pub fn subtotal(&self) -> Result<Price, PriceError> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Order submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    /// Lines to purchase
    pub items: Vec<OrderLine>,

    /// Selected payment method code
    pub payment_method_code: String,

    /// Customer the order is placed for, if any
    pub customer_id: Option<CustomerId>,
}

/// Backend acknowledgement of a created order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedOrder {
    /// Server-assigned order id
    pub order_id: OrderId,
}

/// Full order as read back from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,

    /// Creation time, in shop-local time
    #[serde(alias = "order_date")]
    pub created_at: DateTime,

    /// Ordered lines
    #[serde(default)]
    pub items: Vec<OrderLine>,

    /// Server computed total
    pub total_amount: Price,

    /// Payment method code used
    #[serde(default)]
    pub payment_method_code: Option<String>,

    /// Customer the order was placed for
    #[serde(default)]
    pub customer_id: Option<CustomerId>,

    /// Backend order status
    #[serde(default)]
    pub status: Option<String>,
}

/// History row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order identifier
    pub id: OrderId,

    /// Creation time, in shop-local time
    pub order_date: DateTime,

    /// Sum of line quantities
    pub total_quantity: u64,

    /// Server computed total
    pub total_amount: Price,
}

/// Relative time window for the order history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFilter {
    /// Orders placed today
    #[default]
    #[serde(rename = "today")]
    Today,

    /// Orders placed yesterday
    #[serde(rename = "yesterday")]
    Yesterday,

    /// Orders placed in the past 7 days
    #[serde(rename = "7days")]
    Last7Days,

    /// Orders placed in the past 14 days
    #[serde(rename = "14days")]
    Last14Days,

    /// Orders placed in the past 30 days
    #[serde(rename = "30days")]
    Last30Days,
}

impl DateFilter {
    /// All filters in display order.
    pub const ALL: [Self; 5] = [
        Self::Today,
        Self::Yesterday,
        Self::Last7Days,
        Self::Last14Days,
        Self::Last30Days,
    ];

    /// Query-string value understood by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7Days => "7days",
            Self::Last14Days => "14days",
            Self::Last30Days => "30days",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown date filter text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown date filter {0:?}")]
pub struct UnknownDateFilter(String);

impl FromStr for DateFilter {
    type Err = UnknownDateFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| UnknownDateFilter(value.to_string()))
    }
}
