//! Reports
//!
//! Aggregates are computed server-side; these are the rows the report view renders.

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// Today's order count and revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Orders placed today
    pub total_orders: u64,

    /// Revenue taken today
    pub total_revenue: Price,
}

/// Revenue for one product today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevenue {
    /// Product name as recorded on order lines
    pub product_name: String,

    /// Units sold
    pub quantity: u64,

    /// Revenue from those units
    pub total_price: Price,
}

/// Revenue for one day. `date` is a display label produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    /// Day label
    pub date: String,

    /// Revenue for the day
    pub revenue: Price,
}

/// Revenue for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label
    pub month: String,

    /// Revenue for the month
    pub revenue: Price,
}

/// Everything the report view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport {
    /// Today's headline numbers
    pub overview: Overview,

    /// Per-product revenue
    pub products: Vec<ProductRevenue>,

    /// Daily revenue series
    pub daily: Vec<DailyRevenue>,

    /// Monthly revenue series
    pub monthly: Vec<MonthlyRevenue>,
}
