//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use brewpos::reports::{DailyRevenue, MonthlyRevenue, Overview, ProductRevenue};

use crate::gateway::{ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct HttpReportsService {
    api: ApiClient,
}

impl HttpReportsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReportsService for HttpReportsService {
    async fn overview(&self) -> Result<Overview, ApiError> {
        self.api.get("reports/overview").await
    }

    async fn product_revenue(&self) -> Result<Vec<ProductRevenue>, ApiError> {
        self.api.get("reports/product-revenue").await
    }

    async fn daily_revenue(&self) -> Result<Vec<DailyRevenue>, ApiError> {
        self.api.get("reports/daily-revenue").await
    }

    async fn monthly_revenue(&self) -> Result<Vec<MonthlyRevenue>, ApiError> {
        self.api.get("reports/monthly-revenue").await
    }
}

/// Aggregates computed by the backend. Every endpoint is restricted to
/// administrators and answers 403 otherwise.
#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    async fn overview(&self) -> Result<Overview, ApiError>;

    async fn product_revenue(&self) -> Result<Vec<ProductRevenue>, ApiError>;

    async fn daily_revenue(&self) -> Result<Vec<DailyRevenue>, ApiError>;

    async fn monthly_revenue(&self) -> Result<Vec<MonthlyRevenue>, ApiError>;
}
