//! Sales report view.

use thiserror::Error;
use tracing::warn;

use brewpos::reports::SalesReport;

use crate::{domain::reports::ReportsService, gateway::ApiError};

/// Sales report failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The backend answered 403; the user stays logged in.
    #[error("you do not have permission to view reports")]
    PermissionDenied,

    /// Any other backend failure.
    #[error("failed to load report")]
    Api(#[source] ApiError),
}

impl From<ApiError> for ReportError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Forbidden => Self::PermissionDenied,
            error => Self::Api(error),
        }
    }
}

/// Fetch every section of the sales report.
///
/// # Errors
///
/// Returns [`ReportError::PermissionDenied`] when the backend answers 403;
/// the session is left intact. Any other failure is [`ReportError::Api`].
pub async fn load_sales_report(service: &dyn ReportsService) -> Result<SalesReport, ReportError> {
    let report = async {
        Ok::<_, ApiError>(SalesReport {
            overview: service.overview().await?,
            products: service.product_revenue().await?,
            daily: service.daily_revenue().await?,
            monthly: service.monthly_revenue().await?,
        })
    }
    .await;

    report.map_err(|error| {
        let error = ReportError::from(error);
        warn!("failed to load sales report: {error}");
        error
    })
}
