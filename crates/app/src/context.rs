//! App Context

use std::sync::Arc;

use rusty_money::iso::{self, Currency};
use thiserror::Error;

use brewpos::navigation::View;

use crate::{
    auth::{Authenticator, HttpAuthService},
    config::ClientConfig,
    domain::{
        catalog::{CatalogService, HttpCatalogService},
        customers::{CustomersService, HttpCustomersService},
        orders::{HttpOrdersService, OrdersService},
        reports::{HttpReportsService, ReportsService},
        till::Till,
    },
    gateway::{ApiClient, ApiError},
    navigator::Navigator,
    session::{FileTokenStorage, SessionStore},
};

/// Failures while wiring the client from configuration.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The configured code is not an ISO currency.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),

    /// The HTTP client could not be built.
    #[error("failed to build http client")]
    Http(#[source] ApiError),
}

/// Shared session, navigation and backend services.
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub navigator: Navigator,
    pub auth: Authenticator,
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub customers: Arc<dyn CustomersService>,
    pub reports: Arc<dyn ReportsService>,
    pub currency: &'static Currency,
}

impl AppContext {
    /// Wire the HTTP-backed services from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the currency code is unknown or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppInitError> {
        let currency = iso::find(&config.session.currency.to_ascii_uppercase())
            .ok_or_else(|| AppInitError::UnknownCurrency(config.session.currency.clone()))?;

        let session = SessionStore::new(Arc::new(FileTokenStorage::new(
            config.session.token_path.clone(),
        )));
        let navigator = Navigator::new(View::Login);

        let api = ApiClient::new(
            &config.api.api_url,
            config.api.timeout(),
            session.clone(),
            navigator.clone(),
        )
        .map_err(AppInitError::Http)?;

        let auth = Authenticator::new(
            Arc::new(HttpAuthService::new(api.clone())),
            session.clone(),
            navigator.clone(),
        );

        Ok(Self {
            session,
            navigator,
            auth,
            catalog: Arc::new(HttpCatalogService::new(api.clone())),
            orders: Arc::new(HttpOrdersService::new(api.clone())),
            customers: Arc::new(HttpCustomersService::new(api.clone())),
            reports: Arc::new(HttpReportsService::new(api)),
            currency,
        })
    }

    /// A fresh order screen bound to this context's services.
    #[must_use]
    pub fn till(&self) -> Till {
        Till::new(self.catalog.clone(), self.orders.clone(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{ApiConfig, LogFormat, LoggingConfig, SessionConfig};

    use super::*;

    fn config(currency: &str) -> ClientConfig {
        ClientConfig {
            api: ApiConfig {
                api_url: "http://localhost:8000/api".to_string(),
                timeout_seconds: 30,
            },
            session: SessionConfig {
                token_path: PathBuf::from("unused/token.json"),
                currency: currency.to_string(),
            },
            logging: LoggingConfig {
                log_level: "info".to_string(),
                log_format: LogFormat::Compact,
            },
        }
    }

    #[test]
    fn currency_code_is_case_insensitive() {
        let context = AppContext::from_config(&config("vnd"));

        assert!(context.is_ok_and(|context| context.currency == iso::VND));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        assert!(matches!(
            AppContext::from_config(&config("XXZ")),
            Err(AppInitError::UnknownCurrency(_))
        ));
    }
}
