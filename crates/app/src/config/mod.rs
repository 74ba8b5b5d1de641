//! Client configuration

use clap::Args;

mod api;
mod logging;
mod session;

pub use api::ApiConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use session::SessionConfig;

/// Everything needed to build an [`AppContext`](crate::context::AppContext).
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Session persistence settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
