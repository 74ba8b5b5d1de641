//! Backend Config

use std::time::Duration;

use clap::Args;

/// Backend connection settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Base URL of the POS backend API
    #[arg(long, env = "BREWPOS_API_URL", default_value = "http://localhost:8000/api")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "BREWPOS_TIMEOUT_SECONDS", default_value_t = 30u64)]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
