//! Session Config

use std::path::PathBuf;

use clap::Args;

/// Session persistence and display settings.
#[derive(Debug, Clone, Args)]
pub struct SessionConfig {
    /// File the session token is kept in between runs
    #[arg(long, env = "BREWPOS_TOKEN_PATH", default_value = ".brewpos/token.json")]
    pub token_path: PathBuf,

    /// ISO 4217 code of the shop currency
    #[arg(long, env = "BREWPOS_CURRENCY", default_value = "VND")]
    pub currency: String,
}
