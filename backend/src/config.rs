//! Account service configuration loaded via OrthoConfig.
//!
//! Values come from `ACCOUNTS_*` environment variables, configuration files,
//! and command-line arguments, layered by OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::notification::DEFAULT_SENDER_ADDRESS;

const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration values for wiring and running the account service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct AccountSettings {
    /// `tracing` filter directive, e.g. `info` or `accounts=debug`.
    pub log_filter: Option<String>,
    /// Emit structured JSON log lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Address notifications are sent from.
    pub sender_address: Option<String>,
}

impl AccountSettings {
    /// Return the configured log filter, falling back to `info`.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Return the configured sender address, falling back to the default.
    pub fn sender_address(&self) -> &str {
        self.sender_address
            .as_deref()
            .unwrap_or(DEFAULT_SENDER_ADDRESS)
    }
}
