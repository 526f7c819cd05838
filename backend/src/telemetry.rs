//! Tracing subscriber installation.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AccountSettings;

/// Install the global `tracing` subscriber described by `settings`.
///
/// An unparsable filter falls back to `info`. Installing twice is not an
/// error: the second attempt is logged and ignored so tests and embedding
/// applications can call this freely.
pub fn init_tracing(settings: &AccountSettings) {
    let (filter, rejected) = match EnvFilter::try_new(settings.log_filter()) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new("info"), Some(error)),
    };

    let result = if settings.json_logs {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
    if let Some(error) = rejected {
        warn!(
            filter = settings.log_filter(),
            error = %error,
            "invalid log filter; using info"
        );
    }
}
