//! Tracing setup for the server binary.
//!
//! `RUST_LOG` takes precedence over the default filter. Production logs are
//! emitted as JSON lines; everything else uses the human-readable formatter.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::settings::AppEnvironment;

const DEFAULT_FILTER: &str = "info,portfolio_site=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn for_env(env: &AppEnvironment) -> Self {
        match env {
            AppEnvironment::Production => LogFormat::Json,
            AppEnvironment::Development | AppEnvironment::Testing => LogFormat::Pretty,
        }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
