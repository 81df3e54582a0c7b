//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{AppError, AppResult};

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`; without it, events at INFO and above are kept.
pub fn init_tracing() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Telemetry(e.to_string()))
}
