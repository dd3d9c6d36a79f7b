//! Logging setup

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `STAFFING_LOG=staffing_forecast=debug`
pub const LOG_ENV: &str = "STAFFING_LOG";
const DEFAULT_FILTER: &str = "staffing_forecast=warn";

static INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
