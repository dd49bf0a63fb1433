//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `DEGREES_LOG=degrees=debug`.
pub const LOG_ENV: &str = "DEGREES_LOG";

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by [`LOG_ENV`].
///
/// Falls back to `degrees=info` if the variable is unset or invalid. Only the
/// first call has any effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("degrees=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
