//! `tracing` bootstrap for test binaries.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the `EnvFilter` directives for assay's own events.
pub const LOG_ENV: &str = "ASSAY_LOG";

/// Install a test-writer subscriber filtered by `$ASSAY_LOG` (default
/// `warn`). Safe to call from every test; only the first call installs
/// anything, and an already installed global subscriber is left alone.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
