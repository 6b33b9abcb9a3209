//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the basket tracing/logging system.
///
/// Reads the `BASKET_LOG` environment variable for per-module log levels.
/// Format: `BASKET_LOG=basket_analysis::mining::apriori=debug,basket_analysis::encoding::encoder=warn`
///
/// Falls back to `basket=info` if `BASKET_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BASKET_LOG")
            .unwrap_or_else(|_| EnvFilter::new("basket=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
