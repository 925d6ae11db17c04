// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for demos and embedding applications
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `land_calculator=info`, or
/// `land_calculator=debug` when `verbose` is true. Calling it twice is a no-op.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "land_calculator=debug,info"
    } else {
        "land_calculator=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
