//! Tracing setup for host applications

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for a host shell
///
/// Honors `RUST_LOG`; defaults to debug for this crate and warn for the
/// HTTP stack.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrisetu_client=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
