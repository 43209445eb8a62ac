//! Diagnostic tracing for the `paycalc` binaries.
//!
//! Reads `RUST_LOG`; defaults to `warn` if unset. Output goes to stderr so
//! the report on stdout stays clean.
//!
//! ```bash
//! RUST_LOG=paycalc=debug paycalc -r 40 -p 20
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
pub fn init() {
    init_with_default("warn");
}

/// Installs the global tracing subscriber with `default_filter` used when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
