//! Tracing setup for the appliance runtime.

/// Initializes structured logging for the whole process.
///
/// Verbosity is controlled with the `RUST_LOG` environment variable, e.g.
/// `RUST_LOG=info` or `RUST_LOG=coffee_machine=debug`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
