use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "pika_reactions=info";

/// Installs a global fmt subscriber honouring `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything, and an
/// already-installed subscriber from the host is left alone.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
