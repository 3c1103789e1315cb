use std::env;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console logging.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info` globally with
/// `debug` for this crate so per-anchor placement activity is visible.
pub fn init_logging() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(&log_level).add_directive("ar_placer=debug".parse().unwrap())
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!("logging initialized with level: {}", log_level);
}
