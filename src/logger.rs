use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
