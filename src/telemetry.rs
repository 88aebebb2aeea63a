//! Logging setup.
//!
//! Log lines go to stderr so they never interleave with the game prompt on
//! stdout. Priority: `RUST_LOG` env var > `level` parameter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_telemetry_with_level(level: &str) {
    let default_filter = format!("{},hunch={}", level, level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}
