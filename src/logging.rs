//! Log setup on top of `tracing-subscriber`.
//!
//! `RUST_LOG` wins when set; otherwise the level follows the number of
//! `-v` flags: warn, info, debug, trace.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // keep the GUI stack quiet unless asked for explicitly
        EnvFilter::new(format!("warn,folio={}", level.as_str().to_ascii_lowercase()))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(verbosity > 1))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
