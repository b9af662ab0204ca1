use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config::default_log_level().into())
        .from_env()?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
