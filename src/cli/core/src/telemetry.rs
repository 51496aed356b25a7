/* src/cli/core/src/telemetry.rs */

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::BusbarConfig;

/// Install the global subscriber. `RUST_LOG` wins over `[log].filter`.
pub fn init(config: &BusbarConfig) -> Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(&config.log.filter))
    .with_context(|| format!("invalid log filter \"{}\"", config.log.filter))?;

  let json = config.log.json;
  let subscriber = tracing_subscriber::registry()
    .with(filter)
    .with(json.then(|| fmt::layer().json()))
    .with((!json).then(fmt::layer));
  tracing::subscriber::set_global_default(subscriber)
    .context("failed to install tracing subscriber")
}
