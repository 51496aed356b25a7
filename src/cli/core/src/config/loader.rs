/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::BusbarConfig;

pub const CONFIG_FILE: &str = "busbar.toml";

/// Walk upward from `start` to find `busbar.toml`, like Cargo.toml discovery
pub fn find_busbar_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_busbar_config(path: &Path) -> Result<BusbarConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: BusbarConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Resolve config (explicit path, else discovered, else defaults), then apply
/// environment overrides. Returns the file used, if any.
pub fn resolve_config(explicit: Option<PathBuf>) -> Result<(Option<PathBuf>, BusbarConfig)> {
  let path = match explicit {
    Some(p) => Some(p),
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_busbar_config(&cwd).ok()
    }
  };
  let mut config = match path {
    Some(ref p) => load_busbar_config(p)?,
    None => BusbarConfig::default(),
  };
  config.apply_env(|name| std::env::var(name).ok())?;
  config.validate()?;
  Ok((path, config))
}
