/* src/cli/core/src/main.rs */

mod config;
mod paths;
mod serve;
mod telemetry;
mod ui;
mod url;

use std::path::PathBuf;

use anyhow::Result;
use busbar_engine::SiteEnv;
use clap::{Parser, Subcommand};

use config::resolve_config;

#[derive(Parser)]
#[command(name = "busbar", about = "Busbar site backend CLI", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the JSON API (article proxies, SEO metadata, health)
  Serve {
    /// Path to busbar.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen port, overrides [server].port and PORT
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Validate the localized route table and print a report
  Paths {
    /// Path to busbar.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Resolve one route to its localized, canonical and alternate URLs
  Url {
    /// Route key, e.g. `articles-detail`
    route: String,
    /// Target locale
    #[arg(short, long, default_value = "en")]
    locale: String,
    /// Route param as key=value (repeatable)
    #[arg(short = 'P', long = "param")]
    params: Vec<String>,
    /// Path to busbar.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, port } => {
      let (path, mut config) = resolve_config(config)?;
      if let Some(port) = port {
        config.server.port = port;
      }
      telemetry::init(&config)?;
      serve::run_serve(&config, path.as_deref()).await
    }
    Command::Paths { config } => {
      // config is only checked here; the route table is built in
      resolve_config(config)?;
      paths::run_paths()
    }
    Command::Url { route, locale, params, config } => {
      let (_, config) = resolve_config(config)?;
      let urls = config.site_urls(SiteEnv::from_env())?;
      url::run_url(&urls, &route, &locale, &params)
    }
  }
}
