/* src/cli/core/src/config/types.rs */

use std::time::Duration;

use anyhow::{Context, Result, bail};
use busbar_engine::{Indexing, LocalePrefix, SiteEnv, SiteUrls};
use busbar_server::ContentConfig;
use busbar_server::client::{DEFAULT_CMS_URL, DEFAULT_WORDPRESS_API};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusbarConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub cms: CmsSection,
  #[serde(default)]
  pub wordpress: WordpressSection,
  #[serde(default)]
  pub log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSection {
  /// Public origin; `NEXT_PUBLIC_SITE_URL` takes precedence when set.
  pub url: Option<String>,
  #[serde(default)]
  pub locale_prefix: LocalePrefix,
  /// Crawler policy; derived from `VERCEL_ENV` and `NODE_ENV` when unset.
  pub indexing: Option<Indexing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_timeout_secs")]
  pub upstream_timeout_secs: u64,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      upstream_timeout_secs: default_timeout_secs(),
    }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_timeout_secs() -> u64 {
  10
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsSection {
  #[serde(default = "default_cms_url")]
  pub url: String,
  pub token: Option<String>,
}

impl Default for CmsSection {
  fn default() -> Self {
    Self { url: default_cms_url(), token: None }
  }
}

fn default_cms_url() -> String {
  DEFAULT_CMS_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordpressSection {
  #[serde(default = "default_wordpress_api")]
  pub api_base: String,
}

impl Default for WordpressSection {
  fn default() -> Self {
    Self { api_base: default_wordpress_api() }
  }
}

fn default_wordpress_api() -> String {
  DEFAULT_WORDPRESS_API.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
  #[serde(default)]
  pub json: bool,
  /// Used when `RUST_LOG` is unset.
  #[serde(default = "default_log_filter")]
  pub filter: String,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { json: false, filter: default_log_filter() }
  }
}

fn default_log_filter() -> String {
  "info".to_string()
}

impl BusbarConfig {
  pub fn validate(&self) -> Result<()> {
    if self.cms.url.trim().is_empty() {
      bail!("cms.url must not be empty");
    }
    if self.wordpress.api_base.trim().is_empty() {
      bail!("wordpress.api_base must not be empty");
    }
    if self.server.upstream_timeout_secs == 0 {
      bail!("server.upstream_timeout_secs must be greater than 0");
    }
    Ok(())
  }

  /// Apply `STRAPI_BASE_URL`, `STRAPI_API_TOKEN`, `WORDPRESS_API_INTERNAL`
  /// and `PORT`. Empty values are ignored.
  pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
    let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());
    if let Some(url) = var("STRAPI_BASE_URL") {
      self.cms.url = url;
    }
    if let Some(token) = var("STRAPI_API_TOKEN") {
      self.cms.token = Some(token);
    }
    if let Some(api) = var("WORDPRESS_API_INTERNAL") {
      self.wordpress.api_base = api;
    }
    if let Some(port) = var("PORT") {
      self.server.port =
        port.trim().parse().with_context(|| format!("PORT must be a port number, got \"{port}\""))?;
    }
    Ok(())
  }

  pub fn content_config(&self) -> ContentConfig {
    ContentConfig {
      cms_url: self.cms.url.clone(),
      cms_token: self.cms.token.clone().filter(|t| !t.is_empty()),
      wordpress_api: self.wordpress.api_base.clone(),
      timeout: Duration::from_secs(self.server.upstream_timeout_secs),
    }
  }

  /// Site URL context. `[site].url` stands in for `NEXT_PUBLIC_SITE_URL`
  /// when the variable is unset or empty.
  pub fn site_urls(&self, mut env: SiteEnv) -> Result<SiteUrls> {
    let explicit = env.public_site_url.as_deref().is_some_and(|v| !v.trim().is_empty());
    if !explicit {
      env.public_site_url = self.site.url.clone();
    }
    Ok(SiteUrls::from_site_env(&env).with_locale_prefix(self.site.locale_prefix))
  }

  pub fn indexing(&self, env: &SiteEnv) -> Indexing {
    self.site.indexing.unwrap_or_else(|| Indexing::from_site_env(env))
  }

  pub fn listen_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
