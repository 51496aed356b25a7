/* src/server/core/rust/src/server.rs */

use busbar_engine::{Indexing, SiteEnv, SiteUrls};

use crate::client::{ContentClient, ContentConfig};
use crate::errors::SiteError;

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
#[derive(Debug, Clone)]
pub struct SiteParts {
  pub urls: SiteUrls,
  pub content: ContentClient,
  pub indexing: Indexing,
}

/// Explicit context for one site process: URL policy and upstream clients.
/// Nothing is read from ambient state after `into_parts`.
#[derive(Debug, Default)]
pub struct SiteServer {
  urls: Option<SiteUrls>,
  content: Option<ContentConfig>,
  indexing: Option<Indexing>,
}

impl SiteServer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn site_urls(mut self, urls: SiteUrls) -> Self {
    self.urls = Some(urls);
    self
  }

  pub fn content(mut self, config: ContentConfig) -> Self {
    self.content = Some(config);
    self
  }

  /// Crawler policy served at `/robots.txt`.
  pub fn indexing(mut self, indexing: Indexing) -> Self {
    self.indexing = Some(indexing);
    self
  }

  /// Consume the builder. Unset parts are resolved from the environment.
  pub fn into_parts(self) -> Result<SiteParts, SiteError> {
    let urls = self.urls.unwrap_or_else(SiteUrls::from_env);
    let content = ContentClient::new(self.content.unwrap_or_else(ContentConfig::from_env))?;
    let indexing =
      self.indexing.unwrap_or_else(|| Indexing::from_site_env(&SiteEnv::from_env()));
    Ok(SiteParts { urls, content, indexing })
  }
}
