/* src/server/core/rust/src/client.rs */

use std::sync::Arc;
use std::time::Duration;

use busbar_engine::Locale;
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::errors::SiteError;
use crate::upstream::{Pagination, UpstreamFetchOutcome};

pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";
pub const DEFAULT_WORDPRESS_API: &str = "http://localhost:8080/wp-json/wp/v2";
pub const DEFAULT_POST_TYPE: &str = "yanghua_article";
pub const FALLBACK_POST_TYPE: &str = "posts";
pub const DEFAULT_PER_PAGE: u32 = 9;
pub const MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ARTICLE_POPULATE: [(&str, &str); 4] = [
  ("populate[cover][populate]", "*"),
  ("populate[author][populate][avatar][populate]", "*"),
  ("populate[blocks][populate]", "*"),
  ("populate[category][populate]", "*"),
];

/// Upstream locations and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
  pub cms_url: String,
  pub cms_token: Option<String>,
  pub wordpress_api: String,
  pub timeout: Duration,
}

impl Default for ContentConfig {
  fn default() -> Self {
    Self {
      cms_url: DEFAULT_CMS_URL.to_string(),
      cms_token: None,
      wordpress_api: DEFAULT_WORDPRESS_API.to_string(),
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

impl ContentConfig {
  /// Defaults overridden by `STRAPI_BASE_URL`, `STRAPI_API_TOKEN` and
  /// `WORDPRESS_API_INTERNAL`. Empty variables count as unset.
  pub fn from_env() -> Self {
    let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
    let mut config = Self::default();
    if let Some(url) = var("STRAPI_BASE_URL") {
      config.cms_url = url;
    }
    config.cms_token = var("STRAPI_API_TOKEN");
    if let Some(api) = var("WORDPRESS_API_INTERNAL") {
      config.wordpress_api = api;
    }
    config
  }
}

/// Query for the WordPress posts collection, already clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsQuery {
  pub page: u32,
  pub per_page: u32,
  pub post_type: String,
  pub fields: Option<String>,
}

impl Default for PostsQuery {
  fn default() -> Self {
    Self {
      page: 1,
      per_page: DEFAULT_PER_PAGE,
      post_type: DEFAULT_POST_TYPE.to_string(),
      fields: None,
    }
  }
}

impl PostsQuery {
  /// Build from raw query-string values. Unparseable numbers take their
  /// default; `page` is at least 1 and `per_page` is clamped to 1..=100.
  /// A post type must be a single REST slug (`[A-Za-z0-9_-]+`).
  pub fn from_raw(
    page: Option<&str>,
    per_page: Option<&str>,
    post_type: Option<&str>,
    fields: Option<&str>,
  ) -> Result<Self, SiteError> {
    let page = page.and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(1).max(1);
    let per_page = per_page
      .and_then(|p| p.trim().parse::<i64>().ok())
      .unwrap_or(i64::from(DEFAULT_PER_PAGE))
      .clamp(1, i64::from(MAX_PER_PAGE));
    let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
    let post_type = non_empty(post_type).unwrap_or_else(|| DEFAULT_POST_TYPE.to_string());
    if !is_post_type_slug(&post_type) {
      return Err(SiteError::validation(format!("invalid post type \"{post_type}\"")));
    }
    Ok(Self {
      page: u32::try_from(page).unwrap_or(u32::MAX),
      per_page: per_page as u32,
      post_type,
      fields: non_empty(fields),
    })
  }

  fn pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
      ("page", self.page.to_string()),
      ("per_page", self.per_page.to_string()),
      ("_embed", "1".to_string()),
    ];
    if let Some(ref fields) = self.fields {
      pairs.push(("_fields", fields.clone()));
    }
    pairs
  }
}

fn is_post_type_slug(value: &str) -> bool {
  value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Both WordPress lookups of a posts listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsWithCategories {
  pub posts: UpstreamFetchOutcome,
  pub categories: UpstreamFetchOutcome,
}

/// HTTP client for the CMS and WordPress upstreams.
#[derive(Debug, Clone)]
pub struct ContentClient {
  http: reqwest::Client,
  config: Arc<ContentConfig>,
}

impl ContentClient {
  pub fn new(config: ContentConfig) -> Result<Self, SiteError> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| SiteError::internal(format!("failed to build HTTP client: {e}")))?;
    Ok(Self { http, config: Arc::new(config) })
  }

  pub fn config(&self) -> &ContentConfig {
    &self.config
  }

  fn url<I, K, V>(&self, base: &str, path: &str, params: I) -> Result<Url, SiteError>
  where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let raw = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse_with_params(&raw, params)
      .map_err(|e| SiteError::internal(format!("invalid upstream URL {raw}: {e}")))
  }

  async fn get_json(
    &self,
    url: Url,
    bearer: Option<&str>,
  ) -> Result<UpstreamFetchOutcome, SiteError> {
    let endpoint = url.to_string();
    let mut req = self.http.get(url).header(ACCEPT, "application/json");
    if let Some(token) = bearer {
      req = req.bearer_auth(token);
    }

    let resp = req.send().await.map_err(|e| {
      tracing::error!(%endpoint, error = %e, "upstream request failed");
      SiteError::proxy_route(e.to_string())
    })?;

    let status = resp.status();
    if !status.is_success() {
      let status_text = status.canonical_reason().unwrap_or_default().to_string();
      let message = resp.text().await.unwrap_or_default();
      tracing::error!(
        %endpoint,
        status = status.as_u16(),
        %status_text,
        "upstream returned error status"
      );
      return Ok(UpstreamFetchOutcome::Failure {
        status: status.as_u16(),
        status_text,
        message,
        endpoint,
      });
    }

    let pagination = Pagination::from_headers(resp.headers());
    let payload = resp.json::<Value>().await.map_err(|e| {
      tracing::error!(%endpoint, error = %e, "upstream body is not JSON");
      SiteError::proxy_route(format!("invalid JSON from upstream: {e}"))
    })?;
    Ok(UpstreamFetchOutcome::Success { payload, pagination, endpoint })
  }

  /// Published CMS articles for `locale`, newest first.
  pub async fn fetch_articles(&self, locale: Locale) -> Result<UpstreamFetchOutcome, SiteError> {
    let mut params: Vec<(&str, &str)> = ARTICLE_POPULATE.to_vec();
    params.push(("locale", locale.as_str()));
    params.push(("sort", "publishedAt:desc"));
    let url = self.url(&self.config.cms_url, "/api/articles", &params)?;
    self.get_json(url, self.config.cms_token.as_deref()).await
  }

  /// One page of WordPress posts of `query.post_type`.
  ///
  /// A 404 means the custom post type is not registered; the request is
  /// retried exactly once against the standard `posts` type.
  pub async fn fetch_posts(&self, query: &PostsQuery) -> Result<UpstreamFetchOutcome, SiteError> {
    let pairs = query.pairs();
    let url = self.url(&self.config.wordpress_api, &query.post_type, &pairs)?;
    let outcome = self.get_json(url, None).await?;

    let not_found = matches!(outcome, UpstreamFetchOutcome::Failure { status: 404, .. });
    if !not_found || query.post_type == FALLBACK_POST_TYPE {
      return Ok(outcome);
    }

    tracing::info!(
      post_type = %query.post_type,
      page = query.page,
      per_page = query.per_page,
      "post type not found, falling back to posts"
    );
    let url = self.url(&self.config.wordpress_api, FALLBACK_POST_TYPE, &pairs)?;
    self.get_json(url, None).await
  }

  pub async fn fetch_categories(&self) -> Result<UpstreamFetchOutcome, SiteError> {
    let url = self.url(&self.config.wordpress_api, "categories", [("per_page", "100")])?;
    self.get_json(url, None).await
  }

  /// Posts and categories fetched concurrently; both must finish.
  pub async fn fetch_posts_with_categories(
    &self,
    query: &PostsQuery,
  ) -> Result<PostsWithCategories, SiteError> {
    let (posts, categories) =
      futures_util::future::join(self.fetch_posts(query), self.fetch_categories()).await;
    Ok(PostsWithCategories { posts: posts?, categories: categories? })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_defaults() {
    assert_eq!(PostsQuery::from_raw(None, None, None, None).unwrap(), PostsQuery::default());
  }

  #[test]
  fn query_clamps_and_falls_back() {
    let q = PostsQuery::from_raw(Some("0"), Some("500"), Some(""), Some(" ")).unwrap();
    assert_eq!((q.page, q.per_page), (1, 100));
    assert_eq!(q.post_type, "yanghua_article");
    assert!(q.fields.is_none());

    let q = PostsQuery::from_raw(Some("-3"), Some("0"), Some("posts"), Some("id,title")).unwrap();
    assert_eq!((q.page, q.per_page), (1, 1));
    assert_eq!(q.post_type, "posts");
    assert_eq!(q.fields.as_deref(), Some("id,title"));

    let q = PostsQuery::from_raw(Some("two"), Some("nine"), None, None).unwrap();
    assert_eq!((q.page, q.per_page), (1, 9));
  }

  #[test]
  fn query_rejects_post_types_that_are_not_slugs() {
    for raw in ["../../../wp-admin/users", "posts/1", "posts?x=1", "a b", "%2e%2e"] {
      let err = PostsQuery::from_raw(None, None, Some(raw), None).unwrap_err();
      assert_eq!(err.code(), crate::errors::VALIDATION_ERROR);
      assert_eq!(err.status(), 400);
    }
    let q = PostsQuery::from_raw(None, None, Some("case-study_2"), None).unwrap();
    assert_eq!(q.post_type, "case-study_2");
  }

  #[test]
  fn query_pairs_include_embed() {
    let q = PostsQuery::from_raw(Some("3"), Some("12"), None, Some("id")).unwrap();
    let pairs = q.pairs();
    assert!(pairs.contains(&("_embed", "1".to_string())));
    assert!(pairs.contains(&("page", "3".to_string())));
    assert!(pairs.contains(&("_fields", "id".to_string())));
  }

  #[test]
  fn urls_join_base_and_path() {
    let client = ContentClient::new(ContentConfig::default()).unwrap();
    let url = client.url("http://wp.local/wp-json/wp/v2/", "/posts", [("page", "1")]).unwrap();
    assert_eq!(url.as_str(), "http://wp.local/wp-json/wp/v2/posts?page=1");
    assert!(client.url("not a url", "posts", [("a", "b")]).is_err());
  }
}
