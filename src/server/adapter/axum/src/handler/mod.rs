/* src/server/adapter/axum/src/handler/mod.rs */

mod articles;
mod crawl;
mod health;
mod seo;
mod wordpress;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use busbar_engine::{
  RobotsPolicy, SITEMAP_PATH, SiteUrls, build_sitemap, render_sitemap_xml, site_pages,
};
use busbar_server::{ContentClient, SiteParts};

pub(crate) struct AppState {
  pub urls: SiteUrls,
  pub content: ContentClient,
  pub sitemap_xml: String,
  pub robots_txt: String,
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  // Crawler documents depend only on the URL policy.
  let sitemap_xml = render_sitemap_xml(&build_sitemap(&parts.urls, &site_pages()));
  let robots_txt = RobotsPolicy::new(&parts.urls, parts.indexing).render();
  let state =
    Arc::new(AppState { urls: parts.urls, content: parts.content, sitemap_xml, robots_txt });

  Router::new()
    .route("/api/articles", get(articles::handle_articles))
    .route("/api/wordpress/posts", get(wordpress::handle_posts))
    .route("/api/seo/metadata", get(seo::handle_metadata))
    .route("/api/health", get(health::handle_health))
    .route(SITEMAP_PATH, get(crawl::handle_sitemap))
    .route("/robots.txt", get(crawl::handle_robots))
    .with_state(state)
}
