/* src/server/adapter/axum/src/handler/crawl.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use super::AppState;

pub(super) async fn handle_sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(CONTENT_TYPE, "application/xml; charset=utf-8")], state.sitemap_xml.clone())
}

pub(super) async fn handle_robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(CONTENT_TYPE, "text/plain; charset=utf-8")], state.robots_txt.clone())
}
