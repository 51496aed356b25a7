/* src/server/adapter/axum/src/handler/seo.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use busbar_engine::{Locale, PageContent, PageMetadata, RouteParams};
use busbar_server::SiteError;

use super::AppState;
use crate::error::AxumError;

/// Query keys consumed by the handler itself; everything else is a route param.
const RESERVED: [&str; 4] = ["route", "locale", "title", "description"];

pub(super) async fn handle_metadata(
  State(state): State<Arc<AppState>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PageMetadata>, AxumError> {
  let get = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

  let route = get("route")
    .filter(|r| !r.is_empty())
    .ok_or_else(|| SiteError::validation("missing 'route' query parameter"))?;
  if state.urls.table().get(route).is_none() {
    return Err(SiteError::not_found(format!("Unknown route '{route}'")).into());
  }

  let locale = Locale::parse_or_default(get("locale"));
  let params: RouteParams = pairs
    .iter()
    .filter(|(k, _)| !RESERVED.contains(&k.as_str()))
    .map(|(k, v)| (k.as_str(), v.as_str()))
    .collect();
  let content = PageContent { title: get("title"), description: get("description") };

  Ok(Json(PageMetadata::for_route(&state.urls, route, locale, Some(&params), content)))
}
