/* src/server/adapter/axum/src/handler/wordpress.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use busbar_server::wordpress::{transform_category, transform_post};
use busbar_server::{PostsQuery, SiteError, UpstreamFetchOutcome, normalize_collection};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_posts(
  State(state): State<Arc<AppState>>,
  Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let get = |key: &str| params.get(key).map(String::as_str);
  let query = PostsQuery::from_raw(get("page"), get("per_page"), get("type"), get("_fields"))?;

  let fetched = state.content.fetch_posts_with_categories(&query).await.inspect_err(|e| {
    tracing::error!(
      endpoint_base = %state.content.config().wordpress_api,
      page = query.page,
      per_page = query.per_page,
      post_type = %query.post_type,
      error = %e,
      "WordPress proxy failed"
    );
  })?;

  let (posts, categories) = (fetched.posts, fetched.categories);
  let (
    UpstreamFetchOutcome::Success { payload: posts_raw, pagination, .. },
    UpstreamFetchOutcome::Success { payload: categories_raw, .. },
  ) = (&posts, &categories)
  else {
    let (posts_status, posts_status_text) = posts.status();
    let (categories_status, categories_status_text) = categories.status();
    tracing::error!(
      endpoint = %posts.endpoint(),
      posts_status,
      categories_status,
      page = query.page,
      per_page = query.per_page,
      post_type = %query.post_type,
      "WordPress API error"
    );
    return Err(
      SiteError::wordpress_api(serde_json::json!({
        "postsStatus": posts_status,
        "postsStatusText": posts_status_text,
        "categoriesStatus": categories_status,
        "categoriesStatusText": categories_status_text,
        "endpoint": posts.endpoint(),
      }))
      .into(),
    );
  };

  let posts_out = normalize_collection(posts_raw.clone(), transform_post);
  let categories_out = normalize_collection(categories_raw.clone(), transform_category);
  if let Some(reason) = posts_out.error.or(categories_out.error) {
    tracing::error!(endpoint = %posts.endpoint(), %reason, "WordPress payload not recognized");
    return Err(SiteError::unrecognized_shape(reason).into());
  }

  Ok(Json(serde_json::json!({
    "posts": posts_out.data,
    "categories": categories_out.data,
    "meta": {
      "total": pagination.total,
      "totalPages": pagination.total_pages,
      "page": query.page,
      "perPage": query.per_page,
    },
  })))
}
