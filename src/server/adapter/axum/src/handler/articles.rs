/* src/server/adapter/axum/src/handler/articles.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use busbar_engine::Locale;
use busbar_server::strapi::transform_article;
use busbar_server::{SiteError, UpstreamFetchOutcome, normalize_api_response};
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct ArticlesQuery {
  locale: Option<String>,
}

pub(super) async fn handle_articles(
  State(state): State<Arc<AppState>>,
  Query(query): Query<ArticlesQuery>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let locale = Locale::parse_or_default(query.locale.as_deref());

  let outcome = state.content.fetch_articles(locale).await.inspect_err(|e| {
    tracing::error!(%locale, error = %e, "articles proxy failed");
  })?;

  match outcome {
    UpstreamFetchOutcome::Failure { status, status_text, message, endpoint } => {
      tracing::error!(%endpoint, %locale, status, "CMS rejected articles request");
      Err(SiteError::upstream(status, &status_text, message).into())
    }
    UpstreamFetchOutcome::Success { payload, endpoint, .. } => {
      let normalized = normalize_api_response(payload, transform_article);
      if let Some(reason) = normalized.error {
        tracing::error!(%endpoint, %locale, %reason, "CMS articles payload not recognized");
        return Err(SiteError::unrecognized_shape(reason).into());
      }
      Ok(Json(serde_json::json!({ "data": normalized.data, "meta": normalized.meta })))
    }
  }
}
