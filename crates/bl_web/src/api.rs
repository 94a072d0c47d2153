use axum::{
    extract::{Path, Query, State},
    Json,
};
use bl_core::{ArticleDetail, ArticleRecord};
use std::sync::Arc;

use crate::error::ApiError;
use crate::routes::{ApiQuery, ArticleQuery};
use crate::AppState;

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiQuery>,
) -> Json<Vec<ArticleRecord>> {
    Json(state.catalog.search(&params.filter()))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ArticleQuery>,
) -> Result<Json<ArticleDetail>, ApiError> {
    let detail = state.catalog.detail(&id, params.q.as_deref())?;
    Ok(Json(detail))
}

/// `q` names the topic here; it is not a text filter.
pub async fn list_perspectives(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiQuery>,
) -> Json<Vec<ArticleRecord>> {
    let query = params.q.as_deref().unwrap_or("");
    Json(params.selection().apply(&state.catalog.perspectives(query)))
}
