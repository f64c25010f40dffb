use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DiscoverParams {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub page: String,
}

pub async fn discover(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscoverParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let data = state.search.discover_tv(&params.year, &params.page).await?;
    Ok(Json(data))
}
