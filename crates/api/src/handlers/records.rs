use axum::{
    extract::{Path, Query, State},
    Json,
};
use super::{list_or_search, AppState, SearchParams};
use crate::ApiError;
use db::Record;

pub async fn list(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let records = list_or_search(&state.store, &params.q).await?;
    Ok(Json(records))
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Record>, ApiError> {
    match state.store.get_by_id(id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound(id)),
    }
}
