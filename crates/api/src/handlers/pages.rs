use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{info, warn};
use super::{list_or_search, AppState, SearchParams};
use crate::views::{self, FormMode};
use crate::ApiError;
use db::Record;

/// Raw form fields. Everything is optional at the extractor so that missing
/// or malformed input is reported as a 400 by `into_record`.
#[derive(Debug, serde::Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl RecordForm {
    fn into_record(self) -> Result<Record, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::BadRequest("name is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::BadRequest("category is required".into()));
        }

        let value: f64 = self
            .value
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("value '{}' is not a number", self.value)))?;
        // NaN would hit the NOT NULL column and infinities do not survive JSON.
        if !value.is_finite() {
            return Err(ApiError::BadRequest(format!(
                "value '{}' is not a finite number",
                self.value
            )));
        }

        Ok(Record::new(self.name, value, self.category, self.description))
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = state.store.list_all().await?;
    Ok(Html(views::records_page(&records, None)))
}

pub async fn add_form() -> Html<String> {
    Html(views::record_form(FormMode::Add, None))
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, ApiError> {
    let record = form.into_record()?;
    let id = state
        .store
        .create(&record)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to add record: {e}")))?;

    info!(id, "record added");
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    match state.store.get_by_id(id).await? {
        Some(record) => Ok(Html(views::record_form(FormMode::Edit, Some(&record)))),
        None => Err(ApiError::NotFound(id)),
    }
}

pub async fn edit(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, ApiError> {
    let record = form.into_record()?.with_id(id);
    let outcome = state
        .store
        .update(&record)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to update record: {e}")))?;

    if !outcome.is_updated() {
        warn!(id, %outcome, "update matched no record");
        return Err(ApiError::NotFound(id));
    }

    info!(id, "record updated");
    Ok(Redirect::to("/"))
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, ApiError> {
    let outcome = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to delete record: {e}")))?;

    if !outcome.is_deleted() {
        return Err(ApiError::NotFound(id));
    }

    info!(id, "record deleted");
    Ok(Redirect::to("/"))
}

pub async fn search(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let records = list_or_search(&state.store, &params.q).await?;
    Ok(Html(views::records_page(&records, Some(&params.q))))
}

pub async fn about() -> Html<String> {
    Html(views::about_page())
}
