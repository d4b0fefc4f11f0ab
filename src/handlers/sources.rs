use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult, FieldError},
    models::{CreatePower, Power, Source, SourceFilters, SourceSummary},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_sources(
    State(state): State<AppState>,
    filters: Result<Query<SourceFilters>, QueryRejection>,
) -> Json<Vec<SourceSummary>> {
    let filters = filters.map(|Query(f)| f).unwrap_or_default();
    // `active` is accepted but the listing is never filtered by it.
    debug!(active = filters.active(), "List sources filter");

    let summaries = state.store.read().await.summaries();
    info!(count = summaries.len(), "Listed sources");
    Json(summaries)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_source(
    State(state): State<AppState>,
    Path(source_id): Path<String>,
) -> AppResult<Json<Source>> {
    let store = state.store.read().await;
    let source = store.source(&source_id)?.clone();

    info!(id = %source.id, powers = source.powers.len(), "Fetched source");
    Ok(Json(source))
}

// ── Add power ─────────────────────────────────────────────────────────────────

pub async fn create_power(
    State(state): State<AppState>,
    Path(source_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Power>)> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;
    let payload = CreatePower::from_json(&body).map_err(AppError::Validation)?;

    let power = state.store.write().await.add_power(&source_id, payload.label)?;

    info!(source_id = %source_id, id = %power.id, label = %power.label, "Created power");
    Ok((StatusCode::CREATED, Json(power)))
}

// ── Toggle ────────────────────────────────────────────────────────────────────

pub async fn toggle_power(
    State(state): State<AppState>,
    Path((source_id, power_id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let status = state
        .store
        .write()
        .await
        .toggle_power(&source_id, &power_id)?;

    info!(source_id = %source_id, id = %power_id, status, "Toggled power");
    Ok(Json(serde_json::json!({
        "message": "Power status toggled successfully",
    })))
}
