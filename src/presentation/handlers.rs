// HTTP request handlers
use crate::domain::partner::RoiInputs;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::ndjson_stream::stream_from_watch;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// JSON body, Brotli-encoded when the client accepts it
async fn respond<T: Serialize>(headers: &HeaderMap, status: StatusCode, data: &T) -> Response {
    match json_response(status, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_alerts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.alert_store.list_alerts()).await
}

pub async fn telemetry_series(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.telemetry.series_for_session()).await
}

/// Kick off report generation; the panel is polled or streamed for the result
pub async fn analyze_alert(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let alert = state
        .alert_store
        .get(&id)
        .cloned()
        .ok_or(ApiError::UnknownAlert(id))?;

    let snapshot = state.panel.spawn_analysis(alert);
    Ok(respond(&headers, StatusCode::ACCEPTED, &snapshot).await)
}

pub async fn remote_adjust(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    if state.alert_store.get(&id).is_none() {
        return Err(ApiError::UnknownAlert(id));
    }

    state.panel.remote_adjust(&id);
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "alertId": id, "status": "requested" })),
    )
        .into_response())
}

pub async fn panel_snapshot(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.panel.snapshot()).await
}

/// Stream panel snapshots as they change (progressive loading)
pub async fn stream_panel(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    stream_from_watch(state.panel.subscribe())
}

pub async fn close_report(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.panel.close_report()).await
}

pub async fn deselect_alert(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.panel.deselect()).await
}

pub async fn chat_transcript(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.chat.transcript()).await
}

pub async fn send_chat(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match state.chat.send(&request.text).await {
        Some(reply) => respond(&headers, StatusCode::OK, &reply).await,
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn list_devices(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.fleet.list_devices()).await
}

pub async fn grid_status(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, state.fleet.grid_status()).await
}

pub async fn estimate_roi(
    Query(inputs): Query<RoiInputs>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let estimate = state
        .fleet
        .estimate_roi(inputs)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    Ok(respond(&headers, StatusCode::OK, &estimate).await)
}

pub async fn rebate_summary(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&headers, StatusCode::OK, &state.fleet.rebate_summary()).await
}
