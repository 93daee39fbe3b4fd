// Presentation layer - HTTP surface
pub mod app_state;
pub mod error;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::*;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/alerts", get(list_alerts))
        .route("/alerts/:id/analyze", post(analyze_alert))
        .route("/alerts/:id/remote-adjust", post(remote_adjust))
        .route("/telemetry", get(telemetry_series))
        .route("/diagnostics/panel", get(panel_snapshot))
        .route("/diagnostics/panel/stream", get(stream_panel))
        .route("/diagnostics/panel/close", post(close_report))
        .route("/diagnostics/panel/deselect", post(deselect_alert))
        .route("/chat/messages", get(chat_transcript).post(send_chat))
        .route("/fleet/devices", get(list_devices))
        .route("/fleet/grid", get(grid_status))
        .route("/roi", get(estimate_roi))
        .route("/rebates", get(rebate_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::alert_store::AlertStore;
    use crate::application::chat_assistant::ChatAssistantController;
    use crate::application::diagnostic_panel::DiagnosticPanelController;
    use crate::application::fakes::{client_with, ScriptedGenerator};
    use crate::application::fleet_service::FleetService;
    use crate::application::telemetry_provider::TelemetryProvider;
    use crate::domain::diagnostic::{GenerationError, PanelPhase};
    use crate::infrastructure::config::{ChatSettings, ResolutionPolicy};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state(generator: Arc<ScriptedGenerator>) -> Arc<AppState> {
        let client = client_with(generator);
        Arc::new(AppState {
            alert_store: AlertStore::seeded(),
            telemetry: TelemetryProvider::new(Some(3)),
            panel: Arc::new(DiagnosticPanelController::new(
                client.clone(),
                "High Efficiency Furnace".to_string(),
                ResolutionPolicy::LastResolvedWins,
            )),
            chat: ChatAssistantController::new(client, ChatSettings::default()),
            fleet: FleetService::seeded(),
        })
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_lists_alerts_and_telemetry() {
        let app = router(test_state(ScriptedGenerator::new()));

        let (status, alerts) = call(app.clone(), get_req("/alerts")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(alerts[0]["id"], "alert_01");
        assert_eq!(alerts[0]["severity"], "critical");

        let (status, series) = call(app, get_req("/telemetry")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(series.as_array().map(|s| s.len()), Some(24));
        assert!(series[0]["motorAmps"].is_number());
    }

    #[tokio::test]
    async fn test_analyze_then_poll_panel() {
        let state = test_state(ScriptedGenerator::replying(Err(GenerationError::Transport(
            "unreachable".to_string(),
        ))));
        let app = router(state.clone());
        let mut rx = state.panel.subscribe();

        let (status, snapshot) = call(app.clone(), post_json("/alerts/alert_01/analyze", Value::Null)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(snapshot["phase"], "generating");
        assert_eq!(snapshot["isGenerating"], true);

        rx.wait_for(|s| s.phase == PanelPhase::ReportReady).await.unwrap();
        let (_, snapshot) = call(app.clone(), get_req("/diagnostics/panel")).await;
        assert_eq!(snapshot["phase"], "report_ready");
        assert_eq!(snapshot["failure"], "transport");
        assert_eq!(snapshot["alert"]["id"], "alert_01");

        let (_, closed) = call(app, post_json("/diagnostics/panel/close", Value::Null)).await;
        assert_eq!(closed["phase"], "dismissed");
        assert_eq!(closed["reportText"], Value::Null);
        assert_eq!(closed["alert"]["id"], "alert_01");
    }

    #[tokio::test]
    async fn test_unknown_alert_is_not_found() {
        let app = router(test_state(ScriptedGenerator::new()));

        let (status, body) = call(app.clone(), post_json("/alerts/alert_99/analyze", Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown alert: alert_99");

        let (status, _) = call(app.clone(), post_json("/alerts/alert_99/remote-adjust", Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(app, post_json("/alerts/alert_02/remote-adjust", Value::Null)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["alertId"], "alert_02");
    }

    #[tokio::test]
    async fn test_chat_round_trip_and_blank_message() {
        let app = router(test_state(ScriptedGenerator::replying(Ok("Swap the filter.".to_string()))));

        let (status, body) = call(app.clone(), post_json("/chat/messages", serde_json::json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, reply) = call(app.clone(), post_json("/chat/messages", serde_json::json!({ "text": "Why is pressure high?" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["role"], "assistant");
        assert_eq!(reply["text"], "Swap the filter.");

        let (_, transcript) = call(app, get_req("/chat/messages")).await;
        assert_eq!(transcript["messages"].as_array().map(|m| m.len()), Some(3));
        assert_eq!(transcript["isTyping"], false);
    }

    #[tokio::test]
    async fn test_roi_and_rebates() {
        let app = router(test_state(ScriptedGenerator::new()));

        let (status, estimate) = call(app.clone(), get_req("/roi?truck_roll_cost=300&hourly_rate=100&avoided_rolls=10")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(estimate["monthlySavings"], 4500.0);

        let (status, body) = call(app.clone(), get_req("/roi?avoided_rolls=50")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("avoided_rolls"));

        let (_, rebates) = call(app, get_req("/rebates")).await;
        assert_eq!(rebates["totalSecured"], 8025);
        assert_eq!(rebates["programs"][1]["maxed"], true);
        assert_eq!(rebates["programs"][1]["code"], "H-HER+");
    }

    #[tokio::test]
    async fn test_brotli_when_accepted() {
        let app = router(test_state(ScriptedGenerator::new()));
        let request = Request::get("/fleet/devices")
            .header(header::ACCEPT_ENCODING, "br")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }
}
