// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::alert_store::AlertStore;
use crate::application::chat_assistant::ChatAssistantController;
use crate::application::diagnostic_panel::DiagnosticPanelController;
use crate::application::fleet_service::FleetService;
use crate::application::report_client::DiagnosticReportClient;
use crate::application::telemetry_provider::TelemetryProvider;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::gemini_generator::GeminiGenerator;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create text generator (infrastructure layer)
    let generator = Arc::new(GeminiGenerator::new(&config.generation));
    let report_client = DiagnosticReportClient::new(
        generator,
        &config.diagnostics,
        config.generation.timeout(),
    );

    // Create controllers and data providers (application layer)
    let panel = Arc::new(DiagnosticPanelController::new(
        report_client.clone(),
        config.diagnostics.device_type.clone(),
        config.diagnostics.resolution,
    ));
    let chat = ChatAssistantController::new(report_client, config.chat.clone());

    let state = Arc::new(AppState {
        alert_store: AlertStore::seeded(),
        telemetry: TelemetryProvider::new(config.telemetry.seed),
        panel,
        chat,
        fleet: FleetService::seeded(),
    });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;
    tracing::info!(
        model = %config.generation.model,
        "Starting ambient-twin service on {}",
        addr
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
