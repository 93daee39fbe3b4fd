// Application state for HTTP handlers
use crate::application::alert_store::AlertStore;
use crate::application::chat_assistant::ChatAssistantController;
use crate::application::diagnostic_panel::DiagnosticPanelController;
use crate::application::fleet_service::FleetService;
use crate::application::telemetry_provider::TelemetryProvider;
use std::sync::Arc;

pub struct AppState {
    pub alert_store: AlertStore,
    pub telemetry: TelemetryProvider,
    pub panel: Arc<DiagnosticPanelController>,
    pub chat: ChatAssistantController,
    pub fleet: FleetService,
}
