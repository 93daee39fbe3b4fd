// Alert store - Session-static diagnostic alerts
use crate::domain::alert::{DiagnosticAlert, Severity};

#[derive(Debug, Clone)]
pub struct AlertStore {
    alerts: Vec<DiagnosticAlert>,
}

impl AlertStore {
    pub fn new(alerts: Vec<DiagnosticAlert>) -> Self {
        Self { alerts }
    }

    /// The demo fleet's alerts, most urgent first
    pub fn seeded() -> Self {
        Self::new(vec![
            DiagnosticAlert::new(
                "alert_01",
                "dev_02",
                Severity::Critical,
                "Blower Motor",
                94,
                "Inductive load signature suggests motor winding failure imminent.",
                "Today, 08:42 AM",
                "ERR-309",
            ),
            DiagnosticAlert::new(
                "alert_02",
                "dev_03",
                Severity::Low,
                "Filter",
                88,
                "Static pressure differential suggests filter replacement needed.",
                "Yesterday, 4:15 PM",
                "ERR-112",
            ),
            DiagnosticAlert::new(
                "alert_03",
                "dev_01",
                Severity::Medium,
                "Heat Exchanger",
                71,
                "Flue temperature rise above baseline during extended call for heat.",
                "Yesterday, 9:03 AM",
                "ERR-221",
            ),
        ])
    }

    pub fn list_alerts(&self) -> &[DiagnosticAlert] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&DiagnosticAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }
}
