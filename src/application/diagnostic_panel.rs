// Diagnostic panel controller - Alert selection and report lifecycle
use crate::application::report_client::DiagnosticReportClient;
use crate::domain::alert::DiagnosticAlert;
use crate::domain::diagnostic::{PanelPhase, PanelSnapshot};
use crate::infrastructure::config::ResolutionPolicy;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Drives one panel through Idle -> Generating -> ReportReady / Dismissed.
///
/// Every `analyze` call gets a fresh request token. Nothing is cancelled when a
/// newer request is issued; what happens to a superseded result on resolution
/// depends on the [`ResolutionPolicy`]:
/// - `LastResolvedWins`: it overwrites whatever report is displayed
/// - `LatestIssuedWins`: it is dropped
pub struct DiagnosticPanelController {
    client: DiagnosticReportClient,
    device_type: String,
    policy: ResolutionPolicy,
    state: watch::Sender<PanelSnapshot>,
}

impl DiagnosticPanelController {
    pub fn new(client: DiagnosticReportClient, device_type: String, policy: ResolutionPolicy) -> Self {
        let (state, _) = watch::channel(PanelSnapshot::default());
        Self {
            client,
            device_type,
            policy,
            state,
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelSnapshot> {
        self.state.subscribe()
    }

    /// Select `alert`, request a report for it and apply the result.
    #[cfg(test)]
    pub async fn analyze(&self, alert: DiagnosticAlert) -> PanelSnapshot {
        let issued = self.begin(alert);
        self.resolve(issued.request_token, &message_of(&issued)).await;
        self.snapshot()
    }

    /// Enter Generating right away and finish the request on a background task.
    /// Returns the Generating snapshot.
    pub fn spawn_analysis(self: &Arc<Self>, alert: DiagnosticAlert) -> PanelSnapshot {
        let issued = self.begin(alert);
        let token = issued.request_token;
        let message = message_of(&issued);
        let panel = Arc::clone(self);
        tokio::spawn(async move {
            panel.resolve(token, &message).await;
        });
        issued
    }

    /// Tokens are issued inside the state update so they are published in order.
    fn begin(&self, alert: DiagnosticAlert) -> PanelSnapshot {
        let alert_id = alert.id.clone();
        let mut issued = PanelSnapshot::default();
        self.state.send_modify(|s| {
            s.phase = PanelPhase::Generating;
            s.alert = Some(alert);
            s.report_text = None;
            s.is_generating = true;
            s.failure = None;
            s.request_token += 1;
            issued = s.clone();
        });
        info!(alert_id = %alert_id, token = issued.request_token, "Analyzing alert");
        issued
    }

    async fn resolve(&self, token: u64, message: &str) {
        let outcome = self.client.try_generate_report(message, &self.device_type).await;

        let policy = self.policy;
        self.state.send_if_modified(|s| {
            if policy == ResolutionPolicy::LatestIssuedWins && s.request_token != token {
                debug!(token, latest = s.request_token, "Dropping superseded report");
                return false;
            }
            if s.alert.is_none() {
                debug!(token, "Discarding report for a deselected alert");
                s.is_generating = false;
                return true;
            }
            s.phase = PanelPhase::ReportReady;
            s.failure = outcome.cause().map(|c| c.kind().to_string());
            s.report_text = Some(outcome.into_text());
            s.is_generating = false;
            true
        });
    }

    /// Hide the report but keep the alert selected
    pub fn close_report(&self) -> PanelSnapshot {
        self.state.send_modify(|s| {
            s.report_text = None;
            s.failure = None;
            if s.alert.is_some() {
                s.phase = PanelPhase::Dismissed;
            }
        });
        self.snapshot()
    }

    /// Close the detail view entirely: no selection, no report
    pub fn deselect(&self) -> PanelSnapshot {
        self.state.send_modify(|s| {
            let request_token = s.request_token;
            let is_generating = s.is_generating;
            *s = PanelSnapshot {
                request_token,
                is_generating,
                ..PanelSnapshot::default()
            };
        });
        self.snapshot()
    }

    /// Signals intent to remediate remotely. No device is contacted.
    pub fn remote_adjust(&self, alert_id: &str) {
        info!(alert_id, "Attempting remote fix for {}", alert_id);
    }
}

fn message_of(snapshot: &PanelSnapshot) -> String {
    snapshot
        .alert
        .as_ref()
        .map(|a| a.message.clone())
        .unwrap_or_default()
}
