// Diagnostic report client - Prompt building and failure collapsing around the text generator
use crate::application::text_generation::TextGenerator;
use crate::domain::diagnostic::{GenerationError, ReportOutcome};
use crate::infrastructure::config::{render_template, DiagnosticsSettings};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct DiagnosticReportClient {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
    location: String,
    prompt_template: String,
    fallback_text: String,
}

impl DiagnosticReportClient {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        settings: &DiagnosticsSettings,
        timeout: Duration,
    ) -> Self {
        Self {
            generator,
            timeout,
            location: settings.location.clone(),
            prompt_template: settings.prompt_template.clone(),
            fallback_text: settings.fallback_text.clone(),
        }
    }

    #[cfg(test)]
    pub fn fallback_text(&self) -> &str {
        &self.fallback_text
    }

    pub fn build_prompt(&self, alert_message: &str, device_type: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("device_type", device_type);
        vars.insert("location", self.location.as_str());
        vars.insert("alert_message", alert_message);
        render_template(&self.prompt_template, &vars)
    }

    /// Narrative for the alert, or the fallback text if generation failed
    #[cfg(test)]
    pub async fn generate_report(&self, alert_message: &str, device_type: &str) -> String {
        self.try_generate_report(alert_message, device_type)
            .await
            .into_text()
    }

    pub async fn try_generate_report(&self, alert_message: &str, device_type: &str) -> ReportOutcome {
        if alert_message.trim().is_empty() {
            return self.fallback(GenerationError::InvalidInput(
                "alert message is empty".to_string(),
            ));
        }

        let prompt = self.build_prompt(alert_message, device_type);
        match self.complete(&prompt).await {
            Ok(text) => {
                debug!("Generated diagnostic report ({} chars)", text.len());
                ReportOutcome::Generated(text)
            }
            Err(cause) => {
                warn!(kind = cause.kind(), "Diagnostic generation failed: {}", cause);
                self.fallback(cause)
            }
        }
    }

    /// One bounded round trip to the generator. Blank output counts as a failure.
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let text = tokio::time::timeout(self.timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout.as_millis() as u64))??;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }

    fn fallback(&self, cause: GenerationError) -> ReportOutcome {
        ReportOutcome::Fallback {
            text: self.fallback_text.clone(),
            cause,
        }
    }
}
