use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_DIAGNOSTIC_PROMPT: &str = r#"You are an expert HVAC technician and AI diagnostic agent for "Ambient Twin".

Context: A ${device_type} located in ${location} has triggered the following alert: "${alert_message}".

Task: Provide a concise, professional technical resolution plan.

Requirements:
1. Explain the likely root cause in technical terms.
2. Recommend specific tools needed for the truck roll.
3. Estimate the part cost range in CAD.
4. Keep it under 100 words.
5. Tone: Enterprise, technical, authoritative."#;

pub const DEFAULT_CHAT_PROMPT: &str = "You are the Ambient Twin HVAC Assistant. User is an HVAC technician in Toronto. Question: ${question}. Keep it technical and brief.";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub diagnostics: DiagnosticsSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key, read per call
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Whichever request resolves last overwrites the report
    #[default]
    LastResolvedWins,
    /// Results of superseded requests are dropped
    LatestIssuedWins,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsSettings {
    #[serde(default = "default_device_type")]
    pub device_type: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
    #[serde(default = "default_diagnostic_prompt")]
    pub prompt_template: String,
    #[serde(default)]
    pub resolution: ResolutionPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatSettings {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_chat_prompt")]
    pub prompt_template: String,
    #[serde(default = "default_empty_reply_text")]
    pub empty_reply_text: String,
    #[serde(default = "default_chat_failure_text")]
    pub failure_text: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelemetrySettings {
    /// Fixes the synthetic series when set
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            device_type: default_device_type(),
            location: default_location(),
            fallback_text: default_fallback_text(),
            prompt_template: default_diagnostic_prompt(),
            resolution: ResolutionPolicy::default(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            prompt_template: default_chat_prompt(),
            empty_reply_text: default_empty_reply_text(),
            failure_text: default_chat_failure_text(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_device_type() -> String {
    "High Efficiency Furnace".to_string()
}

fn default_location() -> String {
    "Toronto".to_string()
}

fn default_fallback_text() -> String {
    "AI Diagnostic Service Unavailable. Please proceed with manual inspection protocol ISO-9001."
        .to_string()
}

fn default_diagnostic_prompt() -> String {
    DEFAULT_DIAGNOSTIC_PROMPT.to_string()
}

fn default_greeting() -> String {
    "Diagnostic Agent Online. How can I assist your fleet in the GTA today?".to_string()
}

fn default_chat_prompt() -> String {
    DEFAULT_CHAT_PROMPT.to_string()
}

fn default_empty_reply_text() -> String {
    "I couldn't process that. Please check system logs.".to_string()
}

fn default_chat_failure_text() -> String {
    "Service link interrupted. Please verify Seam API connection.".to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/ambient").required(false))
        .add_source(
            config::Environment::with_prefix("AMBIENT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a prompt template. Substituted values are
/// never rescanned; unknown placeholders are left as written.
pub fn render_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        match vars.get(&after[..end]) {
            Some(value) => result.push_str(value),
            None => result.push_str(&rest[start..start + end + 3]),
        }
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    result
}
