// Scriptable text generators for tests
use crate::application::report_client::DiagnosticReportClient;
use crate::application::text_generation::TextGenerator;
use crate::domain::diagnostic::GenerationError;
use crate::infrastructure::config::DiagnosticsSettings;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

type Reply = Result<String, GenerationError>;

/// Answers from a fixed reply, or holds each call until its gate is released.
/// A gate's key selects calls whose prompt contains it; an empty key matches any call.
#[derive(Default)]
pub struct ScriptedGenerator {
    prompts: Mutex<Vec<String>>,
    default_reply: Option<Reply>,
    gates: Mutex<Vec<(String, oneshot::Receiver<Reply>)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            default_reply: Some(reply),
            ..Self::default()
        })
    }

    /// `count` gates consumed in call order
    pub fn gated(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<Reply>>) {
        let generator = Self::new();
        let senders = (0..count).map(|_| generator.gate("")).collect();
        (generator, senders)
    }

    pub fn gate(&self, key: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push((key.to_string(), rx));
        tx
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let gate = {
            let mut gates = self.gates.lock().unwrap();
            gates
                .iter()
                .position(|(key, _)| prompt.contains(key.as_str()))
                .map(|idx| gates.remove(idx).1)
        };

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(GenerationError::Transport("gate dropped".to_string()))),
            None => self
                .default_reply
                .clone()
                .unwrap_or_else(|| Err(GenerationError::Transport("no scripted reply".to_string()))),
        }
    }
}

pub fn client_with(generator: Arc<dyn TextGenerator>) -> DiagnosticReportClient {
    DiagnosticReportClient::new(
        generator,
        &DiagnosticsSettings::default(),
        Duration::from_secs(15),
    )
}
