// Chat assistant controller - Fleet-advisor conversation over the report client
use crate::application::report_client::DiagnosticReportClient;
use crate::domain::chat::{ChatMessage, ChatTranscript};
use crate::domain::diagnostic::GenerationError;
use crate::infrastructure::config::{render_template, ChatSettings};
use std::collections::HashMap;
use tokio::sync::watch;
use tracing::{debug, warn};

pub struct ChatAssistantController {
    client: DiagnosticReportClient,
    settings: ChatSettings,
    transcript: watch::Sender<ChatTranscript>,
}

impl ChatAssistantController {
    pub fn new(client: DiagnosticReportClient, settings: ChatSettings) -> Self {
        let greeting = ChatTranscript {
            messages: vec![ChatMessage::assistant(settings.greeting.clone())],
            ..ChatTranscript::default()
        };
        let (transcript, _) = watch::channel(greeting);
        Self {
            client,
            settings,
            transcript,
        }
    }

    pub fn transcript(&self) -> ChatTranscript {
        self.transcript.borrow().clone()
    }

    /// Append the question, ask the generator and append its reply.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the assistant's
    /// message is returned, which is a canned notice if generation failed.
    pub async fn send(&self, user_text: &str) -> Option<ChatMessage> {
        if user_text.trim().is_empty() {
            debug!("Ignoring blank chat message");
            return None;
        }

        self.transcript.send_modify(|t| {
            t.messages.push(ChatMessage::user(user_text));
            t.pending += 1;
            t.is_typing = true;
        });

        let mut vars = HashMap::new();
        vars.insert("question", user_text);
        let prompt = render_template(&self.settings.prompt_template, &vars);

        let text = match self.client.complete(&prompt).await {
            Ok(text) => text,
            Err(GenerationError::EmptyResponse) => {
                warn!("Chat generation returned no text");
                self.settings.empty_reply_text.clone()
            }
            Err(e) => {
                warn!(kind = e.kind(), "Chat generation failed: {}", e);
                self.settings.failure_text.clone()
            }
        };

        let reply = ChatMessage::assistant(text);
        self.transcript.send_modify(|t| {
            t.messages.push(reply.clone());
            t.pending = t.pending.saturating_sub(1);
            t.is_typing = t.pending > 0;
        });
        Some(reply)
    }
}
