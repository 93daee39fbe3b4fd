// Port for the external text-generation service
use crate::domain::diagnostic::GenerationError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the generated text verbatim
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
