use async_trait::async_trait;

#[async_trait]
pub trait ChatResponderPort: Send + Sync {
    /// Produce the reply to one user message.
    async fn respond(&self, message: &str) -> anyhow::Result<String>;
}
