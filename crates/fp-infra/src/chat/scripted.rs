use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use fp_core::chat::DEFAULT_REPLY;
use fp_core::ports::ChatResponderPort;

/// Replies with the same text to every message after a fixed delay.
pub struct ScriptedChatResponder {
    reply: String,
    delay: Duration,
}

impl ScriptedChatResponder {
    pub fn new(reply: impl Into<String>, delay: Duration) -> Self {
        Self {
            reply: reply.into(),
            delay,
        }
    }
}

impl Default for ScriptedChatResponder {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY, Duration::from_millis(1000))
    }
}

#[async_trait]
impl ChatResponderPort for ScriptedChatResponder {
    async fn respond(&self, message: &str) -> anyhow::Result<String> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        debug!(message_len = message.len(), "scripted reply ready");
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reply_arrives_after_delay() -> anyhow::Result<()> {
        tokio::time::pause();
        let responder = ScriptedChatResponder::default();
        let start = tokio::time::Instant::now();

        let reply = responder.respond("how do I upload my marksheet?").await?;

        assert_eq!(reply, DEFAULT_REPLY);
        assert!(start.elapsed() >= Duration::from_millis(1000));
        Ok(())
    }
}
