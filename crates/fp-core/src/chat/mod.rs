//! Help chat log.

use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hi! I'm here to help you with the form. What questions do you have?";
pub const DEFAULT_REPLY: &str =
    "I'll help you with that! Please provide more details about your question.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub author: ChatAuthor,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: ChatAuthor::Bot,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: ChatAuthor::User,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.author == ChatAuthor::Bot
    }
}

/// Ordered chat messages, seeded with the greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    ///
    /// Returns the stored text, or `None` when the input is blank.
    pub fn push_user(&mut self, text: &str) -> Option<&str> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.messages.last().map(|message| message.text.as_str())
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
