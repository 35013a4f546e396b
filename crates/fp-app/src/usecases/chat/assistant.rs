//! Help chat widget.
//!
//! User messages are logged immediately; each reply is produced by a spawned
//! task. Closing the widget aborts outstanding reply tasks and bumps a
//! generation counter so a reply that already finished its work is dropped
//! instead of applied.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use fp_core::chat::ChatLog;
use fp_core::ports::ChatResponderPort;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("chat is closed")]
    Closed,
}

#[derive(Default)]
struct ChatState {
    log: ChatLog,
    open: bool,
    generation: u64,
    pending: Vec<AbortHandle>,
}

pub struct ChatAssistant {
    responder: Arc<dyn ChatResponderPort>,
    state: Arc<Mutex<ChatState>>,
}

impl ChatAssistant {
    pub fn new(responder: Arc<dyn ChatResponderPort>) -> Self {
        Self {
            responder,
            state: Arc::new(Mutex::new(ChatState::default())),
        }
    }

    pub async fn open(&self) -> ChatLog {
        let mut state = self.state.lock().await;
        state.open = true;
        state.log.clone()
    }

    /// Close the widget and drop every pending reply.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.open = false;
        state.generation += 1;
        let cancelled = state.pending.len();
        for handle in state.pending.drain(..) {
            handle.abort();
        }
        debug!(cancelled, generation = state.generation, "chat closed");
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.open
    }

    pub async fn log(&self) -> ChatLog {
        self.state.lock().await.log.clone()
    }

    pub async fn pending_replies(&self) -> usize {
        let mut state = self.state.lock().await;
        state.pending.retain(|handle| !handle.is_finished());
        state.pending.len()
    }

    /// Post a user message and schedule the reply.
    ///
    /// Blank input is ignored and returns the log unchanged.
    pub async fn send(&self, text: &str) -> Result<ChatLog, ChatError> {
        let mut state = self.state.lock().await;
        if !state.open {
            return Err(ChatError::Closed);
        }
        let Some(message) = state.log.push_user(text).map(str::to_owned) else {
            return Ok(state.log.clone());
        };

        let generation = state.generation;
        let responder = Arc::clone(&self.responder);
        let shared = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let reply = responder.respond(&message).await;
            let mut state = shared.lock().await;
            if state.generation != generation {
                debug!(generation, current = state.generation, "dropping stale chat reply");
                return;
            }
            match reply {
                Ok(reply) => state.log.push_bot(reply),
                Err(err) => warn!(error = %err, "chat responder failed"),
            }
        });

        state.pending.retain(|handle| !handle.is_finished());
        state.pending.push(handle.abort_handle());
        Ok(state.log.clone())
    }
}
