//! Help chat use cases.

mod assistant;

pub use assistant::{ChatAssistant, ChatError};
