//! Details wizard use cases.

pub mod orchestrator;

pub use orchestrator::{WizardError, WizardOrchestrator};
