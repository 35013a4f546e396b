//! Details wizard domain module.
//!
//! This module defines the step table, the form state store and the
//! navigator that gates step transitions on validation.

mod navigator;
pub mod state_machine;
mod steps;
mod store;

pub use navigator::{StepNavigator, WizardCommand};
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use steps::{step_fields, WizardStep, STEP_COUNT};
pub use store::FormStore;
