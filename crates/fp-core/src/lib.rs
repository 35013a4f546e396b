//! # fp-core
//!
//! Core domain models and business logic for FormPilot.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! field validation, the details wizard state machine, the registration gate,
//! payment method selection and the port traits implemented by `fp-infra`.

// Public module exports
pub mod chat;
pub mod config;
pub mod form;
pub mod navigation;
pub mod payment;
pub mod ports;
pub mod profile;
pub mod registration;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use form::{ErrorMap, FieldId, FieldValue, FileRef, FormRecord};
pub use navigation::{Route, RouteEvent};
pub use payment::{PaymentForm, PaymentMethod};
pub use profile::UserProfile;
pub use registration::{RegistrationPhase, RegistrationSession};
pub use wizard::{FormStore, StepNavigator, WizardState, WizardStep};
