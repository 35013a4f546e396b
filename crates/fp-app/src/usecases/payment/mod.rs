//! Payment use cases.

pub mod orchestrator;
mod submit_payment;

pub use orchestrator::{PaymentError, PaymentOrchestrator};
pub use submit_payment::SubmitPayment;
