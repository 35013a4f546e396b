//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! that stands in for the outside world: persisted client storage and the
//! simulated OTP, payment and chat services.

mod chat;
mod otp;
mod payment;
mod profile_repository;

pub use chat::ChatResponderPort;
pub use otp::OtpPort;
pub use payment::PaymentGatewayPort;
pub use profile_repository::ProfileRepositoryPort;
