//! # fp-infra
//!
//! Adapters for the `fp-core` ports: the file-backed profile store and the
//! simulated OTP, payment and chat services.

pub mod chat;
pub mod fs;
pub mod otp;
pub mod payment;
pub mod profile;

pub use chat::ScriptedChatResponder;
pub use otp::SimulatedOtpService;
pub use payment::SimulatedPaymentGateway;
pub use profile::{FileProfileRepository, InMemoryProfileRepository};
