//! Registration domain module.
//!
//! This module defines the registration gate: details entry, OTP issuance,
//! OTP confirmation and credential entry, as a pure state machine.

mod otp;
mod session;
pub mod state_machine;

pub use otp::{OtpChannel, OtpTicket, OtpVerification, DEMO_OTP_CODE};
pub use session::{
    RegistrationField, RegistrationForm, RegistrationSession, EMAIL_REQUIRED, INVALID_OTP,
    NAME_REQUIRED, PASSWORD_MISMATCH, PASSWORD_REQUIRED, PHONE_REQUIRED,
};
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationPhase, RegistrationStateMachine,
};
