use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::ErrorMap;
use crate::profile::UserProfile;
use crate::validation::{is_valid_email, is_valid_phone, INVALID_EMAIL, INVALID_PHONE};

use super::otp::OtpChannel;
use super::state_machine::RegistrationPhase;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_OTP: &str = "Invalid OTP";

/// Input of the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Otp,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 6] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Phone,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
        RegistrationField::Otp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Phone => "phone",
            RegistrationField::Password => "password",
            RegistrationField::ConfirmPassword => "confirmPassword",
            RegistrationField::Otp => "otp",
        }
    }

    /// Whether the value must never be echoed back.
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            RegistrationField::Password | RegistrationField::ConfirmPassword
        )
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationField {
    type Err = crate::form::UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistrationField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| crate::form::UnknownFieldError(s.to_string()))
    }
}

/// Raw registration inputs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("otp", &self.otp)
            .finish()
    }
}

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::Otp => &self.otp,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::Otp => &mut self.otp,
        };
        *slot = value;
    }

    /// Contact channel, once both email and phone are filled in.
    ///
    /// Formats are not checked here.
    pub fn otp_channel(&self) -> Option<OtpChannel> {
        if self.email.is_empty() || self.phone.is_empty() {
            return None;
        }
        Some(OtpChannel {
            email: self.email.clone(),
            phone: self.phone.clone(),
        })
    }

    /// Checks run on final submission.
    pub fn validate(&self) -> ErrorMap<RegistrationField> {
        let mut errors = ErrorMap::new();

        if self.name.trim().is_empty() {
            errors.insert(RegistrationField::Name, NAME_REQUIRED);
        }

        if self.email.trim().is_empty() {
            errors.insert(RegistrationField::Email, EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            errors.insert(RegistrationField::Email, INVALID_EMAIL);
        }

        if self.phone.trim().is_empty() {
            errors.insert(RegistrationField::Phone, PHONE_REQUIRED);
        } else if !is_valid_phone(&self.phone) {
            errors.insert(RegistrationField::Phone, INVALID_PHONE);
        }

        if self.password.is_empty() {
            errors.insert(RegistrationField::Password, PASSWORD_REQUIRED);
        }

        if self.password != self.confirm_password {
            errors.insert(RegistrationField::ConfirmPassword, PASSWORD_MISMATCH);
        }

        errors
    }

    /// The carry-over record persisted on completion.
    pub fn profile(&self) -> UserProfile {
        UserProfile::new(self.name.clone(), self.email.clone(), self.phone.clone())
    }
}

/// Ephemeral registration session: inputs, phase and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSession {
    pub form: RegistrationForm,
    pub phase: RegistrationPhase,
    pub errors: ErrorMap<RegistrationField>,
}

impl RegistrationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// An OTP has been issued (the OTP input is shown).
    pub fn otp_sent(&self) -> bool {
        !matches!(self.phase, RegistrationPhase::Details)
    }

    /// The OTP has been confirmed (the password inputs are shown).
    pub fn otp_verified(&self) -> bool {
        matches!(
            self.phase,
            RegistrationPhase::OtpVerified | RegistrationPhase::Ready
        )
    }
}
