//! Field validation rules.
//!
//! Validation failures are data: every check returns an optional message and
//! the callers assemble an [`ErrorMap`]. Nothing here allocates a `Result`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::{ErrorMap, FieldId, FieldValue, FormRecord};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_PHONE: &str = "Phone number must be 10 digits";
pub const INVALID_AADHAAR: &str = "Aadhaar number must be 12 digits";
pub const INVALID_PAN: &str = "Invalid PAN number format";
pub const INVALID_IFSC: &str = "Invalid IFSC code format";
pub const ACCOUNT_MISMATCH: &str = "Account numbers do not match";
pub const INVALID_EMAIL: &str = "Invalid email format";

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static AADHAAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static PAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
static IFSC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_valid_aadhaar(value: &str) -> bool {
    AADHAAR_REGEX.is_match(value)
}

pub fn is_valid_pan(value: &str) -> bool {
    PAN_REGEX.is_match(value)
}

pub fn is_valid_ifsc(value: &str) -> bool {
    IFSC_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Format check for a non-empty value, if the field has one.
fn format_error(field: FieldId, text: &str) -> Option<&'static str> {
    let (valid, message) = match field {
        FieldId::Phone => (is_valid_phone(text), INVALID_PHONE),
        FieldId::AadhaarId => (is_valid_aadhaar(text), INVALID_AADHAAR),
        FieldId::PanId => (is_valid_pan(text), INVALID_PAN),
        FieldId::IfscCode => (is_valid_ifsc(text), INVALID_IFSC),
        _ => return None,
    };
    (!valid).then_some(message)
}

/// Validate one candidate value for `field`.
///
/// `record` is only consulted for the account-number re-entry check. Rules are
/// applied in order and the last failing rule wins: a mismatching confirmation
/// replaces "required".
pub fn validate(field: FieldId, value: &FieldValue, record: &FormRecord) -> Option<&'static str> {
    let mut error = None;

    if value.is_empty() && field.is_required() {
        error = Some(REQUIRED);
    }

    let text = value.as_text().unwrap_or("");

    if !text.is_empty() {
        if let Some(message) = format_error(field, text) {
            error = Some(message);
        }
    }

    if field == FieldId::ConfirmAccountNumber && text != record.text(FieldId::AccountNumber) {
        error = Some(ACCOUNT_MISMATCH);
    }

    error
}

/// Validate the current value of `field` inside `record`.
pub fn validate_field(field: FieldId, record: &FormRecord) -> Option<&'static str> {
    validate(field, record.get(field), record)
}

/// Validate a list of fields, building a fresh error map.
pub fn validate_fields(fields: &[FieldId], record: &FormRecord) -> ErrorMap<FieldId> {
    fields
        .iter()
        .filter_map(|field| validate_field(*field, record).map(|msg| (*field, msg.to_string())))
        .collect()
}
