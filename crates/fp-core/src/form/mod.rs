//! Details form domain module.
//!
//! Field identifiers, the flat form record and the per-field error map.

mod errors;
mod field;
mod record;

pub use errors::ErrorMap;
pub use field::{FieldId, UnknownFieldError};
pub use record::{FieldValue, FileRef, FormError, FormRecord};
