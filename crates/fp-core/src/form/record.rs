use serde::{Deserialize, Serialize};

use super::FieldId;

/// Placeholder for an uploaded document.
///
/// Only the reference is kept; the document itself never enters the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Value held by a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    File(Option<FileRef>),
}

impl FieldValue {
    fn empty_for(field: FieldId) -> Self {
        if field.is_file() {
            FieldValue::File(None)
        } else {
            FieldValue::Text(String::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::File(file) => file.is_none(),
        }
    }

    /// Text content, or `None` for document fields.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::File(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        FieldValue::File(Some(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field {field} expects a document reference")]
    ExpectedFile { field: FieldId },
    #[error("field {field} expects text")]
    ExpectedText { field: FieldId },
}

/// Flat record holding a value for every [`FieldId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    values: [FieldValue; FieldId::COUNT],
}

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|i| FieldValue::empty_for(FieldId::ALL[i])),
        }
    }
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Text of a field; document fields read as an empty string.
    pub fn text(&self, field: FieldId) -> &str {
        self.get(field).as_text().unwrap_or("")
    }

    /// Replace a field's value. The value kind must match the field kind.
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        match (&value, field.is_file()) {
            (FieldValue::Text(_), true) => return Err(FormError::ExpectedFile { field }),
            (FieldValue::File(_), false) => return Err(FormError::ExpectedText { field }),
            _ => {}
        }
        self.values[field.index()] = value;
        Ok(())
    }

    pub fn is_empty(&self, field: FieldId) -> bool {
        self.get(field).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> + '_ {
        FieldId::ALL.iter().map(move |field| (*field, self.get(*field)))
    }
}
