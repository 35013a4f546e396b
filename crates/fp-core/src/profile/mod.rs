//! Persisted registration profile.
//!
//! The only record that crosses from registration into the details wizard.

use serde::{Deserialize, Deserializer, Serialize};

/// `{fullName, email, phone}` as stored under the `userData` key.
///
/// Missing and `null` keys both read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Parse stored content leniently.
    ///
    /// Blank or malformed content yields `None`; missing keys read as empty
    /// strings.
    pub fn from_stored(content: &str) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<UserProfile>(content) {
            Ok(profile) => Some(profile),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "ignoring malformed stored profile");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let profile = UserProfile::new("A", "a@b.com", "1234567890");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fullName": "A", "email": "a@b.com", "phone": "1234567890"})
        );
    }

    #[test]
    fn from_stored_fills_missing_keys_with_empty() {
        let profile = UserProfile::from_stored(r#"{"fullName":"A"}"#).unwrap();
        assert_eq!(profile, UserProfile::new("A", "", ""));
    }

    #[test]
    fn from_stored_reads_null_keys_as_empty() {
        let profile =
            UserProfile::from_stored(r#"{"fullName":null,"email":"a@b.com","phone":"1234567890"}"#)
                .unwrap();
        assert_eq!(profile, UserProfile::new("", "a@b.com", "1234567890"));
    }

    #[test]
    fn from_stored_ignores_blank_and_malformed_content() {
        assert_eq!(UserProfile::from_stored(""), None);
        assert_eq!(UserProfile::from_stored("   \n"), None);
        assert_eq!(UserProfile::from_stored("{not json"), None);
        assert_eq!(UserProfile::from_stored("[1,2,3]"), None);
        assert_eq!(UserProfile::from_stored(r#"{"fullName": 42}"#), None);
    }
}
