//! Per-field validation settings read from element metadata.

use crate::config::DEFAULT_REQUIRED_MESSAGE;

/// Validation settings for one editable markdown field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Whether submitting an empty value is blocked.
    pub required: bool,
    /// Message shown when a required field is submitted empty.
    pub required_message: String,
}

impl FieldConfig {
    /// Build the settings from raw attribute values.
    ///
    /// Only the exact string `"true"` marks a field required. A missing or
    /// empty message falls back to [`DEFAULT_REQUIRED_MESSAGE`].
    pub fn from_attributes(required: Option<&str>, required_message: Option<&str>) -> Self {
        let required_message = required_message
            .filter(|msg| !msg.is_empty())
            .unwrap_or(DEFAULT_REQUIRED_MESSAGE)
            .to_string();

        Self {
            required: required == Some("true"),
            required_message,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::from_attributes(None, None)
    }
}
