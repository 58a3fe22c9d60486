//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::FieldId;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Section not found
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Element not found on the page surface
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// One or more fields failed validation
    #[error("Validation failed for: {}", join_fields(.0))]
    ValidationFailed(Vec<FieldId>),

    /// The contact backend rejected or failed the submission
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The contact backend did not answer in time
    #[error("Submission timed out after {0} ms")]
    SubmissionTimeout(u64),

    /// Image or other asset failed to load
    #[error("Asset load failed: {asset} - {message}")]
    AssetLoadFailed { asset: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, recoverable asset failures), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SubmissionInProgress
            | Self::ValidationFailed(_)
            | Self::AssetLoadFailed { .. } => true,
            Self::SectionNotFound(_)
            | Self::ElementNotFound(_)
            | Self::SubmissionFailed(_)
            | Self::SubmissionTimeout(_)
            | Self::ConfigError(_)
            | Self::SerializationError(_) => false,
        }
    }
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Per-field validation error
///
/// The `Display` text is exactly what the page shows next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    /// The field this error belongs to
    #[must_use]
    pub fn field(self) -> FieldId {
        match self {
            Self::NameRequired | Self::NameTooShort => FieldId::Name,
            Self::EmailRequired | Self::EmailInvalid => FieldId::Email,
            Self::MessageRequired | Self::MessageTooShort => FieldId::Message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_messages_match_page_copy() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::MessageRequired.to_string(), "Message is required");
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn field_error_maps_back_to_field() {
        assert_eq!(FieldError::NameTooShort.field(), FieldId::Name);
        assert_eq!(FieldError::EmailInvalid.field(), FieldId::Email);
        assert_eq!(FieldError::MessageRequired.field(), FieldId::Message);
    }

    #[test]
    fn validation_failed_lists_fields() {
        let err = CoreError::ValidationFailed(vec![FieldId::Name, FieldId::Message]);
        assert_eq!(err.to_string(), "Validation failed for: name, message");
        assert!(err.is_expected());
    }

    #[test]
    fn backend_failures_are_unexpected() {
        assert!(!CoreError::SubmissionFailed("boom".to_string()).is_expected());
        assert!(!CoreError::SubmissionTimeout(10_000).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::SubmissionInProgress).unwrap();
        assert_eq!(json["code"], "SubmissionInProgress");
    }
}
