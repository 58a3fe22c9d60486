//! 联系表单相关类型定义

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ElementId;

/// Validated contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// All validated fields, in form order
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The input element
    #[must_use]
    pub fn element(self) -> ElementId {
        ElementId::new(self.as_str())
    }

    /// The inline error element next to the input (`nameError`, ...)
    #[must_use]
    pub fn error_element(self) -> ElementId {
        ElementId::new(format!("{}Error", self.as_str()))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValidity {
    /// Not validated since the last edit or reset
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// Submit control state machine
///
/// `Idle -> Submitting -> Succeeded -> Idle`, plus `Submitting -> Idle` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionState {
    /// Whether `self -> next` is a legal transition
    #[must_use]
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Submitting)
                | (Self::Submitting, Self::Succeeded | Self::Idle)
                | (Self::Succeeded, Self::Idle)
        )
    }
}

/// Transient global notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    /// Element carrying the notification
    #[must_use]
    pub fn element(self) -> ElementId {
        match self {
            Self::Success => ElementId::new("successMessage"),
            Self::Failure => ElementId::new("errorMessage"),
        }
    }
}

/// Payload handed to the contact backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            subject,
            message,
            submitted_at: Utc::now(),
        }
    }
}

/// Handle for one in-flight submission
///
/// Issued by `ContactFormController::submit`; the outcome must be handed back
/// with the same ticket. Tickets from superseded submissions are ignored.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub(crate) generation: u64,
    pub submission: ContactSubmission,
}

impl SubmissionTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
