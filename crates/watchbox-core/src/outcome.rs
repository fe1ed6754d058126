//! Operation outcome type.
//!
//! Every service operation reports its result as an [`Outcome`]: success
//! with or without a payload, or a failure carrying a message and an
//! optional list of granular error strings. Expected business conditions
//! (not found, duplicate) are failures here, never [`crate::AppError`]s —
//! that channel is reserved for infrastructure faults.

use serde::{Deserialize, Serialize};

/// Category of a failed outcome, used by the transport layer to choose an
/// HTTP status code. Never serialized into response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The referenced entity does not exist (or is deactivated).
    NotFound,
    /// A uniqueness rule was violated.
    Conflict,
    /// The request shape or field values were invalid.
    Validation,
}

/// The result of a service operation.
///
/// Serializes as `{"isSuccess", "message", "data"?, "errors"?}`; `data` is
/// omitted when absent and `errors` when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T> {
    /// Whether the operation succeeded.
    pub is_success: bool,
    /// Human-readable description of the result.
    pub message: String,
    /// The payload, present on success-with-payload outcomes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Granular error strings accompanying a failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Failure category for status mapping.
    #[serde(skip, default)]
    failure: Option<FailureKind>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying a payload.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
            failure: None,
        }
    }

    /// A successful outcome with no payload.
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: None,
            errors: Vec::new(),
            failure: None,
        }
    }

    /// A failed outcome with the given category.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: None,
            errors: Vec::new(),
            failure: Some(kind),
        }
    }

    /// A failed outcome with granular error strings.
    pub fn failure_with_errors(
        kind: FailureKind,
        message: impl Into<String>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            errors,
            ..Self::failure(kind, message)
        }
    }

    /// A not-found failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::NotFound, message)
    }

    /// A conflict (duplicate) failure.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::Conflict, message)
    }

    /// A validation failure with per-field error strings.
    pub fn validation(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::failure_with_errors(FailureKind::Validation, message, errors)
    }

    /// Logical negation of `is_success`.
    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// The failure category, if this outcome is a failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure
    }
}
