//! Mapping of upstream model failures onto `GenerationError`.
//!
//! All transient-failure detection lives in [`classify_upstream_failure`]; adjust the
//! rules there rather than at call sites.

use crate::error::{GenerationError, ModelError};

/// Status codes upstream providers use for overload, throttling, or gateway trouble.
const TRANSIENT_STATUSES: &[u16] = &[429, 502, 503, 504, 529];

/// Lower-cased message fragments that signal a busy or unavailable model.
const TRANSIENT_MARKERS: &[&str] = &[
    "503",
    "overloaded",
    "service unavailable",
    "unavailable",
    "rate limit",
    "rate-limit",
    "too many requests",
    "busy",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    Transient,
    Other,
}

/// Decide whether an upstream failure is transient.
///
/// A structured status code wins when present; message matching is the fallback for
/// transports that only surface text.
#[must_use]
pub fn classify_upstream_failure(status: Option<u16>, message: &str) -> UpstreamFailure {
    if let Some(status) = status {
        if TRANSIENT_STATUSES.contains(&status) {
            return UpstreamFailure::Transient;
        }
    }

    let lowered = message.to_lowercase();
    if TRANSIENT_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        UpstreamFailure::Transient
    } else {
        UpstreamFailure::Other
    }
}

impl GenerationError {
    /// Build an error from an upstream failure that only carries a message.
    #[must_use]
    pub fn from_upstream_message(message: impl Into<String>) -> Self {
        Self::from_upstream(None, message.into())
    }

    fn from_upstream(status: Option<u16>, message: String) -> Self {
        match classify_upstream_failure(status, &message) {
            UpstreamFailure::Transient => Self::ServiceUnavailable { message },
            UpstreamFailure::Other => Self::Unknown { message },
        }
    }
}

impl From<ModelError> for GenerationError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Disabled => Self::Unknown {
                message: err.to_string(),
            },
            ModelError::EmptyResponse => {
                Self::MalformedOutput(crate::error::SchemaViolation::EmptyContent)
            }
            ModelError::HttpStatus { status, body } => {
                let message = if body.trim().is_empty() {
                    format!("model request failed with status {status}")
                } else {
                    body
                };
                Self::from_upstream(Some(status), message)
            }
            ModelError::Http(source) => {
                let status = source.status().map(|s| s.as_u16());
                Self::from_upstream(status, source.to_string())
            }
            ModelError::Other(message) => Self::from_upstream(None, message),
        }
    }
}
