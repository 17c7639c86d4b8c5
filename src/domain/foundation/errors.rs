//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable, client-facing error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Inbound payload errors
    MalformedPayload,
    UnknownEvent,
    FrameTooLarge,

    // Delivery errors
    DeliveryTimeout,
    DeliveryFailed,

    // Lifecycle errors
    RegistryUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorCode::UnknownEvent => "UNKNOWN_EVENT",
            ErrorCode::FrameTooLarge => "FRAME_TOO_LARGE",
            ErrorCode::DeliveryTimeout => "DELIVERY_TIMEOUT",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::RegistryUnavailable => "REGISTRY_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}
