//! Alarm gateway error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SubscriberId};

/// Errors raised while relaying alarm events to subscribers.
///
/// None of these ever escape a single handler call: inbound errors drop the
/// event, delivery errors drop the subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Malformed {event} payload: {reason}")]
    MalformedPayload { event: &'static str, reason: String },

    #[error("No handler registered for event '{0}'")]
    UnknownEvent(String),

    #[error("Subscriber {subscriber} did not accept push within {timeout_ms}ms")]
    DeliveryTimeout {
        subscriber: SubscriberId,
        timeout_ms: u64,
    },

    #[error("Delivery to subscriber {subscriber} failed: {reason}")]
    DeliveryFailed {
        subscriber: SubscriberId,
        reason: String,
    },

    #[error("Connection registry is shutting down")]
    RegistryUnavailable,
}

impl GatewayError {
    /// Creates a malformed payload error for the given event name.
    pub fn malformed(event: &'static str, reason: impl ToString) -> Self {
        GatewayError::MalformedPayload {
            event,
            reason: reason.to_string(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GatewayError::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            GatewayError::UnknownEvent(_) => ErrorCode::UnknownEvent,
            GatewayError::DeliveryTimeout { .. } => ErrorCode::DeliveryTimeout,
            GatewayError::DeliveryFailed { .. } => ErrorCode::DeliveryFailed,
            GatewayError::RegistryUnavailable => ErrorCode::RegistryUnavailable,
        }
    }
}
