//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier for one live subscriber connection.
///
/// Allocated by the connection registry from a monotonically increasing
/// sequence, so ordering ids gives registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Creates a SubscriberId from a registry sequence number.
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq)
    }

    /// Returns the sequence number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

impl FromStr for SubscriberId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("sub-").unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("subscriber_id", e.to_string()))
    }
}
