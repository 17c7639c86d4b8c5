//! Gateway delivery configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_SEND_TIMEOUT_MS: u64 = 60_000;
const MAX_FRAME_LIMIT: usize = 16 * 1024 * 1024;

/// Fan-out and per-connection limits
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Per-subscriber push timeout in milliseconds
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,

    /// Outbound queue length for each subscriber
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Largest accepted inbound text frame
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl GatewayConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.send_timeout_ms == 0 || self.send_timeout_ms > MAX_SEND_TIMEOUT_MS {
            return Err(ValidationError::InvalidSendTimeout);
        }
        if self.channel_capacity == 0 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        if self.max_frame_bytes == 0 || self.max_frame_bytes > MAX_FRAME_LIMIT {
            return Err(ValidationError::InvalidFrameLimit);
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            send_timeout_ms: default_send_timeout_ms(),
            channel_capacity: default_channel_capacity(),
            max_frame_bytes: default_max_frame_bytes(),
        }
    }
}

fn default_send_timeout_ms() -> u64 {
    5_000
}

fn default_channel_capacity() -> usize {
    64
}

fn default_max_frame_bytes() -> usize {
    64 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.send_timeout(), Duration::from_secs(5));
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.max_frame_bytes, 65_536);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_send_timeout_bounds() {
        let config = GatewayConfig {
            send_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSendTimeout));

        let config = GatewayConfig {
            send_timeout_ms: 120_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSendTimeout));
    }

    #[test]
    fn test_validation_zero_capacity() {
        let config = GatewayConfig {
            channel_capacity: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidChannelCapacity)
        );
    }

    #[test]
    fn test_validation_frame_limit() {
        let config = GatewayConfig {
            max_frame_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFrameLimit));
    }
}
