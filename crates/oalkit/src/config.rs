use serde::{Deserialize, Serialize};

/// Environment variable naming the output device to open
pub const DEVICE_ENV: &str = "OALKIT_DEVICE";

/// Which OpenAL output device to open on initialize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Device specifier as listed by `ALC_DEVICE_SPECIFIER`; `None` opens
    /// the default device
    #[serde(default)]
    pub device_name: Option<String>,
}

impl ContextConfig {
    /// Default output device (default)
    pub fn default_device() -> Self {
        Self::default()
    }

    /// A specific named output device
    pub fn device(name: &str) -> Self {
        Self {
            device_name: Some(name.to_string()),
        }
    }

    /// Load config from environment variables
    /// Set OALKIT_DEVICE="OpenAL Soft on Speakers" to pick a device
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(DEVICE_ENV).ok())
    }

    /// Build from a raw `OALKIT_DEVICE` value; blank means the default device
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(name) if !name.trim().is_empty() => Self::device(name.trim()),
            _ => Self::default_device(),
        }
    }
}
