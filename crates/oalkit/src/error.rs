use thiserror::Error;

use crate::names::error_name;
use crate::types::Vec3;

#[derive(Error, Debug)]
pub enum AlError {
    /// `alGetError` reported a non-zero code after a call
    #[error("{label} failed: {kind} (error code {code})")]
    Native {
        label: String,
        kind: &'static str,
        code: i32,
    },

    #[error("Failed to open OpenAL device: {0}")]
    DeviceOpen(String),

    #[error("Failed to create OpenAL context: {0}")]
    ContextCreate(String),

    #[error("Failed to make OpenAL context current")]
    MakeCurrent,

    #[error("OpenAL context already initialized")]
    AlreadyInitialized,

    #[error("No current OpenAL context")]
    NoCurrentContext,

    #[error("{attribute} expects {expected} floats, got {actual}")]
    InvalidLength {
        attribute: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0} has no known float vector layout")]
    UnknownVectorAttribute(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AlError {
    pub(crate) fn native(label: String, code: i32) -> Self {
        AlError::Native {
            label,
            kind: error_name(code),
            code,
        }
    }

    /// Raw OpenAL error code, for errors reported by the library itself
    pub fn code(&self) -> Option<i32> {
        match self {
            AlError::Native { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type AlResult<T> = Result<T, AlError>;

/// Collapse a getter result into the legacy in-band failure value:
/// `-1` for integers, `-1.0` for floats and the zero vector for `Vec3`.
pub trait OrSentinel<T> {
    fn or_sentinel(self) -> T;
}

impl OrSentinel<i32> for AlResult<i32> {
    fn or_sentinel(self) -> i32 {
        self.unwrap_or(-1)
    }
}

impl OrSentinel<f32> for AlResult<f32> {
    fn or_sentinel(self) -> f32 {
        self.unwrap_or(-1.0)
    }
}

impl OrSentinel<Vec3> for AlResult<Vec3> {
    fn or_sentinel(self) -> Vec3 {
        self.unwrap_or(Vec3::ZERO)
    }
}
