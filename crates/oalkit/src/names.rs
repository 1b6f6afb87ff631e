//! Diagnostic names for OpenAL attribute and error codes.
//!
//! The attribute table only covers the codes the wrapper logs most often;
//! anything else resolves to a placeholder instead of failing.

use crate::backend::{
    AL_INVALID_ENUM, AL_INVALID_NAME, AL_INVALID_OPERATION, AL_INVALID_VALUE, AL_NO_ERROR,
    AL_OUT_OF_MEMORY,
};

/// Placeholder for attribute codes missing from the table
pub const UNKNOWN_ATTRIBUTE: &str = "UNKNOWN_ATTRIBUTE";

/// Placeholder for error codes missing from the table
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Resolve an attribute code to its `AL_*` name.
pub fn attribute_name(code: i32) -> &'static str {
    match code {
        0x1003 => "AL_PITCH",
        0x100A => "AL_GAIN",
        0x1004 => "AL_POSITION",
        0x1006 => "AL_VELOCITY",
        0x1005 => "AL_DIRECTION",
        0x1007 => "AL_LOOPING",
        0x1009 => "AL_BUFFER",
        0x202 => "AL_SOURCE_RELATIVE",
        _ => UNKNOWN_ATTRIBUTE,
    }
}

/// Resolve an `alGetError` code to its `AL_*` name.
pub fn error_name(code: i32) -> &'static str {
    match code {
        AL_NO_ERROR => "AL_NO_ERROR",
        AL_INVALID_NAME => "AL_INVALID_NAME",
        AL_INVALID_ENUM => "AL_INVALID_ENUM",
        AL_INVALID_VALUE => "AL_INVALID_VALUE",
        AL_INVALID_OPERATION => "AL_INVALID_OPERATION",
        AL_OUT_OF_MEMORY => "AL_OUT_OF_MEMORY",
        _ => UNKNOWN_ERROR,
    }
}
