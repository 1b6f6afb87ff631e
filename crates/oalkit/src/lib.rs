pub mod backend;
pub mod buffer;
pub mod config;
pub mod error;
pub mod listener;
pub mod logging;
pub mod names;
#[cfg(feature = "native")]
pub mod native;
pub mod source;
pub mod system;
pub mod types;

#[cfg(test)]
mod mock;

pub use backend::AlBackend;
pub use config::ContextConfig;
pub use error::{AlError, AlResult, OrSentinel};
#[cfg(feature = "native")]
pub use native::NativeAl;
pub use system::AudioSystem;
pub use types::*;

/// `AudioSystem` over the system OpenAL library
#[cfg(feature = "native")]
pub type NativeAudioSystem = AudioSystem<NativeAl>;
