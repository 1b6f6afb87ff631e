use serde::{Deserialize, Serialize};

use crate::names::attribute_name;

/// OpenAL source name, as returned by `alGenSources`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u32);

impl SourceId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// OpenAL buffer name, as returned by `alGenBuffers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferId(pub u32);

impl BufferId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// Attribute code passed to the `alSource*`, `alListener*` and `alGetBuffer*`
/// families. Any integer is representable; validity is decided by OpenAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param(pub i32);

impl Param {
    pub const SOURCE_RELATIVE: Param = Param(0x202);
    pub const CONE_INNER_ANGLE: Param = Param(0x1001);
    pub const CONE_OUTER_ANGLE: Param = Param(0x1002);
    pub const PITCH: Param = Param(0x1003);
    pub const POSITION: Param = Param(0x1004);
    pub const DIRECTION: Param = Param(0x1005);
    pub const VELOCITY: Param = Param(0x1006);
    pub const LOOPING: Param = Param(0x1007);
    pub const BUFFER: Param = Param(0x1009);
    pub const GAIN: Param = Param(0x100A);
    pub const MIN_GAIN: Param = Param(0x100D);
    pub const MAX_GAIN: Param = Param(0x100E);
    pub const ORIENTATION: Param = Param(0x100F);
    pub const SOURCE_STATE: Param = Param(0x1010);
    pub const BUFFERS_QUEUED: Param = Param(0x1015);
    pub const BUFFERS_PROCESSED: Param = Param(0x1016);
    pub const REFERENCE_DISTANCE: Param = Param(0x1020);
    pub const ROLLOFF_FACTOR: Param = Param(0x1021);
    pub const CONE_OUTER_GAIN: Param = Param(0x1022);
    pub const MAX_DISTANCE: Param = Param(0x1023);
    pub const SEC_OFFSET: Param = Param(0x1024);
    pub const FREQUENCY: Param = Param(0x2001);
    pub const BITS: Param = Param(0x2002);
    pub const CHANNELS: Param = Param(0x2003);
    pub const SIZE: Param = Param(0x2004);

    pub fn raw(self) -> i32 {
        self.0
    }

    /// Diagnostic name used in log lines
    pub fn name(self) -> &'static str {
        attribute_name(self.0)
    }

    /// Number of floats `alSourcefv`/`alListenerfv` read for this attribute.
    /// `None` for attributes that are not float-valued (or not known here).
    pub fn component_count(self) -> Option<usize> {
        match self {
            Param::POSITION | Param::VELOCITY | Param::DIRECTION => Some(3),
            Param::ORIENTATION => Some(6),
            Param::PITCH
            | Param::GAIN
            | Param::MIN_GAIN
            | Param::MAX_GAIN
            | Param::REFERENCE_DISTANCE
            | Param::ROLLOFF_FACTOR
            | Param::MAX_DISTANCE
            | Param::CONE_INNER_ANGLE
            | Param::CONE_OUTER_ANGLE
            | Param::CONE_OUTER_GAIN
            | Param::SEC_OFFSET => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Three-component float vector (position, velocity, direction, ...)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Playback state reported through `AL_SOURCE_STATE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceState {
    Initial,
    Playing,
    Paused,
    Stopped,
    Unknown(i32),
}

impl SourceState {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0x1011 => SourceState::Initial,
            0x1012 => SourceState::Playing,
            0x1013 => SourceState::Paused,
            0x1014 => SourceState::Stopped,
            other => SourceState::Unknown(other),
        }
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            SourceState::Initial => 0x1011,
            SourceState::Playing => 0x1012,
            SourceState::Paused => 0x1013,
            SourceState::Stopped => 0x1014,
            SourceState::Unknown(raw) => raw,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, SourceState::Playing)
    }
}

/// PCM layout accepted by `alBufferData`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferFormat {
    Mono8,
    Mono16,
    Stereo8,
    Stereo16,
}

impl BufferFormat {
    /// Convert to raw AL_FORMAT_* value
    pub const fn to_raw(self) -> i32 {
        match self {
            BufferFormat::Mono8 => 0x1100,
            BufferFormat::Mono16 => 0x1101,
            BufferFormat::Stereo8 => 0x1102,
            BufferFormat::Stereo16 => 0x1103,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            BufferFormat::Mono8 | BufferFormat::Mono16 => 1,
            BufferFormat::Stereo8 | BufferFormat::Stereo16 => 2,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            BufferFormat::Mono8 | BufferFormat::Stereo8 => 1,
            BufferFormat::Mono16 | BufferFormat::Stereo16 => 2,
        }
    }

    /// Size in bytes of one sample frame (all channels)
    pub fn frame_size(self) -> usize {
        self.channels() * self.bytes_per_sample()
    }
}
