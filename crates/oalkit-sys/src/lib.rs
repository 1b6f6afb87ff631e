//! Raw bindings to the OpenAL 1.1 core API (`AL/al.h`, `AL/alc.h`).
//!
//! Only the subset used by `oalkit` is declared. Linking is handled by
//! `build.rs`.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::all)]

use std::os::raw::{c_char, c_float, c_int, c_uint, c_void};

// ─── al.h types ─────────────────────────────────────────────────────────────

pub type ALint = c_int;
pub type ALuint = c_uint;
pub type ALsizei = c_int;
pub type ALenum = c_int;
pub type ALfloat = c_float;
pub type ALvoid = c_void;

// ─── alc.h types ────────────────────────────────────────────────────────────

pub type ALCboolean = c_char;
pub type ALCchar = c_char;
pub type ALCint = c_int;

#[repr(C)]
pub struct ALCdevice {
    _private: [u8; 0],
}

#[repr(C)]
pub struct ALCcontext {
    _private: [u8; 0],
}

// ─── al.h constants ─────────────────────────────────────────────────────────

pub const AL_NONE: ALint = 0;
pub const AL_FALSE: ALint = 0;
pub const AL_TRUE: ALint = 1;

pub const AL_SOURCE_RELATIVE: ALenum = 0x202;
pub const AL_CONE_INNER_ANGLE: ALenum = 0x1001;
pub const AL_CONE_OUTER_ANGLE: ALenum = 0x1002;
pub const AL_PITCH: ALenum = 0x1003;
pub const AL_POSITION: ALenum = 0x1004;
pub const AL_DIRECTION: ALenum = 0x1005;
pub const AL_VELOCITY: ALenum = 0x1006;
pub const AL_LOOPING: ALenum = 0x1007;
pub const AL_BUFFER: ALenum = 0x1009;
pub const AL_GAIN: ALenum = 0x100A;
pub const AL_MIN_GAIN: ALenum = 0x100D;
pub const AL_MAX_GAIN: ALenum = 0x100E;
pub const AL_ORIENTATION: ALenum = 0x100F;
pub const AL_SOURCE_STATE: ALenum = 0x1010;
pub const AL_INITIAL: ALint = 0x1011;
pub const AL_PLAYING: ALint = 0x1012;
pub const AL_PAUSED: ALint = 0x1013;
pub const AL_STOPPED: ALint = 0x1014;
pub const AL_BUFFERS_QUEUED: ALenum = 0x1015;
pub const AL_BUFFERS_PROCESSED: ALenum = 0x1016;
pub const AL_REFERENCE_DISTANCE: ALenum = 0x1020;
pub const AL_ROLLOFF_FACTOR: ALenum = 0x1021;
pub const AL_CONE_OUTER_GAIN: ALenum = 0x1022;
pub const AL_MAX_DISTANCE: ALenum = 0x1023;
pub const AL_SEC_OFFSET: ALenum = 0x1024;

pub const AL_FORMAT_MONO8: ALenum = 0x1100;
pub const AL_FORMAT_MONO16: ALenum = 0x1101;
pub const AL_FORMAT_STEREO8: ALenum = 0x1102;
pub const AL_FORMAT_STEREO16: ALenum = 0x1103;

pub const AL_FREQUENCY: ALenum = 0x2001;
pub const AL_BITS: ALenum = 0x2002;
pub const AL_CHANNELS: ALenum = 0x2003;
pub const AL_SIZE: ALenum = 0x2004;

pub const AL_NO_ERROR: ALenum = 0;
pub const AL_INVALID_NAME: ALenum = 0xA001;
pub const AL_INVALID_ENUM: ALenum = 0xA002;
pub const AL_INVALID_VALUE: ALenum = 0xA003;
pub const AL_INVALID_OPERATION: ALenum = 0xA004;
pub const AL_OUT_OF_MEMORY: ALenum = 0xA005;

// ─── alc.h constants ────────────────────────────────────────────────────────

pub const ALC_TRUE: ALCboolean = 1;

// ─── al.h functions ─────────────────────────────────────────────────────────

extern "C" {
    pub fn alGetError() -> ALenum;

    pub fn alGenSources(n: ALsizei, sources: *mut ALuint);
    pub fn alDeleteSources(n: ALsizei, sources: *const ALuint);

    pub fn alSourcef(source: ALuint, param: ALenum, value: ALfloat);
    pub fn alSource3f(source: ALuint, param: ALenum, v1: ALfloat, v2: ALfloat, v3: ALfloat);
    pub fn alSourcefv(source: ALuint, param: ALenum, values: *const ALfloat);
    pub fn alSourcei(source: ALuint, param: ALenum, value: ALint);

    pub fn alGetSourcef(source: ALuint, param: ALenum, value: *mut ALfloat);
    pub fn alGetSourcefv(source: ALuint, param: ALenum, values: *mut ALfloat);
    pub fn alGetSourcei(source: ALuint, param: ALenum, value: *mut ALint);

    pub fn alSourcePlay(source: ALuint);
    pub fn alSourceStop(source: ALuint);
    pub fn alSourcePause(source: ALuint);
    pub fn alSourceRewind(source: ALuint);

    pub fn alListenerf(param: ALenum, value: ALfloat);
    pub fn alListener3f(param: ALenum, v1: ALfloat, v2: ALfloat, v3: ALfloat);
    pub fn alListenerfv(param: ALenum, values: *const ALfloat);

    pub fn alGetListenerf(param: ALenum, value: *mut ALfloat);
    pub fn alGetListenerfv(param: ALenum, values: *mut ALfloat);

    pub fn alGenBuffers(n: ALsizei, buffers: *mut ALuint);
    pub fn alDeleteBuffers(n: ALsizei, buffers: *const ALuint);
    pub fn alBufferData(
        buffer: ALuint,
        format: ALenum,
        data: *const ALvoid,
        size: ALsizei,
        freq: ALsizei,
    );
    pub fn alGetBufferi(buffer: ALuint, param: ALenum, value: *mut ALint);
}

// ─── alc.h functions ────────────────────────────────────────────────────────

extern "C" {
    pub fn alcOpenDevice(devicename: *const ALCchar) -> *mut ALCdevice;
    pub fn alcCloseDevice(device: *mut ALCdevice) -> ALCboolean;

    pub fn alcCreateContext(device: *mut ALCdevice, attrlist: *const ALCint) -> *mut ALCcontext;
    pub fn alcMakeContextCurrent(context: *mut ALCcontext) -> ALCboolean;
    pub fn alcDestroyContext(context: *mut ALCcontext);
    pub fn alcGetCurrentContext() -> *mut ALCcontext;
    pub fn alcGetContextsDevice(context: *mut ALCcontext) -> *mut ALCdevice;
}
