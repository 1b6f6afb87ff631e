//! `AlBackend` over the system OpenAL library.
//!
//! OpenAL keeps its error register and current context in process-global
//! state, so this backend is not Send/Sync and should be owned by a single
//! `AudioSystem`.

use std::ffi::CString;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use oalkit_sys::*;
use tracing::warn;

use crate::backend::AlBackend;
use crate::types::{BufferFormat, Param, SourceState};

// `types` and `backend` spell the codes out so they build without the -sys
// crate
const _: () = {
    use crate::backend as codes;

    assert!(Param::SOURCE_RELATIVE.0 == AL_SOURCE_RELATIVE);
    assert!(Param::CONE_INNER_ANGLE.0 == AL_CONE_INNER_ANGLE);
    assert!(Param::CONE_OUTER_ANGLE.0 == AL_CONE_OUTER_ANGLE);
    assert!(Param::PITCH.0 == AL_PITCH);
    assert!(Param::POSITION.0 == AL_POSITION);
    assert!(Param::DIRECTION.0 == AL_DIRECTION);
    assert!(Param::VELOCITY.0 == AL_VELOCITY);
    assert!(Param::LOOPING.0 == AL_LOOPING);
    assert!(Param::BUFFER.0 == AL_BUFFER);
    assert!(Param::GAIN.0 == AL_GAIN);
    assert!(Param::MIN_GAIN.0 == AL_MIN_GAIN);
    assert!(Param::MAX_GAIN.0 == AL_MAX_GAIN);
    assert!(Param::ORIENTATION.0 == AL_ORIENTATION);
    assert!(Param::SOURCE_STATE.0 == AL_SOURCE_STATE);
    assert!(Param::BUFFERS_QUEUED.0 == AL_BUFFERS_QUEUED);
    assert!(Param::BUFFERS_PROCESSED.0 == AL_BUFFERS_PROCESSED);
    assert!(Param::REFERENCE_DISTANCE.0 == AL_REFERENCE_DISTANCE);
    assert!(Param::ROLLOFF_FACTOR.0 == AL_ROLLOFF_FACTOR);
    assert!(Param::CONE_OUTER_GAIN.0 == AL_CONE_OUTER_GAIN);
    assert!(Param::MAX_DISTANCE.0 == AL_MAX_DISTANCE);
    assert!(Param::SEC_OFFSET.0 == AL_SEC_OFFSET);
    assert!(Param::FREQUENCY.0 == AL_FREQUENCY);
    assert!(Param::BITS.0 == AL_BITS);
    assert!(Param::CHANNELS.0 == AL_CHANNELS);
    assert!(Param::SIZE.0 == AL_SIZE);

    assert!(SourceState::Initial.to_raw() == AL_INITIAL);
    assert!(SourceState::Playing.to_raw() == AL_PLAYING);
    assert!(SourceState::Paused.to_raw() == AL_PAUSED);
    assert!(SourceState::Stopped.to_raw() == AL_STOPPED);

    assert!(BufferFormat::Mono8.to_raw() == AL_FORMAT_MONO8);
    assert!(BufferFormat::Mono16.to_raw() == AL_FORMAT_MONO16);
    assert!(BufferFormat::Stereo8.to_raw() == AL_FORMAT_STEREO8);
    assert!(BufferFormat::Stereo16.to_raw() == AL_FORMAT_STEREO16);

    assert!(codes::AL_NONE == AL_NONE);
    assert!(codes::AL_FALSE == AL_FALSE);
    assert!(codes::AL_TRUE == AL_TRUE);
    assert!(codes::AL_NO_ERROR == AL_NO_ERROR);
    assert!(codes::AL_INVALID_NAME == AL_INVALID_NAME);
    assert!(codes::AL_INVALID_ENUM == AL_INVALID_ENUM);
    assert!(codes::AL_INVALID_VALUE == AL_INVALID_VALUE);
    assert!(codes::AL_INVALID_OPERATION == AL_INVALID_OPERATION);
    assert!(codes::AL_OUT_OF_MEMORY == AL_OUT_OF_MEMORY);
};

/// `ALCdevice` pointer. Owned when it came from `open_device`.
#[derive(Debug)]
pub struct NativeDevice(NonNull<ALCdevice>);

/// `ALCcontext` pointer. Owned when it came from `create_context`.
#[derive(Debug)]
pub struct NativeContext(NonNull<ALCcontext>);

/// Backend calling straight into libopenal.
pub struct NativeAl {
    /// Prevent Send/Sync
    _marker: PhantomData<*mut ()>,
}

impl NativeAl {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl Default for NativeAl {
    fn default() -> Self {
        Self::new()
    }
}

impl AlBackend for NativeAl {
    type Device = NativeDevice;
    type Context = NativeContext;

    fn get_error(&mut self) -> i32 {
        unsafe { alGetError() }
    }

    fn source_f(&mut self, source: u32, param: i32, value: f32) {
        unsafe { alSourcef(source, param, value) }
    }

    fn source_3f(&mut self, source: u32, param: i32, x: f32, y: f32, z: f32) {
        unsafe { alSource3f(source, param, x, y, z) }
    }

    unsafe fn source_fv(&mut self, source: u32, param: i32, values: &[f32]) {
        alSourcefv(source, param, values.as_ptr())
    }

    fn source_i(&mut self, source: u32, param: i32, value: i32) {
        unsafe { alSourcei(source, param, value) }
    }

    fn get_source_f(&mut self, source: u32, param: i32) -> f32 {
        let mut value: ALfloat = 0.0;
        unsafe { alGetSourcef(source, param, &mut value) };
        value
    }

    fn get_source_fv(&mut self, source: u32, param: i32) -> [f32; 3] {
        // Large enough for any source vector attribute
        let mut values = [0.0f32; 6];
        unsafe { alGetSourcefv(source, param, values.as_mut_ptr()) };
        [values[0], values[1], values[2]]
    }

    fn get_source_i(&mut self, source: u32, param: i32) -> i32 {
        let mut value: ALint = 0;
        unsafe { alGetSourcei(source, param, &mut value) };
        value
    }

    fn source_play(&mut self, source: u32) {
        unsafe { alSourcePlay(source) }
    }

    fn source_stop(&mut self, source: u32) {
        unsafe { alSourceStop(source) }
    }

    fn source_pause(&mut self, source: u32) {
        unsafe { alSourcePause(source) }
    }

    fn source_rewind(&mut self, source: u32) {
        unsafe { alSourceRewind(source) }
    }

    fn gen_source(&mut self) -> u32 {
        let mut source: ALuint = 0;
        unsafe { alGenSources(1, &mut source) };
        source
    }

    fn delete_source(&mut self, source: u32) {
        unsafe { alDeleteSources(1, &source) }
    }

    fn listener_f(&mut self, param: i32, value: f32) {
        unsafe { alListenerf(param, value) }
    }

    fn listener_3f(&mut self, param: i32, x: f32, y: f32, z: f32) {
        unsafe { alListener3f(param, x, y, z) }
    }

    unsafe fn listener_fv(&mut self, param: i32, values: &[f32]) {
        alListenerfv(param, values.as_ptr())
    }

    fn get_listener_f(&mut self, param: i32) -> f32 {
        let mut value: ALfloat = 0.0;
        unsafe { alGetListenerf(param, &mut value) };
        value
    }

    fn get_listener_fv(&mut self, param: i32) -> [f32; 3] {
        // AL_ORIENTATION writes six floats
        let mut values = [0.0f32; 6];
        unsafe { alGetListenerfv(param, values.as_mut_ptr()) };
        [values[0], values[1], values[2]]
    }

    fn gen_buffer(&mut self) -> u32 {
        let mut buffer: ALuint = 0;
        unsafe { alGenBuffers(1, &mut buffer) };
        buffer
    }

    fn delete_buffer(&mut self, buffer: u32) {
        unsafe { alDeleteBuffers(1, &buffer) }
    }

    unsafe fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32) {
        alBufferData(
            buffer,
            format,
            data.as_ptr() as *const ALvoid,
            data.len() as ALsizei,
            frequency,
        )
    }

    fn get_buffer_i(&mut self, buffer: u32, param: i32) -> i32 {
        let mut value: ALint = 0;
        unsafe { alGetBufferi(buffer, param, &mut value) };
        value
    }

    fn open_device(&mut self, name: Option<&str>) -> Option<NativeDevice> {
        let name = match name.map(CString::new).transpose() {
            Ok(name) => name,
            Err(e) => {
                warn!("Device name contains a NUL byte: {}", e);
                return None;
            }
        };
        let name_ptr = name.as_ref().map_or(ptr::null(), |n| n.as_ptr());
        let device = unsafe { alcOpenDevice(name_ptr) };
        NonNull::new(device).map(NativeDevice)
    }

    unsafe fn close_device(&mut self, device: NativeDevice) -> bool {
        alcCloseDevice(device.0.as_ptr()) == ALC_TRUE
    }

    fn create_context(&mut self, device: &NativeDevice) -> Option<NativeContext> {
        let context = unsafe { alcCreateContext(device.0.as_ptr(), ptr::null()) };
        NonNull::new(context).map(NativeContext)
    }

    fn make_context_current(&mut self, context: Option<&NativeContext>) -> bool {
        let context_ptr = context.map_or(ptr::null_mut(), |c| c.0.as_ptr());
        unsafe { alcMakeContextCurrent(context_ptr) == ALC_TRUE }
    }

    fn current_context(&mut self) -> Option<NativeContext> {
        NonNull::new(unsafe { alcGetCurrentContext() }).map(NativeContext)
    }

    fn context_device(&mut self, context: &NativeContext) -> Option<NativeDevice> {
        NonNull::new(unsafe { alcGetContextsDevice(context.0.as_ptr()) }).map(NativeDevice)
    }

    unsafe fn destroy_context(&mut self, context: NativeContext) {
        alcDestroyContext(context.0.as_ptr())
    }
}
