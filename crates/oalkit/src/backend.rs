//! The native call surface the wrapper drives.
//!
//! One method per OpenAL entry point, taking and returning raw values.
//! `NativeAl` forwards to the C library; tests plug in a recording fake.

/// `alGetError` value for success
pub const AL_NO_ERROR: i32 = 0;
pub const AL_INVALID_NAME: i32 = 0xA001;
pub const AL_INVALID_ENUM: i32 = 0xA002;
pub const AL_INVALID_VALUE: i32 = 0xA003;
pub const AL_INVALID_OPERATION: i32 = 0xA004;
pub const AL_OUT_OF_MEMORY: i32 = 0xA005;

/// `AL_NONE`, also the null buffer name
pub const AL_NONE: i32 = 0;
pub const AL_FALSE: i32 = 0;
pub const AL_TRUE: i32 = 1;

pub trait AlBackend {
    /// Opaque `ALCdevice` handle
    type Device;
    /// Opaque `ALCcontext` handle
    type Context;

    /// `alGetError`: read and clear the last error
    fn get_error(&mut self) -> i32;

    // ─── Sources ───────────────────────────────────────────────────────────

    fn source_f(&mut self, source: u32, param: i32, value: f32);
    fn source_3f(&mut self, source: u32, param: i32, x: f32, y: f32, z: f32);
    /// `alSourcefv`: OpenAL reads as many floats as `param` implies.
    ///
    /// # Safety
    ///
    /// `values` must hold at least as many floats as OpenAL reads for
    /// `param`.
    unsafe fn source_fv(&mut self, source: u32, param: i32, values: &[f32]);
    fn source_i(&mut self, source: u32, param: i32, value: i32);

    fn get_source_f(&mut self, source: u32, param: i32) -> f32;
    fn get_source_fv(&mut self, source: u32, param: i32) -> [f32; 3];
    fn get_source_i(&mut self, source: u32, param: i32) -> i32;

    fn source_play(&mut self, source: u32);
    fn source_stop(&mut self, source: u32);
    fn source_pause(&mut self, source: u32);
    fn source_rewind(&mut self, source: u32);

    fn gen_source(&mut self) -> u32;
    fn delete_source(&mut self, source: u32);

    // ─── Listener ──────────────────────────────────────────────────────────

    fn listener_f(&mut self, param: i32, value: f32);
    fn listener_3f(&mut self, param: i32, x: f32, y: f32, z: f32);
    /// # Safety
    ///
    /// `values` must hold at least as many floats as OpenAL reads for
    /// `param` (six for `AL_ORIENTATION`).
    unsafe fn listener_fv(&mut self, param: i32, values: &[f32]);

    fn get_listener_f(&mut self, param: i32) -> f32;
    fn get_listener_fv(&mut self, param: i32) -> [f32; 3];

    // ─── Buffers ───────────────────────────────────────────────────────────

    fn gen_buffer(&mut self) -> u32;
    fn delete_buffer(&mut self, buffer: u32);
    /// # Safety
    ///
    /// `data.len()` must fit in an `i32`.
    unsafe fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32);
    fn get_buffer_i(&mut self, buffer: u32, param: i32) -> i32;

    // ─── Device / context ──────────────────────────────────────────────────

    /// `alcOpenDevice`; `None` name opens the default device
    fn open_device(&mut self, name: Option<&str>) -> Option<Self::Device>;
    /// # Safety
    ///
    /// The caller must own `device`: no other owner may use or close it
    /// afterwards.
    unsafe fn close_device(&mut self, device: Self::Device) -> bool;
    fn create_context(&mut self, device: &Self::Device) -> Option<Self::Context>;
    /// `None` unbinds the current context
    fn make_context_current(&mut self, context: Option<&Self::Context>) -> bool;
    /// The returned handle is not owned; whoever created the context does.
    fn current_context(&mut self) -> Option<Self::Context>;
    /// The returned handle is not owned; whoever opened the device does.
    fn context_device(&mut self, context: &Self::Context) -> Option<Self::Device>;
    /// # Safety
    ///
    /// The caller must own `context`, and it must not be current.
    unsafe fn destroy_context(&mut self, context: Self::Context);
}
