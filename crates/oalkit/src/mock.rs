//! Recording fake of the OpenAL call surface, plus log capture.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::{AlBackend, AL_NO_ERROR};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetError,
    SourceF(u32, i32, f32),
    Source3F(u32, i32, f32, f32, f32),
    SourceFv(u32, i32, Vec<f32>),
    SourceI(u32, i32, i32),
    GetSourceF(u32, i32),
    GetSourceFv(u32, i32),
    GetSourceI(u32, i32),
    Play(u32),
    Stop(u32),
    Pause(u32),
    Rewind(u32),
    GenSource,
    DeleteSource(u32),
    ListenerF(i32, f32),
    Listener3F(i32, f32, f32, f32),
    ListenerFv(i32, Vec<f32>),
    GetListenerF(i32),
    GetListenerFv(i32),
    GenBuffer,
    DeleteBuffer(u32),
    BufferData(u32, i32, usize, i32),
    GetBufferI(u32, i32),
    OpenDevice(Option<String>),
    CloseDevice(u32),
    CreateContext(u32),
    MakeContextCurrent(Option<u32>),
    CurrentContext,
    ContextDevice(u32),
    DestroyContext(u32),
}

pub struct MockState {
    pub calls: Vec<Call>,
    /// Codes served by successive `get_error` polls; empty means success
    pub errors: VecDeque<i32>,
    pub float_value: f32,
    pub int_value: i32,
    pub vector_value: [f32; 3],
    pub next_name: u32,
    pub device_ok: bool,
    pub context_ok: bool,
    pub make_current_ok: bool,
    pub close_ok: bool,
    pub current_context: Option<u32>,
    /// context id -> device id, for `context_device`
    pub context_devices: HashMap<u32, u32>,
    next_device: u32,
    next_context: u32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            errors: VecDeque::new(),
            float_value: 0.0,
            int_value: 0,
            vector_value: [0.0; 3],
            next_name: 1,
            device_ok: true,
            context_ok: true,
            make_current_ok: true,
            close_ok: true,
            current_context: None,
            context_devices: HashMap::new(),
            next_device: 1,
            next_context: 1,
        }
    }
}

/// Cloning shares the recorded state, so a test can keep a handle after
/// moving the backend into an `AudioSystem`.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Make the next `get_error` poll report `code`
    pub fn push_error(&self, code: i32) {
        self.state().errors.push_back(code);
    }

    fn record(&self, call: Call) {
        self.state().calls.push(call);
    }
}

impl AlBackend for MockBackend {
    type Device = u32;
    type Context = u32;

    fn get_error(&mut self) -> i32 {
        let mut state = self.state();
        state.calls.push(Call::GetError);
        state.errors.pop_front().unwrap_or(AL_NO_ERROR)
    }

    fn source_f(&mut self, source: u32, param: i32, value: f32) {
        self.record(Call::SourceF(source, param, value));
    }

    fn source_3f(&mut self, source: u32, param: i32, x: f32, y: f32, z: f32) {
        self.record(Call::Source3F(source, param, x, y, z));
    }

    unsafe fn source_fv(&mut self, source: u32, param: i32, values: &[f32]) {
        self.record(Call::SourceFv(source, param, values.to_vec()));
    }

    fn source_i(&mut self, source: u32, param: i32, value: i32) {
        self.record(Call::SourceI(source, param, value));
    }

    fn get_source_f(&mut self, source: u32, param: i32) -> f32 {
        self.record(Call::GetSourceF(source, param));
        self.state().float_value
    }

    fn get_source_fv(&mut self, source: u32, param: i32) -> [f32; 3] {
        self.record(Call::GetSourceFv(source, param));
        self.state().vector_value
    }

    fn get_source_i(&mut self, source: u32, param: i32) -> i32 {
        self.record(Call::GetSourceI(source, param));
        self.state().int_value
    }

    fn source_play(&mut self, source: u32) {
        self.record(Call::Play(source));
    }

    fn source_stop(&mut self, source: u32) {
        self.record(Call::Stop(source));
    }

    fn source_pause(&mut self, source: u32) {
        self.record(Call::Pause(source));
    }

    fn source_rewind(&mut self, source: u32) {
        self.record(Call::Rewind(source));
    }

    fn gen_source(&mut self) -> u32 {
        let mut state = self.state();
        state.calls.push(Call::GenSource);
        let name = state.next_name;
        state.next_name += 1;
        name
    }

    fn delete_source(&mut self, source: u32) {
        self.record(Call::DeleteSource(source));
    }

    fn listener_f(&mut self, param: i32, value: f32) {
        self.record(Call::ListenerF(param, value));
    }

    fn listener_3f(&mut self, param: i32, x: f32, y: f32, z: f32) {
        self.record(Call::Listener3F(param, x, y, z));
    }

    unsafe fn listener_fv(&mut self, param: i32, values: &[f32]) {
        self.record(Call::ListenerFv(param, values.to_vec()));
    }

    fn get_listener_f(&mut self, param: i32) -> f32 {
        self.record(Call::GetListenerF(param));
        self.state().float_value
    }

    fn get_listener_fv(&mut self, param: i32) -> [f32; 3] {
        self.record(Call::GetListenerFv(param));
        self.state().vector_value
    }

    fn gen_buffer(&mut self) -> u32 {
        let mut state = self.state();
        state.calls.push(Call::GenBuffer);
        let name = state.next_name;
        state.next_name += 1;
        name
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    unsafe fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32) {
        self.record(Call::BufferData(buffer, format, data.len(), frequency));
    }

    fn get_buffer_i(&mut self, buffer: u32, param: i32) -> i32 {
        self.record(Call::GetBufferI(buffer, param));
        self.state().int_value
    }

    fn open_device(&mut self, name: Option<&str>) -> Option<u32> {
        let mut state = self.state();
        state.calls.push(Call::OpenDevice(name.map(str::to_string)));
        if !state.device_ok {
            return None;
        }
        let id = state.next_device;
        state.next_device += 1;
        Some(id)
    }

    unsafe fn close_device(&mut self, device: u32) -> bool {
        let mut state = self.state();
        state.calls.push(Call::CloseDevice(device));
        state.close_ok
    }

    fn create_context(&mut self, device: &u32) -> Option<u32> {
        let mut state = self.state();
        state.calls.push(Call::CreateContext(*device));
        if !state.context_ok {
            return None;
        }
        let id = state.next_context;
        state.next_context += 1;
        state.context_devices.insert(id, *device);
        Some(id)
    }

    fn make_context_current(&mut self, context: Option<&u32>) -> bool {
        let mut state = self.state();
        state.calls.push(Call::MakeContextCurrent(context.copied()));
        if !state.make_current_ok {
            return false;
        }
        state.current_context = context.copied();
        true
    }

    fn current_context(&mut self) -> Option<u32> {
        let mut state = self.state();
        state.calls.push(Call::CurrentContext);
        state.current_context
    }

    fn context_device(&mut self, context: &u32) -> Option<u32> {
        let mut state = self.state();
        state.calls.push(Call::ContextDevice(*context));
        state.context_devices.get(context).copied()
    }

    unsafe fn destroy_context(&mut self, context: u32) {
        self.record(Call::DestroyContext(context));
    }
}

/// In-memory writer for a scoped fmt subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (value, logs)
}

/// Lines that carry an OpenAL error code
pub fn error_lines(logs: &str) -> Vec<&str> {
    logs.lines().filter(|l| l.contains("Error code")).collect()
}
