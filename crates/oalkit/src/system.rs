//! Device/context lifecycle and the checked call path shared by every
//! attribute operation.
//!
//! OpenAL reports failures through a single poll-based error register. Every
//! wrapper call therefore issues exactly one native call followed by exactly
//! one `alGetError` poll, and the pair runs under one lock so concurrent
//! callers cannot steal each other's error codes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::backend::{AlBackend, AL_NO_ERROR};
use crate::config::ContextConfig;
use crate::error::{AlError, AlResult};
use crate::types::Param;

/// Device and context opened by `initialize`
struct Session<B: AlBackend> {
    device: B::Device,
    context: B::Context,
}

struct Inner<B: AlBackend> {
    backend: B,
    session: Option<Session<B>>,
}

/// Owner of one OpenAL device/context pair and the entry point for all
/// source, listener and buffer operations.
pub struct AudioSystem<B: AlBackend> {
    inner: Mutex<Inner<B>>,
    config: ContextConfig,
}

impl<B: AlBackend> AudioSystem<B> {
    /// Wrap a backend. No native calls are made until `initialize`.
    pub fn new(backend: B, config: ContextConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                backend,
                session: None,
            }),
            config,
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().session.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<B>> {
        // Guarded state lives inside OpenAL, poisoning carries nothing
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open the configured device, create a context on it and make that
    /// context current.
    ///
    /// Each failure point is logged and returned; on failure nothing stays
    /// open.
    pub fn initialize(&self) -> AlResult<()> {
        let mut inner = self.lock();
        if inner.session.is_some() {
            return Err(AlError::AlreadyInitialized);
        }

        let device_label = self
            .config
            .device_name
            .clone()
            .unwrap_or_else(|| "default device".to_string());

        let backend = &mut inner.backend;
        let device = match backend.open_device(self.config.device_name.as_deref()) {
            Some(device) => device,
            None => {
                error!("Failed to open OpenAL device ({})", device_label);
                return Err(AlError::DeviceOpen(device_label));
            }
        };

        let context = match backend.create_context(&device) {
            Some(context) => context,
            None => {
                error!("Failed to create OpenAL context on {}", device_label);
                // SAFETY: opened just above, nothing else has seen it
                unsafe { backend.close_device(device) };
                return Err(AlError::ContextCreate(device_label));
            }
        };

        if !backend.make_context_current(Some(&context)) {
            error!("Failed to make OpenAL context current on {}", device_label);
            // SAFETY: both created just above and never made current
            unsafe {
                backend.destroy_context(context);
                backend.close_device(device);
            }
            return Err(AlError::MakeCurrent);
        }

        inner.session = Some(Session { device, context });
        info!("OpenAL context initialized on {}", device_label);
        Ok(())
    }

    /// Unbind, destroy the context and close the device this system opened.
    ///
    /// Only the session stored by `initialize` is released; a system that
    /// holds none returns `NoCurrentContext` without touching OpenAL.
    pub fn shutdown(&self) -> AlResult<()> {
        let mut inner = self.lock();
        let Inner { backend, session } = &mut *inner;

        let Some(Session { device, context }) = session.take() else {
            warn!("OpenAL shutdown requested with no context owned by this system");
            return Err(AlError::NoCurrentContext);
        };

        // SAFETY: the session owns both handles and was just taken out of it
        unsafe { Self::release(backend, context, Some(device)) };
        Ok(())
    }

    /// Release whatever context OpenAL reports as current, along with its
    /// device, for callers that created it outside any `AudioSystem`.
    ///
    /// A session stored by `initialize` takes precedence and is released
    /// like `shutdown` does.
    ///
    /// # Safety
    ///
    /// The caller must own the current context and its device: no other
    /// `AudioSystem` or native code may use or release them afterwards.
    pub unsafe fn shutdown_current(&self) -> AlResult<()> {
        let mut inner = self.lock();
        let Inner { backend, session } = &mut *inner;

        let (context, device) = match session.take() {
            Some(Session { device, context }) => (context, Some(device)),
            None => match backend.current_context() {
                Some(context) => {
                    let device = backend.context_device(&context);
                    (context, device)
                }
                None => {
                    warn!("OpenAL shutdown requested with no current context");
                    return Err(AlError::NoCurrentContext);
                }
            },
        };

        Self::release(backend, context, device);
        Ok(())
    }

    /// Unbind, destroy, close; exactly once each and in that order.
    ///
    /// # Safety
    ///
    /// `context` and `device` must be owned by the caller.
    unsafe fn release(backend: &mut B, context: B::Context, device: Option<B::Device>) {
        backend.make_context_current(None);
        backend.destroy_context(context);
        match device {
            Some(device) => {
                if !backend.close_device(device) {
                    warn!("alcCloseDevice reported failure");
                }
            }
            None => warn!("Current OpenAL context has no device to close"),
        }

        info!("OpenAL context shut down");
    }

    /// Run one native call and poll the error register once, under the lock.
    ///
    /// `param` only feeds the diagnostic label.
    pub(crate) fn checked<T>(
        &self,
        call: &'static str,
        param: Option<Param>,
        f: impl FnOnce(&mut B) -> T,
    ) -> AlResult<T> {
        let mut inner = self.lock();
        let value = f(&mut inner.backend);
        let code = inner.backend.get_error();
        if code == AL_NO_ERROR {
            return Ok(value);
        }

        let label = match param {
            Some(param) => format!("{} {}", call, param.name()),
            None => call.to_string(),
        };
        error!("{} : Error code: {}", label, code);
        Err(AlError::native(label, code))
    }

    /// Slice length check for the `*fv` setters, before anything reaches
    /// OpenAL.
    pub(crate) fn check_vector_len(param: Param, values: &[f32]) -> AlResult<()> {
        let attribute = || format!("{} ({:#x})", param.name(), param.raw());
        let expected = param
            .component_count()
            .ok_or_else(|| AlError::UnknownVectorAttribute(attribute()))?;
        if values.len() < expected {
            return Err(AlError::InvalidLength {
                attribute: attribute(),
                expected,
                actual: values.len(),
            });
        }
        Ok(())
    }
}

impl<B: AlBackend> Drop for AudioSystem<B> {
    fn drop(&mut self) {
        let initialized = self
            .inner
            .get_mut()
            .map(|inner| inner.session.is_some())
            .unwrap_or_else(|poisoned| poisoned.into_inner().session.is_some());
        if initialized {
            debug!("AudioSystem dropped while initialized, shutting down");
            let _ = self.shutdown();
        }
    }
}
