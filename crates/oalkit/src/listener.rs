//! The context's single listener.

use crate::backend::AlBackend;
use crate::error::AlResult;
use crate::system::AudioSystem;
use crate::types::{Param, Vec3};

impl<B: AlBackend> AudioSystem<B> {
    pub fn set_listener_float(&self, param: Param, value: f32) -> AlResult<()> {
        self.checked("alListenerf", Some(param), |b| b.listener_f(param.raw(), value))
    }

    /// Set a multi-float attribute; `ORIENTATION` takes six floats
    /// (at vector, then up vector).
    pub fn set_listener_float_vector(&self, param: Param, values: &[f32]) -> AlResult<()> {
        Self::check_vector_len(param, values)?;
        self.checked("alListenerfv", Some(param), |b| {
            // SAFETY: length checked against the attribute's component count
            unsafe { b.listener_fv(param.raw(), values) }
        })
    }

    pub fn set_listener_float3(&self, param: Param, x: f32, y: f32, z: f32) -> AlResult<()> {
        self.checked("alListener3f", Some(param), |b| {
            b.listener_3f(param.raw(), x, y, z)
        })
    }

    pub fn get_listener_float(&self, param: Param) -> AlResult<f32> {
        self.checked("alGetListenerf", Some(param), |b| b.get_listener_f(param.raw()))
    }

    pub fn get_listener_float3(&self, param: Param) -> AlResult<Vec3> {
        self.checked("alGetListenerfv", Some(param), |b| {
            Vec3::from(b.get_listener_fv(param.raw()))
        })
    }

    pub fn set_listener_position(&self, position: Vec3) -> AlResult<()> {
        self.set_listener_float3(Param::POSITION, position.x, position.y, position.z)
    }

    pub fn set_listener_velocity(&self, velocity: Vec3) -> AlResult<()> {
        self.set_listener_float3(Param::VELOCITY, velocity.x, velocity.y, velocity.z)
    }

    pub fn set_listener_orientation(&self, at: Vec3, up: Vec3) -> AlResult<()> {
        let orientation = [at.x, at.y, at.z, up.x, up.y, up.z];
        self.set_listener_float_vector(Param::ORIENTATION, &orientation)
    }

    pub fn set_listener_gain(&self, gain: f32) -> AlResult<()> {
        self.set_listener_float(Param::GAIN, gain)
    }
}
