//! Source attributes, playback transport and source lifecycle.

use tracing::debug;

use crate::backend::{AlBackend, AL_FALSE, AL_NONE, AL_TRUE};
use crate::error::AlResult;
use crate::system::AudioSystem;
use crate::types::{BufferId, Param, SourceId, SourceState, Vec3};

impl<B: AlBackend> AudioSystem<B> {
    // ─── Attribute setters ─────────────────────────────────────────────────

    pub fn set_source_float(&self, source: SourceId, param: Param, value: f32) -> AlResult<()> {
        self.checked("alSourcef", Some(param), |b| {
            b.source_f(source.raw(), param.raw(), value)
        })
    }

    /// Set a multi-float attribute (`POSITION`, `ORIENTATION`, ...).
    ///
    /// `values` must hold at least as many floats as the attribute reads.
    pub fn set_source_float_vector(
        &self,
        source: SourceId,
        param: Param,
        values: &[f32],
    ) -> AlResult<()> {
        Self::check_vector_len(param, values)?;
        self.checked("alSourcefv", Some(param), |b| {
            // SAFETY: length checked against the attribute's component count
            unsafe { b.source_fv(source.raw(), param.raw(), values) }
        })
    }

    pub fn set_source_int(&self, source: SourceId, param: Param, value: i32) -> AlResult<()> {
        self.checked("alSourcei", Some(param), |b| {
            b.source_i(source.raw(), param.raw(), value)
        })
    }

    pub fn set_source_float3(
        &self,
        source: SourceId,
        param: Param,
        x: f32,
        y: f32,
        z: f32,
    ) -> AlResult<()> {
        self.checked("alSource3f", Some(param), |b| {
            b.source_3f(source.raw(), param.raw(), x, y, z)
        })
    }

    // ─── Attribute getters ─────────────────────────────────────────────────

    pub fn get_source_int(&self, source: SourceId, param: Param) -> AlResult<i32> {
        self.checked("alGetSourcei", Some(param), |b| {
            b.get_source_i(source.raw(), param.raw())
        })
    }

    pub fn get_source_float(&self, source: SourceId, param: Param) -> AlResult<f32> {
        self.checked("alGetSourcef", Some(param), |b| {
            b.get_source_f(source.raw(), param.raw())
        })
    }

    pub fn get_source_float3(&self, source: SourceId, param: Param) -> AlResult<Vec3> {
        self.checked("alGetSourcefv", Some(param), |b| {
            Vec3::from(b.get_source_fv(source.raw(), param.raw()))
        })
    }

    /// Current playback state (`AL_SOURCE_STATE`)
    pub fn get_source_state(&self, source: SourceId) -> AlResult<SourceState> {
        self.get_source_int(source, Param::SOURCE_STATE)
            .map(SourceState::from_raw)
    }

    // ─── Playback ──────────────────────────────────────────────────────────

    pub fn play_source(&self, source: SourceId) -> AlResult<()> {
        debug!("Playing {}", source);
        self.checked("alSourcePlay", None, |b| b.source_play(source.raw()))
    }

    pub fn stop_source(&self, source: SourceId) -> AlResult<()> {
        debug!("Stopping {}", source);
        self.checked("alSourceStop", None, |b| b.source_stop(source.raw()))
    }

    pub fn pause_source(&self, source: SourceId) -> AlResult<()> {
        debug!("Pausing {}", source);
        self.checked("alSourcePause", None, |b| b.source_pause(source.raw()))
    }

    pub fn rewind_source(&self, source: SourceId) -> AlResult<()> {
        debug!("Rewinding {}", source);
        self.checked("alSourceRewind", None, |b| b.source_rewind(source.raw()))
    }

    // ─── Lifecycle ─────────────────────────────────────────────────────────

    /// Generate one source. The name OpenAL hands back is returned as is.
    pub fn create_source(&self) -> AlResult<SourceId> {
        let source = SourceId(self.checked("alGenSources", None, |b| b.gen_source())?);
        debug!("Created {}", source);
        Ok(source)
    }

    pub fn delete_source(&self, source: SourceId) -> AlResult<()> {
        self.checked("alDeleteSources", None, |b| b.delete_source(source.raw()))?;
        debug!("Deleted {}", source);
        Ok(())
    }

    // ─── Convenience ───────────────────────────────────────────────────────

    /// Attach a buffer for static playback
    pub fn set_source_buffer(&self, source: SourceId, buffer: BufferId) -> AlResult<()> {
        // alSourcei takes the buffer name as a signed int
        self.set_source_int(source, Param::BUFFER, buffer.raw() as i32)
    }

    pub fn detach_source_buffer(&self, source: SourceId) -> AlResult<()> {
        self.set_source_int(source, Param::BUFFER, AL_NONE)
    }

    pub fn set_source_position(&self, source: SourceId, position: Vec3) -> AlResult<()> {
        self.set_source_float3(source, Param::POSITION, position.x, position.y, position.z)
    }

    pub fn set_source_velocity(&self, source: SourceId, velocity: Vec3) -> AlResult<()> {
        self.set_source_float3(source, Param::VELOCITY, velocity.x, velocity.y, velocity.z)
    }

    pub fn set_source_direction(&self, source: SourceId, direction: Vec3) -> AlResult<()> {
        self.set_source_float3(source, Param::DIRECTION, direction.x, direction.y, direction.z)
    }

    pub fn set_source_pitch(&self, source: SourceId, pitch: f32) -> AlResult<()> {
        self.set_source_float(source, Param::PITCH, pitch)
    }

    pub fn set_source_gain(&self, source: SourceId, gain: f32) -> AlResult<()> {
        self.set_source_float(source, Param::GAIN, gain)
    }

    pub fn set_source_looping(&self, source: SourceId, looping: bool) -> AlResult<()> {
        let value = if looping { AL_TRUE } else { AL_FALSE };
        self.set_source_int(source, Param::LOOPING, value)
    }
}
