//! Buffer lifecycle, upload and queries.

use tracing::debug;

use crate::backend::AlBackend;
use crate::error::{AlError, AlResult};
use crate::system::AudioSystem;
use crate::types::{BufferFormat, BufferId, Param};

impl<B: AlBackend> AudioSystem<B> {
    /// Generate one buffer. The name OpenAL hands back is returned as is.
    pub fn create_buffer(&self) -> AlResult<BufferId> {
        let buffer = BufferId(self.checked("alGenBuffers", None, |b| b.gen_buffer())?);
        debug!("Created {}", buffer);
        Ok(buffer)
    }

    pub fn delete_buffer(&self, buffer: BufferId) -> AlResult<()> {
        self.checked("alDeleteBuffers", None, |b| b.delete_buffer(buffer.raw()))?;
        debug!("Deleted {}", buffer);
        Ok(())
    }

    /// Upload already-decoded PCM into a buffer.
    ///
    /// `data` must hold whole sample frames for `format`.
    pub fn buffer_data(
        &self,
        buffer: BufferId,
        format: BufferFormat,
        data: &[u8],
        frequency: u32,
    ) -> AlResult<()> {
        if data.len() % format.frame_size() != 0 {
            return Err(AlError::InvalidData(format!(
                "{} bytes is not a whole number of {:?} frames",
                data.len(),
                format
            )));
        }
        if i32::try_from(data.len()).is_err() {
            return Err(AlError::InvalidData(format!(
                "{} bytes exceeds the OpenAL buffer size limit",
                data.len()
            )));
        }
        let frequency = i32::try_from(frequency)
            .map_err(|_| AlError::InvalidData(format!("sample rate {} out of range", frequency)))?;

        self.checked("alBufferData", None, |b| {
            // SAFETY: length checked to fit an ALsizei above
            unsafe { b.buffer_data(buffer.raw(), format.to_raw(), data, frequency) }
        })?;
        debug!("Uploaded {} bytes ({:?}, {} Hz) to {}", data.len(), format, frequency, buffer);
        Ok(())
    }

    pub fn get_buffer_int(&self, buffer: BufferId, param: Param) -> AlResult<i32> {
        self.checked("alGetBufferi", Some(param), |b| {
            b.get_buffer_i(buffer.raw(), param.raw())
        })
    }
}
