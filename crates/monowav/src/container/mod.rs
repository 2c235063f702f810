//! The audio container: a header triple plus its sample buffer.
//!
//! Every successful mutation keeps the header consistent with the buffer:
//! the data size is `trunc(sample_rate * duration)`, the RIFF size is
//! `36 + data size`, the byte rate equals the sample rate, and the buffer
//! length equals the data size.

mod stream;


use crate::buffer::SampleBuffer;
use crate::error::{WaveError, WaveResult};
use crate::header::{WavHeader, RIFF_OVERHEAD};

/// Largest data size whose RIFF size still fits in 32 bits.
const MAX_DATA_SIZE: u32 = u32::MAX - RIFF_OVERHEAD;

/// A mono, 8-bit PCM audio container.
///
/// The lifetime ties a container to caller-owned sample storage lent through
/// [`Wave::with_buffer`] or [`SampleBuffer::Borrowed`]. Containers that own
/// their samples are `Wave<'static>`.
#[derive(Debug)]
pub struct Wave<'a> {
    header: WavHeader,
    samples: SampleBuffer<'a>,
    duration: f64,
}

/// Computes `trunc(sample_rate * duration)` after validating both inputs.
fn data_size_for(sample_rate: u32, duration: f64) -> WaveResult<u32> {
    if sample_rate == 0 {
        return Err(WaveError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(WaveError::InvalidDuration { duration });
    }

    let size = (sample_rate as f64 * duration).trunc();
    if size > MAX_DATA_SIZE as f64 {
        return Err(WaveError::InvalidDuration { duration });
    }
    Ok(size as u32)
}

/// Duration implied by a decoded header, using whole-second integer division.
fn duration_from_header(header: &WavHeader) -> f64 {
    match header.data.size.checked_div(header.format.sample_rate) {
        Some(seconds) => seconds as f64,
        None => 0.0,
    }
}

impl Wave<'static> {
    /// Creates a container with a zero-filled buffer of
    /// `trunc(sample_rate * duration)` samples.
    ///
    /// # Errors
    /// [`WaveError::InvalidSampleRate`] for a zero rate,
    /// [`WaveError::InvalidDuration`] for a negative, non-finite, or oversized duration.
    pub fn new(sample_rate: u32, duration: f64) -> WaveResult<Self> {
        let data_size = data_size_for(sample_rate, duration)?;
        Ok(Self {
            header: WavHeader::mono_pcm8(sample_rate, data_size),
            samples: SampleBuffer::allocate(data_size as usize),
            duration,
        })
    }

    /// Creates a container from explicit header values with a freshly
    /// allocated buffer of `header.data.size` bytes.
    ///
    /// The header is taken as-is; duration is derived by integer division.
    pub fn from_headers(header: WavHeader) -> Self {
        Self {
            samples: SampleBuffer::allocate(header.data.size as usize),
            duration: duration_from_header(&header),
            header,
        }
    }
}

impl<'a> Wave<'a> {
    /// Creates a container whose samples live in caller-owned storage.
    ///
    /// Only the first `trunc(sample_rate * duration)` bytes of `buffer` are
    /// used. The container never frees this storage; a later rate or
    /// duration change detaches it in favor of an owned allocation.
    ///
    /// # Errors
    /// [`WaveError::IndexOutOfRange`] if `buffer` is shorter than the derived size.
    pub fn with_buffer(sample_rate: u32, duration: f64, buffer: &'a mut [u8]) -> WaveResult<Self> {
        let data_size = data_size_for(sample_rate, duration)?;
        let mut wave = Self::from_parts(
            WavHeader::mono_pcm8(sample_rate, data_size),
            SampleBuffer::Borrowed(buffer),
        )?;
        wave.duration = duration;
        Ok(wave)
    }

    /// Creates a container from explicit header and buffer values.
    ///
    /// A buffer longer than `header.data.size` is truncated to that size.
    ///
    /// # Errors
    /// [`WaveError::IndexOutOfRange`] if the buffer is shorter than the header's data size.
    pub fn from_parts(header: WavHeader, mut samples: SampleBuffer<'a>) -> WaveResult<Self> {
        let required = header.data.size as usize;
        if samples.len() < required {
            return Err(WaveError::IndexOutOfRange {
                buffer: "sample",
                required,
                actual: samples.len(),
            });
        }
        samples.truncate(required);

        Ok(Self {
            duration: duration_from_header(&header),
            header,
            samples,
        })
    }

    /// Returns the header triple.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.header.format.sample_rate
    }

    /// Returns the duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the number of samples (the data chunk size).
    pub fn data_size(&self) -> usize {
        self.header.data.size as usize
    }

    /// Returns true when the container is responsible for freeing its samples.
    pub fn owns_buffer(&self) -> bool {
        self.samples.is_owned()
    }

    /// Returns the live sample buffer.
    pub fn waveform(&self) -> &[u8] {
        &self.samples
    }

    /// Returns the live sample buffer for in-place mutation.
    pub fn waveform_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Replaces the sample content with the first `data_size()` bytes of `samples`.
    ///
    /// Extra source bytes are ignored.
    ///
    /// # Errors
    /// [`WaveError::IndexOutOfRange`] if `samples` is shorter than `data_size()`;
    /// the buffer is left unchanged.
    pub fn set_waveform(&mut self, samples: &[u8]) -> WaveResult<()> {
        let required = self.data_size();
        let source = samples.get(..required).ok_or(WaveError::IndexOutOfRange {
            buffer: "source",
            required,
            actual: samples.len(),
        })?;
        self.samples.copy_from_slice(source);
        Ok(())
    }

    /// Changes the sample rate, keeping the duration.
    ///
    /// The buffer is destructively reallocated to the new size.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> WaveResult<()> {
        let data_size = data_size_for(sample_rate, self.duration)?;
        self.header.set_sample_rate(sample_rate);
        self.apply_data_size(data_size);
        Ok(())
    }

    /// Changes the duration in seconds, keeping the sample rate.
    ///
    /// The buffer is destructively reallocated to the new size.
    pub fn set_duration(&mut self, duration: f64) -> WaveResult<()> {
        let data_size = data_size_for(self.sample_rate(), duration)?;
        self.duration = duration;
        self.apply_data_size(data_size);
        Ok(())
    }

    fn apply_data_size(&mut self, data_size: u32) {
        tracing::debug!(
            from = self.header.data.size,
            to = data_size,
            sample_rate = self.sample_rate(),
            "reallocating sample buffer"
        );
        self.header.set_data_size(data_size);
        self.samples.resize(data_size as usize);
    }

    /// Returns the BLAKE3 hash of the sample bytes as 64 hex characters.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.samples).to_hex().to_string()
    }

    /// Consumes the container, returning its header and buffer.
    pub fn into_parts(self) -> (WavHeader, SampleBuffer<'a>) {
        (self.header, self.samples)
    }

    /// Copies the container into one that owns its samples.
    pub fn to_owned_wave(&self) -> Wave<'static> {
        Wave {
            header: self.header,
            samples: self.samples.to_owned_buffer(),
            duration: self.duration,
        }
    }
}
