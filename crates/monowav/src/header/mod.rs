//! RIFF/WAVE header triple for mono 8-bit PCM.
//!
//! The header is always the canonical 44-byte layout: a 12-byte RIFF chunk
//! descriptor, a 24-byte `fmt ` chunk, and the 8-byte `data` chunk preamble.
//! All multi-byte fields are little-endian regardless of the host platform.

mod codec;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode};

/// Four-character chunk tag.
pub type FourCc = [u8; 4];

/// `"RIFF"` chunk tag.
pub const RIFF_TAG: FourCc = *b"RIFF";
/// `"WAVE"` format tag.
pub const WAVE_TAG: FourCc = *b"WAVE";
/// `"fmt "` chunk tag.
pub const FMT_TAG: FourCc = *b"fmt ";
/// `"data"` chunk tag.
pub const DATA_TAG: FourCc = *b"data";

/// Total encoded size of the three headers.
pub const HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF size field before the sample data begins.
pub const RIFF_OVERHEAD: u32 = 36;

/// Size of a PCM `fmt ` chunk body.
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// Audio format code for uncompressed PCM.
pub const PCM_FORMAT: u16 = 1;

/// RIFF chunk descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    /// Chunk tag, normally `"RIFF"`.
    pub id: FourCc,
    /// Remaining file size after this field (`36 + data size`).
    pub size: u32,
    /// Form type, normally `"WAVE"`.
    pub format: FourCc,
}

/// `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatHeader {
    /// Chunk tag, normally `"fmt "`.
    pub id: FourCc,
    /// Chunk body size (16 for PCM).
    pub size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

/// `data` chunk preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    /// Chunk tag, normally `"data"`.
    pub id: FourCc,
    /// Number of sample bytes that follow.
    pub size: u32,
}

/// The complete header triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk descriptor.
    pub riff: RiffHeader,
    /// Format chunk.
    pub format: FormatHeader,
    /// Data chunk preamble.
    pub data: DataHeader,
}

impl WavHeader {
    /// Creates the fixed mono, 8-bit, PCM header for `data_size` samples.
    ///
    /// The caller is responsible for keeping `data_size` within
    /// `u32::MAX - 36`; the RIFF size wraps otherwise.
    pub fn mono_pcm8(sample_rate: u32, data_size: u32) -> Self {
        Self {
            riff: RiffHeader {
                id: RIFF_TAG,
                size: RIFF_OVERHEAD.wrapping_add(data_size),
                format: WAVE_TAG,
            },
            format: FormatHeader {
                id: FMT_TAG,
                size: PCM_FMT_CHUNK_SIZE,
                audio_format: PCM_FORMAT,
                channels: 1,
                sample_rate,
                byte_rate: sample_rate,
                block_align: 1,
                bits_per_sample: 8,
            },
            data: DataHeader {
                id: DATA_TAG,
                size: data_size,
            },
        }
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Returns the number of sample bytes described by the data chunk.
    pub fn data_size(&self) -> u32 {
        self.data.size
    }

    /// Rewrites the sample rate and every field derived from it.
    pub(crate) fn set_sample_rate(&mut self, sample_rate: u32) {
        self.format.sample_rate = sample_rate;
        self.format.byte_rate = sample_rate;
    }

    /// Rewrites the data size and the RIFF size derived from it.
    pub(crate) fn set_data_size(&mut self, data_size: u32) {
        self.data.size = data_size;
        self.riff.size = RIFF_OVERHEAD.wrapping_add(data_size);
    }

    /// Returns true when all four chunk tags are the canonical ones.
    ///
    /// Decoding never checks tags; callers that need format enforcement use this.
    pub fn has_standard_tags(&self) -> bool {
        self.riff.id == RIFF_TAG
            && self.riff.format == WAVE_TAG
            && self.format.id == FMT_TAG
            && self.data.id == DATA_TAG
    }

    /// Returns true when the header describes mono, 8-bit, uncompressed PCM.
    pub fn is_mono_pcm8(&self) -> bool {
        self.format.audio_format == PCM_FORMAT
            && self.format.channels == 1
            && self.format.bits_per_sample == 8
            && self.format.block_align == 1
    }
}
