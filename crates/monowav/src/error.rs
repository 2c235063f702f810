//! Error types for the WAV codec and synthesis engine.

use thiserror::Error;

/// Result type for codec and synthesis operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors that can occur while decoding, persisting, or synthesizing audio.
#[derive(Debug, Error)]
pub enum WaveError {
    /// Fewer than 44 bytes were supplied to the header decoder.
    #[error("malformed header: expected {expected} bytes, found {found}")]
    MalformedHeader {
        /// Number of bytes the header needs.
        expected: usize,
        /// Number of bytes actually available.
        found: usize,
    },

    /// I/O error while opening, reading, or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A supplied buffer is shorter than the container's sample count.
    #[error("{buffer} buffer too short: need {required} samples, found {actual}")]
    IndexOutOfRange {
        /// Which buffer was short ("modulating", "carrier", ...).
        buffer: &'static str,
        /// Number of samples required.
        required: usize,
        /// Number of samples supplied.
        actual: usize,
    },

    /// The requested waveform or demodulation kind has no implementation.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation {
        /// Description of the rejected operation.
        operation: &'static str,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl WaveError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }

    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            WaveError::MalformedHeader { .. } => "WAVE_001",
            WaveError::Io(_) => "WAVE_002",
            WaveError::IndexOutOfRange { .. } => "WAVE_003",
            WaveError::UnsupportedOperation { .. } => "WAVE_004",
            WaveError::InvalidSampleRate { .. } => "WAVE_005",
            WaveError::InvalidDuration { .. } => "WAVE_006",
            WaveError::InvalidParameter { .. } => "WAVE_007",
        }
    }

    /// Error category used to group related failures.
    pub fn category(&self) -> &'static str {
        match self {
            WaveError::MalformedHeader { .. } | WaveError::Io(_) => "codec",
            _ => "synthesis",
        }
    }
}

/// Rejects NaN and infinite values for a named parameter.
pub(crate) fn ensure_finite(name: &str, value: f64) -> WaveResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}
