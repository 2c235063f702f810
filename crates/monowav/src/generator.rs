//! Periodic tone generation.
//!
//! Tones are computed directly from the sample index: sample `t` of a tone
//! at `f` Hz is `osc(2 * pi * f / sample_rate * t)`. There is no separate time
//! axis and no phase accumulator, so every sample is independent of the
//! previous one.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::container::Wave;
use crate::error::{ensure_finite, WaveError, WaveResult};
use crate::sample;

/// 2 * pi.
pub const TWO_PI: f64 = 2.0 * PI;

/// Periodic waveform kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Cosine wave.
    Cosine,
    /// Square wave. Reserved; generation is not implemented.
    Square,
}

impl Waveform {
    /// Maps a numeric waveform code (1 sine, 2 cosine, 3 square).
    ///
    /// Unknown codes return `None`; callers treat them as a no-op.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Waveform::Sine),
            2 => Some(Waveform::Cosine),
            3 => Some(Waveform::Square),
            _ => None,
        }
    }

    /// Returns the numeric waveform code.
    pub fn code(&self) -> u8 {
        match self {
            Waveform::Sine => 1,
            Waveform::Cosine => 2,
            Waveform::Square => 3,
        }
    }
}

/// Radians advanced per sample for a tone at `frequency` Hz.
#[inline]
pub fn angular_step(frequency: f64, sample_rate: u32) -> f64 {
    TWO_PI * frequency / sample_rate as f64
}

/// Overwrites the container's samples with a unit-amplitude tone.
///
/// For each sample index `t`, sine writes `round(127 * sin(w * t)) + 127` and
/// cosine writes `round(127 * cos(w * t)) + 127`, with `w = 2 * pi * f / rate`.
///
/// # Errors
/// [`WaveError::UnsupportedOperation`] for [`Waveform::Square`];
/// [`WaveError::InvalidParameter`] for a non-finite frequency. The buffer is
/// untouched on error.
pub fn generate(wave: &mut Wave<'_>, frequency: f64, waveform: Waveform) -> WaveResult<()> {
    ensure_finite("frequency", frequency)?;

    let oscillator: fn(f64) -> f64 = match waveform {
        Waveform::Sine => f64::sin,
        Waveform::Cosine => f64::cos,
        Waveform::Square => return Err(WaveError::unsupported("square wave generation")),
    };

    tracing::debug!(
        frequency,
        ?waveform,
        samples = wave.data_size(),
        "generating tone"
    );

    let step = angular_step(frequency, wave.sample_rate());
    for (t, out) in wave.waveform_mut().iter_mut().enumerate() {
        *out = sample::to_byte(oscillator(step * t as f64));
    }

    Ok(())
}

impl Wave<'_> {
    /// Overwrites the samples with a tone. See [`generate`].
    pub fn generate(&mut self, frequency: f64, waveform: Waveform) -> WaveResult<()> {
        generate(self, frequency, waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_starts_at_midpoint() {
        let mut wave = Wave::new(8000, 1.0).unwrap();
        wave.generate(440.0, Waveform::Sine).unwrap();
        assert_eq!(wave.waveform()[0], 127);
    }

    #[test]
    fn test_cosine_starts_at_peak() {
        let mut wave = Wave::new(8000, 0.1).unwrap();
        wave.generate(440.0, Waveform::Cosine).unwrap();
        assert_eq!(wave.waveform()[0], 254);
    }

    #[test]
    fn test_sine_quarter_period_values() {
        // 2000 Hz at 8000 Hz: exactly 4 samples per period.
        let mut wave = Wave::new(8000, 0.01).unwrap();
        wave.generate(2000.0, Waveform::Sine).unwrap();
        assert_eq!(&wave.waveform()[..8], &[127, 254, 127, 0, 127, 254, 127, 0]);
    }

    #[test]
    fn test_sine_is_periodic() {
        // 100 Hz at 8000 Hz: period of 80 samples.
        let mut wave = Wave::new(8000, 1.0).unwrap();
        wave.generate(100.0, Waveform::Sine).unwrap();

        let samples = wave.waveform();
        for t in 0..(samples.len() - 80) {
            let diff = (samples[t] as i16 - samples[t + 80] as i16).abs();
            assert!(diff <= 1, "sample {} differs from next period by {}", t, diff);
        }
    }

    #[test]
    fn test_generate_stays_in_range() {
        let mut wave = Wave::new(44100, 0.05).unwrap();
        wave.generate(1234.5, Waveform::Cosine).unwrap();
        assert!(wave.waveform().iter().all(|&b| b <= 254));
    }

    #[test]
    fn test_zero_frequency_sine_is_silence() {
        let mut wave = Wave::new(8000, 0.01).unwrap();
        wave.waveform_mut().fill(3);
        wave.generate(0.0, Waveform::Sine).unwrap();
        assert!(wave.waveform().iter().all(|&b| b == 127));
    }

    #[test]
    fn test_square_is_unsupported_and_preserves_buffer() {
        let mut wave = Wave::new(8000, 0.01).unwrap();
        wave.waveform_mut().fill(42);

        let err = wave.generate(440.0, Waveform::Square).unwrap_err();
        assert!(matches!(err, WaveError::UnsupportedOperation { .. }));
        assert!(wave.waveform().iter().all(|&b| b == 42));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let mut wave = Wave::new(8000, 0.01).unwrap();
        assert!(wave.generate(f64::NAN, Waveform::Sine).is_err());
    }

    #[test]
    fn test_waveform_codes() {
        assert_eq!(Waveform::from_code(1), Some(Waveform::Sine));
        assert_eq!(Waveform::from_code(2), Some(Waveform::Cosine));
        assert_eq!(Waveform::from_code(3), Some(Waveform::Square));
        assert_eq!(Waveform::from_code(0), None);
        assert_eq!(Waveform::from_code(9), None);
        assert_eq!(Waveform::Cosine.code(), 2);
    }

    #[test]
    fn test_waveform_serde_names() {
        let json = serde_json::to_string(&Waveform::Cosine).unwrap();
        assert_eq!(json, "\"cosine\"");
        let parsed: Waveform = serde_json::from_str("\"sine\"").unwrap();
        assert_eq!(parsed, Waveform::Sine);
    }
}
