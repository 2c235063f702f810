//! AM and FM modulation of a carrier tone.
//!
//! The carrier is always a unit cosine at the carrier frequency. The
//! modulating signal `s(t)` is either an analytic sine tone or the samples of
//! another buffer, normalized to `[-1, 1]`:
//!
//! - FM: `round(127 * cos(wc * t - m * s(t))) + 127`
//! - AM: `round(127 / (1 + m) * cos(wc * t) * (1 + m * s(t))) + 127`
//!
//! Dividing by `1 + m` keeps AM output within the carrier's amplitude.

mod demod;

pub use demod::demodulate;

use serde::{Deserialize, Serialize};

use crate::container::Wave;
use crate::error::{ensure_finite, WaveError, WaveResult};
use crate::generator::angular_step;
use crate::sample;

/// Modulation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationKind {
    /// Frequency (phase) modulation.
    Fm,
    /// Amplitude modulation.
    Am,
}

/// Source of the modulating signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModulatingSignal<'m> {
    /// Unit-amplitude sine tone at `frequency` Hz.
    Tone {
        /// Modulating frequency in Hz.
        frequency: f64,
    },
    /// Samples of another buffer, read at the same index as the carrier.
    Samples(&'m [u8]),
}

impl ModulatingSignal<'_> {
    /// Checks the signal against a carrier of `required` samples.
    fn validate(&self, required: usize) -> WaveResult<()> {
        match self {
            ModulatingSignal::Tone { frequency } => ensure_finite("modulating_frequency", *frequency),
            ModulatingSignal::Samples(samples) if samples.len() < required => {
                Err(WaveError::IndexOutOfRange {
                    buffer: "modulating",
                    required,
                    actual: samples.len(),
                })
            }
            ModulatingSignal::Samples(_) => Ok(()),
        }
    }
}

/// Overwrites the container's samples with a modulated carrier.
///
/// # Errors
/// [`WaveError::IndexOutOfRange`] if a sample-buffer signal is shorter than the
/// container; [`WaveError::InvalidParameter`] for non-finite inputs or an AM
/// index of -1. Validation happens before any sample is written.
pub fn modulate(
    wave: &mut Wave<'_>,
    carrier_freq: f64,
    signal: ModulatingSignal<'_>,
    modulation_index: f64,
    kind: ModulationKind,
) -> WaveResult<()> {
    ensure_finite("carrier_frequency", carrier_freq)?;
    ensure_finite("modulation_index", modulation_index)?;
    signal.validate(wave.data_size())?;
    if kind == ModulationKind::Am && modulation_index == -1.0 {
        return Err(WaveError::invalid_param(
            "modulation_index",
            "AM gain 1 / (1 + index) is undefined for index -1",
        ));
    }

    tracing::debug!(
        carrier_freq,
        modulation_index,
        ?kind,
        samples = wave.data_size(),
        "modulating carrier"
    );

    let sample_rate = wave.sample_rate();
    let carrier_step = angular_step(carrier_freq, sample_rate);
    let modulator_step = match signal {
        ModulatingSignal::Tone { frequency } => angular_step(frequency, sample_rate),
        ModulatingSignal::Samples(_) => 0.0,
    };
    let modulator = |t: usize| match signal {
        ModulatingSignal::Tone { .. } => (modulator_step * t as f64).sin(),
        ModulatingSignal::Samples(samples) => sample::to_signed(samples[t]),
    };

    let m = modulation_index;
    let am_gain = sample::AMPLITUDE / (1.0 + m);
    for (t, out) in wave.waveform_mut().iter_mut().enumerate() {
        let carrier_phase = carrier_step * t as f64;
        let s = modulator(t);
        *out = match kind {
            ModulationKind::Fm => sample::to_byte((carrier_phase - m * s).cos()),
            ModulationKind::Am => sample::quantize(am_gain * carrier_phase.cos() * (1.0 + m * s)),
        };
    }

    Ok(())
}

impl Wave<'_> {
    /// Overwrites the samples with a modulated carrier. See [`modulate`].
    pub fn modulate(
        &mut self,
        carrier_freq: f64,
        signal: ModulatingSignal<'_>,
        modulation_index: f64,
        kind: ModulationKind,
    ) -> WaveResult<()> {
        modulate(self, carrier_freq, signal, modulation_index, kind)
    }

    /// Recovers an estimate of the modulating signal. See [`demodulate`].
    pub fn demodulate(
        &mut self,
        carrier_freq: f64,
        carrier: &[u8],
        modulation_index: f64,
        kind: ModulationKind,
    ) -> WaveResult<()> {
        demodulate(self, carrier_freq, carrier, modulation_index, kind)
    }
}
