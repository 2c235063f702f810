//! Approximate AM demodulation.

use super::ModulationKind;
use crate::container::Wave;
use crate::error::{ensure_finite, WaveError, WaveResult};
use crate::generator::angular_step;
use crate::sample;

/// Carrier magnitude below which the inverse is too ill-conditioned to trust.
///
/// Near a zero crossing the 8-bit quantization error is amplified by
/// `1 / cos`, so those samples repeat the last reliable estimate instead.
pub const MIN_CARRIER_MAGNITUDE: f64 = 0.1;

/// Recovers an estimate of the modulating signal from an AM carrier.
///
/// For each sample index `t`, the carrier byte is normalized to
/// `x = (byte - 127) / 127` and the AM formula is inverted:
/// `s = (x * (1 + m) / cos(wc * t) - 1) / m`. The estimate is written to the
/// container with the standard byte mapping, so a perfect recovery reproduces
/// the modulating bytes it was built from.
///
/// # Errors
/// [`WaveError::UnsupportedOperation`] for FM; [`WaveError::IndexOutOfRange`]
/// if `carrier` is shorter than the container; [`WaveError::InvalidParameter`]
/// for a zero or non-finite index. The buffer is untouched on error.
pub fn demodulate(
    wave: &mut Wave<'_>,
    carrier_freq: f64,
    carrier: &[u8],
    modulation_index: f64,
    kind: ModulationKind,
) -> WaveResult<()> {
    if kind == ModulationKind::Fm {
        return Err(WaveError::unsupported("FM demodulation"));
    }
    ensure_finite("carrier_frequency", carrier_freq)?;
    ensure_finite("modulation_index", modulation_index)?;
    if modulation_index == 0.0 {
        return Err(WaveError::invalid_param(
            "modulation_index",
            "an unmodulated carrier carries no signal to recover",
        ));
    }

    let required = wave.data_size();
    if carrier.len() < required {
        return Err(WaveError::IndexOutOfRange {
            buffer: "carrier",
            required,
            actual: carrier.len(),
        });
    }

    let m = modulation_index;
    let step = angular_step(carrier_freq, wave.sample_rate());
    let mut estimate = 0.0;
    let mut held = 0usize;

    for (t, out) in wave.waveform_mut().iter_mut().enumerate() {
        let cos = (step * t as f64).cos();
        if cos.abs() >= MIN_CARRIER_MAGNITUDE {
            let x = sample::to_signed(carrier[t]);
            estimate = (x * (1.0 + m) / cos - 1.0) / m;
        } else {
            held += 1;
        }
        *out = sample::to_byte(estimate);
    }

    if held > 0 {
        tracing::debug!(
            held,
            samples = required,
            "demodulation held samples near carrier zero crossings"
        );
    }

    Ok(())
}
