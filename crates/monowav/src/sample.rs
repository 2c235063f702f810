//! Mapping between signed analog values and unsigned 8-bit samples.
//!
//! A signed value `v` in `[-1, 1]` is stored as `round(127 * v) + 127`, so the
//! midpoint (silence) is 127 and the usable range is `[0, 254]`. Byte 255 reads
//! back as slightly above 1.0.

/// Byte value of a zero-amplitude sample.
pub const MIDPOINT: u8 = 127;

/// Scale between a unit-amplitude value and its byte offset from the midpoint.
pub const AMPLITUDE: f64 = 127.0;

/// Quantizes a signed value to a sample byte.
///
/// Values that land outside `[0, 255]` after scaling are clamped; NaN maps to 0.
#[inline]
pub fn to_byte(value: f64) -> u8 {
    quantize(AMPLITUDE * value)
}

/// Quantizes a value already scaled to the `[-127, 127]` range.
#[inline]
pub fn quantize(scaled: f64) -> u8 {
    (scaled.round() + AMPLITUDE).clamp(0.0, 255.0) as u8
}

/// Normalizes a sample byte to a signed value, `(byte - 127) / 127`.
#[inline]
pub fn to_signed(byte: u8) -> f64 {
    (byte as f64 - AMPLITUDE) / AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_byte_reference_points() {
        assert_eq!(to_byte(0.0), MIDPOINT);
        assert_eq!(to_byte(1.0), 254);
        assert_eq!(to_byte(-1.0), 0);
        assert_eq!(to_byte(0.5), 191); // round(63.5) = 64
    }

    #[test]
    fn test_to_byte_clamps() {
        assert_eq!(to_byte(2.0), 255);
        assert_eq!(to_byte(-2.0), 0);
        assert_eq!(to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_to_signed() {
        assert_eq!(to_signed(127), 0.0);
        assert_eq!(to_signed(254), 1.0);
        assert_eq!(to_signed(0), -1.0);
        assert!(to_signed(255) > 1.0);
    }

    #[test]
    fn test_byte_survives_normalization() {
        for byte in 0..=255u8 {
            assert_eq!(to_byte(to_signed(byte)), byte);
        }
    }
}
