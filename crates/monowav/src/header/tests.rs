//! Tests for the header codec.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::WaveError;

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_mono_pcm8_fields() {
    let header = WavHeader::mono_pcm8(8000, 8000);

    assert_eq!(header.riff.id, RIFF_TAG);
    assert_eq!(header.riff.size, 8036);
    assert_eq!(header.riff.format, WAVE_TAG);

    assert_eq!(header.format.size, 16);
    assert_eq!(header.format.audio_format, 1);
    assert_eq!(header.format.channels, 1);
    assert_eq!(header.format.sample_rate, 8000);
    assert_eq!(header.format.byte_rate, 8000);
    assert_eq!(header.format.block_align, 1);
    assert_eq!(header.format.bits_per_sample, 8);

    assert_eq!(header.data.id, DATA_TAG);
    assert_eq!(header.data.size, 8000);

    assert!(header.has_standard_tags());
    assert!(header.is_mono_pcm8());
}

#[test]
fn test_setters_keep_derived_fields() {
    let mut header = WavHeader::mono_pcm8(8000, 8000);
    header.set_sample_rate(22050);
    header.set_data_size(11025);

    assert_eq!(header.format.byte_rate, 22050);
    assert_eq!(header.riff.size, 36 + 11025);
}

// =========================================================================
// Encoding layout
// =========================================================================

#[test]
fn test_encode_layout() {
    let bytes = encode(&WavHeader::mono_pcm8(44100, 100));

    assert_eq!(bytes.len(), HEADER_LEN);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[4..8], &136u32.to_le_bytes());
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(&bytes[16..20], &16u32.to_le_bytes());
    assert_eq!(&bytes[20..22], &1u16.to_le_bytes());
    assert_eq!(&bytes[22..24], &1u16.to_le_bytes());
    assert_eq!(&bytes[24..28], &44100u32.to_le_bytes());
    assert_eq!(&bytes[28..32], &44100u32.to_le_bytes());
    assert_eq!(&bytes[32..34], &1u16.to_le_bytes());
    assert_eq!(&bytes[34..36], &8u16.to_le_bytes());
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(&bytes[40..44], &100u32.to_le_bytes());
}

#[test]
fn test_encode_is_little_endian() {
    let bytes = encode(&WavHeader::mono_pcm8(0x0102_0304, 0));
    assert_eq!(&bytes[24..28], &[0x04, 0x03, 0x02, 0x01]);
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn test_decode_encoded_header() {
    let header = WavHeader::mono_pcm8(11025, 5512);
    let decoded = decode(&encode(&header)).expect("decode should succeed");
    assert_eq!(decoded, header);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let header = WavHeader::mono_pcm8(8000, 3);
    let mut bytes = encode(&header).to_vec();
    bytes.extend_from_slice(&[1, 2, 3]);

    assert_eq!(decode(&bytes).unwrap(), header);
}

#[test]
fn test_decode_short_input() {
    let bytes = [0u8; 43];
    match decode(&bytes) {
        Err(WaveError::MalformedHeader { expected, found }) => {
            assert_eq!(expected, 44);
            assert_eq!(found, 43);
        }
        other => panic!("expected MalformedHeader, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_input() {
    assert!(matches!(
        decode(&[]),
        Err(WaveError::MalformedHeader { found: 0, .. })
    ));
}

#[test]
fn test_decode_does_not_validate_tags() {
    let mut bytes = encode(&WavHeader::mono_pcm8(8000, 10));
    bytes[0..4].copy_from_slice(b"RIFX");
    bytes[36..40].copy_from_slice(b"junk");

    let header = decode(&bytes).expect("tags are not validated");
    assert_eq!(&header.riff.id, b"RIFX");
    assert_eq!(&header.data.id, b"junk");
    assert!(!header.has_standard_tags());
    assert_eq!(header.data.size, 10);
}

#[test]
fn test_decode_foreign_format_fields() {
    // 16-bit stereo header: decoded verbatim, flagged as non-mono-8-bit.
    let mut bytes = encode(&WavHeader::mono_pcm8(44100, 400));
    bytes[22..24].copy_from_slice(&2u16.to_le_bytes());
    bytes[34..36].copy_from_slice(&16u16.to_le_bytes());

    let header = decode(&bytes).unwrap();
    assert_eq!(header.format.channels, 2);
    assert_eq!(header.format.bits_per_sample, 16);
    assert!(!header.is_mono_pcm8());
}
