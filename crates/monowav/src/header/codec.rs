//! Bit-exact encoding and decoding of the 44-byte header.

use byteorder::{ByteOrder, LittleEndian};

use super::{DataHeader, FormatHeader, FourCc, RiffHeader, WavHeader, HEADER_LEN};
use crate::error::{WaveError, WaveResult};

// Field offsets within the encoded header.
const RIFF_ID: usize = 0;
const RIFF_SIZE: usize = 4;
const RIFF_FORMAT: usize = 8;
const FMT_ID: usize = 12;
const FMT_SIZE: usize = 16;
const FMT_AUDIO_FORMAT: usize = 20;
const FMT_CHANNELS: usize = 22;
const FMT_SAMPLE_RATE: usize = 24;
const FMT_BYTE_RATE: usize = 28;
const FMT_BLOCK_ALIGN: usize = 32;
const FMT_BITS_PER_SAMPLE: usize = 34;
const DATA_ID: usize = 36;
const DATA_SIZE: usize = 40;

fn read_tag(bytes: &[u8], offset: usize) -> FourCc {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

/// Decodes the header triple from the first 44 bytes of `bytes`.
///
/// Extra trailing bytes are ignored. Chunk tags are not validated.
///
/// # Errors
/// [`WaveError::MalformedHeader`] if fewer than 44 bytes are supplied.
pub fn decode(bytes: &[u8]) -> WaveResult<WavHeader> {
    if bytes.len() < HEADER_LEN {
        return Err(WaveError::MalformedHeader {
            expected: HEADER_LEN,
            found: bytes.len(),
        });
    }

    Ok(WavHeader {
        riff: RiffHeader {
            id: read_tag(bytes, RIFF_ID),
            size: LittleEndian::read_u32(&bytes[RIFF_SIZE..]),
            format: read_tag(bytes, RIFF_FORMAT),
        },
        format: FormatHeader {
            id: read_tag(bytes, FMT_ID),
            size: LittleEndian::read_u32(&bytes[FMT_SIZE..]),
            audio_format: LittleEndian::read_u16(&bytes[FMT_AUDIO_FORMAT..]),
            channels: LittleEndian::read_u16(&bytes[FMT_CHANNELS..]),
            sample_rate: LittleEndian::read_u32(&bytes[FMT_SAMPLE_RATE..]),
            byte_rate: LittleEndian::read_u32(&bytes[FMT_BYTE_RATE..]),
            block_align: LittleEndian::read_u16(&bytes[FMT_BLOCK_ALIGN..]),
            bits_per_sample: LittleEndian::read_u16(&bytes[FMT_BITS_PER_SAMPLE..]),
        },
        data: DataHeader {
            id: read_tag(bytes, DATA_ID),
            size: LittleEndian::read_u32(&bytes[DATA_SIZE..]),
        },
    })
}

/// Encodes the header triple into its 44-byte little-endian form.
pub fn encode(header: &WavHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];

    // RIFF chunk descriptor
    out[RIFF_ID..RIFF_ID + 4].copy_from_slice(&header.riff.id);
    LittleEndian::write_u32(&mut out[RIFF_SIZE..], header.riff.size);
    out[RIFF_FORMAT..RIFF_FORMAT + 4].copy_from_slice(&header.riff.format);

    // fmt chunk
    let fmt = &header.format;
    out[FMT_ID..FMT_ID + 4].copy_from_slice(&fmt.id);
    LittleEndian::write_u32(&mut out[FMT_SIZE..], fmt.size);
    LittleEndian::write_u16(&mut out[FMT_AUDIO_FORMAT..], fmt.audio_format);
    LittleEndian::write_u16(&mut out[FMT_CHANNELS..], fmt.channels);
    LittleEndian::write_u32(&mut out[FMT_SAMPLE_RATE..], fmt.sample_rate);
    LittleEndian::write_u32(&mut out[FMT_BYTE_RATE..], fmt.byte_rate);
    LittleEndian::write_u16(&mut out[FMT_BLOCK_ALIGN..], fmt.block_align);
    LittleEndian::write_u16(&mut out[FMT_BITS_PER_SAMPLE..], fmt.bits_per_sample);

    // data chunk
    out[DATA_ID..DATA_ID + 4].copy_from_slice(&header.data.id);
    LittleEndian::write_u32(&mut out[DATA_SIZE..], header.data.size);

    out
}
