//! Reading and writing containers as RIFF/WAVE byte streams.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::Wave;
use crate::buffer::SampleBuffer;
use crate::error::WaveResult;
use crate::header::{self, HEADER_LEN};

impl Wave<'static> {
    /// Opens a WAV file: 44 header bytes followed by exactly the number of
    /// sample bytes the data chunk declares. Trailing bytes are ignored.
    ///
    /// # Errors
    /// [`WaveError::Io`](crate::WaveError::Io) if the file cannot be read or is
    /// shorter than `44 + data size` bytes.
    pub fn open(path: impl AsRef<Path>) -> WaveResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let wave = Self::read_from(&mut BufReader::new(file))?;

        tracing::debug!(
            path = %path.display(),
            sample_rate = wave.sample_rate(),
            data_size = wave.data_size(),
            "opened wav file"
        );
        Ok(wave)
    }

    /// Reads a container from a byte stream.
    pub fn read_from<R: Read>(reader: &mut R) -> WaveResult<Self> {
        let mut header_bytes = [0u8; HEADER_LEN];
        reader.read_exact(&mut header_bytes)?;
        let header = header::decode(&header_bytes)?;

        if !header.has_standard_tags() {
            tracing::warn!(
                riff = %String::from_utf8_lossy(&header.riff.id),
                data = %String::from_utf8_lossy(&header.data.id),
                "wav header carries non-standard chunk tags"
            );
        }

        // Grow with the input rather than trusting the declared size up front.
        let expected = header.data.size as usize;
        let mut samples = Vec::new();
        reader
            .by_ref()
            .take(expected as u64)
            .read_to_end(&mut samples)?;
        if samples.len() < expected {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "data chunk declares {} samples, only {} present",
                    expected,
                    samples.len()
                ),
            )
            .into());
        }

        Wave::from_parts(header, SampleBuffer::Owned(samples))
    }
}

impl Wave<'_> {
    /// Saves the container: header first, then the full sample buffer.
    /// An existing file at `path` is overwritten.
    pub fn save(&self, path: impl AsRef<Path>) -> WaveResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        tracing::debug!(
            path = %path.display(),
            bytes = HEADER_LEN + self.data_size(),
            "saved wav file"
        );
        Ok(())
    }

    /// Writes the encoded header followed by the samples.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> WaveResult<()> {
        writer.write_all(&header::encode(&self.header))?;
        writer.write_all(&self.samples)?;
        Ok(())
    }

    /// Assembles the complete file image (header plus samples) in memory.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.samples.len());
        bytes.extend_from_slice(&header::encode(&self.header));
        bytes.extend_from_slice(&self.samples);
        bytes
    }
}
