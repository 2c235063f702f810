//! monowav
//!
//! A small toolkit for mono, 8-bit, PCM audio stored in the canonical
//! 44-byte RIFF/WAVE container.
//!
//! # Overview
//!
//! A [`Wave`] is a decoded header triple plus its sample buffer. Callers
//! construct one, fill it with a tone or a modulated carrier, and persist it:
//!
//! - **Header codec** - bit-exact little-endian encode/decode of the header
//! - **Sample buffer** - owned or caller-borrowed sample storage
//! - **Generator** - sine and cosine tones
//! - **Modulation** - AM/FM from an analytic tone or another buffer, plus
//!   approximate AM demodulation
//!
//! Every synthesized sample maps a signed value `v` in `[-1, 1]` to the byte
//! `round(127 * v) + 127`, so silence is 127 and the full swing is 0..=254.
//!
//! # Example
//!
//! ```no_run
//! use monowav::{Wave, Waveform};
//!
//! let mut wave = Wave::new(8000, 1.0)?;
//! wave.generate(440.0, Waveform::Sine)?;
//! wave.save("a.wav")?;
//!
//! let reopened = Wave::open("a.wav")?;
//! assert_eq!(reopened.waveform()[0], 127);
//! # Ok::<(), monowav::WaveError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`header`] - RIFF/WAVE/fmt/data header types and codec
//! - [`buffer`] - Owned/borrowed sample storage
//! - [`container`] - The [`Wave`] container and file I/O
//! - [`sample`] - Signed value to byte mapping
//! - [`generator`] - Tone generation
//! - [`modulation`] - AM/FM modulation and AM demodulation
//! - [`playback`] - Playback sink seam
//! - [`plot`] - Decimated plot data and the gnuplot renderer

pub mod buffer;
pub mod container;
pub mod error;
pub mod generator;
pub mod header;
pub mod modulation;
pub mod playback;
pub mod plot;
pub mod sample;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use container::Wave;
pub use error::{WaveError, WaveResult};
pub use generator::Waveform;
pub use header::WavHeader;
pub use modulation::{ModulatingSignal, ModulationKind};
pub use playback::PlaybackSink;
pub use plot::{Gnuplot, PlotConfig, PlotRenderer};
