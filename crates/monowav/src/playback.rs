//! Hand-off point to an audio playback device.
//!
//! Playback itself lives outside this crate. A sink receives the complete
//! in-memory file image (44-byte header followed by the samples), exactly as
//! it would be persisted by [`Wave::save`].

use crate::container::Wave;
use crate::error::WaveResult;

/// Consumer of assembled WAV file images.
pub trait PlaybackSink {
    /// Plays a complete RIFF/WAVE byte image.
    fn play(&mut self, wav_bytes: &[u8]) -> WaveResult<()>;
}

impl Wave<'_> {
    /// Assembles the file image and hands it to `sink`.
    pub fn play<S: PlaybackSink + ?Sized>(&self, sink: &mut S) -> WaveResult<()> {
        let bytes = self.to_bytes();
        tracing::debug!(bytes = bytes.len(), "handing wav image to playback sink");
        sink.play(&bytes)
    }
}
