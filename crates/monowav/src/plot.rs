//! Waveform plotting hand-off.
//!
//! The crate only selects and writes the samples to plot: every `stride`-th
//! sample from the start of the buffer, up to a window of `window_seconds`,
//! written as `"<index> <value>"` lines to a side file. Rendering that file is
//! delegated to a [`PlotRenderer`]; [`Gnuplot`] runs the external `gnuplot`
//! program on it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::container::Wave;
use crate::error::{WaveError, WaveResult};

/// Default side file name for plot data.
pub const DEFAULT_DATA_FILE: &str = "graph.dat";

/// One plotted sample: buffer index and raw byte value.
pub type PlotPoint = (usize, u8);

/// Number of samples covered by a window of `window_seconds`, capped at the
/// buffer length.
pub fn window_len(wave: &Wave<'_>, window_seconds: f64) -> WaveResult<usize> {
    if !window_seconds.is_finite() || window_seconds < 0.0 {
        return Err(WaveError::InvalidDuration {
            duration: window_seconds,
        });
    }
    let samples = (window_seconds * wave.sample_rate() as f64).trunc() as usize;
    Ok(samples.min(wave.data_size()))
}

/// Selects every `stride`-th sample within the first `window_seconds`.
///
/// # Errors
/// [`WaveError::InvalidParameter`] for a zero stride;
/// [`WaveError::InvalidDuration`] for a negative or non-finite window.
pub fn decimate(wave: &Wave<'_>, window_seconds: f64, stride: usize) -> WaveResult<Vec<PlotPoint>> {
    if stride == 0 {
        return Err(WaveError::invalid_param("stride", "must be at least 1"));
    }
    let len = window_len(wave, window_seconds)?;

    Ok(wave.waveform()[..len]
        .iter()
        .copied()
        .enumerate()
        .step_by(stride)
        .collect())
}

/// Writes points as `"<index> <value>\n"` lines.
pub fn write_series<W: Write>(writer: &mut W, points: &[PlotPoint]) -> io::Result<()> {
    for (index, value) in points {
        writeln!(writer, "{} {}", index, value)?;
    }
    Ok(())
}

/// Writes points to a side file, overwriting it.
pub fn write_series_file(path: &Path, points: &[PlotPoint]) -> WaveResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_series(&mut writer, points)?;
    writer.flush()?;
    Ok(())
}

/// Renders a plot data file produced by [`write_series_file`].
pub trait PlotRenderer {
    /// Renders `data_path`; `x_max` is the window length in samples.
    fn render(&self, data_path: &Path, x_max: usize) -> WaveResult<()>;
}

/// Configuration for the gnuplot renderer.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Path to the gnuplot executable.
    pub program: PathBuf,
    /// Terminal width in pixels.
    pub width: u32,
    /// Terminal height in pixels.
    pub height: u32,
    /// Keep the plot window open after gnuplot exits.
    pub persist: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("gnuplot"),
            width: 2000,
            height: 1500,
            persist: true,
        }
    }
}

impl PlotConfig {
    /// Sets the gnuplot executable path.
    pub fn program(mut self, path: impl Into<PathBuf>) -> Self {
        self.program = path.into();
        self
    }

    /// Sets the terminal size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets whether the window persists after gnuplot exits.
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}

/// Renders plots by running the external gnuplot program.
#[derive(Debug, Clone, Default)]
pub struct Gnuplot {
    config: PlotConfig,
}

impl Gnuplot {
    /// Creates a renderer with the given configuration.
    pub fn with_config(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Builds the gnuplot script for a data file.
    pub fn script(&self, data_path: &Path, x_max: usize) -> String {
        format!(
            "set terminal qt size {},{}; set yr [0:255]; set xr [0:{}]; plot '{}' with lines;",
            self.config.width,
            self.config.height,
            x_max,
            data_path.display()
        )
    }
}

impl PlotRenderer for Gnuplot {
    fn render(&self, data_path: &Path, x_max: usize) -> WaveResult<()> {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg("-e").arg(self.script(data_path, x_max));
        if self.config.persist {
            cmd.arg("-persist");
        }

        tracing::debug!(program = %self.config.program.display(), "spawning plot renderer");
        let status = cmd.status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                self.config.program.display(),
                status
            ))
            .into());
        }
        Ok(())
    }
}

impl Wave<'_> {
    /// Writes the decimated window to `data_path` and renders it.
    pub fn plot<R: PlotRenderer + ?Sized>(
        &self,
        window_seconds: f64,
        stride: usize,
        data_path: &Path,
        renderer: &R,
    ) -> WaveResult<()> {
        let points = decimate(self, window_seconds, stride)?;
        write_series_file(data_path, &points)?;
        renderer.render(data_path, window_len(self, window_seconds)?)
    }
}
