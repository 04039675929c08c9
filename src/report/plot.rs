//! SVG line plot of the normalized spectrum.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{RenderError, SpectrumRenderer};
use crate::analysis::stats::NormalizedSpectrum;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const TITLE: &str = "FFT Spectrum of Prime Digits in π (Base 10)";

/// Vertex budget for the drawn series. Spectra wider than this are decimated
/// with max-preserving buckets so the peak value stays exact and the SVG
/// stays bounded even at N around 10^6.
const MAX_POINTS: usize = 4_096;

/// Default renderer: a `plotters` SVG chart written to a configurable path,
/// optionally handed to the system viewer afterwards.
pub struct SvgPlot {
    path: PathBuf,
    open_after: bool,
}

impl SvgPlot {
    /// Renderer writing to `path`; `open_after` launches the system viewer
    /// once the file exists.
    pub fn new(path: impl Into<PathBuf>, open_after: bool) -> Self {
        Self {
            path: path.into(),
            open_after,
        }
    }

    fn backend_error(&self, message: impl ToString) -> RenderError {
        RenderError::Backend {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    fn draw(&self, points: &[(f64, f64)]) -> Result<(), RenderError> {
        let (x_min, x_max) = axis_range(points.iter().map(|&(x, _)| x));
        let root = SVGBackend::new(&self.path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|err| self.backend_error(err))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(x_min..x_max, 0.0f64..1.05f64)
            .map_err(|err| self.backend_error(err))?;

        chart
            .configure_mesh()
            .x_desc("Frequency")
            .y_desc("Normalized Magnitude")
            .draw()
            .map_err(|err| self.backend_error(err))?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
            .map_err(|err| self.backend_error(err))?;

        root.present().map_err(|err| self.backend_error(err))?;
        Ok(())
    }

    /// Where the chart is written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpectrumRenderer for SvgPlot {
    fn render(&self, spectrum: &NormalizedSpectrum) -> Result<(), RenderError> {
        let points = decimate(spectrum, MAX_POINTS);
        self.draw(&points)?;
        tracing::info!("Wrote spectrum plot to {}", self.path.display());
        if self.open_after {
            open::that(&self.path).map_err(|source| RenderError::Viewer {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Reduce the spectrum to at most `budget` (frequency, magnitude) vertices.
///
/// Bins are grouped into contiguous buckets and each bucket contributes its
/// largest magnitude, so the global peak survives decimation exactly. Bin
/// order is preserved, matching the conventional DFT frequency layout.
fn decimate(spectrum: &NormalizedSpectrum, budget: usize) -> Vec<(f64, f64)> {
    let len = spectrum.magnitudes.len();
    if len <= budget {
        return spectrum
            .frequencies
            .iter()
            .copied()
            .zip(spectrum.magnitudes.iter().copied())
            .collect();
    }
    let mut points = Vec::with_capacity(budget);
    for bucket in 0..budget {
        let start = bucket * len / budget;
        let end = (((bucket + 1) * len) / budget).max(start + 1).min(len);
        let mut best = start;
        for idx in start..end {
            if spectrum.magnitudes[idx] > spectrum.magnitudes[best] {
                best = idx;
            }
        }
        points.push((spectrum.frequencies[best], spectrum.magnitudes[best]));
    }
    points
}

/// Padded x range covering every plotted frequency.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        // A single bin still needs a non-empty axis.
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.02;
    (min - pad, max + pad)
}
