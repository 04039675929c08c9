//! Reporting: the summary printout and the plot-rendering seam.
//!
//! The pipeline itself performs no I/O; everything observable happens here.
//! Rendering sits behind [`SpectrumRenderer`] so the pipeline can be
//! exercised headlessly with a capturing or no-op renderer.

pub mod plot;

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::analysis::stats::{NormalizedSpectrum, SummaryStats};

pub use plot::SvgPlot;

/// Errors raised while rendering or handing off the plot.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The plot backend failed to draw or write the chart.
    #[error("Failed to render plot to {path}: {message}")]
    Backend {
        /// Destination the chart was being written to.
        path: PathBuf,
        /// Backend error, stringified (plotters errors are not `'static`).
        message: String,
    },
    /// The system viewer could not be launched for the rendered file.
    #[error("Failed to open {path} in the system viewer: {source}")]
    Viewer {
        /// File that was handed to the viewer.
        path: PathBuf,
        /// Underlying launch error.
        source: std::io::Error,
    },
}

/// Capability to turn a normalized spectrum into something visible.
pub trait SpectrumRenderer {
    /// Render `spectrum`; the side effect is implementation-defined.
    fn render(&self, spectrum: &NormalizedSpectrum) -> Result<(), RenderError>;
}

/// Renderer that does nothing, for summary-only runs.
pub struct NullRenderer;

impl SpectrumRenderer for NullRenderer {
    fn render(&self, _spectrum: &NormalizedSpectrum) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Write the two summary lines to `out` with six decimal places.
pub fn write_summary(out: &mut impl Write, stats: &SummaryStats) -> std::io::Result<()> {
    writeln!(out, "Binary Density Factor (BD): {:.6}", stats.binary_density)?;
    writeln!(out, "Max FFT Peak: {:.6}", stats.max_normalized_peak)
}

/// Print the two summary lines to stdout.
pub fn print_summary(stats: &SummaryStats) {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    // stdout going away (closed pipe) is not worth aborting over.
    let _ = write_summary(&mut lock, stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test double that records every spectrum handed to it.
    pub struct CapturingRenderer {
        pub rendered: RefCell<Vec<NormalizedSpectrum>>,
    }

    impl CapturingRenderer {
        pub fn new() -> Self {
            Self {
                rendered: RefCell::new(Vec::new()),
            }
        }
    }

    impl SpectrumRenderer for CapturingRenderer {
        fn render(&self, spectrum: &NormalizedSpectrum) -> Result<(), RenderError> {
            self.rendered.borrow_mut().push(spectrum.clone());
            Ok(())
        }
    }

    fn spectrum() -> NormalizedSpectrum {
        NormalizedSpectrum {
            magnitudes: vec![1.0, 0.5, 0.25],
            frequencies: vec![0.0, 1.0 / 3.0, -1.0 / 3.0],
        }
    }

    #[test]
    fn summary_lines_use_six_decimal_places() {
        let stats = SummaryStats {
            binary_density: 0.35,
            max_normalized_peak: 1.0,
        };
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &stats).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Binary Density Factor (BD): 0.350000\nMax FFT Peak: 1.000000\n"
        );
    }

    #[test]
    fn degenerate_summary_prints_zeros() {
        let stats = SummaryStats {
            binary_density: 0.0,
            max_normalized_peak: 0.0,
        };
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &stats).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("BD): 0.000000"));
        assert!(text.contains("Peak: 0.000000"));
    }

    #[test]
    fn capturing_renderer_sees_exactly_one_call() {
        let renderer = CapturingRenderer::new();
        renderer.render(&spectrum()).unwrap();
        let rendered = renderer.rendered.borrow();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].magnitudes, vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn null_renderer_accepts_any_spectrum() {
        assert!(NullRenderer.render(&spectrum()).is_ok());
    }
}
