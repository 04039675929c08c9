//! Peak normalization and the two scalar summaries.

use serde::Serialize;

use super::spectrum::Spectrum;

/// Spectrum rescaled so the global peak maps to 1.0.
///
/// Degenerate all-zero spectra stay all zeros rather than propagating NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpectrum {
    /// Magnitudes in [0, 1].
    pub magnitudes: Vec<f64>,
    /// Bin frequencies, unchanged from the raw spectrum.
    pub frequencies: Vec<f64>,
}

/// The two scalars reported per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Fraction of 1s in the binary sequence.
    pub binary_density: f64,
    /// Peak of the normalized spectrum: 1.0 up to floating-point rounding,
    /// or 0.0 for the degenerate all-zero case.
    pub max_normalized_peak: f64,
}

/// Divide every magnitude by the global peak.
///
/// A zero peak means the binary sequence was all zeros; the normalized
/// spectrum is then defined as all zeros instead of dividing by zero.
pub fn normalize(spectrum: Spectrum) -> NormalizedSpectrum {
    let peak = max_magnitude(&spectrum.magnitudes);
    let magnitudes = if peak > 0.0 {
        spectrum
            .magnitudes
            .iter()
            .map(|&magnitude| magnitude / peak)
            .collect()
    } else {
        vec![0.0; spectrum.magnitudes.len()]
    };
    NormalizedSpectrum {
        magnitudes,
        frequencies: spectrum.frequencies,
    }
}

/// Fraction of 1s in `bits`, 0.0 for an empty slice.
pub fn binary_density(bits: &[u8]) -> f64 {
    if bits.is_empty() {
        return 0.0;
    }
    let ones = bits.iter().filter(|&&bit| bit == 1).count();
    ones as f64 / bits.len() as f64
}

/// Largest value in `values`, 0.0 for an empty slice.
pub fn max_magnitude(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0_f64, f64::max)
}
