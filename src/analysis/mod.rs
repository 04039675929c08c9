//! The π prime-digit analysis pipeline.
//!
//! Data flows strictly forward: digit generation → binary encoding →
//! spectral transform → normalization → summary statistics. Every product
//! is computed once per run and never mutated afterwards.

pub mod digits;
pub mod encode;
pub mod spectrum;
pub mod stats;

use std::time::Instant;

use crate::config::AnalysisConfig;
use digits::DigitsError;
use stats::{NormalizedSpectrum, SummaryStats};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// The analyzed π digits, values in [0, 9].
    pub digits: Vec<u8>,
    /// Binary indicator sequence, values in {0, 1}.
    pub bits: Vec<u8>,
    /// Peak-normalized magnitude spectrum with bin frequencies.
    pub spectrum: NormalizedSpectrum,
    /// Binary density and max normalized peak.
    pub stats: SummaryStats,
}

/// Run the full pipeline for `config`.
///
/// Deterministic: identical configuration yields an identical report. The
/// caller validates the configuration first; the only failure left here is
/// the digit source refusing the requested precision.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport, DigitsError> {
    let started = Instant::now();
    let digit_seq = digits::pi_fractional_digits(config.digit_count)?;
    tracing::info!(
        "Generated {} π digits in {:.2?}",
        digit_seq.len(),
        started.elapsed()
    );

    let bits = encode::binary_indicator(&digit_seq, config.prime_digits);

    let transform_started = Instant::now();
    let raw = spectrum::transform(&bits);
    tracing::info!(
        "Transformed {} bins in {:.2?}",
        raw.magnitudes.len(),
        transform_started.elapsed()
    );

    let binary_density = stats::binary_density(&bits);
    let normalized = stats::normalize(raw);
    let summary = SummaryStats {
        binary_density,
        max_normalized_peak: stats::max_magnitude(&normalized.magnitudes),
    };
    Ok(AnalysisReport {
        digits: digit_seq,
        bits,
        spectrum: normalized,
        stats: summary,
    })
}
