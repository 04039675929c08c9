//! Forward DFT of the binary sequence and its frequency-bin layout.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Raw magnitude spectrum paired with its DFT bin frequencies.
///
/// Unnormalized: the DC bin carries the plain sum of the input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Element-wise magnitudes of the N complex coefficients.
    pub magnitudes: Vec<f64>,
    /// Bin frequencies in the conventional DFT ordering.
    pub frequencies: Vec<f64>,
}

/// Compute the forward DFT of `bits` and take element-wise magnitudes.
///
/// rustfft plans an O(N log N) transform for any length, including the
/// non-power-of-two counts a digit budget usually is. No windowing or
/// detrending is applied; this is the raw rectangular-window transform of
/// the indicator sequence.
pub fn transform(bits: &[u8]) -> Spectrum {
    let mut buffer: Vec<Complex<f64>> = bits
        .iter()
        .map(|&bit| Complex::new(f64::from(bit), 0.0))
        .collect();
    if !buffer.is_empty() {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
    }
    Spectrum {
        magnitudes: buffer.iter().map(|c| c.norm()).collect(),
        frequencies: bin_frequencies(bits.len()),
    }
}

/// DFT bin frequencies for unit sample spacing:
/// `[0, 1, ..., ceil(n/2)-1, -floor(n/2), ..., -1] / n`.
pub fn bin_frequencies(len: usize) -> Vec<f64> {
    let n = len as f64;
    let positive_bins = len.div_ceil(2);
    (0..len)
        .map(|k| {
            if k < positive_bins {
                k as f64 / n
            } else {
                (k as f64 - n) / n
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn constant_ones_concentrate_in_the_dc_bin() {
        let spectrum = transform(&[1; 8]);
        assert_close(spectrum.magnitudes[0], 8.0);
        for bin in 1..8 {
            assert!(spectrum.magnitudes[bin].abs() < 1e-9);
        }
    }

    #[test]
    fn dc_bin_equals_the_sum_of_the_input() {
        let bits = [0u8, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1];
        let sum: u32 = bits.iter().map(|&b| u32::from(b)).sum();
        let spectrum = transform(&bits);
        assert_close(spectrum.magnitudes[0], f64::from(sum));
    }

    #[test]
    fn output_lengths_match_input_for_non_powers_of_two() {
        for len in [1usize, 5, 20, 100, 243] {
            let bits = vec![1u8; len];
            let spectrum = transform(&bits);
            assert_eq!(spectrum.magnitudes.len(), len);
            assert_eq!(spectrum.frequencies.len(), len);
        }
    }

    #[test]
    fn alternating_sequence_peaks_at_nyquist() {
        let bits: Vec<u8> = (0..8).map(|i| u8::from(i % 2 == 0)).collect();
        let spectrum = transform(&bits);
        assert_close(spectrum.magnitudes[0], 4.0);
        assert_close(spectrum.magnitudes[4], 4.0);
        for bin in [1usize, 2, 3, 5, 6, 7] {
            assert!(spectrum.magnitudes[bin].abs() < 1e-9);
        }
        assert_close(spectrum.frequencies[4], -0.5);
    }

    #[test]
    fn magnitudes_are_non_negative() {
        let bits = [1u8, 0, 0, 1, 0, 1, 1];
        let spectrum = transform(&bits);
        assert!(spectrum.magnitudes.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn frequencies_follow_the_even_length_convention() {
        let freqs = bin_frequencies(4);
        assert_eq!(freqs, vec![0.0, 0.25, -0.5, -0.25]);
    }

    #[test]
    fn frequencies_follow_the_odd_length_convention() {
        let freqs = bin_frequencies(5);
        assert_eq!(freqs, vec![0.0, 0.2, 0.4, -0.4, -0.2]);
    }

    #[test]
    fn single_bin_transform_is_the_identity() {
        let spectrum = transform(&[1]);
        assert_eq!(spectrum.frequencies, vec![0.0]);
        assert_close(spectrum.magnitudes[0], 1.0);
    }

    #[test]
    fn empty_input_yields_empty_spectrum() {
        let spectrum = transform(&[]);
        assert!(spectrum.magnitudes.is_empty());
        assert!(spectrum.frequencies.is_empty());
    }
}
