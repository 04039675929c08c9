//! Run configuration: digit count, the prime-digit set, and plot options.
//!
//! Configuration is resolved once at startup (CLI flags over an optional
//! TOML file over built-in defaults) and handed to the pipeline as an
//! immutable value, so the pipeline itself stays pure and testable.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Number of π digits analyzed when no override is given.
pub const DEFAULT_DIGIT_COUNT: usize = 1_000_000;
/// Default SVG output path, relative to the working directory.
pub const DEFAULT_PLOT_PATH: &str = "pi_prime_spectrum.svg";
/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "pispect.toml";

/// Errors raised while resolving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Digit count must be at least 1.
    #[error("Digit count must be positive")]
    ZeroDigitCount,
    /// A prime-digit entry is not a decimal digit.
    #[error("Prime digit {digit} is outside 0-9")]
    DigitOutOfRange {
        /// The offending value.
        digit: u32,
    },
    /// A prime-digit entry could not be parsed at all.
    #[error("Invalid prime digit entry: {value}")]
    InvalidDigit {
        /// The unparsable text.
        value: String,
    },
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the config file as TOML.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File that could not be parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Subset of the decimal digits 0-9, stored as a 10-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSet {
    mask: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: DigitSet = DigitSet { mask: 0 };
    /// The set containing every digit 0-9.
    pub const ALL: DigitSet = DigitSet { mask: 0x3ff };

    /// The base-10 prime digits {2, 3, 5, 7}.
    pub const fn primes() -> Self {
        DigitSet {
            mask: (1 << 2) | (1 << 3) | (1 << 5) | (1 << 7),
        }
    }

    /// Build a set from digit values, rejecting anything outside 0-9.
    pub fn from_digits<I>(digits: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut mask = 0u16;
        for digit in digits {
            if digit > 9 {
                return Err(ConfigError::DigitOutOfRange { digit });
            }
            mask |= 1 << digit;
        }
        Ok(DigitSet { mask })
    }

    /// Parse a comma-separated digit list such as `"2,3,5,7"`.
    ///
    /// An empty or whitespace-only string yields the empty set, which is a
    /// legal (degenerate) configuration.
    pub fn parse_list(text: &str) -> Result<Self, ConfigError> {
        let mut values = Vec::new();
        for part in text.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let value = part
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidDigit {
                    value: part.to_string(),
                })?;
            values.push(value);
        }
        Self::from_digits(values)
    }

    /// Membership test for one digit.
    pub fn contains(self, digit: u8) -> bool {
        digit <= 9 && self.mask & (1 << digit) != 0
    }

    /// True when no digit is in the set.
    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Number of digits in the set.
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Digits in ascending order.
    pub fn digits(self) -> Vec<u8> {
        (0u8..=9).filter(|&digit| self.contains(digit)).collect()
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::primes()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for digit in self.digits() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
            first = false;
        }
        Ok(())
    }
}

/// Full, immutable configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// π digits to analyze after the decimal point.
    pub digit_count: usize,
    /// Digits counted as prime by the binary encoder.
    pub prime_digits: DigitSet,
    /// Where the SVG plot is written.
    pub plot_path: PathBuf,
    /// Hand the plot to the system viewer after rendering.
    pub open_plot: bool,
    /// Render the plot at all (`false` for summary-only runs).
    pub plot: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            digit_count: DEFAULT_DIGIT_COUNT,
            prime_digits: DigitSet::primes(),
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
            open_plot: false,
            plot: true,
        }
    }
}

impl AnalysisConfig {
    /// Check invariants that must hold before any computation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_count == 0 {
            return Err(ConfigError::ZeroDigitCount);
        }
        Ok(())
    }
}

/// On-disk settings; every key is optional and absent keys leave the
/// corresponding built-in default untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Overrides [`AnalysisConfig::digit_count`].
    #[serde(default)]
    pub digits: Option<usize>,
    /// Overrides [`AnalysisConfig::prime_digits`].
    #[serde(default)]
    pub prime_digits: Option<Vec<u32>>,
    /// Overrides [`AnalysisConfig::plot_path`].
    #[serde(default)]
    pub plot_path: Option<PathBuf>,
    /// Overrides [`AnalysisConfig::open_plot`].
    #[serde(default)]
    pub open_plot: Option<bool>,
}

impl ConfigFile {
    /// Fold these settings over `base`, returning the merged config.
    pub fn apply(self, mut base: AnalysisConfig) -> Result<AnalysisConfig, ConfigError> {
        if let Some(digits) = self.digits {
            base.digit_count = digits;
        }
        if let Some(list) = self.prime_digits {
            base.prime_digits = DigitSet::from_digits(list)?;
        }
        if let Some(path) = self.plot_path {
            base.plot_path = path;
        }
        if let Some(open_plot) = self.open_plot {
            base.open_plot = open_plot;
        }
        Ok(base)
    }
}

/// Load settings from a TOML file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_set_contains_exactly_the_prime_digits() {
        let set = DigitSet::primes();
        assert_eq!(set.digits(), vec![2, 3, 5, 7]);
        for digit in [0u8, 1, 4, 6, 8, 9] {
            assert!(!set.contains(digit));
        }
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn empty_and_full_sets_are_representable() {
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::ALL.digits().len(), 10);
        assert!(DigitSet::ALL.contains(0));
        assert!(DigitSet::ALL.contains(9));
    }

    #[test]
    fn from_digits_rejects_values_above_nine() {
        let err = DigitSet::from_digits([2, 10]).unwrap_err();
        assert!(matches!(err, ConfigError::DigitOutOfRange { digit: 10 }));
    }

    #[test]
    fn parse_list_handles_spacing_and_duplicates() {
        let set = DigitSet::parse_list(" 2, 3 ,5,7,7 ").unwrap();
        assert_eq!(set, DigitSet::primes());
        assert_eq!(DigitSet::parse_list("").unwrap(), DigitSet::EMPTY);
        assert!(DigitSet::parse_list("2,x").is_err());
    }

    #[test]
    fn display_joins_digits_with_commas() {
        assert_eq!(DigitSet::primes().to_string(), "2,3,5,7");
        assert_eq!(DigitSet::EMPTY.to_string(), "");
    }

    #[test]
    fn validate_rejects_zero_digit_count() {
        let config = AnalysisConfig {
            digit_count: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDigitCount)
        ));
    }

    #[test]
    fn config_file_overrides_only_present_keys() {
        let file: ConfigFile = toml::from_str("digits = 500\nprime_digits = [1, 4]").unwrap();
        let merged = file.apply(AnalysisConfig::default()).unwrap();
        assert_eq!(merged.digit_count, 500);
        assert_eq!(merged.prime_digits.digits(), vec![1, 4]);
        assert_eq!(merged.plot_path, PathBuf::from(DEFAULT_PLOT_PATH));
        assert!(merged.plot);
    }

    #[test]
    fn config_file_rejects_out_of_range_digits() {
        let file: ConfigFile = toml::from_str("prime_digits = [11]").unwrap();
        assert!(file.apply(AnalysisConfig::default()).is_err());
    }

    #[test]
    fn load_config_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_config_file_parses_full_example() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "digits = 2000\nprime_digits = [2, 3, 5, 7]\nplot_path = \"out.svg\"\nopen_plot = true\n",
        )
        .unwrap();
        let merged = load_config_file(&path)
            .unwrap()
            .apply(AnalysisConfig::default())
            .unwrap();
        assert_eq!(merged.digit_count, 2000);
        assert_eq!(merged.plot_path, PathBuf::from("out.svg"));
        assert!(merged.open_plot);
    }
}
