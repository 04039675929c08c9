#![deny(missing_docs)]

//! pispect: spectral analysis of the prime-digit indicator sequence of π.
//!
//! The crate is one forward pipeline: π digit generation, binary encoding
//! against a prime-digit set, an O(N log N) DFT, peak normalization, and a
//! report (two summary scalars plus an SVG spectrum plot).

/// The analysis pipeline: digits, encoding, transform, statistics.
pub mod analysis;
/// Immutable run configuration and its resolution.
pub mod config;
/// Tracing subscriber setup.
pub mod logging;
/// Summary printing and plot rendering.
pub mod report;
