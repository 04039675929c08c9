#![deny(missing_docs)]

//! Command-line entry point for the π prime-digit spectrum analyzer.

use std::path::{Path, PathBuf};

use pispect::analysis;
use pispect::config::{
    AnalysisConfig, CONFIG_FILE_NAME, DigitSet, load_config_file,
};
use pispect::logging;
use pispect::report::{self, SpectrumRenderer, SvgPlot};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };

    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = resolve_config(&options)?;
    config.validate().map_err(|err| err.to_string())?;
    tracing::info!(
        "Analyzing {} π digits with prime set {{{}}}",
        config.digit_count,
        config.prime_digits
    );

    let analysis = analysis::run(&config).map_err(|err| err.to_string())?;
    report::print_summary(&analysis.stats);

    if config.plot {
        let renderer = SvgPlot::new(&config.plot_path, config.open_plot);
        renderer
            .render(&analysis.spectrum)
            .map_err(|err| err.to_string())?;
    }
    Ok(())
}

/// Merge defaults, the optional TOML file, and CLI overrides, in that order.
fn resolve_config(options: &Options) -> Result<AnalysisConfig, String> {
    let mut config = AnalysisConfig::default();

    let file_path = options
        .config_path
        .clone()
        .or_else(|| implicit_config_path(Path::new(CONFIG_FILE_NAME)));
    if let Some(path) = file_path {
        let file = load_config_file(&path).map_err(|err| err.to_string())?;
        config = file.apply(config).map_err(|err| err.to_string())?;
        tracing::debug!("Applied config file {}", path.display());
    }

    if let Some(digits) = options.digits {
        config.digit_count = digits;
    }
    if let Some(primes) = options.prime_digits {
        config.prime_digits = primes;
    }
    if let Some(path) = &options.out_path {
        config.plot_path = path.clone();
    }
    if options.open_plot {
        config.open_plot = true;
    }
    if options.no_plot {
        config.plot = false;
    }
    Ok(config)
}

/// The working-directory config file is only used when it exists; an
/// explicit `--config` path is always read and missing files are errors.
fn implicit_config_path(path: &Path) -> Option<PathBuf> {
    path.exists().then(|| path.to_path_buf())
}

#[derive(Debug, Clone, Default)]
struct Options {
    digits: Option<usize>,
    prime_digits: Option<DigitSet>,
    out_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    open_plot: bool,
    no_plot: bool,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--digits" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--digits requires a value".to_string())?;
                options.digits = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --digits value: {value}"))?,
                );
            }
            "--prime-digits" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--prime-digits requires a value".to_string())?;
                options.prime_digits =
                    Some(DigitSet::parse_list(value).map_err(|err| err.to_string())?);
            }
            "--out" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--out requires a value".to_string())?;
                options.out_path = Some(PathBuf::from(value));
            }
            "--config" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--config requires a value".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--open" => {
                options.open_plot = true;
            }
            "--no-plot" => {
                options.no_plot = true;
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }

    Ok(Some(options))
}

fn help_text() -> String {
    [
        "pispect",
        "",
        "Analyze the FFT spectrum of the prime-digit indicator sequence of π.",
        "",
        "Usage:",
        "  pispect [options]",
        "",
        "Options:",
        "  --digits <n>          π digits to analyze (default: 1000000)",
        "  --prime-digits <list> comma-separated digits treated as prime (default: 2,3,5,7)",
        "  --out <path>          SVG output path (default: pi_prime_spectrum.svg)",
        "  --open                open the rendered plot with the system viewer",
        "  --no-plot             skip rendering, print summary only",
        "  --config <path>       TOML config file (default: pispect.toml if present)",
        "  -h, --help            show this help",
    ]
    .join("\n")
}
