//! zerocount CLI - Count the zeros of a rational polynomial inside and on the unit circle

mod format;
mod processor;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::format::FmtSpan;

use format::{eprintln_colored, print_stats, write_output};
use processor::{count_zeros, read_polynomial};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CliConfig {
    /// Default verbosity level
    #[serde(default)]
    verbosity: Option<String>,
    /// Default output format
    #[serde(default)]
    format: Option<String>,
    /// Enable colors by default
    #[serde(default)]
    color: Option<bool>,
}

impl CliConfig {
    /// Load configuration from file
    fn load() -> Self {
        let config_path = dirs::home_dir()
            .map(|mut p| {
                p.push(".zerocountrc");
                p
            })
            .filter(|p| p.exists())
            .or_else(|| {
                dirs::config_dir().map(|mut p| {
                    p.push("zerocount");
                    p.push("config.yaml");
                    p
                })
            });

        if let Some(path) = config_path
            && path.exists()
            && let Ok(contents) = fs::read_to_string(&path)
            && let Ok(config) = serde_yaml::from_str(&contents)
        {
            return config;
        }

        Self::default()
    }

    /// Merge configuration with command-line arguments
    fn merge_with_args(&self, args: &mut Args) {
        // Only apply config if arg is not explicitly set
        if args.verbosity == Verbosity::Normal
            && let Some(ref v) = self.verbosity
        {
            match v.as_str() {
                "quiet" => args.verbosity = Verbosity::Quiet,
                "verbose" => args.verbosity = Verbosity::Verbose,
                "debug" => args.verbosity = Verbosity::Debug,
                "trace" => args.verbosity = Verbosity::Trace,
                _ => {}
            }
        }

        if args.format == OutputFormat::Text
            && let Some(ref f) = self.format
        {
            match f.as_str() {
                "json" => args.format = OutputFormat::Json,
                "yaml" => args.format = OutputFormat::Yaml,
                _ => {}
            }
        }

        if let Some(color) = self.color
            && !color
        {
            args.no_color = true;
        }
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Comment header followed by "<inside> <on>" (default)
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No output except results
    Quiet,
    /// Minimal output
    Normal,
    /// Detailed output
    Verbose,
    /// Debug output
    Debug,
    /// Trace output
    Trace,
}

/// Exact count of polynomial zeros inside and on the unit circle
#[derive(Parser, Debug, Clone)]
#[command(name = "zerocount")]
#[command(version)]
#[command(about = "Count the zeros of a rational polynomial inside and on the unit circle")]
#[command(
    after_help = "POLY may be a coefficient list \"[1, -3, 2]\", a length-prefixed list \"3  1 -3 2\" or an expression \"2*x^2 - 3*x + 1\"."
)]
struct Args {
    /// Polynomial to examine. If neither POLY nor --input is given, reads from stdin.
    #[arg(value_name = "POLY", conflicts_with = "input")]
    poly: Option<String>,

    /// Read the polynomial from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file. If not provided, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let mut args = Args::parse();

    // Load configuration file and merge with args
    let config = CliConfig::load();
    config.merge_with_args(&mut args);

    // Determine verbosity level
    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };

    // Set up logging
    if verbosity >= Verbosity::Debug {
        let (level, spans) = match verbosity {
            Verbosity::Trace => (Level::TRACE, FmtSpan::ENTER | FmtSpan::CLOSE),
            _ => (Level::DEBUG, FmtSpan::NONE),
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_span_events(spans)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln_colored(&args, &format!("Failed to set tracing subscriber: {}", e));
            std::process::exit(1);
        }
    }

    let poly = match read_polynomial(&args) {
        Ok(poly) => poly,
        Err(e) => {
            eprintln_colored(&args, &format!("Error: {}", e));
            std::process::exit(1);
        }
    };

    let (count, stats) = match count_zeros(&poly) {
        Ok(result) => result,
        Err(e) => {
            eprintln_colored(&args, &format!("Error: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(&args, verbosity, &poly, &count) {
        eprintln_colored(&args, &format!("Error writing output: {}", e));
        std::process::exit(1);
    }

    if verbosity >= Verbosity::Verbose {
        print_stats(&stats);
    }
}
