//! Output formatting and display utilities for the zerocount CLI

use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};
use std::fs;

use zerocount_math::{BistritzStats, Polynomial, ZeroCount};

use crate::{Args, OutputFormat, Verbosity};

/// Result record for structured output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountReport {
    /// Input polynomial, highest degree first
    pub polynomial: String,
    /// Degree and zero counts
    #[serde(flatten)]
    pub count: ZeroCount,
}

impl CountReport {
    fn new(poly: &Polynomial, count: &ZeroCount) -> Self {
        Self {
            polynomial: poly.to_string(),
            count: *count,
        }
    }
}

/// Render the result in the requested output format
pub(crate) fn format_result(
    format: OutputFormat,
    verbosity: Verbosity,
    poly: &Polynomial,
    count: &ZeroCount,
) -> String {
    let report = CountReport::new(poly, count);
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize JSON: {}\"}}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(&report)
            .unwrap_or_else(|e| format!("error: \"Failed to serialize YAML: {}\"", e)),
        OutputFormat::Text => {
            let mut result = String::new();
            if verbosity > Verbosity::Quiet {
                result.push_str(&format!("# P(x) = {}\n", report.polynomial));
                result.push_str("# Zeros inside/on the unit circle:\n");
            }
            let (inside, on) = report.count.as_pair();
            result.push_str(&format!("{} {}\n", inside, on));
            if verbosity >= Verbosity::Verbose {
                result.push_str(&format!("# Zeros outside: {}\n", report.count.outside));
            }
            result
        }
    }
}

/// Write the result to the output file or stdout
pub(crate) fn write_output(
    args: &Args,
    verbosity: Verbosity,
    poly: &Polynomial,
    count: &ZeroCount,
) -> std::io::Result<()> {
    let mut text = format_result(args.format, verbosity, poly, count);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match args.output.as_ref() {
        Some(path) => fs::write(path, text),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

/// Print counter statistics to stderr
pub(crate) fn print_stats(stats: &BistritzStats) {
    eprintln!("\n=== Statistics ===");
    eprintln!("Regular steps:        {}", stats.regular_steps);
    eprintln!("Trivial-zero steps:   {}", stats.trivial_zero_steps);
    eprintln!("Singular steps:       {}", stats.singular_steps);
    eprintln!("Early halts:          {}", stats.halts);
    eprintln!("Roots at x = 1:       {}", stats.unit_roots_deflated);
}

/// Print error message in red to stderr
pub(crate) fn eprintln_colored(args: &Args, text: &str) {
    if args.no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.red()));
    }
}
