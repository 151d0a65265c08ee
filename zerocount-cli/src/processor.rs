//! Input handling and counting for the zerocount CLI
//!
//! Exactly one polynomial is read per invocation, from the positional
//! argument, a file, or stdin. Lines starting with `#` are comments.

use std::fs;
use std::io::{self, Read};

use zerocount_math::{BistritzCounter, BistritzStats, Polynomial, ZeroCount};

use crate::Args;

/// Read and parse the polynomial named by the command-line arguments
pub(crate) fn read_polynomial(args: &Args) -> Result<Polynomial, String> {
    let source = if let Some(ref poly) = args.poly {
        poly.clone()
    } else if let Some(ref path) = args.input {
        fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        buffer
    };

    let text = strip_comments(&source);
    tracing::debug!(input = %text, "read polynomial");
    text.parse::<Polynomial>().map_err(|e| e.to_string())
}

/// Drop `#` comment lines and join the rest with single spaces
fn strip_comments(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the Bistritz rule on one polynomial
pub(crate) fn count_zeros(poly: &Polynomial) -> Result<(ZeroCount, BistritzStats), String> {
    let mut counter = BistritzCounter::new();
    let count = counter.count(poly).map_err(|e| e.to_string())?;
    Ok((count, counter.stats().clone()))
}
