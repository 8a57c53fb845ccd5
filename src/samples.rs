//! Reading ciphertext samples from text
//!
//! One vector per line as `x, y, z`. Surrounding parentheses or brackets, a
//! trailing comma, blank lines and `#` comments are accepted, so a list
//! pasted from source code parses as-is.

use crate::linalg::Vector3;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleParseError {
    #[error("Failed to read samples from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Line could not be read as three numbers (line numbers are 1-based)
    #[error("Malformed sample on line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("No samples found")]
    Empty,
}

/// Parse every non-empty, non-comment line into a vector
pub fn parse_samples(text: &str) -> Result<Vec<Vector3>, SampleParseError> {
    let samples = text
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then(|| parse_line(line).ok_or_else(|| malformed(index, raw)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if samples.is_empty() {
        return Err(SampleParseError::Empty);
    }
    Ok(samples)
}

/// Read and parse a sample file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Vector3>, SampleParseError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SampleParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&text)
}

fn parse_line(line: &str) -> Option<Vector3> {
    let inner = line
        .trim_end_matches(',')
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .trim();

    let mut parts = inner.split(',').map(|p| p.trim().parse::<f64>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vector3::new(x, y, z))
}

fn malformed(index: usize, raw: &str) -> SampleParseError {
    SampleParseError::Malformed {
        line: index + 1,
        content: raw.to_string(),
    }
}
