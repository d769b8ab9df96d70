//! Shared parsing for whitespace-separated text tables.
//!
//! Blank lines and lines starting with `#` are skipped. Every data line must
//! carry at least the expected number of numeric columns; extra columns are
//! ignored. The first column is the coordinate and must increase strictly.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for forcing and profile file parsing.
#[derive(Debug, Error)]
pub enum InputFileError {
    /// File I/O error
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Empty file (no data records)
    #[error("Input file contains no data")]
    EmptyFile,

    /// Coordinate column not strictly increasing
    #[error("Non-monotonic {column} at line {line}")]
    NonMonotonic { line: usize, column: &'static str },
}

/// Parse the rows of a table with `N` named columns.
pub(crate) fn parse_rows<const N: usize>(
    content: &str,
    columns: [&'static str; N],
) -> Result<Vec<[f64; N]>, InputFileError> {
    let mut rows: Vec<[f64; N]> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < N {
            return Err(InputFileError::ParseError {
                line: line_num + 1,
                message: format!("Expected: {}", columns.join(" ")),
            });
        }

        let mut row = [0.0; N];
        for (value, (part, name)) in row.iter_mut().zip(parts.iter().zip(columns)) {
            *value = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InputFileError::ParseError {
                    line: line_num + 1,
                    message: format!("Invalid {name} value '{part}'"),
                })?;
        }

        if let Some(prev) = rows.last()
            && row[0] <= prev[0]
        {
            return Err(InputFileError::NonMonotonic {
                line: line_num + 1,
                column: columns[0],
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(InputFileError::EmptyFile);
    }
    Ok(rows)
}

/// Read a whole file, tagging I/O errors with the path.
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String, InputFileError> {
    std::fs::read_to_string(path).map_err(|source| InputFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Linear interpolation of `(xs, ys)` at `x`, clamped to the end values
/// outside `[xs[0], xs[last]]`. `xs` must be strictly increasing and
/// non-empty.
pub fn interpolate_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // xs[i] <= x < xs[i + 1]
    let i = xs.partition_point(|&xi| xi <= x) - 1;
    let alpha = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + alpha * (ys[i + 1] - ys[i])
}
