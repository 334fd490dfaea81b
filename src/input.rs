//! Plain-text series input.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Reads a numeric series from a text file.
///
/// One value per line; blank lines are skipped and `#` starts a comment
/// that runs to the end of the line.
pub fn read_series(path: &Path) -> Result<Vec<f64>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;

    let mut series = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        let value = line.split('#').next().unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        let parsed: f64 = value.parse().with_context(|| {
            format!("{}:{}: not a number: {value:?}", path.display(), lineno + 1)
        })?;
        series.push(parsed);
    }

    if series.is_empty() {
        bail!("series file contains no values: {}", path.display());
    }
    Ok(series)
}
