//! CSV fixture loading.
//!
//! Quote runs are driven from the same CSV test-data files the upstream
//! suite uses: one header row naming the fixture keys, one data row per
//! scenario. Values contain no embedded commas, so a plain split is enough.

use std::path::Path;

use anyhow::{bail, Context};
use validation_engine::Fixture;

/// Loads one data row (zero-based, excluding the header) as a fixture.
pub fn load_csv_row(path: &Path, row: usize) -> anyhow::Result<Fixture> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture file {}", path.display()))?;
    let fixtures = parse_csv(&content)?;
    let count = fixtures.len();
    fixtures
        .into_iter()
        .nth(row)
        .with_context(|| format!("row index {} out of bounds (total rows: {})", row, count))
}

fn parse_csv(content: &str) -> anyhow::Result<Vec<Fixture>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .context("CSV file must have at least a header and one data row")?;
    let headers: Vec<&str> = header.split(',').map(str::trim).collect();

    let mut fixtures = Vec::new();
    for line in lines {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        let mut fixture = Fixture::new();
        for (i, key) in headers.iter().enumerate() {
            fixture.insert(key, values.get(i).copied().unwrap_or(""));
        }
        fixtures.push(fixture);
    }

    if fixtures.is_empty() {
        bail!("CSV file must have at least a header and one data row");
    }
    Ok(fixtures)
}
