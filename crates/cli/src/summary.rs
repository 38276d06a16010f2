//! Per-constellation run summary as a Polars table (CSV or Parquet).

use anyhow::{Context, Result};
use polars::prelude::*;
use skybound::BoundaryOutput;
use std::fs::{self, File};
use std::path::Path;

/// One row per constellation: `code, raw_vertices, dense_vertices, gaps`.
pub fn summary_frame(output: &BoundaryOutput) -> PolarsResult<DataFrame> {
    let codes: Vec<&str> = output.stats.keys().map(String::as_str).collect();
    let raw: Vec<u64> = output.stats.values().map(|s| s.raw_vertices as u64).collect();
    let dense: Vec<u64> = output
        .stats
        .values()
        .map(|s| s.dense_vertices as u64)
        .collect();
    let gaps: Vec<u64> = output.stats.values().map(|s| s.gaps as u64).collect();
    df!(
        "code" => codes,
        "raw_vertices" => raw,
        "dense_vertices" => dense,
        "gaps" => gaps
    )
}

/// Write the summary; `.parquet` selects Parquet, anything else CSV.
pub fn write_summary(output: &BoundaryOutput, path: &Path) -> Result<()> {
    let mut df = summary_frame(output)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    }
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        "summary written"
    );
    Ok(())
}
