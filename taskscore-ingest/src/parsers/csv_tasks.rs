//! Parse CSV task exports into raw task records.
//!
//! Expected header (any column order, extra columns ignored):
//! id,title,due_date,estimated_hours,importance,dependencies
//!
//! The dependencies cell lists ids separated by anything that is not a digit:
//! "1;2", "1 2", "1-2", "[1, 2]" all parse to [1, 2]. Empty cells mean "not provided".

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

use crate::types::RawTask;

const DEPENDENCY_ID_PATTERN: &str = r"\d+";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    estimated_hours: Option<f64>,
    #[serde(default)]
    importance: Option<i64>,
    #[serde(default)]
    dependencies: Option<String>,
}

fn parse_dependency_cell(cell: &str, id_re: &Regex) -> Result<Vec<i64>> {
    id_re
        .find_iter(cell)
        .map(|m| {
            m.as_str()
                .parse::<i64>()
                .with_context(|| format!("invalid dependency id '{}'", m.as_str()))
        })
        .collect()
}

fn read_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<RawTask>> {
    let id_re = Regex::new(DEPENDENCY_ID_PATTERN)?;
    let mut out = Vec::new();

    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // +2: 1-based, after the header line.
        let row = row.with_context(|| format!("CSV row {}", i + 2))?;

        let dependencies = match row.dependencies.as_deref() {
            Some(cell) if !cell.trim().is_empty() => Some(parse_dependency_cell(cell, &id_re)?),
            _ => None,
        };

        out.push(RawTask {
            id: row.id,
            title: row.title.filter(|t| !t.trim().is_empty()),
            due_date: row.due_date.filter(|d| !d.trim().is_empty()),
            estimated_hours: row.estimated_hours,
            importance: row.importance,
            dependencies,
        });
    }

    Ok(out)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).flexible(true).trim(csv::Trim::All);
    b
}

/// Parse a CSV file of tasks.
pub fn parse_tasks_csv(path: impl AsRef<Path>) -> Result<Vec<RawTask>> {
    let rdr = reader_builder()
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_rows(rdr)
}

/// Parse CSV text of tasks.
pub fn parse_tasks_csv_str(text: &str) -> Result<Vec<RawTask>> {
    read_rows(reader_builder().from_reader(text.as_bytes()))
}
