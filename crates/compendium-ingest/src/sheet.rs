//! CSV sheet decoding into raw rows.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use compendium_model::Row;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode CSV text into rows keyed by the header line.
///
/// The first non-empty record is the header row; fully empty records are
/// skipped throughout. Records shorter than the header are padded with empty
/// cells, longer ones are truncated to the header width.
pub fn parse_sheet(text: &str) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some((header_row, data_rows)) = raw_rows.split_first() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();

    let mut rows = Vec::with_capacity(data_rows.len());
    for record in data_rows {
        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(header.clone(), value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read and decode a CSV sheet from disk.
pub fn read_sheet(path: &Path) -> Result<Vec<Row>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read sheet: {}", path.display()))?;
    parse_sheet(&text)
}
