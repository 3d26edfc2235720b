//! Semicolon-delimited statement export decoding.
//!
//! Real exports name their columns in the bank's locale:
//!   Date d'exécution;Date valeur;Montant;Devise;Contrepartie;Détails
//! Only the execution date and amount columns are consumed; both stay raw
//! text so the aggregation engine sees exactly what the bank exported.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use releve_core::TransactionRecord;
use serde::{Deserialize, Serialize};

/// Column names of the two consumed fields, as written in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementHeaders {
    pub date: String,
    pub amount: String,
}

impl Default for StatementHeaders {
    fn default() -> Self {
        Self {
            date: "Date d'exécution".to_string(),
            amount: "Montant".to_string(),
        }
    }
}

/// Decode statement rows from a reader, keeping the export's row order.
///
/// Real exports list transactions newest-first; the order is preserved here
/// because it drives the reports' bucket order downstream.
pub fn parse_statement<R: Read>(
    reader: R,
    headers: &StatementHeaders,
) -> Result<Vec<TransactionRecord>> {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

    let header_row = rdr.headers().context("reading statement header row")?;
    let date_idx = column(header_row, &headers.date)?;
    let amount_idx = column(header_row, &headers.amount)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        // Header is line 1, so data rows start at line 2.
        let line = i + 2;
        let row = row.with_context(|| format!("reading statement line {line}"))?;
        let executed_on = field(&row, date_idx, line)?;
        let amount = field(&row, amount_idx, line)?;
        records.push(TransactionRecord::new(executed_on, amount));
    }
    Ok(records)
}

/// Decode a statement export from disk.
pub fn read_statement_file(
    path: impl AsRef<Path>,
    headers: &StatementHeaders,
) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_statement(file, headers)
}

fn column(header_row: &csv::StringRecord, name: &str) -> Result<usize> {
    header_row
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("statement has no '{name}' column"))
}

fn field<'a>(row: &'a csv::StringRecord, idx: usize, line: usize) -> Result<&'a str> {
    row.get(idx)
        .with_context(|| format!("statement line {line} has no column {idx}"))
}
