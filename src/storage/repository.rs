use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::{format_cents, parse_cents, Kind, Transaction, TIMESTAMP_FORMAT};

/// Flat-file store for the transaction ledger.
///
/// One record per line, comma-joined 4-tuple:
/// `timestamp,category,amount,kind` — no header, no version marker.
/// Records pass through a CSV codec so a category containing a comma is
/// quoted on write and unquoted on read; comma-free data stays
/// byte-compatible with plain `split(',')` readers.
pub struct Repository {
    path: PathBuf,
}

/// A persisted record that could not be decoded into a Transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid timestamp '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    Timestamp(String),

    #[error("invalid amount '{0}'")]
    Amount(String),

    #[error("unknown transaction kind '{0}'")]
    Kind(String),
}

impl Repository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted transaction, in file order.
    ///
    /// A missing file is an empty ledger, not an error. A record that
    /// fails to decode fails the whole load, carrying its line number.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to open ledger file {}", self.path.display()))
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let line = index + 1;
            let record = result.with_context(|| {
                format!("Unreadable record at line {} of {}", line, self.path.display())
            })?;
            let transaction = decode_record(&record).with_context(|| {
                format!("Malformed record at line {} of {}", line, self.path.display())
            })?;
            transactions.push(transaction);
        }

        Ok(transactions)
    }

    /// Persist the full transaction sequence, replacing the file contents.
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to write ledger file {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        for transaction in transactions {
            writer.write_record([
                transaction.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                transaction.category.clone(),
                format_cents(transaction.amount_cents),
                transaction.kind.to_string(),
            ])?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write ledger file {}", self.path.display()))?;
        Ok(())
    }
}

fn decode_record(record: &csv::StringRecord) -> Result<Transaction, DecodeError> {
    if record.len() != 4 {
        return Err(DecodeError::FieldCount(record.len()));
    }

    let timestamp = NaiveDateTime::parse_from_str(&record[0], TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::Timestamp(record[0].to_string()))?;
    let amount_cents =
        parse_cents(&record[2]).map_err(|_| DecodeError::Amount(record[2].to_string()))?;
    let kind = Kind::from_str(&record[3]).ok_or_else(|| DecodeError::Kind(record[3].to_string()))?;

    Ok(Transaction {
        timestamp,
        category: record[1].to_string(),
        amount_cents,
        kind,
    })
}
