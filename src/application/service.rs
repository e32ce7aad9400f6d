use std::collections::HashMap;
use std::path::Path;

use crate::domain::{
    compute_balance, parse_entry_date, spending_by_category, Cents, Kind, Transaction,
};
use crate::storage::Repository;

use super::{build_summary, AppError, Summary};

/// Application service providing high-level operations over the ledger.
/// This is the primary interface for any client (CLI, TUI, etc.).
///
/// The service owns the in-memory transaction sequence and keeps it
/// synchronized with the store: every successful add is followed by a
/// full rewrite of the persisted file.
pub struct LedgerService {
    repo: Repository,
    transactions: Vec<Transaction>,
}

impl LedgerService {
    /// Open the ledger at the given path, loading any persisted
    /// transactions. A missing file starts an empty ledger.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let repo = Repository::new(path);
        let transactions = repo.load_transactions()?;
        Ok(Self { repo, transactions })
    }

    /// Record a new transaction dated `date_text` (DD-MM-YYYY).
    ///
    /// An unparseable or non-existent calendar date yields
    /// `AppError::InvalidDate` and leaves ledger and store untouched.
    /// On success the transaction is appended in entry order and the
    /// whole sequence is persisted before returning.
    pub fn add_transaction(
        &mut self,
        category: impl Into<String>,
        amount_cents: Cents,
        kind: Kind,
        date_text: &str,
    ) -> Result<(), AppError> {
        let date = parse_entry_date(date_text)
            .ok_or_else(|| AppError::InvalidDate(date_text.to_string()))?;

        let transaction = Transaction::new(category, amount_cents, kind, date);
        self.transactions.push(transaction);
        self.repo.save_transactions(&self.transactions)?;
        Ok(())
    }

    /// The full transaction sequence, in entry order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Total income minus total expenses. Zero for an empty ledger.
    pub fn balance(&self) -> Cents {
        compute_balance(&self.transactions)
    }

    /// Expense totals per category; income-only categories excluded.
    pub fn spending_by_category(&self) -> HashMap<String, Cents> {
        spending_by_category(&self.transactions)
    }

    /// Composed report: balance, transaction list, spending breakdown.
    pub fn summary(&self) -> Summary {
        build_summary(&self.transactions)
    }
}
