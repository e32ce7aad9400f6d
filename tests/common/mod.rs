// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use tally::application::LedgerService;
use tally::domain::Kind;
use tempfile::TempDir;

/// Helper to create a test service over a ledger file in a temp dir.
/// Returns the store path so tests can reopen or inspect it.
pub fn test_service() -> Result<(LedgerService, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("budget_data.txt");
    let service = LedgerService::open(&path)?;
    Ok((service, path, temp_dir))
}

/// Test fixture: the standard month of transactions used across tests.
/// Expenses {Food: 100.00 + 50.00, Transport: 30.00}, income {Salary: 500.00}.
pub fn record_standard_month(service: &mut LedgerService) -> Result<()> {
    service.add_transaction("Salary", 50000, Kind::Income, "01-01-2024")?;
    service.add_transaction("Food", 10000, Kind::Expense, "05-01-2024")?;
    service.add_transaction("Food", 5000, Kind::Expense, "12-01-2024")?;
    service.add_transaction("Transport", 3000, Kind::Expense, "20-01-2024")?;
    Ok(())
}
