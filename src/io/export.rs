use std::io::Write;

use anyhow::Result;

use crate::application::LedgerService;
use crate::domain::format_cents;

/// Exporter for converting ledger data to interchange formats.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format (with header, unlike the store).
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "category", "amount", "kind"])?;

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record([
                transaction.entry_date(),
                transaction.category.clone(),
                format_cents(transaction.amount_cents),
                transaction.kind.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export transactions as a JSON array.
    pub fn export_transactions_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let transactions = self.service.transactions();
        let json = serde_json::to_string_pretty(transactions)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(transactions.len())
    }

    /// Export the composed summary (balance, transactions, spending) as JSON.
    pub fn export_summary_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let summary = self.service.summary();
        let json = serde_json::to_string_pretty(&summary)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
