use serde::{Deserialize, Serialize};

use crate::domain::{compute_balance, spending_by_category, Cents, Kind, Transaction};

/// Structured view composing the three read operations: balance, the
/// full transaction list, and the per-category spending breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub balance_cents: Cents,
    pub transactions: Vec<TransactionLine>,
    pub spending: Vec<CategorySpend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLine {
    /// Entry date in DD-MM-YYYY display form
    pub date: String,
    pub category: String,
    pub amount_cents: Cents,
    pub kind: Kind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub total_cents: Cents,
}

/// Build a summary over a transaction sequence. Categories are sorted
/// by name for stable output; the underlying aggregation is unordered.
pub fn build_summary(transactions: &[Transaction]) -> Summary {
    let lines = transactions
        .iter()
        .map(|t| TransactionLine {
            date: t.entry_date(),
            category: t.category.clone(),
            amount_cents: t.amount_cents,
            kind: t.kind,
        })
        .collect();

    let mut spending: Vec<CategorySpend> = spending_by_category(transactions)
        .into_iter()
        .map(|(category, total_cents)| CategorySpend {
            category,
            total_cents,
        })
        .collect();
    spending.sort_by(|a, b| a.category.cmp(&b.category));

    Summary {
        balance_cents: compute_balance(transactions),
        transactions: lines,
        spending,
    }
}
