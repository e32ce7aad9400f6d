use std::collections::HashMap;

use super::{Cents, Kind, Transaction};

/// Compute the overall balance from a list of transactions.
/// Balance = sum of income amounts - sum of expense amounts
pub fn compute_balance(transactions: &[Transaction]) -> Cents {
    transactions.iter().fold(0, |balance, t| match t.kind {
        Kind::Income => balance + t.amount_cents,
        Kind::Expense => balance - t.amount_cents,
    })
}

/// Sum expense amounts per category.
/// Categories seen only in income transactions do not appear.
/// Returns a map of category -> total spent
pub fn spending_by_category(transactions: &[Transaction]) -> HashMap<String, Cents> {
    let mut totals: HashMap<String, Cents> = HashMap::new();

    for t in transactions.iter().filter(|t| t.kind == Kind::Expense) {
        *totals.entry(t.category.clone()).or_insert(0) += t.amount_cents;
    }

    totals
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_transaction(category: &str, amount_cents: Cents, kind: Kind) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Transaction::new(category, amount_cents, kind, date)
    }

    #[test]
    fn test_compute_balance_empty() {
        assert_eq!(compute_balance(&[]), 0);
    }

    #[test]
    fn test_compute_balance_income_only() {
        let transactions = vec![make_transaction("Salary", 50000, Kind::Income)];
        assert_eq!(compute_balance(&transactions), 50000);
    }

    #[test]
    fn test_compute_balance_expense_only() {
        let transactions = vec![make_transaction("Rent", 30000, Kind::Expense)];
        assert_eq!(compute_balance(&transactions), -30000);
    }

    #[test]
    fn test_compute_balance_mixed() {
        let transactions = vec![
            make_transaction("Salary", 50000, Kind::Income),    // +50000
            make_transaction("Food", 10000, Kind::Expense),     // -10000
            make_transaction("Food", 5000, Kind::Expense),      // -5000
            make_transaction("Transport", 3000, Kind::Expense), // -3000
        ];

        assert_eq!(compute_balance(&transactions), 32000);
    }

    #[test]
    fn test_spending_by_category_empty() {
        assert!(spending_by_category(&[]).is_empty());
    }

    #[test]
    fn test_spending_by_category_aggregates_expenses() {
        let transactions = vec![
            make_transaction("Food", 10000, Kind::Expense),
            make_transaction("Food", 5000, Kind::Expense),
            make_transaction("Transport", 3000, Kind::Expense),
            make_transaction("Salary", 50000, Kind::Income),
        ];

        let totals = spending_by_category(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(&15000));
        assert_eq!(totals.get("Transport"), Some(&3000));
        assert_eq!(totals.get("Salary"), None, "Income categories are excluded");
    }

    #[test]
    fn test_spending_excludes_income_in_same_category() {
        // A refund recorded as income under "Food" must not offset spending
        let transactions = vec![
            make_transaction("Food", 10000, Kind::Expense),
            make_transaction("Food", 2000, Kind::Income),
        ];

        let totals = spending_by_category(&transactions);
        assert_eq!(totals.get("Food"), Some(&10000));
    }
}
