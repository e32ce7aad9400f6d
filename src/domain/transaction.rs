use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Cents;

/// Format in which dates are entered and displayed.
pub const ENTRY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Canonical timestamp form used in the persisted store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded financial event. Transactions are immutable once created;
/// there are no edit or delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Entry date normalized to midnight (only a date is supplied on add)
    pub timestamp: NaiveDateTime,
    /// Free-form label (e.g., "Groceries", "Salary")
    pub category: String,
    /// Amount in cents, currency-agnostic magnitude
    pub amount_cents: Cents,
    /// Income/expense discriminator
    pub kind: Kind,
}

impl Transaction {
    pub fn new(category: impl Into<String>, amount_cents: Cents, kind: Kind, date: NaiveDate) -> Self {
        Self {
            timestamp: date.and_time(NaiveTime::MIN),
            category: category.into(),
            amount_cents,
            kind,
        }
    }

    /// Entry date in DD-MM-YYYY display form.
    pub fn entry_date(&self) -> String {
        self.timestamp.format(ENTRY_DATE_FORMAT).to_string()
    }
}

/// Parse a user-entered date in DD-MM-YYYY form.
/// Rejects dates that don't exist on the calendar (e.g. "31-02-2024").
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ENTRY_DATE_FORMAT).ok()
}
