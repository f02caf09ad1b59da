//! Summary data types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction polarity: money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Returns the lowercase wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Returns the capitalized label used in rendered documents.
    #[must_use]
    pub const fn capitalized(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction as seen by aggregation and rendering.
///
/// This is a projection of the stored row; the store boundary has already
/// validated it (amount > 0, known kind).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Free-text category label.
    pub category: String,
    /// Positive amount, currency-agnostic.
    pub amount: Decimal,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Caller-supplied transaction date.
    pub occurred_at: DateTime<Utc>,
}

/// One month of accumulated income and expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    /// Zero-padded `YYYY-MM` key.
    pub month: String,
    /// Income sum for the month (unrounded).
    pub income: Decimal,
    /// Expense sum for the month (unrounded).
    pub expense: Decimal,
}

/// Derived financial summary, computed fresh on each request.
///
/// The three top-level totals are rounded to 2 decimal places at this
/// reporting boundary; per-category and per-month sums are left unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Sum of income amounts, rounded to 2 dp.
    pub total_income: Decimal,
    /// Sum of expense amounts, rounded to 2 dp.
    pub total_expense: Decimal,
    /// Income minus expense, rounded to 2 dp.
    pub balance: Decimal,
    /// Expense sum per category label. Income never contributes.
    #[serde(rename = "category_spending")]
    pub category_breakdown: BTreeMap<String, Decimal>,
    /// Chronologically ascending series, at most 12 months.
    #[serde(rename = "monthly_summary")]
    pub monthly_series: Vec<MonthlyEntry>,
    /// Number of transactions aggregated.
    pub transaction_count: usize,
}
