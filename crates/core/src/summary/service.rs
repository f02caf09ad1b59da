//! Summary aggregation logic.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{MonthlyEntry, SummaryReport, TransactionKind, TransactionRecord};

/// Maximum number of months kept in the monthly series.
const MONTHLY_SERIES_LIMIT: usize = 12;

/// Rounds a top-level total to 2 decimal places at the reporting boundary.
fn round_total(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates a user's transactions into a [`SummaryReport`].
///
/// Pure and deterministic: input order does not matter, and the same input
/// always produces the same report. Empty input yields an all-zero report.
///
/// Only the three top-level totals are rounded; per-category and per-month
/// sums stay unrounded. Income transactions never appear in the category
/// breakdown.
#[must_use]
pub fn summarize(transactions: &[TransactionRecord]) -> SummaryReport {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut category_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut monthly: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

    for tx in transactions {
        let bucket = monthly
            .entry(tx.occurred_at.format("%Y-%m").to_string())
            .or_default();

        match tx.kind {
            TransactionKind::Income => {
                total_income += tx.amount;
                bucket.0 += tx.amount;
            }
            TransactionKind::Expense => {
                total_expense += tx.amount;
                bucket.1 += tx.amount;
                *category_breakdown.entry(tx.category.clone()).or_default() += tx.amount;
            }
        }
    }

    // BTreeMap iterates keys in ascending order, and lexicographic order of
    // zero-padded "YYYY-MM" keys is chronological. Keep the most recent 12.
    let skip = monthly.len().saturating_sub(MONTHLY_SERIES_LIMIT);
    let monthly_series = monthly
        .into_iter()
        .skip(skip)
        .map(|(month, (income, expense))| MonthlyEntry {
            month,
            income,
            expense,
        })
        .collect();

    SummaryReport {
        total_income: round_total(total_income),
        total_expense: round_total(total_expense),
        balance: round_total(total_income - total_expense),
        category_breakdown,
        monthly_series,
        transaction_count: transactions.len(),
    }
}
