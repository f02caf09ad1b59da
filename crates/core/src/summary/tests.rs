//! Unit and property tests for summary aggregation.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::service::summarize;
use super::types::{TransactionKind, TransactionRecord};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn tx(
    kind: TransactionKind,
    category: &str,
    amount: Decimal,
    occurred_at: DateTime<Utc>,
) -> TransactionRecord {
    TransactionRecord {
        id: Uuid::new_v4(),
        kind,
        category: category.to_string(),
        amount,
        description: None,
        occurred_at,
    }
}

#[test]
fn test_empty_input_is_all_zero() {
    let report = summarize(&[]);

    assert_eq!(report.total_income, Decimal::ZERO);
    assert_eq!(report.total_expense, Decimal::ZERO);
    assert_eq!(report.balance, Decimal::ZERO);
    assert!(report.category_breakdown.is_empty());
    assert!(report.monthly_series.is_empty());
    assert_eq!(report.transaction_count, 0);
}

#[test]
fn test_worked_example() {
    let transactions = vec![
        tx(
            TransactionKind::Income,
            "Salary",
            dec!(1000),
            date(2024, 1, 15),
        ),
        tx(
            TransactionKind::Expense,
            "Food",
            dec!(50),
            date(2024, 1, 20),
        ),
        tx(TransactionKind::Expense, "Food", dec!(30), date(2024, 2, 1)),
    ];

    let report = summarize(&transactions);

    assert_eq!(report.total_income, dec!(1000));
    assert_eq!(report.total_expense, dec!(80));
    assert_eq!(report.balance, dec!(920));
    assert_eq!(report.transaction_count, 3);

    assert_eq!(report.category_breakdown.len(), 1);
    assert_eq!(report.category_breakdown["Food"], dec!(80));

    assert_eq!(report.monthly_series.len(), 2);
    assert_eq!(report.monthly_series[0].month, "2024-01");
    assert_eq!(report.monthly_series[0].income, dec!(1000));
    assert_eq!(report.monthly_series[0].expense, dec!(50));
    assert_eq!(report.monthly_series[1].month, "2024-02");
    assert_eq!(report.monthly_series[1].income, Decimal::ZERO);
    assert_eq!(report.monthly_series[1].expense, dec!(30));
}

#[test]
fn test_income_never_enters_category_breakdown() {
    let transactions = vec![
        tx(
            TransactionKind::Income,
            "Salary",
            dec!(500),
            date(2024, 3, 1),
        ),
        tx(
            TransactionKind::Income,
            "Food",
            dec!(25),
            date(2024, 3, 2),
        ),
    ];

    let report = summarize(&transactions);

    assert!(report.category_breakdown.is_empty());
    assert_eq!(report.total_income, dec!(525));
}

#[test]
fn test_series_truncated_to_last_12_months() {
    // 15 months of data, one expense each
    let transactions: Vec<_> = (0u32..15)
        .map(|i| {
            tx(
                TransactionKind::Expense,
                "Rent",
                dec!(100),
                date(2023 + i32::try_from(i / 12).unwrap(), (i % 12) + 1, 5),
            )
        })
        .collect();

    let report = summarize(&transactions);

    assert_eq!(report.monthly_series.len(), 12);
    // 15 months starting 2023-01: the series keeps 2023-04 .. 2024-03
    assert_eq!(report.monthly_series[0].month, "2023-04");
    assert_eq!(report.monthly_series[11].month, "2024-03");
}

#[test]
fn test_totals_rounded_but_breakdown_unrounded() {
    let transactions = vec![
        tx(
            TransactionKind::Expense,
            "Fees",
            dec!(0.125),
            date(2024, 1, 1),
        ),
        tx(
            TransactionKind::Expense,
            "Fees",
            dec!(0.001),
            date(2024, 1, 2),
        ),
    ];

    let report = summarize(&transactions);

    // Top-level total rounds 0.126 half-away-from-zero to 0.13
    assert_eq!(report.total_expense, dec!(0.13));
    assert_eq!(report.balance, dec!(-0.13));
    // Per-category and per-month sums keep full precision
    assert_eq!(report.category_breakdown["Fees"], dec!(0.126));
    assert_eq!(report.monthly_series[0].expense, dec!(0.126));
}

#[test]
fn test_input_order_is_irrelevant() {
    let mut transactions = vec![
        tx(TransactionKind::Income, "A", dec!(10), date(2024, 2, 1)),
        tx(TransactionKind::Expense, "B", dec!(4), date(2024, 1, 1)),
        tx(TransactionKind::Expense, "B", dec!(6), date(2024, 3, 1)),
    ];

    let forward = summarize(&transactions);
    transactions.reverse();
    let backward = summarize(&transactions);

    assert_eq!(forward, backward);
}

prop_compose! {
    fn arb_transaction()(
        is_income in any::<bool>(),
        cents in 1i64..10_000_000,
        category in 0usize..5,
        month_offset in 0u32..30,
        day in 1u32..28,
    ) -> TransactionRecord {
        let categories = ["Food", "Rent", "Travel", "Health", "Other"];
        let kind = if is_income {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        tx(
            kind,
            categories[category],
            Decimal::new(cents, 2),
            date(2022 + i32::try_from(month_offset / 12).unwrap(), (month_offset % 12) + 1, day),
        )
    }
}

proptest! {
    /// The balance always equals total income minus total expense, and the
    /// rounded totals match rounding the unrounded sums.
    #[test]
    fn prop_balance_identity(transactions in prop::collection::vec(arb_transaction(), 0..60)) {
        let income: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expense: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        let report = summarize(&transactions);

        prop_assert_eq!(report.balance, report.total_income - report.total_expense);
        prop_assert_eq!(report.total_income, income.round_dp(2));
        prop_assert_eq!(report.total_expense, expense.round_dp(2));
        prop_assert_eq!(report.transaction_count, transactions.len());
    }

    /// Category breakdown values sum to the unrounded total expense.
    #[test]
    fn prop_breakdown_sums_to_expense(transactions in prop::collection::vec(arb_transaction(), 0..60)) {
        let expense: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        let report = summarize(&transactions);

        let breakdown_sum: Decimal = report.category_breakdown.values().copied().sum();
        prop_assert_eq!(breakdown_sum, expense);
    }

    /// The monthly series never exceeds 12 entries and is strictly ascending.
    #[test]
    fn prop_series_bounded_and_ascending(transactions in prop::collection::vec(arb_transaction(), 0..60)) {
        let report = summarize(&transactions);

        prop_assert!(report.monthly_series.len() <= 12);
        for pair in report.monthly_series.windows(2) {
            prop_assert!(pair[0].month < pair[1].month);
        }
    }

    /// Aggregation is idempotent over immutable input.
    #[test]
    fn prop_idempotent(transactions in prop::collection::vec(arb_transaction(), 0..40)) {
        prop_assert_eq!(summarize(&transactions), summarize(&transactions));
    }
}
