//! Spreadsheet workbook renderer.
//!
//! Produces a two-sheet `.xlsx` workbook entirely in memory: `Transactions`
//! with one row per transaction in input order, and `Summary` with unrounded
//! totals recomputed from the transaction list itself. The summary sheet
//! deliberately does not reuse the aggregator's rounded report.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::error::ExportError;
use crate::summary::types::{TransactionKind, TransactionRecord};

const TRANSACTION_HEADERS: [&str; 5] = ["Date", "Type", "Category", "Amount", "Description"];

fn xlsx_err(e: XlsxError) -> ExportError {
    ExportError::Spreadsheet(e.to_string())
}

/// Cell values are numeric; `Decimal` amounts fit comfortably in an f64 at
/// spreadsheet precision.
fn cell_number(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

/// Renders the transaction history as workbook bytes.
///
/// Transactions are written in input order (callers pass them date
/// descending). An empty history produces a valid workbook with header rows
/// only.
///
/// # Errors
///
/// Returns `ExportError::Spreadsheet` if the workbook cannot be assembled.
pub fn render_workbook(transactions: &[TransactionRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Transactions").map_err(xlsx_err)?;

    for (col, header) in (0u16..).zip(TRANSACTION_HEADERS) {
        sheet
            .write_string_with_format(0, col, header, &header_format)
            .map_err(xlsx_err)?;
    }

    let mut row: u32 = 1;
    for tx in transactions {
        sheet
            .write_string(row, 0, tx.occurred_at.format("%Y-%m-%d").to_string())
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 1, tx.kind.capitalized())
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 2, tx.category.as_str())
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 3, cell_number(tx.amount))
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 4, tx.description.as_deref().unwrap_or(""))
            .map_err(xlsx_err)?;
        row += 1;
    }

    // Summary sheet recomputes unrounded totals from the list
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => total_income += tx.amount,
            TransactionKind::Expense => total_expense += tx.amount,
        }
    }

    let summary = workbook.add_worksheet();
    summary.set_name("Summary").map_err(xlsx_err)?;
    summary
        .write_string_with_format(0, 0, "Metric", &header_format)
        .map_err(xlsx_err)?;
    summary
        .write_string_with_format(0, 1, "Value", &header_format)
        .map_err(xlsx_err)?;

    let metrics = [
        ("Total Income", total_income),
        ("Total Expense", total_expense),
        ("Balance", total_income - total_expense),
    ];
    for (row, (metric, value)) in (1u32..).zip(metrics) {
        summary.write_string(row, 0, metric).map_err(xlsx_err)?;
        summary
            .write_number(row, 1, cell_number(value))
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}
