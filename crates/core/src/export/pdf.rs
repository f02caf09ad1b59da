//! Paginated PDF report renderer.
//!
//! Renders a title, a summary block, and a bordered transaction table onto
//! US Letter pages using the builtin Helvetica fonts. Rows flow onto
//! additional pages automatically when the cursor passes the bottom margin.

// Page geometry runs on f32 millimetres; monetary values never enter this
// arithmetic (they are formatted to text first).
#![allow(clippy::float_arithmetic)]

use chrono::NaiveDate;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use super::error::ExportError;
use super::format::{format_currency, truncate_description};
use crate::summary::types::{SummaryReport, TransactionRecord};

// US Letter
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;

const MM_PER_INCH: f32 = 25.4;

/// Fixed column widths in inches: Date, Type, Category, Amount, Description.
const COLUMN_WIDTHS_IN: [f32; 5] = [1.2, 1.0, 1.2, 1.2, 2.4];

/// Left margin centers the 7in table on the page.
const MARGIN_MM: f32 = 19.05;

const ROW_HEIGHT_MM: f32 = 7.0;
const CELL_PADDING_MM: f32 = 1.8;
const TITLE_SIZE: f32 = 18.0;
const HEADER_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 9.0;
const SUMMARY_SIZE: f32 = 11.0;
const BORDER_THICKNESS: f32 = 0.4;

const TABLE_HEADERS: [&str; 5] = ["Date", "Type", "Category", "Amount", "Description"];

fn table_width_mm() -> f32 {
    COLUMN_WIDTHS_IN.iter().sum::<f32>() * MM_PER_INCH
}

fn header_fill() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}

fn header_text() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None))
}

fn body_fill() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.86, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Draws one table row (background, grid borders, cell text) with its top
/// edge at `top` millimetres from the page bottom.
fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    cells: &[String; 5],
    top: f32,
    fill: &Color,
    text_color: &Color,
    font_size: f32,
) {
    let bottom = top - ROW_HEIGHT_MM;

    layer.set_fill_color(fill.clone());
    layer.add_rect(
        Rect::new(
            Mm(MARGIN_MM),
            Mm(bottom),
            Mm(MARGIN_MM + table_width_mm()),
            Mm(top),
        )
        .with_mode(PaintMode::Fill),
    );

    layer.set_outline_color(black());
    layer.set_outline_thickness(BORDER_THICKNESS);
    let mut x = MARGIN_MM;
    for width_in in COLUMN_WIDTHS_IN {
        let width = width_in * MM_PER_INCH;
        layer.add_rect(
            Rect::new(Mm(x), Mm(bottom), Mm(x + width), Mm(top)).with_mode(PaintMode::Stroke),
        );
        x += width;
    }

    layer.set_fill_color(text_color.clone());
    let baseline = bottom + 2.2;
    let mut x = MARGIN_MM + CELL_PADDING_MM;
    for (cell, width_in) in cells.iter().zip(COLUMN_WIDTHS_IN) {
        layer.use_text(cell.clone(), font_size, Mm(x), Mm(baseline), font);
        x += width_in * MM_PER_INCH;
    }
}

fn row_cells(tx: &TransactionRecord) -> [String; 5] {
    [
        tx.occurred_at.format("%Y-%m-%d").to_string(),
        tx.kind.capitalized().to_string(),
        tx.category.clone(),
        format_currency(tx.amount),
        tx.description
            .as_deref()
            .map(truncate_description)
            .unwrap_or_default(),
    ]
}

/// Renders the transaction report as PDF bytes.
///
/// Transactions are written in input order (callers pass them date
/// descending). The summary block reuses the aggregator's rounded totals;
/// `report_date` is printed as the report date and is passed in so rendering
/// stays deterministic.
///
/// # Errors
///
/// Returns `ExportError::Pdf` if the layout engine cannot produce output.
pub fn render_report(
    owner_name: &str,
    transactions: &[TransactionRecord],
    summary: &SummaryReport,
    report_date: NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Transaction Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM - 6.0;

    layer.set_fill_color(black());
    layer.use_text(
        format!("Transaction Report - {owner_name}"),
        TITLE_SIZE,
        Mm(MARGIN_MM),
        Mm(cursor),
        &bold,
    );
    cursor -= 12.0;

    let summary_lines = [
        format!("Total Income: {}", format_currency(summary.total_income)),
        format!("Total Expense: {}", format_currency(summary.total_expense)),
        format!("Balance: {}", format_currency(summary.balance)),
        format!("Report Date: {}", report_date.format("%Y-%m-%d")),
    ];
    for line in summary_lines {
        layer.use_text(line, SUMMARY_SIZE, Mm(MARGIN_MM), Mm(cursor), &font);
        cursor -= 6.0;
    }
    cursor -= 4.0;

    let headers = TABLE_HEADERS.map(String::from);
    draw_row(
        &layer,
        &bold,
        &headers,
        cursor,
        &header_fill(),
        &header_text(),
        HEADER_SIZE,
    );
    cursor -= ROW_HEIGHT_MM;

    for tx in transactions {
        if cursor - ROW_HEIGHT_MM < MARGIN_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            cursor = PAGE_HEIGHT_MM - MARGIN_MM - ROW_HEIGHT_MM;
        }
        draw_row(
            &layer,
            &font,
            &row_cells(tx),
            cursor,
            &body_fill(),
            &black(),
            BODY_SIZE,
        );
        cursor -= ROW_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}
