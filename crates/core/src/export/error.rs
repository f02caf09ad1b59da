//! Export pipeline error types.

use thiserror::Error;

/// Errors that can occur while rendering export documents.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The spreadsheet engine failed to produce a workbook.
    #[error("spreadsheet rendering failed: {0}")]
    Spreadsheet(String),

    /// The PDF layout engine failed to produce a document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}
