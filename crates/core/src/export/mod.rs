//! Document export: transaction history to downloadable byte streams.
//!
//! Two independent renderers consume the same date-descending transaction
//! list and produce fully in-memory documents:
//! - `excel` - two-sheet spreadsheet workbook (Transactions + Summary)
//! - `pdf` - paginated tabular report with a summary block
//!
//! Rendering is atomic: either a complete document is produced or an error
//! is returned, never partial bytes.

pub mod error;
pub mod excel;
pub mod format;
pub mod pdf;


pub use error::ExportError;
pub use excel::render_workbook;
pub use format::{ExportFormat, format_currency, truncate_description};
pub use pdf::render_report;
