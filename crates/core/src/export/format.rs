//! Export format selection and shared text formatting.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum description length in the PDF table before truncation.
const DESCRIPTION_LIMIT: usize = 30;

/// Target document format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Spreadsheet workbook (`.xlsx`).
    Excel,
    /// Paginated PDF report.
    Pdf,
}

impl ExportFormat {
    /// Returns the MIME type for the rendered document.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
        }
    }

    /// Returns the file extension without a leading dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    /// Builds the download file name, e.g. `transactions_20240115.xlsx`.
    #[must_use]
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("transactions_{}.{}", date.format("%Y%m%d"), self.extension())
    }
}

/// Formats a monetary amount as `$`-prefixed, 2-decimal, thousands-separated
/// text, e.g. `$1,234.50`. Negative amounts render as `$-1,234.50`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), format!("{frac:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}.{frac_part}")
}

/// Truncates a description to its first 30 characters, appending `...` when
/// longer. Counts characters, not bytes, so multi-byte text never splits.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let head: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(5), "$5.00")]
    #[case(dec!(50.5), "$50.50")]
    #[case(dec!(1000), "$1,000.00")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(-1234.5), "$-1,234.50")]
    fn test_format_currency(#[case] amount: rust_decimal::Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[test]
    fn test_truncate_at_limit_unchanged() {
        let exactly_30 = "a".repeat(30);
        assert_eq!(truncate_description(&exactly_30), exactly_30);
    }

    #[test]
    fn test_truncate_over_limit() {
        let exactly_31 = "b".repeat(31);
        let truncated = truncate_description(&exactly_31);
        assert_eq!(truncated, format!("{}...", "b".repeat(30)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let wide = "é".repeat(31);
        let truncated = truncate_description(&wide);
        assert_eq!(truncated, format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            ExportFormat::Excel.file_name(date),
            "transactions_20240115.xlsx"
        );
        assert_eq!(
            ExportFormat::Pdf.file_name(date),
            "transactions_20240115.pdf"
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            ExportFormat::Excel.content_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
    }
}
