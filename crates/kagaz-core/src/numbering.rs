//! # Invoice Numbering
//!
//! Formats invoice numbers from a seller prefix, a calendar date, and the
//! per-day sequence counter.
//!
//! ## Format
//! - `PREFIX`: seller-configured, e.g. `INV`
//! - `YYYYMMDD`: the invoice date
//! - `NN`: sequence within the day, zero-padded to at least 2 digits
//!
//! ## Example
//! `INV2026013107` is the 7th invoice issued on 2026-01-31.
//!
//! The sequence value itself comes from the injected counter store; this
//! module only formats. Padding is minimum width, so a day that somehow
//! reaches a three-digit sequence keeps a unique number instead of
//! wrapping.

use chrono::NaiveDate;

/// Formats an invoice number: prefix + `YYYYMMDD` + zero-padded sequence.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use kagaz_core::numbering::format_invoice_number;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(format_invoice_number("INV", date, 7), "INV2026013107");
/// ```
pub fn format_invoice_number(prefix: &str, date: NaiveDate, seq: u32) -> String {
    format!("{}{}{:02}", prefix, date.format("%Y%m%d"), seq)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_basic_format() {
        assert_eq!(
            format_invoice_number("INV", date(2026, 1, 31), 1),
            "INV2026013101"
        );
    }

    #[test]
    fn test_single_digit_month_and_day_are_padded() {
        assert_eq!(
            format_invoice_number("INV", date(2026, 3, 5), 12),
            "INV2026030512"
        );
    }

    #[test]
    fn test_sequence_padding_is_minimum_width() {
        assert_eq!(
            format_invoice_number("INV", date(2026, 1, 31), 9),
            "INV2026013109"
        );
        // A 3-digit sequence widens rather than truncating.
        assert_eq!(
            format_invoice_number("INV", date(2026, 1, 31), 100),
            "INV20260131100"
        );
    }

    #[test]
    fn test_prefix_passthrough() {
        assert_eq!(
            format_invoice_number("ACME", date(2025, 12, 1), 3),
            "ACME2025120103"
        );
    }
}
