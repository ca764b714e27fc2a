//! # Domain Types
//!
//! Core domain types used throughout Kagaz.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   InvoiceForm   │   │    LineItem     │   │  InvoiceStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  number         │   │  description    │   │  NotPaid        │       │
//! │  │  dates, status  │   │  rate (text)    │   │  Paid           │       │
//! │  │  addresses      │   │  quantity (text)│   └─────────────────┘       │
//! │  │  items[]        │   │  gst (flag)     │                             │
//! │  └─────────────────┘   └─────────────────┘   ┌─────────────────┐       │
//! │                                               │  DaySequence    │       │
//! │                                               │  ─────────────  │       │
//! │                                               │  date           │       │
//! │                                               │  next_seq       │       │
//! │                                               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tolerant Numeric Fields
//! `LineItem.rate` and `LineItem.quantity` are the raw text the user typed
//! into the form. Parsing is tolerant: empty, unparsable, or non-finite
//! input coerces to `0.0` and is never an error. Free-text form fields are
//! routinely mid-edit when a recompute fires.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// A single line item as supplied by the invoice form.
///
/// Items have no identity beyond their position in the list: the form
/// displays the ordinal as the serial number and deletes by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Free-text description shown in the items table.
    pub description: String,

    /// Unit rate as entered (raw text, parsed tolerantly).
    pub rate: String,

    /// Quantity as entered (raw text, parsed tolerantly).
    pub quantity: String,

    /// Whether 18% GST applies to this item.
    pub gst: bool,
}

impl LineItem {
    /// An empty row, as the form shows before the user types anything.
    pub fn empty() -> Self {
        LineItem {
            description: String::new(),
            rate: String::new(),
            quantity: String::new(),
            gst: false,
        }
    }

    /// The rate parsed as a number, `0.0` when empty or unparsable.
    #[inline]
    pub fn parsed_rate(&self) -> f64 {
        parse_or_zero(&self.rate)
    }

    /// The quantity parsed as a number, `0.0` when empty or unparsable.
    #[inline]
    pub fn parsed_quantity(&self) -> f64 {
        parse_or_zero(&self.quantity)
    }
}

/// Tolerant numeric parse for user-typed form fields.
///
/// Non-finite parses ("NaN", "inf") also coerce to zero so a poisoned
/// field cannot propagate through the running totals.
fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// =============================================================================
// Invoice Status
// =============================================================================

/// Payment status selected on the form and stamped on the document.
///
/// Wire values match the form's select options exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InvoiceStatus {
    /// Invoice issued, payment outstanding.
    #[serde(rename = "NOT PAID")]
    NotPaid,
    /// Payment received in full.
    #[serde(rename = "PAID")]
    Paid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::NotPaid
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::NotPaid => write!(f, "NOT PAID"),
            InvoiceStatus::Paid => write!(f, "PAID"),
        }
    }
}

// =============================================================================
// Invoice Form
// =============================================================================

/// The full form state the frontend submits for an export.
///
/// Addresses are kept as the raw multiline text of their textareas; the
/// document builder splits them into lines for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceForm {
    /// Pre-filled invoice number (prefix + date + sequence).
    pub invoice_number: String,

    /// Invoice date as ISO text (`YYYY-MM-DD`).
    pub invoice_date: String,

    /// Due date as ISO text, may be empty.
    pub invoice_due_date: String,

    /// Payment status.
    pub status: InvoiceStatus,

    /// Customer block (name, phone, email, GSTIN, ...), multiline.
    pub customer_details: String,

    /// Billing address, multiline.
    pub billing_address: String,

    /// Shipping address, multiline.
    pub shipping_address: String,

    /// Ordered line items.
    pub items: Vec<LineItem>,
}

impl InvoiceForm {
    /// Re-initialized form state handed back after a successful export.
    ///
    /// Carries the next invoice number and today's date; everything else
    /// is reset to the blank single-row state the form starts from.
    pub fn fresh(invoice_number: impl Into<String>, date: NaiveDate) -> Self {
        InvoiceForm {
            invoice_number: invoice_number.into(),
            invoice_date: date.to_string(),
            invoice_due_date: String::new(),
            status: InvoiceStatus::NotPaid,
            customer_details: String::new(),
            billing_address: String::new(),
            shipping_address: String::new(),
            items: vec![LineItem::empty()],
        }
    }

    /// True when any item on the form has GST enabled.
    ///
    /// Drives the 5-column vs 6-column items table layout.
    pub fn has_gst(&self) -> bool {
        self.items.iter().any(|item| item.gst)
    }
}

// =============================================================================
// Day Sequence
// =============================================================================

/// The per-day counter value persisted by the sequence store.
///
/// Keyed by calendar date; a date with no row reads as `next_seq = 1`,
/// which is how the counter "resets" at midnight without any scheduled
/// job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DaySequence {
    /// Calendar date the counter belongs to.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Sequence number the next export on this date will use.
    pub next_seq: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_zero_tolerates_garbage() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("   "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("12abc"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
    }

    #[test]
    fn test_parse_or_zero_accepts_numbers() {
        assert_eq!(parse_or_zero("42"), 42.0);
        assert_eq!(parse_or_zero(" 10.5 "), 10.5);
        assert_eq!(parse_or_zero("0"), 0.0);
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::NotPaid).unwrap(),
            "\"NOT PAID\""
        );
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Paid).unwrap(),
            "\"PAID\""
        );
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::NotPaid);
    }

    #[test]
    fn test_fresh_form_is_blank_single_row() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let form = InvoiceForm::fresh("INV2026013102", date);

        assert_eq!(form.invoice_number, "INV2026013102");
        assert_eq!(form.invoice_date, "2026-01-31");
        assert_eq!(form.invoice_due_date, "");
        assert_eq!(form.status, InvoiceStatus::NotPaid);
        assert_eq!(form.items, vec![LineItem::empty()]);
        assert!(!form.has_gst());
    }

    #[test]
    fn test_has_gst_any_item() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let mut form = InvoiceForm::fresh("INV", date);
        assert!(!form.has_gst());

        form.items.push(LineItem {
            description: "Hosting".to_string(),
            rate: "500".to_string(),
            quantity: "1".to_string(),
            gst: true,
        });
        assert!(form.has_gst());
    }
}
