//! # Totals Calculator
//!
//! Per-row and invoice-level totals for the items table.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Totals Computation                                  │
//! │                                                                         │
//! │  LineItem { rate: "1000", quantity: "2", gst: true }                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  taxable_amount = rate × quantity          = 2000.00                   │
//! │  tax_amount     = taxable × 0.18 (if gst)  =  360.00                   │
//! │  line_total     = taxable + tax            = 2360.00                   │
//! │       │                                                                 │
//! │       ▼  accumulate in item order                                       │
//! │  taxable_subtotal += taxable_amount                                     │
//! │  tax_subtotal     += tax_amount                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  grand_total() = taxable_subtotal + tax_subtotal                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64?
//! Rates and quantities arrive as free-form decimal text and totals are
//! rounded to two decimals only at display time. Accumulated drift over a
//! 100-row invoice stays far below the half-paisa display threshold.
//!
//! ## Grand Total Invariant
//! `grand_total == taxable_subtotal + tax_subtotal` must hold exactly, so
//! there is exactly one accumulation path: the grand total is *derived*
//! from the two subtotals instead of being summed independently from the
//! per-row totals (float addition is not associative).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::LineItem;
use crate::GST_RATE;

// =============================================================================
// Row Breakdown
// =============================================================================

/// The derived amounts for one items-table row.
///
/// Never stored: recomputed fresh on every export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineBreakdown {
    /// rate × quantity, before tax.
    pub taxable_amount: f64,

    /// 18% of the taxable amount when the item's GST flag is set, else 0.
    pub tax_amount: f64,

    /// taxable_amount + tax_amount.
    pub line_total: f64,
}

impl LineBreakdown {
    fn for_item(item: &LineItem) -> Self {
        let taxable_amount = item.parsed_rate() * item.parsed_quantity();
        let tax_amount = if item.gst {
            taxable_amount * GST_RATE
        } else {
            0.0
        };

        LineBreakdown {
            taxable_amount,
            tax_amount,
            line_total: taxable_amount + tax_amount,
        }
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Invoice-level running totals.
///
/// Only the two subtotals are stored; see [`InvoiceTotals::grand_total`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceTotals {
    /// Sum of all taxable amounts, in item order.
    pub taxable_subtotal: f64,

    /// Sum of all GST amounts, in item order.
    pub tax_subtotal: f64,
}

impl InvoiceTotals {
    /// The invoice grand total.
    ///
    /// Derived, not accumulated: `taxable_subtotal + tax_subtotal` by
    /// definition, so the identity can never drift.
    #[inline]
    pub fn grand_total(&self) -> f64 {
        self.taxable_subtotal + self.tax_subtotal
    }
}

/// Result of a full totals pass: one breakdown per row plus the totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TotalsComputation {
    /// Per-row breakdowns, parallel to the input items.
    pub lines: Vec<LineBreakdown>,

    /// Invoice-level totals.
    pub totals: InvoiceTotals,
}

// =============================================================================
// Computation
// =============================================================================

/// Computes per-row and invoice-level totals for an ordered item list.
///
/// ## Contract
/// - Pure: no side effects, input is not mutated, same input gives the
///   same output.
/// - Tolerant: unparsable rate/quantity fields contribute 0 (see
///   [`LineItem`]); an empty list yields all-zero totals.
/// - Summation runs in the given item order.
pub fn compute_totals(items: &[LineItem]) -> TotalsComputation {
    let mut lines = Vec::with_capacity(items.len());
    let mut totals = InvoiceTotals::default();

    for item in items {
        let line = LineBreakdown::for_item(item);
        totals.taxable_subtotal += line.taxable_amount;
        totals.tax_subtotal += line.tax_amount;
        lines.push(line);
    }

    TotalsComputation { lines, totals }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rate: &str, quantity: &str, gst: bool) -> LineItem {
        LineItem {
            description: String::new(),
            rate: rate.to_string(),
            quantity: quantity.to_string(),
            gst,
        }
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn test_untaxed_row() {
        let computed = compute_totals(&[item("250", "4", false)]);

        assert_eq!(computed.lines.len(), 1);
        let row = computed.lines[0];
        assert!((row.taxable_amount - 1000.0).abs() < EPS);
        assert_eq!(row.tax_amount, 0.0);
        assert!((row.line_total - 1000.0).abs() < EPS);
    }

    #[test]
    fn test_taxed_row_applies_18_percent() {
        let computed = compute_totals(&[item("1000", "2", true)]);

        let row = computed.lines[0];
        assert!((row.taxable_amount - 2000.0).abs() < EPS);
        assert!((row.tax_amount - 360.0).abs() < EPS);
        assert!((row.line_total - 2000.0 * 1.18).abs() < EPS);
    }

    #[test]
    fn test_mixed_items_accumulate_in_order() {
        let computed = compute_totals(&[
            item("100", "1", true),
            item("50", "2", false),
            item("9.99", "3", true),
        ]);

        let expected_taxable = 100.0 + 100.0 + 9.99 * 3.0;
        let expected_tax = 100.0 * GST_RATE + (9.99 * 3.0) * GST_RATE;

        assert!((computed.totals.taxable_subtotal - expected_taxable).abs() < EPS);
        assert!((computed.totals.tax_subtotal - expected_tax).abs() < EPS);
    }

    #[test]
    fn test_grand_total_is_structural() {
        // The identity holds by construction for any input, including
        // fractional rates that do not round-trip in binary.
        let computed = compute_totals(&[
            item("0.1", "3", true),
            item("19.99", "7", true),
            item("33.33", "11", false),
        ]);

        let t = computed.totals;
        assert_eq!(t.grand_total(), t.taxable_subtotal + t.tax_subtotal);
    }

    #[test]
    fn test_unparsable_fields_contribute_nothing() {
        let computed = compute_totals(&[
            item("abc", "5", true),
            item("100", "", true),
            item("100", "2", true),
        ]);

        // Only the last row carries a value.
        assert_eq!(computed.lines[0].taxable_amount, 0.0);
        assert_eq!(computed.lines[1].taxable_amount, 0.0);
        assert!((computed.totals.taxable_subtotal - 200.0).abs() < EPS);
        assert!((computed.totals.tax_subtotal - 36.0).abs() < EPS);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let computed = compute_totals(&[]);

        assert!(computed.lines.is_empty());
        assert_eq!(computed.totals.taxable_subtotal, 0.0);
        assert_eq!(computed.totals.tax_subtotal, 0.0);
        assert_eq!(computed.totals.grand_total(), 0.0);
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let items = vec![item("12.5", "4", true), item("7", "3", false)];
        let snapshot = items.clone();

        let first = compute_totals(&items);
        let second = compute_totals(&items);

        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }
}
