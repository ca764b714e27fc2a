//! # Document Assembly
//!
//! Builds the complete, render-ready content of an invoice document.
//!
//! The renderer is an external collaborator that only lays values out on
//! a page. Everything it needs arrives here as plain structured data:
//! this module knows nothing about page geometry, fonts, or image assets,
//! and the renderer performs no arithmetic of its own.
//!
//! ## Table Layout Switch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  any item has GST?                                                      │
//! │                                                                         │
//! │  YES → 6 columns: S.No │ Description │ Rate │ Quantity │ Taxable │ Total│
//! │        taxed rows get a "GST: 18%" second line under the description    │
//! │                                                                         │
//! │  NO  → 5 columns: S.No │ Description │ Rate │ Quantity │ Total          │
//! │        totals block collapses to the grand total only                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Money is formatted to two decimals only here, at the display boundary;
//! the underlying totals stay full-precision f64.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::totals::{InvoiceTotals, TotalsComputation};
use crate::types::{InvoiceForm, InvoiceStatus};
use crate::words::amount_to_words;
use crate::GST_RATE_LABEL;

// =============================================================================
// Document Blocks
// =============================================================================

/// Seller identity block shown in the document header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SellerBlock {
    /// Legal seller name.
    pub name: String,

    /// Address lines, rendered one per line.
    pub address_lines: Vec<String>,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,

    /// GST identification number.
    pub gstin: String,
}

/// Bank details block for payment instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BankBlock {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
}

/// One row of the items table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemRow {
    /// Ordinal position, 1-based.
    pub serial: u32,

    /// Description, with a `GST: 18%` second line on taxed rows when the
    /// table carries the tax column.
    pub description: String,

    /// Unit rate, two decimals.
    pub rate: String,

    /// Quantity, echoed without a trailing `.0`.
    pub quantity: String,

    /// Pre-tax amount, two decimals. Present only in the 6-column layout.
    pub taxable_amount: Option<String>,

    /// Row total including tax, two decimals.
    pub line_total: String,
}

/// The items table: headers plus formatted rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemsTable {
    /// Column headers, in render order.
    pub headers: Vec<String>,

    /// Formatted rows, parallel to the form's items.
    pub rows: Vec<ItemRow>,

    /// Whether the 6-column GST layout is in effect.
    pub has_gst: bool,
}

/// The totals summary block.
///
/// Carries both the raw totals (for any downstream arithmetic-free
/// display logic, e.g. hiding a zero line) and the formatted `INR x.xx`
/// strings the renderer prints verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalsBlock {
    /// Taxable subtotal line, present only in the GST layout.
    pub taxable_inr: Option<String>,

    /// GST subtotal line, present only in the GST layout.
    pub gst_inr: Option<String>,

    /// Grand total line, always present.
    pub total_inr: String,

    /// The underlying full-precision totals.
    pub totals: InvoiceTotals,
}

/// Everything the document renderer needs for one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDocument {
    /// Formatted invoice number (prefix + date + sequence).
    pub number: String,

    /// Invoice date as ISO text.
    pub invoice_date: String,

    /// Due date as ISO text, may be empty.
    pub invoice_due_date: String,

    /// Payment status; the renderer decides the badge styling.
    pub status: InvoiceStatus,

    pub seller: SellerBlock,

    /// Customer block split into lines.
    pub customer_lines: Vec<String>,

    /// Billing address split into lines.
    pub billing_lines: Vec<String>,

    /// Shipping address split into lines.
    pub shipping_lines: Vec<String>,

    pub items: ItemsTable,

    pub bank: BankBlock,

    pub totals: TotalsBlock,

    /// `Indian Rupee {words} Only`, from the rounded grand total.
    pub total_in_words: String,

    /// Closing line under the page rule.
    pub footer_note: String,
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Two-decimal display rounding. Applied only at this boundary.
fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// `INR`-prefixed amount for the totals block.
fn format_inr(value: f64) -> String {
    format!("INR {value:.2}")
}

/// Echoes a parsed quantity the way the form displayed it: integral
/// values without a decimal point, fractional values as-is.
fn format_quantity(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Splits a multiline textarea value into renderer lines.
fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

// =============================================================================
// Assembly
// =============================================================================

/// Assembles the render-ready document for one invoice.
///
/// Pure: the form and computation are read-only, and the same inputs
/// always produce the same document. `computation` must come from
/// [`crate::totals::compute_totals`] over `form.items`: the row count is
/// expected to match and extra rows on either side are ignored.
pub fn build_document(
    form: &InvoiceForm,
    computation: &TotalsComputation,
    invoice_number: &str,
    seller: &SellerBlock,
    bank: &BankBlock,
    footer_note: &str,
) -> InvoiceDocument {
    let has_gst = form.has_gst();

    let headers: Vec<String> = if has_gst {
        ["S.No", "Description", "Rate", "Quantity", "Taxable", "Total"]
            .map(String::from)
            .to_vec()
    } else {
        ["S.No", "Description", "Rate", "Quantity", "Total"]
            .map(String::from)
            .to_vec()
    };

    let rows: Vec<ItemRow> = form
        .items
        .iter()
        .zip(computation.lines.iter())
        .enumerate()
        .map(|(index, (item, line))| {
            let description = if has_gst && item.gst {
                format!("{}\nGST: {}", item.description, GST_RATE_LABEL)
            } else {
                item.description.clone()
            };

            ItemRow {
                serial: index as u32 + 1,
                description,
                rate: format_amount(item.parsed_rate()),
                quantity: format_quantity(item.parsed_quantity()),
                taxable_amount: has_gst.then(|| format_amount(line.taxable_amount)),
                line_total: format_amount(line.line_total),
            }
        })
        .collect();

    let totals = computation.totals;
    let totals_block = TotalsBlock {
        taxable_inr: has_gst.then(|| format_inr(totals.taxable_subtotal)),
        gst_inr: has_gst.then(|| format_inr(totals.tax_subtotal)),
        total_inr: format_inr(totals.grand_total()),
        totals,
    };

    // Fractional paise are not spelled out: words take the rounded total.
    let rounded_total = totals.grand_total().round() as u64;
    let total_in_words = format!("Indian Rupee {} Only", amount_to_words(rounded_total));

    InvoiceDocument {
        number: invoice_number.to_string(),
        invoice_date: form.invoice_date.clone(),
        invoice_due_date: form.invoice_due_date.clone(),
        status: form.status,
        seller: seller.clone(),
        customer_lines: split_lines(&form.customer_details),
        billing_lines: split_lines(&form.billing_address),
        shipping_lines: split_lines(&form.shipping_address),
        items: ItemsTable {
            headers,
            rows,
            has_gst,
        },
        bank: bank.clone(),
        totals: totals_block,
        total_in_words,
        footer_note: footer_note.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::compute_totals;
    use crate::types::LineItem;
    use chrono::NaiveDate;

    fn seller() -> SellerBlock {
        SellerBlock {
            name: "Acme Traders LLP".to_string(),
            address_lines: vec!["12 MG Road".to_string(), "Bengaluru-560001".to_string()],
            email: "billing@acme.example".to_string(),
            phone: "9800000000".to_string(),
            gstin: "29ABCDE1234F1Z5".to_string(),
        }
    }

    fn bank() -> BankBlock {
        BankBlock {
            bank_name: "State Bank".to_string(),
            account_name: "Acme Traders LLP".to_string(),
            account_number: "000111222333".to_string(),
            ifsc: "SBIN0000001".to_string(),
        }
    }

    fn form_with(items: Vec<LineItem>) -> InvoiceForm {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let mut form = InvoiceForm::fresh("INV2026013101", date);
        form.customer_details = "Ravi Kumar\nGSTIN: 33XYZAB1234C1Z9".to_string();
        form.billing_address = "4 Beach Road\nChennai".to_string();
        form.items = items;
        form
    }

    fn item(description: &str, rate: &str, quantity: &str, gst: bool) -> LineItem {
        LineItem {
            description: description.to_string(),
            rate: rate.to_string(),
            quantity: quantity.to_string(),
            gst,
        }
    }

    fn build(form: &InvoiceForm) -> InvoiceDocument {
        let computation = compute_totals(&form.items);
        build_document(
            form,
            &computation,
            &form.invoice_number,
            &seller(),
            &bank(),
            "Thank you for your business.",
        )
    }

    #[test]
    fn test_gst_layout_has_six_columns_and_annotation() {
        let form = form_with(vec![
            item("Consulting", "1000", "2", true),
            item("Stationery", "50", "4", false),
        ]);
        let doc = build(&form);

        assert!(doc.items.has_gst);
        assert_eq!(
            doc.items.headers,
            vec!["S.No", "Description", "Rate", "Quantity", "Taxable", "Total"]
        );

        // Taxed row: annotated description, taxable column present.
        let taxed = &doc.items.rows[0];
        assert_eq!(taxed.serial, 1);
        assert_eq!(taxed.description, "Consulting\nGST: 18%");
        assert_eq!(taxed.rate, "1000.00");
        assert_eq!(taxed.quantity, "2");
        assert_eq!(taxed.taxable_amount.as_deref(), Some("2000.00"));
        assert_eq!(taxed.line_total, "2360.00");

        // Untaxed row in a GST table: plain description, still 6 columns.
        let untaxed = &doc.items.rows[1];
        assert_eq!(untaxed.description, "Stationery");
        assert_eq!(untaxed.taxable_amount.as_deref(), Some("200.00"));
        assert_eq!(untaxed.line_total, "200.00");
    }

    #[test]
    fn test_plain_layout_has_five_columns() {
        let form = form_with(vec![item("Stationery", "50", "4", false)]);
        let doc = build(&form);

        assert!(!doc.items.has_gst);
        assert_eq!(
            doc.items.headers,
            vec!["S.No", "Description", "Rate", "Quantity", "Total"]
        );
        assert_eq!(doc.items.rows[0].taxable_amount, None);
        assert_eq!(doc.totals.taxable_inr, None);
        assert_eq!(doc.totals.gst_inr, None);
        assert_eq!(doc.totals.total_inr, "INR 200.00");
    }

    #[test]
    fn test_totals_block_in_gst_layout() {
        let form = form_with(vec![item("Consulting", "1000", "2", true)]);
        let doc = build(&form);

        assert_eq!(doc.totals.taxable_inr.as_deref(), Some("INR 2000.00"));
        assert_eq!(doc.totals.gst_inr.as_deref(), Some("INR 360.00"));
        assert_eq!(doc.totals.total_inr, "INR 2360.00");
        assert_eq!(doc.totals.totals.grand_total(), 2360.0);
    }

    #[test]
    fn test_words_line_uses_rounded_total() {
        let form = form_with(vec![item("Widget", "33.40", "1", false)]);
        let doc = build(&form);

        // 33.40 rounds to 33 for the words line.
        assert_eq!(doc.total_in_words, "Indian Rupee Thirty Three Only");
    }

    #[test]
    fn test_fractional_quantity_echoed() {
        let form = form_with(vec![item("Cable", "10", "2.5", false)]);
        let doc = build(&form);

        assert_eq!(doc.items.rows[0].quantity, "2.5");
        assert_eq!(doc.items.rows[0].line_total, "25.00");
    }

    #[test]
    fn test_address_splitting_and_metadata() {
        let form = form_with(vec![item("X", "1", "1", false)]);
        let doc = build(&form);

        assert_eq!(doc.number, "INV2026013101");
        assert_eq!(doc.invoice_date, "2026-01-31");
        assert_eq!(doc.status, InvoiceStatus::NotPaid);
        assert_eq!(
            doc.customer_lines,
            vec!["Ravi Kumar", "GSTIN: 33XYZAB1234C1Z9"]
        );
        assert_eq!(doc.billing_lines, vec!["4 Beach Road", "Chennai"]);
        assert!(doc.shipping_lines.is_empty());
        assert_eq!(doc.footer_note, "Thank you for your business.");
    }

    #[test]
    fn test_renderer_payload_shape() {
        // The renderer is a JS collaborator: field names are camelCase.
        let form = form_with(vec![item("Consulting", "1000", "2", true)]);
        let doc = build(&form);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["number"], "INV2026013101");
        assert_eq!(json["status"], "NOT PAID");
        assert_eq!(json["items"]["hasGst"], true);
        assert_eq!(json["items"]["rows"][0]["lineTotal"], "2360.00");
        assert_eq!(json["totals"]["totalInr"], "INR 2360.00");
        assert_eq!(json["totalInWords"], "Indian Rupee Two Thousand Three Hundred and Sixty Only");
    }
}
