//! # Export Service
//!
//! Orchestrates one invoice export end to end.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Export Flow                                      │
//! │                                                                         │
//! │  Form submits InvoiceForm                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate item count                                                │
//! │  2. store.current(today) ──► sequence number                           │
//! │  3. format invoice number (prefix + YYYYMMDD + NN)                     │
//! │  4. compute_totals (pure)                                              │
//! │  5. build_document (pure, includes amount-in-words)                    │
//! │  6. store.put(today, seq + 1)  ◄── only after the document exists      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ExportOutcome { document ──► renderer, fresh_form ──► form }          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each export is independent and reentrant: all state lives in the
//! arguments and the injected store, and the computation runs to
//! completion in one call.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use kagaz_core::document::{build_document, InvoiceDocument};
use kagaz_core::numbering::format_invoice_number;
use kagaz_core::totals::compute_totals;
use kagaz_core::types::InvoiceForm;
use kagaz_core::validation::validate_item_count;

use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::store::SequenceStore;

/// Everything a completed export hands back to its collaborators.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Render-ready document content for the PDF collaborator.
    pub document: InvoiceDocument,

    /// Re-initialized form state (next number, today's date, one blank
    /// row) handed back to the form collaborator.
    pub fresh_form: InvoiceForm,
}

/// The export orchestrator.
///
/// Generic over the counter store so production (SQLite) and tests
/// (in-memory) use the same code path.
#[derive(Debug)]
pub struct ExportService<S: SequenceStore> {
    store: S,
    config: ExportConfig,
}

impl<S: SequenceStore> ExportService<S> {
    /// Creates a service over a counter store.
    ///
    /// Validates the configuration up front so a bad invoice prefix
    /// fails here rather than on the first export.
    pub fn new(store: S, config: ExportConfig) -> ExportResult<Self> {
        config.validate()?;
        Ok(ExportService { store, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The invoice number the next export on `today` would get.
    ///
    /// Used by the form to pre-fill its read-only number field on load.
    /// Does not consume a sequence number.
    pub async fn peek_invoice_number(&self, today: NaiveDate) -> ExportResult<String> {
        let seq = self.store.current(today).await?;
        Ok(format_invoice_number(
            &self.config.invoice_prefix,
            today,
            seq,
        ))
    }

    /// Exports an invoice dated by the local calendar day.
    pub async fn export(&self, form: &InvoiceForm) -> ExportResult<ExportOutcome> {
        self.export_on(form, Local::now().date_naive()).await
    }

    /// Exports an invoice for an explicit calendar day.
    ///
    /// The date parameter exists so callers (and tests) control the day
    /// the sequence counter is keyed by; `today` drives the invoice
    /// number while the document keeps the form's own invoice date.
    pub async fn export_on(
        &self,
        form: &InvoiceForm,
        today: NaiveDate,
    ) -> ExportResult<ExportOutcome> {
        debug!(items = form.items.len(), date = %today, "Export requested");

        validate_item_count(form.items.len())?;

        let seq = self.store.current(today).await?;
        let number = format_invoice_number(&self.config.invoice_prefix, today, seq);

        let computation = compute_totals(&form.items);
        let document = build_document(
            form,
            &computation,
            &number,
            &self.config.seller_block(),
            &self.config.bank_block(),
            &self.config.footer_note,
        );

        // Write-back happens only once the document exists: a failed
        // export never consumes a sequence number.
        self.store.put(today, seq + 1).await?;

        let next_number = format_invoice_number(&self.config.invoice_prefix, today, seq + 1);
        let fresh_form = InvoiceForm::fresh(next_number, today);

        info!(
            number = %document.number,
            grand_total = document.totals.totals.grand_total(),
            items = form.items.len(),
            "Invoice exported"
        );

        Ok(ExportOutcome {
            document,
            fresh_form,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySequenceStore;
    use kagaz_core::types::LineItem;
    use kagaz_core::MAX_INVOICE_ITEMS;

    fn service() -> ExportService<InMemorySequenceStore> {
        ExportService::new(InMemorySequenceStore::new(), ExportConfig::default()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
    }

    fn form_with_one_item() -> InvoiceForm {
        let mut form = InvoiceForm::fresh("INV2026013101", today());
        form.items = vec![LineItem {
            description: "Consulting".to_string(),
            rate: "1000".to_string(),
            quantity: "2".to_string(),
            gst: true,
        }];
        form
    }

    #[test]
    fn test_bad_prefix_rejected_at_construction() {
        let config = ExportConfig {
            invoice_prefix: String::new(),
            ..ExportConfig::default()
        };
        assert!(ExportService::new(InMemorySequenceStore::new(), config).is_err());
    }

    #[tokio::test]
    async fn test_peek_does_not_consume_a_number() {
        let service = service();

        assert_eq!(
            service.peek_invoice_number(today()).await.unwrap(),
            "INV2026013101"
        );
        assert_eq!(
            service.peek_invoice_number(today()).await.unwrap(),
            "INV2026013101"
        );
    }

    #[tokio::test]
    async fn test_export_bumps_counter_and_resets_form() {
        let service = service();
        let form = form_with_one_item();

        let outcome = service.export_on(&form, today()).await.unwrap();
        assert_eq!(outcome.document.number, "INV2026013101");

        // Fresh form carries the next number and a single blank row.
        assert_eq!(outcome.fresh_form.invoice_number, "INV2026013102");
        assert_eq!(outcome.fresh_form.items, vec![LineItem::empty()]);

        // Second export the same day picks up the bumped sequence.
        let second = service.export_on(&form, today()).await.unwrap();
        assert_eq!(second.document.number, "INV2026013102");
    }

    #[tokio::test]
    async fn test_export_does_not_mutate_input() {
        let service = service();
        let form = form_with_one_item();
        let snapshot = form.clone();

        service.export_on(&form, today()).await.unwrap();
        assert_eq!(form, snapshot);
    }

    #[tokio::test]
    async fn test_document_carries_config_and_totals() {
        let service = service();
        let outcome = service
            .export_on(&form_with_one_item(), today())
            .await
            .unwrap();

        let doc = &outcome.document;
        assert_eq!(doc.seller.name, "Kagaz Dev Seller");
        assert_eq!(doc.bank.bank_name, "Example Bank");
        assert_eq!(doc.totals.total_inr, "INR 2360.00");
        assert_eq!(
            doc.total_in_words,
            "Indian Rupee Two Thousand Three Hundred and Sixty Only"
        );
    }

    #[tokio::test]
    async fn test_empty_item_list_exports_zero_totals() {
        let service = service();
        let mut form = InvoiceForm::fresh("INV2026013101", today());
        form.items.clear();

        let outcome = service.export_on(&form, today()).await.unwrap();
        assert!(outcome.document.items.rows.is_empty());
        assert_eq!(outcome.document.totals.total_inr, "INR 0.00");
        assert_eq!(outcome.document.total_in_words, "Indian Rupee Zero Only");
    }

    #[tokio::test]
    async fn test_oversized_form_is_rejected_without_consuming_a_number() {
        let service = service();
        let mut form = form_with_one_item();
        form.items = vec![LineItem::empty(); MAX_INVOICE_ITEMS + 1];

        assert!(service.export_on(&form, today()).await.is_err());
        assert_eq!(
            service.peek_invoice_number(today()).await.unwrap(),
            "INV2026013101"
        );
    }
}
