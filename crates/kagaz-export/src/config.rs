//! # Export Configuration
//!
//! Seller-side configuration stamped onto every exported document.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KAGAZ_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no locking is
//! needed: the export path clones blocks out of it per document.

use serde::{Deserialize, Serialize};

use kagaz_core::document::{BankBlock, SellerBlock};
use kagaz_core::validation::validate_invoice_prefix;
use kagaz_core::ValidationResult;

/// Seller configuration for invoice exports.
///
/// The defaults are development placeholders; a real deployment sets
/// every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Prefix embedded at the front of every invoice number.
    pub invoice_prefix: String,

    /// Legal seller name printed in the document header.
    pub seller_name: String,

    /// Seller address lines.
    pub seller_address: Vec<String>,

    /// Seller contact email.
    pub seller_email: String,

    /// Seller contact phone.
    pub seller_phone: String,

    /// Seller GST identification number.
    pub seller_gstin: String,

    /// Bank name for the payment-instructions block.
    pub bank_name: String,

    /// Account holder name.
    pub account_name: String,

    /// Account number.
    pub account_number: String,

    /// IFSC branch code.
    pub ifsc: String,

    /// Closing line printed at the bottom of the document.
    pub footer_note: String,
}

impl Default for ExportConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ExportConfig {
            invoice_prefix: "INV".to_string(),
            seller_name: "Kagaz Dev Seller".to_string(),
            seller_address: vec![
                "1 Example Street".to_string(),
                "Bengaluru-560001".to_string(),
                "KARNATAKA, INDIA".to_string(),
            ],
            seller_email: "billing@example.test".to_string(),
            seller_phone: "9000000000".to_string(),
            seller_gstin: "29AAAAA0000A1Z5".to_string(),
            bank_name: "Example Bank".to_string(),
            account_name: "Kagaz Dev Seller".to_string(),
            account_number: "000000000000".to_string(),
            ifsc: "EXMP0000001".to_string(),
            footer_note: "Thank you for your business.".to_string(),
        }
    }
}

impl ExportConfig {
    /// Creates an ExportConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KAGAZ_INVOICE_PREFIX`: Override the invoice-number prefix
    /// - `KAGAZ_SELLER_NAME`: Override the seller name
    /// - `KAGAZ_SELLER_GSTIN`: Override the GSTIN
    pub fn from_env() -> Self {
        let mut config = ExportConfig::default();

        if let Ok(prefix) = std::env::var("KAGAZ_INVOICE_PREFIX") {
            config.invoice_prefix = prefix;
        }

        if let Ok(name) = std::env::var("KAGAZ_SELLER_NAME") {
            config.seller_name = name;
        }

        if let Ok(gstin) = std::env::var("KAGAZ_SELLER_GSTIN") {
            config.seller_gstin = gstin;
        }

        config
    }

    /// Validates the configuration. Called by the export service on
    /// construction so a bad prefix fails fast instead of on the first
    /// export.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_invoice_prefix(&self.invoice_prefix)
    }

    /// The seller header block for the document builder.
    pub fn seller_block(&self) -> SellerBlock {
        SellerBlock {
            name: self.seller_name.clone(),
            address_lines: self.seller_address.clone(),
            email: self.seller_email.clone(),
            phone: self.seller_phone.clone(),
            gstin: self.seller_gstin.clone(),
        }
    }

    /// The bank details block for the document builder.
    pub fn bank_block(&self) -> BankBlock {
        BankBlock {
            bank_name: self.bank_name.clone(),
            account_name: self.account_name.clone(),
            account_number: self.account_number.clone(),
            ifsc: self.ifsc.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_prefix_fails_validation() {
        let config = ExportConfig {
            invoice_prefix: "IN V".to_string(),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blocks_mirror_config() {
        let config = ExportConfig::default();

        let seller = config.seller_block();
        assert_eq!(seller.name, config.seller_name);
        assert_eq!(seller.gstin, config.seller_gstin);

        let bank = config.bank_block();
        assert_eq!(bank.ifsc, config.ifsc);
    }
}
