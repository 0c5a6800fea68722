//! Product records as produced by the catalog collectors, and the
//! enrichment pass that normalizes their barcode identifier fields.
//!
//! Check-digit arithmetic is delegated to [`tiendadb_barcode`]; this
//! module decides which of keep / correct / derive applies to the codes
//! already present on a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tiendadb_barcode::{
    ean13_from_seed_with_prefix, is_valid_ean13, is_valid_upca, upca_check_digit, upca_from_seed,
    BarcodeError, UPCA_LEN, UPCA_PAYLOAD_LEN,
};

/// A product document as scraped from a retail storefront.
///
/// Field names match the JSON written by the collection scripts, so
/// existing catalog dumps load without renaming. Unknown fields in older
/// dumps are ignored on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    /// Retail chain the record came from, e.g. `"Chedraui"`.
    pub store: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Current shelf price in `currency` units.
    #[serde(default)]
    pub price: f64,
    /// ISO 4217 code; the Mexican catalogs all use `"MXN"`. Older dumps
    /// omit it, in which case batch commands fill the configured default.
    #[serde(default)]
    pub currency: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Raw vendor-supplied barcode, kept exactly as received (Chedraui
    /// `ean`, La Comer `art_ean`, Papelerias Tony `item_ean`).
    #[serde(default)]
    pub source_barcode: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub ean13: Option<String>,
    pub scraped_at: DateTime<Utc>,
}

fn default_available() -> bool {
    true
}

impl ProductRecord {
    /// Returns `true` if the `upc` field holds a valid UPC-A code.
    #[must_use]
    pub fn has_valid_upc(&self) -> bool {
        self.upc.as_deref().is_some_and(is_valid_upca)
    }

    /// Returns `true` if the `ean13` field holds a valid EAN-13 code.
    #[must_use]
    pub fn has_valid_ean13(&self) -> bool {
        self.ean13.as_deref().is_some_and(is_valid_ean13)
    }
}

/// What the enrichment pass did to one barcode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// The existing code was already valid and was left alone.
    Kept,
    /// The existing code had the right shape but a wrong check digit;
    /// the check digit was recomputed.
    Corrected,
    /// The code was missing or unusable and was minted from the SKU.
    Derived,
}

/// Per-record result of [`ensure_barcodes`], for caller-side counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOutcome {
    pub upc: FieldAction,
    pub ean13: FieldAction,
}

/// Normalizes the `upc` and `ean13` fields of `record` in place.
///
/// - A valid existing code is kept. Vendor-authoritative codes survive
///   re-runs unchanged.
/// - A `upc` that is 12 digits with a wrong check digit is corrected by
///   recomputing over its first 11 digits.
/// - Anything else (absent, wrong length, non-digit) is replaced with a
///   code minted from the SKU; the `ean13` is minted under
///   `country_prefix`.
///
/// After a successful return both fields are `Some` and pass validation,
/// even for a digit-free SKU (which yields the degenerate all-zero
/// payload).
///
/// # Errors
///
/// Returns [`BarcodeError::CountryPrefix`] if `country_prefix` is not
/// exactly 3 decimal digits. The prefix is checked before any field is
/// touched, so a failed call leaves the record unmodified.
pub fn ensure_barcodes(
    record: &mut ProductRecord,
    country_prefix: &str,
) -> Result<EnrichOutcome, BarcodeError> {
    // Minting up front validates the prefix even when the EAN-13 field
    // ends up being kept.
    let minted_ean13 = ean13_from_seed_with_prefix(&record.sku, country_prefix)?;

    let upc = match record.upc.take() {
        Some(code) if is_valid_upca(&code) => {
            record.upc = Some(code);
            FieldAction::Kept
        }
        Some(code) if code.len() == UPCA_LEN && code.bytes().all(|b| b.is_ascii_digit()) => {
            let mut corrected = code[..UPCA_PAYLOAD_LEN].to_string();
            corrected.push(upca_check_digit(&corrected)?);
            record.upc = Some(corrected);
            FieldAction::Corrected
        }
        _ => {
            record.upc = Some(upca_from_seed(&record.sku));
            FieldAction::Derived
        }
    };

    let ean13 = match record.ean13.take() {
        Some(code) if is_valid_ean13(&code) => {
            record.ean13 = Some(code);
            FieldAction::Kept
        }
        _ => {
            record.ean13 = Some(minted_ean13);
            FieldAction::Derived
        }
    };

    Ok(EnrichOutcome { upc, ean13 })
}
