//! Seed-based code synthesis and EAN-13 to UPC-A conversion.
//!
//! A seed is any source identifier, typically a SKU, used to mint a
//! deterministic check-digit-valid code for a product that has no
//! authoritative barcode. Derivation is total: degenerate seeds (empty,
//! no digits at all) still yield a well-formed code.

use crate::checksum::{ean13_check_unchecked, upca_check_unchecked, EAN13_LEN, UPCA_LEN};
use crate::error::BarcodeError;

/// GS1 country prefix for codes minted in Mexico (the 750-759 block).
pub const MEXICO_GS1_PREFIX: &str = "750";

/// Seed digits in an EAN-13 payload, after the 3-digit country prefix.
const EAN13_SEED_DIGITS: usize = 9;
/// Seed digits in a UPC-A payload; there is no prefix segment.
const UPCA_SEED_DIGITS: usize = 11;

/// Derives a valid EAN-13 from `seed` under [`MEXICO_GS1_PREFIX`].
///
/// See [`ean13_from_seed_with_prefix`] for the mechanics.
#[must_use]
pub fn ean13_from_seed(seed: &str) -> String {
    mint_ean13(MEXICO_GS1_PREFIX, seed)
}

/// Derives a valid EAN-13 from `seed` under an explicit country prefix.
///
/// Decimal digits are extracted from `seed` in order, left-padded with
/// `'0'` or truncated from the right to exactly 9 digits, appended to the
/// prefix, and capped with the computed check digit. A seed with no
/// digits yields the degenerate but valid `<prefix>000000000<check>`.
///
/// # Errors
///
/// Returns [`BarcodeError::CountryPrefix`] if `country_prefix` is not
/// exactly 3 decimal digits.
pub fn ean13_from_seed_with_prefix(
    seed: &str,
    country_prefix: &str,
) -> Result<String, BarcodeError> {
    if country_prefix.len() != 3 || !country_prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::CountryPrefix {
            prefix: country_prefix.to_string(),
        });
    }
    Ok(mint_ean13(country_prefix, seed))
}

/// Derives a valid UPC-A from `seed`: digit extraction to an 11-digit
/// payload plus the computed check digit, no prefix segment.
#[must_use]
pub fn upca_from_seed(seed: &str) -> String {
    let mut code = seed_digits(seed, UPCA_SEED_DIGITS);
    code.push(upca_check_unchecked(&code));
    code
}

/// Re-expresses an EAN-13 as a UPC-A code.
///
/// Returns `None` unless `ean13` is exactly 13 decimal digits. A code
/// starting with `'0'` is a UPC-A value re-encoded under EAN-13, so the
/// leading zero is dropped and the check digit carries over still valid.
/// Any other code has no lossless UPC-A form; the first 12 digits are
/// returned unchanged, matching the historical exporter, and will
/// generally fail [`crate::is_valid_upca`] — callers that care must
/// re-validate the result.
#[must_use]
pub fn upca_from_ean13(ean13: &str) -> Option<String> {
    if ean13.len() != EAN13_LEN || !ean13.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match ean13.strip_prefix('0') {
        Some(rest) => Some(rest.to_string()),
        None => Some(ean13[..UPCA_LEN].to_string()),
    }
}

fn mint_ean13(prefix: &str, seed: &str) -> String {
    let mut code = String::with_capacity(EAN13_LEN);
    code.push_str(prefix);
    code.push_str(&seed_digits(seed, EAN13_SEED_DIGITS));
    code.push(ean13_check_unchecked(&code));
    code
}

/// Extracts decimal digits from `seed` in left-to-right order, left-padded
/// with `'0'` or truncated from the right to exactly `target_len`.
fn seed_digits(seed: &str, target_len: usize) -> String {
    let digits: String = seed
        .chars()
        .filter(char::is_ascii_digit)
        .take(target_len)
        .collect();
    if digits.len() < target_len {
        let mut padded = "0".repeat(target_len - digits.len());
        padded.push_str(&digits);
        padded
    } else {
        digits
    }
}
