//! Check-digit codec for UPC-A and EAN-13 retail barcodes.
//!
//! This crate is pure and stateless: computing and validating check
//! digits, minting deterministic codes from arbitrary seed identifiers
//! (SKUs), and converting between the two symbologies via the GS1
//! leading-zero convention. No I/O, no shared state, no blocking — every
//! function is safe to call concurrently from any thread.
//!
//! Codes are plain `String`s of decimal digits; a code is never mutated
//! in place, and any correction produces a new value.

pub mod checksum;
pub mod derive;
pub mod error;

pub use checksum::{
    ean13_check_digit, is_valid_ean13, is_valid_upca, upca_check_digit, EAN13_LEN,
    EAN13_PAYLOAD_LEN, UPCA_LEN, UPCA_PAYLOAD_LEN,
};
pub use derive::{
    ean13_from_seed, ean13_from_seed_with_prefix, upca_from_ean13, upca_from_seed,
    MEXICO_GS1_PREFIX,
};
pub use error::{BarcodeError, Symbology};
