use thiserror::Error;

/// Barcode symbology named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    UpcA,
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "EAN-13"),
            Symbology::UpcA => write!(f, "UPC-A"),
        }
    }
}

/// Errors returned by the check-digit and derivation operations.
///
/// Every variant is a caller contract violation on fixed-length input.
/// None are transient; retrying never helps. Validation predicates return
/// `false` instead of erroring, and seed derivation normalizes arbitrary
/// seeds, so only `compute`-style entry points surface these.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// Payload had the wrong number of characters.
    #[error("{symbology} payload must be exactly {expected} digits, got {actual}")]
    PayloadLength {
        symbology: Symbology,
        expected: usize,
        actual: usize,
    },

    /// Payload contained a character outside `0-9`.
    #[error("{symbology} payload has non-digit {found:?} at position {position}")]
    PayloadNonDigit {
        symbology: Symbology,
        found: char,
        position: usize,
    },

    /// Country prefix for EAN-13 derivation was not exactly 3 digits.
    #[error("invalid country prefix {prefix:?}: expected exactly 3 decimal digits")]
    CountryPrefix { prefix: String },
}
