//! Check-digit arithmetic for EAN-13 and UPC-A retail codes.
//!
//! Weighting follows GS1: counting positions 1-indexed from the left, odd
//! positions of an EAN-13 payload carry weight 1 and even positions weight
//! 3. UPC-A mirrors this (odd positions weight 3), which is why dropping
//! the leading zero of a UPC-in-EAN code leaves its check digit intact.
//! Both weights are coprime to 10, so every single-digit transcription
//! error changes the expected check digit.

use crate::error::{BarcodeError, Symbology};

/// Full length of an EAN-13 code.
pub const EAN13_LEN: usize = 13;
/// Full length of a UPC-A code.
pub const UPCA_LEN: usize = 12;
/// Payload digits preceding the EAN-13 check digit.
pub const EAN13_PAYLOAD_LEN: usize = EAN13_LEN - 1;
/// Payload digits preceding the UPC-A check digit.
pub const UPCA_PAYLOAD_LEN: usize = UPCA_LEN - 1;

/// Computes the EAN-13 check digit over the first 12 digits of a code.
///
/// # Errors
///
/// Returns [`BarcodeError::PayloadLength`] or
/// [`BarcodeError::PayloadNonDigit`] if `payload` is not exactly 12
/// decimal digits.
pub fn ean13_check_digit(payload: &str) -> Result<char, BarcodeError> {
    validate_payload(payload, Symbology::Ean13, EAN13_PAYLOAD_LEN)?;
    Ok(ean13_check_unchecked(payload))
}

/// Computes the UPC-A check digit over the first 11 digits of a code.
///
/// # Errors
///
/// Returns [`BarcodeError::PayloadLength`] or
/// [`BarcodeError::PayloadNonDigit`] if `payload` is not exactly 11
/// decimal digits.
pub fn upca_check_digit(payload: &str) -> Result<char, BarcodeError> {
    validate_payload(payload, Symbology::UpcA, UPCA_PAYLOAD_LEN)?;
    Ok(upca_check_unchecked(payload))
}

/// Returns `true` iff `code` is exactly 13 decimal digits and its final
/// digit matches the check digit computed over the first 12.
///
/// Total over all strings: malformed input is reported as invalid, never
/// as an error.
#[must_use]
pub fn is_valid_ean13(code: &str) -> bool {
    is_valid(code, EAN13_LEN, ean13_check_unchecked)
}

/// Returns `true` iff `code` is exactly 12 decimal digits and its final
/// digit matches the check digit computed over the first 11.
#[must_use]
pub fn is_valid_upca(code: &str) -> bool {
    is_valid(code, UPCA_LEN, upca_check_unchecked)
}

/// EAN-13 check digit for a payload already known to be ASCII digits.
pub(crate) fn ean13_check_unchecked(payload: &str) -> char {
    weighted_check(payload, 1, 3)
}

/// UPC-A check digit for a payload already known to be ASCII digits.
pub(crate) fn upca_check_unchecked(payload: &str) -> char {
    weighted_check(payload, 3, 1)
}

/// Weighted-sum check digit: digits at even 0-indexed positions are
/// weighted by `even_weight`, odd positions by `odd_weight`.
///
/// Callers guarantee `payload` is pure ASCII digits.
fn weighted_check(payload: &str, even_weight: u32, odd_weight: u32) -> char {
    let total: u32 = payload
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            let weight = if i % 2 == 0 { even_weight } else { odd_weight };
            digit * weight
        })
        .sum();
    let check = (10 - total % 10) % 10;
    // check < 10, so the conversion cannot fail.
    char::from_digit(check, 10).unwrap_or('0')
}

/// Validates `s` as exactly `expected_len` decimal digits.
///
/// Length is counted in characters so multi-byte input reports a sensible
/// position and count in the error.
fn validate_payload(s: &str, symbology: Symbology, expected_len: usize) -> Result<(), BarcodeError> {
    let actual = s.chars().count();
    if actual != expected_len {
        return Err(BarcodeError::PayloadLength {
            symbology,
            expected: expected_len,
            actual,
        });
    }
    for (position, found) in s.chars().enumerate() {
        if !found.is_ascii_digit() {
            return Err(BarcodeError::PayloadNonDigit {
                symbology,
                found,
                position,
            });
        }
    }
    Ok(())
}

fn is_valid(code: &str, expected_len: usize, compute: fn(&str) -> char) -> bool {
    if code.len() != expected_len || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (payload, check) = code.split_at(expected_len - 1);
    check.chars().next() == Some(compute(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vectors: 4006381333931 (EAN-13) and 036000291452 (UPC-A)
    // are the standard published examples for each symbology.

    #[test]
    fn ean13_check_digit_reference_vector() {
        assert_eq!(ean13_check_digit("400638133393").unwrap(), '1');
    }

    #[test]
    fn upca_check_digit_reference_vector() {
        assert_eq!(upca_check_digit("03600029145").unwrap(), '2');
    }

    #[test]
    fn ean13_check_digit_rejects_short_payload() {
        let err = ean13_check_digit("1234").unwrap_err();
        assert!(matches!(
            err,
            BarcodeError::PayloadLength {
                symbology: Symbology::Ean13,
                expected: 12,
                actual: 4,
            }
        ));
    }

    #[test]
    fn ean13_check_digit_rejects_non_digit() {
        let err = ean13_check_digit("40063813339x").unwrap_err();
        assert!(matches!(
            err,
            BarcodeError::PayloadNonDigit {
                found: 'x',
                position: 11,
                ..
            }
        ));
    }

    #[test]
    fn upca_check_digit_rejects_wrong_length() {
        let err = upca_check_digit("036000291452").unwrap_err();
        assert!(matches!(
            err,
            BarcodeError::PayloadLength {
                symbology: Symbology::UpcA,
                expected: 11,
                actual: 12,
            }
        ));
    }

    #[test]
    fn valid_ean13_accepted() {
        assert!(is_valid_ean13("4006381333931"));
    }

    #[test]
    fn valid_upca_accepted() {
        assert!(is_valid_upca("036000291452"));
    }

    #[test]
    fn ean13_wrong_check_digit_rejected() {
        assert!(!is_valid_ean13("4006381333930"));
    }

    #[test]
    fn upca_wrong_check_digit_rejected() {
        assert!(!is_valid_upca("036000291453"));
    }

    #[test]
    fn ean13_validation_rejects_short_input() {
        assert!(!is_valid_ean13("123"));
    }

    #[test]
    fn ean13_validation_rejects_letters() {
        assert!(!is_valid_ean13("12345678901ab"));
    }

    #[test]
    fn upca_validation_rejects_thirteen_digits() {
        assert!(!is_valid_upca("1234567890123"));
    }

    #[test]
    fn validation_rejects_empty_string() {
        assert!(!is_valid_ean13(""));
        assert!(!is_valid_upca(""));
    }

    #[test]
    fn validation_rejects_multibyte_input() {
        // Non-ASCII digit characters are not decimal digits here.
        assert!(!is_valid_ean13("४006381333931"));
    }

    #[test]
    fn check_digit_zero_when_total_divisible_by_ten() {
        // 750001000005: weighted total is 40, so the check digit is 0.
        assert_eq!(ean13_check_digit("750001000005").unwrap(), '0');
    }

    #[test]
    fn round_trip_ean13_payloads() {
        for payload in ["000000000000", "400638133393", "750123456789", "999999999999"] {
            let check = ean13_check_digit(payload).unwrap();
            assert!(is_valid_ean13(&format!("{payload}{check}")), "{payload}");
        }
    }

    #[test]
    fn round_trip_upca_payloads() {
        for payload in ["00000000000", "03600029145", "12345678901", "99999999999"] {
            let check = upca_check_digit(payload).unwrap();
            assert!(is_valid_upca(&format!("{payload}{check}")), "{payload}");
        }
    }
}
