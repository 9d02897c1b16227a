//! Arbitrary-precision base-36 encoding.
//!
//! Tracking numbers are derived from a 256-bit digest, which exceeds any
//! native integer width, so the encoder works directly on a big-endian
//! byte slice using schoolbook long division.

/// Digit alphabet: `0-9` then `A-Z`, most significant digit first.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a big-endian unsigned integer as a base-36 string.
///
/// No leading-zero digit is ever emitted; the value zero (including an
/// empty or all-zero input) encodes as `"0"`.
///
/// # Examples
///
/// ```
/// use tracking_number_service::utils::base36::encode_bytes;
///
/// assert_eq!(encode_bytes(&[0]), "0");
/// assert_eq!(encode_bytes(&[35]), "Z");
/// assert_eq!(encode_bytes(&[36]), "10");
/// ```
pub fn encode_bytes(bytes: &[u8]) -> String {
    // Strip leading zero bytes up front so the division loop terminates
    // on the true magnitude.
    let mut digits: Vec<u8> = bytes.iter().skip_while(|&&b| b == 0).copied().collect();

    if digits.is_empty() {
        return "0".to_string();
    }

    let mut encoded: Vec<u8> = Vec::new();

    while !digits.is_empty() {
        let mut quotient: Vec<u8> = Vec::with_capacity(digits.len());
        let mut remainder: u32 = 0;

        for &byte in &digits {
            let acc = remainder * 256 + byte as u32;
            let q = acc / 36;
            remainder = acc % 36;

            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }

        encoded.push(ALPHABET[remainder as usize]);
        digits = quotient;
    }

    encoded.iter().rev().map(|&d| d as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent reference for inputs that fit in a u128.
    fn reference_encode(mut n: u128) -> String {
        if n == 0 {
            return "0".to_string();
        }
        let mut out = Vec::new();
        while n > 0 {
            out.push(ALPHABET[(n % 36) as usize]);
            n /= 36;
        }
        out.reverse();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_bytes(&[]), "0");
        assert_eq!(encode_bytes(&[0]), "0");
        assert_eq!(encode_bytes(&[0, 0, 0, 0]), "0");
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode_bytes(&[1]), "1");
        assert_eq!(encode_bytes(&[9]), "9");
        assert_eq!(encode_bytes(&[10]), "A");
        assert_eq!(encode_bytes(&[35]), "Z");
    }

    #[test]
    fn test_encode_carries_into_second_digit() {
        assert_eq!(encode_bytes(&[36]), "10");
        assert_eq!(encode_bytes(&[37]), "11");
        assert_eq!(encode_bytes(&[71]), "1Z");
        assert_eq!(encode_bytes(&[72]), "20");
    }

    #[test]
    fn test_leading_zero_bytes_are_ignored() {
        assert_eq!(encode_bytes(&[0, 0, 36]), "10");
        assert_eq!(encode_bytes(&[0, 1]), encode_bytes(&[1]));
    }

    #[test]
    fn test_matches_reference_for_u64_values() {
        for n in [
            0u64,
            1,
            35,
            36,
            1295,
            1296,
            123_456_789,
            u32::MAX as u64,
            u64::MAX,
        ] {
            let bytes = n.to_be_bytes();
            assert_eq!(
                encode_bytes(&bytes),
                reference_encode(n as u128),
                "mismatch for {n}"
            );
        }
    }

    #[test]
    fn test_matches_reference_for_u128_values() {
        for n in [u64::MAX as u128 + 1, u128::MAX / 7, u128::MAX] {
            let bytes = n.to_be_bytes();
            assert_eq!(encode_bytes(&bytes), reference_encode(n), "mismatch for {n}");
        }
    }

    #[test]
    fn test_alphabet_is_uppercase_alphanumeric() {
        let encoded = encode_bytes(&[0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe]);
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_no_leading_zero_digit() {
        // 256-bit-sized input with a small leading byte still starts with
        // a non-zero digit.
        let mut bytes = [0u8; 32];
        bytes[31] = 37;
        let encoded = encode_bytes(&bytes);
        assert!(!encoded.starts_with('0'));
        assert_eq!(encoded, "11");
    }
}
