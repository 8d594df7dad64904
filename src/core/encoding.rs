/*!
Hex encoding and content-hash validation.

`encode_hex` always produces lowercase output; `decode_hex` accepts
either case. `looks_like_hex_hash` is a purely syntactic check and
only accepts the lowercase form.
*/

use hex::FromHexError;

use crate::core::error::{Error, Result};

/// Encode bytes as lowercase hex, two digits per byte
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => Error::InvalidHex {
            position: index,
            found: c,
        },
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            Error::OddHexLength(s.len())
        }
    })
}

/// Check whether `s` looks like a lowercase hex digest
///
/// True iff `s` is non-empty, of even length, and made only of `0-9a-f`.
pub fn looks_like_hex_hash(s: &str) -> bool {
    s.len() >= 2
        && s.len() % 2 == 0
        && s.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0x00]), "00");
        assert_eq!(encode_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(encode_hex(&[0x0a, 0xff, 0x10]), "0aff10");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("ABCD").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_decode_hex_errors() {
        assert!(matches!(decode_hex("abc"), Err(Error::OddHexLength(3))));

        match decode_hex("00zz") {
            Err(Error::InvalidHex { position, found }) => {
                assert_eq!(position, 2);
                assert_eq!(found, 'z');
            }
            other => panic!("Expected InvalidHex error, got {:?}", other),
        }

        match decode_hex("0g") {
            Err(Error::InvalidHex { position, .. }) => assert_eq!(position, 1),
            other => panic!("Expected InvalidHex error, got {:?}", other),
        }
    }

    #[test]
    fn test_odd_length_reported_before_bad_digits() {
        assert!(matches!(decode_hex("zzz"), Err(Error::OddHexLength(3))));
    }

    #[test]
    fn test_decode_error_messages() {
        let err = decode_hex("0x").unwrap_err();
        assert!(err.to_string().contains('x'), "{}", err);
    }

    #[test]
    fn test_looks_like_hex_hash() {
        assert!(!looks_like_hex_hash(""));
        assert!(!looks_like_hex_hash("a"));
        assert!(looks_like_hex_hash("ab"));
        assert!(!looks_like_hex_hash("AB"));
        assert!(!looks_like_hex_hash("abc"));
        assert!(!looks_like_hex_hash("0x12"));
        assert!(looks_like_hex_hash("0123456789abcdef"));
    }
}
