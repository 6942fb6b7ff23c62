//! # Binary/Text Codec
//!
//! WebAuthn servers ship byte fields (challenges, user ids, credential ids)
//! as URL-safe base64 with the padding stripped, and expect authenticator
//! output back in the same form. This module is the single place where that
//! conversion happens.
//!
//! The two functions form an exact round trip:
//! - `decode(encode(b)) == b` for every byte sequence `b`
//! - `encode(decode(t)) == t` for every valid unpadded URL-safe string `t`

use base64::prelude::*;

use crate::error::{ClientError, ClientResult};

/// Decode an unpadded URL-safe base64 string into raw bytes.
///
/// Rejects padded input, invalid lengths, and characters outside the
/// URL-safe alphabet with [`ClientError::Format`].
pub fn decode(text: &str) -> ClientResult<Vec<u8>> {
    BASE64_URL_SAFE_NO_PAD
        .decode(text.as_bytes())
        .map_err(|e| ClientError::Format(format!("invalid base64url value '{text}': {e}")))
}

/// Encode raw bytes as unpadded URL-safe base64. Total: never fails.
pub fn encode(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bytes() {
        for bytes in [
            vec![],
            vec![0u8],
            vec![1, 2, 3],
            vec![0xff, 0xfe, 0xfd, 0xfc],
            (0u8..=255).collect::<Vec<_>>(),
        ] {
            assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
        }
    }

    #[test]
    fn round_trips_canonical_text() {
        for text in ["", "AQID", "CQk", "Bwc", "_-8", "BAUG"] {
            assert_eq!(encode(&decode(text).unwrap()), text);
        }
    }

    #[test]
    fn uses_url_safe_alphabet_without_padding() {
        // 0xfb 0xff encodes to "+/8=" in standard base64
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(decode("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn rejects_standard_alphabet_characters() {
        assert!(matches!(decode("+/8"), Err(ClientError::Format(_))));
    }

    #[test]
    fn rejects_padded_input() {
        assert!(matches!(decode("AQ=="), Err(ClientError::Format(_))));
    }

    #[test]
    fn rejects_invalid_length() {
        // A single base64 symbol can never describe whole bytes
        assert!(matches!(decode("A"), Err(ClientError::Format(_))));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(matches!(decode("A Q!"), Err(ClientError::Format(_))));
    }
}
