use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const PUBKEY_BYTES: usize = 32;

/// SPL Token program id, the default filter for token-account queries.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePubkeyError {
    #[error("invalid base58 encoding: {0}")]
    Encoding(String),
    #[error("decoded public key is {0} bytes, expected {PUBKEY_BYTES}")]
    Length(usize),
}

/// An account or program address: 32 bytes, base58 in text form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| ParsePubkeyError::Encoding(e.to_string()))?;
        let len = bytes.len();
        let bytes: [u8; PUBKEY_BYTES] =
            bytes.try_into().map_err(|_| ParsePubkeyError::Length(len))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

    #[test]
    fn round_trips_base58() {
        let key: Pubkey = TOKEN_PROGRAM_ID.parse().unwrap();
        assert_eq!(key.to_string(), TOKEN_PROGRAM_ID);
    }

    #[test]
    fn system_program_is_all_zeroes() {
        let key: Pubkey = SYSTEM_PROGRAM.parse().unwrap();
        assert_eq!(key.0, [0u8; PUBKEY_BYTES]);
    }

    #[test]
    fn rejects_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are not base58 characters
        let err = "0OIl".parse::<Pubkey>().unwrap_err();
        assert!(matches!(err, ParsePubkeyError::Encoding(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "abc".parse::<Pubkey>().unwrap_err();
        assert!(matches!(err, ParsePubkeyError::Length(_)));
    }

    #[test]
    fn serializes_as_base58_string() {
        let key: Pubkey = TOKEN_PROGRAM_ID.parse().unwrap();
        assert_eq!(
            serde_json::to_value(key).unwrap(),
            serde_json::json!(TOKEN_PROGRAM_ID)
        );
    }
}
