use thiserror::Error;

use super::pubkey::ParsePubkeyError;

/// Failure surface of the RPC gateway.
///
/// The classification is informational; the tool dispatcher flattens every
/// variant into a text result at its single error boundary.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Pubkey(#[from] ParsePubkeyError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Node { code: i64, message: String },
    #[error("malformed rpc response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, RpcError>;
