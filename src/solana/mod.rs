// src/solana/mod.rs

pub mod client;
pub mod commitment;
pub mod error;
pub mod pubkey;

pub use client::SolanaRpcClient;
pub use commitment::Commitment;
pub use error::RpcError;
pub use pubkey::Pubkey;
