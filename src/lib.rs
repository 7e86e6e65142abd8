// src/lib.rs

pub mod config;
pub mod mcp;
pub mod solana;
pub mod tools;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Gateway to the configured Solana node
    pub rpc: solana::SolanaRpcClient,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let rpc = solana::SolanaRpcClient::new(config.rpc_url.clone(), config.commitment.clone());
        Self { config, rpc }
    }
}
