// src/config.rs

use std::env;

use anyhow::{Context, Result};
use url::Url;

use crate::solana::Commitment;

/// Public mainnet endpoint used when SOLANA_RPC_URL is unset.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    /// Solana JSON-RPC endpoint.
    pub rpc_url: Url,
    /// Commitment applied when a tool call does not override it.
    pub commitment: Commitment,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let raw_url = env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let rpc_url = Url::parse(&raw_url)
            .with_context(|| format!("SOLANA_RPC_URL is not a valid URL: {}", raw_url))?;

        let commitment = env::var("SOLANA_COMMITMENT")
            .map(Commitment::new)
            .unwrap_or_default();

        Ok(Config {
            rpc_url,
            commitment,
        })
    }
}
