//! JSON-RPC gateway to a Solana node.
//!
//! One method per supported remote operation. Each method issues exactly one
//! HTTP POST carrying a JSON-RPC 2.0 payload and returns the response shaped
//! the way the corresponding tool reports it. No retries, no caching.

use chrono::{SecondsFormat, TimeZone, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use super::commitment::Commitment;
use super::error::{Result, RpcError};
use super::pubkey::{Pubkey, TOKEN_PROGRAM_ID};

pub const LAMPORTS_PER_SOL: f64 = 1e9;

/// Client bound to a single Solana JSON-RPC endpoint.
#[derive(Clone)]
pub struct SolanaRpcClient {
    http: Client,
    endpoint: Url,
    default_commitment: Commitment,
}

impl SolanaRpcClient {
    pub fn new(endpoint: Url, default_commitment: Commitment) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            default_commitment,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolves a per-call commitment override against the configured default.
    fn commitment<'a>(&'a self, requested: &'a Option<Commitment>) -> &'a Commitment {
        requested.as_ref().unwrap_or(&self.default_commitment)
    }

    /// Posts one JSON-RPC call and extracts the `result` member.
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        debug!("rpc request: {}", method);
        let body: Value = self
            .http
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;
        if let Some(err) = body.get("error") {
            let code = err.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(RpcError::Node { code, message });
        }
        match body {
            Value::Object(mut map) => map
                .remove("result")
                .ok_or_else(|| RpcError::Malformed(format!("{}: no 'result' member", method))),
            other => Err(RpcError::Malformed(format!(
                "{}: expected response object, got {}",
                method, other
            ))),
        }
    }

    /// Strips the `{context, value}` envelope from methods that carry one.
    fn unwrap_value(method: &str, result: Value) -> Result<Value> {
        match result {
            Value::Object(mut map) => map
                .remove("value")
                .ok_or_else(|| RpcError::Malformed(format!("{}: no 'value' member", method))),
            other => Err(RpcError::Malformed(format!(
                "{}: expected response context, got {}",
                method, other
            ))),
        }
    }

    /// Account info for one address, or null when the account does not exist.
    pub async fn get_account_info(
        &self,
        address: &str,
        commitment: &Option<Commitment>,
    ) -> Result<Value> {
        let pubkey: Pubkey = address.parse()?;
        let result = self
            .call(
                "getAccountInfo",
                json!([pubkey, { "commitment": self.commitment(commitment), "encoding": "base64" }]),
            )
            .await?;
        Self::unwrap_value("getAccountInfo", result)
    }

    /// Lamport balance, reported with a SOL-scaled convenience field.
    pub async fn get_balance(
        &self,
        address: &str,
        commitment: &Option<Commitment>,
    ) -> Result<Value> {
        let pubkey: Pubkey = address.parse()?;
        let result = self
            .call(
                "getBalance",
                json!([pubkey, { "commitment": self.commitment(commitment) }]),
            )
            .await?;
        let lamports = Self::unwrap_value("getBalance", result)?
            .as_u64()
            .ok_or_else(|| RpcError::Malformed("getBalance: non-integer balance".to_string()))?;
        Ok(json!({
            "balance": lamports,
            "lamports": lamports,
            "sol": lamports as f64 / LAMPORTS_PER_SOL,
        }))
    }

    pub async fn get_block(&self, slot: u64, max_supported_transaction_version: u8) -> Result<Value> {
        self.call(
            "getBlock",
            json!([slot, { "maxSupportedTransactionVersion": max_supported_transaction_version }]),
        )
        .await
    }

    pub async fn get_block_height(&self, commitment: &Option<Commitment>) -> Result<Value> {
        let height = self
            .call(
                "getBlockHeight",
                json!([{ "commitment": self.commitment(commitment) }]),
            )
            .await?;
        Ok(json!({ "blockHeight": height }))
    }

    /// Estimated production time of a block, with a derived ISO-8601 timestamp.
    pub async fn get_block_time(&self, slot: u64) -> Result<Value> {
        let block_time = self.call("getBlockTime", json!([slot])).await?;
        let date = block_time.as_i64().and_then(|secs| {
            Utc.timestamp_opt(secs, 0)
                .single()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        });
        Ok(json!({ "blockTime": block_time, "date": date }))
    }

    pub async fn get_cluster_nodes(&self) -> Result<Value> {
        self.call("getClusterNodes", json!([])).await
    }

    pub async fn get_epoch_info(&self, commitment: &Option<Commitment>) -> Result<Value> {
        self.call(
            "getEpochInfo",
            json!([{ "commitment": self.commitment(commitment) }]),
        )
        .await
    }

    pub async fn get_genesis_hash(&self) -> Result<Value> {
        let hash = self.call("getGenesisHash", json!([])).await?;
        Ok(json!({ "genesisHash": hash }))
    }

    pub async fn get_health(&self) -> Result<Value> {
        let health = self.call("getHealth", json!([])).await?;
        Ok(json!({ "health": health }))
    }

    pub async fn get_latest_blockhash(&self, commitment: &Option<Commitment>) -> Result<Value> {
        let result = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": self.commitment(commitment) }]),
            )
            .await?;
        Self::unwrap_value("getLatestBlockhash", result)
    }

    /// Rent-exempt minimum for an account of `data_length` bytes.
    pub async fn get_minimum_balance_for_rent_exemption(&self, data_length: u64) -> Result<Value> {
        let min_balance = self
            .call("getMinimumBalanceForRentExemption", json!([data_length]))
            .await?
            .as_u64()
            .ok_or_else(|| {
                RpcError::Malformed(
                    "getMinimumBalanceForRentExemption: non-integer balance".to_string(),
                )
            })?;
        Ok(json!({
            "minBalance": min_balance,
            "lamports": min_balance,
            "sol": min_balance as f64 / LAMPORTS_PER_SOL,
        }))
    }

    pub async fn get_multiple_accounts(
        &self,
        addresses: &[String],
        commitment: &Option<Commitment>,
    ) -> Result<Value> {
        let pubkeys = addresses
            .iter()
            .map(|a| a.parse::<Pubkey>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let result = self
            .call(
                "getMultipleAccounts",
                json!([pubkeys, { "commitment": self.commitment(commitment), "encoding": "base64" }]),
            )
            .await?;
        Self::unwrap_value("getMultipleAccounts", result)
    }

    pub async fn get_signature_statuses(&self, signatures: &[String]) -> Result<Value> {
        self.call("getSignatureStatuses", json!([signatures])).await
    }

    pub async fn get_slot(&self, commitment: &Option<Commitment>) -> Result<Value> {
        let slot = self
            .call("getSlot", json!([{ "commitment": self.commitment(commitment) }]))
            .await?;
        Ok(json!({ "slot": slot }))
    }

    pub async fn get_supply(&self, commitment: &Option<Commitment>) -> Result<Value> {
        self.call(
            "getSupply",
            json!([{ "commitment": self.commitment(commitment) }]),
        )
        .await
    }

    pub async fn get_token_account_balance(
        &self,
        address: &str,
        commitment: &Option<Commitment>,
    ) -> Result<Value> {
        let pubkey: Pubkey = address.parse()?;
        self.call(
            "getTokenAccountBalance",
            json!([pubkey, { "commitment": self.commitment(commitment) }]),
        )
        .await
    }

    /// Token accounts held by `owner`. A mint filter wins over any program
    /// filter; with neither supplied the SPL Token program is assumed.
    pub async fn get_token_accounts_by_owner(
        &self,
        owner: &str,
        mint: Option<&str>,
        program_id: Option<&str>,
    ) -> Result<Value> {
        let owner: Pubkey = owner.parse()?;
        let filter = match mint {
            Some(mint) => {
                let mint: Pubkey = mint.parse()?;
                json!({ "mint": mint })
            }
            None => {
                let program: Pubkey = program_id.unwrap_or(TOKEN_PROGRAM_ID).parse()?;
                json!({ "programId": program })
            }
        };
        self.call(
            "getTokenAccountsByOwner",
            json!([owner, filter, { "encoding": "base64" }]),
        )
        .await
    }

    pub async fn get_transaction(
        &self,
        signature: &str,
        max_supported_transaction_version: u8,
    ) -> Result<Value> {
        self.call(
            "getTransaction",
            json!([signature, { "maxSupportedTransactionVersion": max_supported_transaction_version }]),
        )
        .await
    }

    pub async fn get_transaction_count(&self, commitment: &Option<Commitment>) -> Result<Value> {
        let count = self
            .call(
                "getTransactionCount",
                json!([{ "commitment": self.commitment(commitment) }]),
            )
            .await?;
        Ok(json!({ "transactionCount": count }))
    }

    pub async fn get_version(&self) -> Result<Value> {
        self.call("getVersion", json!([])).await
    }

    pub async fn get_vote_accounts(&self, commitment: &Option<Commitment>) -> Result<Value> {
        self.call(
            "getVoteAccounts",
            json!([{ "commitment": self.commitment(commitment) }]),
        )
        .await
    }

    /// Whether a blockhash is still valid, unwrapped to a bare boolean.
    pub async fn is_blockhash_valid(
        &self,
        blockhash: &str,
        commitment: &Option<Commitment>,
    ) -> Result<bool> {
        let result = self
            .call(
                "isBlockhashValid",
                json!([blockhash, { "commitment": self.commitment(commitment) }]),
            )
            .await?;
        Self::unwrap_value("isBlockhashValid", result)?
            .as_bool()
            .ok_or_else(|| RpcError::Malformed("isBlockhashValid: non-boolean value".to_string()))
    }

    /// Airdrop `lamports` to an address. Only honored by devnet/testnet nodes.
    pub async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<Value> {
        let pubkey: Pubkey = address.parse()?;
        let signature = self.call("requestAirdrop", json!([pubkey, lamports])).await?;
        Ok(json!({ "signature": signature }))
    }
}
