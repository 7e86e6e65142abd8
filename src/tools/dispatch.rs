//! Argument decoding and tool execution.
//!
//! [`call_tool`] is the single error boundary: every failure (unknown tool,
//! bad arguments, gateway error) becomes a text result, never a protocol
//! error. The calling agent always receives a well-formed envelope.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::solana::{Commitment, SolanaRpcClient};
use crate::AppState;

use super::registry::ToolId;
use super::CallToolResult;

/// Fixed refusal for `sendTransaction`; the adapter never handles key material.
const SEND_TRANSACTION_ADVISORY: &str = "sendTransaction is not implemented for security reasons. Please use a wallet application to send transactions.";

/// Fixed refusal for `simulateTransaction`; the adapter does not construct
/// transaction objects.
const SIMULATE_TRANSACTION_ADVISORY: &str = "simulateTransaction requires a properly constructed transaction object. Please provide a valid base64 encoded transaction.";

#[derive(Deserialize)]
struct AccountArgs {
    address: String,
    commitment: Option<Commitment>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockArgs {
    slot: u64,
    #[serde(default)]
    max_supported_transaction_version: u8,
}

#[derive(Deserialize)]
struct SlotArgs {
    slot: u64,
}

#[derive(Deserialize)]
struct CommitmentArgs {
    commitment: Option<Commitment>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RentExemptionArgs {
    data_length: u64,
}

#[derive(Deserialize)]
struct MultipleAccountsArgs {
    addresses: Vec<String>,
    commitment: Option<Commitment>,
}

#[derive(Deserialize)]
struct SignatureStatusesArgs {
    signatures: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountsByOwnerArgs {
    owner: String,
    mint: Option<String>,
    program_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionArgs {
    signature: String,
    #[serde(default)]
    max_supported_transaction_version: u8,
}

#[derive(Deserialize)]
struct BlockhashArgs {
    blockhash: String,
    commitment: Option<Commitment>,
}

#[derive(Deserialize)]
struct AirdropArgs {
    address: String,
    lamports: u64,
}

enum ToolOutput {
    Json(Value),
    Advisory(&'static str),
}

/// Looks up and runs one tool, converting any failure into a text result.
pub async fn call_tool(state: &AppState, name: &str, arguments: Value) -> CallToolResult {
    let tool = match ToolId::from_name(name) {
        Some(tool) => tool,
        None => {
            return CallToolResult::error(format!(
                "Error executing {}: Unknown tool: {}",
                name, name
            ))
        }
    };

    match execute(&state.rpc, tool, arguments).await {
        Ok(ToolOutput::Advisory(text)) => CallToolResult::text(text),
        Ok(ToolOutput::Json(value)) => match serde_json::to_string_pretty(&value) {
            Ok(text) => CallToolResult::text(text),
            Err(e) => CallToolResult::error(format!("Error executing {}: {}", name, e)),
        },
        Err(e) => {
            warn!("tool call {} failed: {}", name, e);
            CallToolResult::error(format!("Error executing {}: {}", name, e))
        }
    }
}

async fn execute(rpc: &SolanaRpcClient, tool: ToolId, args: Value) -> anyhow::Result<ToolOutput> {
    let value = match tool {
        ToolId::GetAccountInfo => {
            let args: AccountArgs = serde_json::from_value(args)?;
            rpc.get_account_info(&args.address, &args.commitment).await?
        }
        ToolId::GetBalance => {
            let args: AccountArgs = serde_json::from_value(args)?;
            rpc.get_balance(&args.address, &args.commitment).await?
        }
        ToolId::GetBlock => {
            let args: BlockArgs = serde_json::from_value(args)?;
            rpc.get_block(args.slot, args.max_supported_transaction_version)
                .await?
        }
        ToolId::GetBlockHeight => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_block_height(&args.commitment).await?
        }
        ToolId::GetBlockTime => {
            let args: SlotArgs = serde_json::from_value(args)?;
            rpc.get_block_time(args.slot).await?
        }
        ToolId::GetClusterNodes => rpc.get_cluster_nodes().await?,
        ToolId::GetEpochInfo => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_epoch_info(&args.commitment).await?
        }
        ToolId::GetGenesisHash => rpc.get_genesis_hash().await?,
        ToolId::GetHealth => rpc.get_health().await?,
        ToolId::GetLatestBlockhash => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_latest_blockhash(&args.commitment).await?
        }
        ToolId::GetMinimumBalanceForRentExemption => {
            let args: RentExemptionArgs = serde_json::from_value(args)?;
            rpc.get_minimum_balance_for_rent_exemption(args.data_length)
                .await?
        }
        ToolId::GetMultipleAccounts => {
            let args: MultipleAccountsArgs = serde_json::from_value(args)?;
            rpc.get_multiple_accounts(&args.addresses, &args.commitment)
                .await?
        }
        ToolId::GetSignatureStatuses => {
            let args: SignatureStatusesArgs = serde_json::from_value(args)?;
            rpc.get_signature_statuses(&args.signatures).await?
        }
        ToolId::GetSlot => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_slot(&args.commitment).await?
        }
        ToolId::GetSupply => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_supply(&args.commitment).await?
        }
        ToolId::GetTokenAccountBalance => {
            let args: AccountArgs = serde_json::from_value(args)?;
            rpc.get_token_account_balance(&args.address, &args.commitment)
                .await?
        }
        ToolId::GetTokenAccountsByOwner => {
            let args: TokenAccountsByOwnerArgs = serde_json::from_value(args)?;
            rpc.get_token_accounts_by_owner(
                &args.owner,
                args.mint.as_deref(),
                args.program_id.as_deref(),
            )
            .await?
        }
        ToolId::GetTransaction => {
            let args: TransactionArgs = serde_json::from_value(args)?;
            rpc.get_transaction(&args.signature, args.max_supported_transaction_version)
                .await?
        }
        ToolId::GetTransactionCount => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_transaction_count(&args.commitment).await?
        }
        ToolId::GetVersion => rpc.get_version().await?,
        ToolId::GetVoteAccounts => {
            let args: CommitmentArgs = serde_json::from_value(args)?;
            rpc.get_vote_accounts(&args.commitment).await?
        }
        ToolId::IsBlockhashValid => {
            let args: BlockhashArgs = serde_json::from_value(args)?;
            let is_valid = rpc.is_blockhash_valid(&args.blockhash, &args.commitment).await?;
            serde_json::json!({ "isValid": is_valid })
        }
        ToolId::RequestAirdrop => {
            let args: AirdropArgs = serde_json::from_value(args)?;
            rpc.request_airdrop(&args.address, args.lamports).await?
        }
        // Policy refusals: fixed text regardless of the supplied arguments.
        ToolId::SendTransaction => return Ok(ToolOutput::Advisory(SEND_TRANSACTION_ADVISORY)),
        ToolId::SimulateTransaction => {
            return Ok(ToolOutput::Advisory(SIMULATE_TRANSACTION_ADVISORY))
        }
    };
    Ok(ToolOutput::Json(value))
}
