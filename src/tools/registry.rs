//! Static tool registry.
//!
//! One identifier per exposed tool, each carrying its MCP input schema. The
//! declaration order of [`ToolId::ALL`] is the order reported by
//! `tools/list` and is stable across calls.

use lazy_static::lazy_static;
use serde_json::{json, Value};

/// Enumerates every tool this server exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolId {
    GetAccountInfo,
    GetBalance,
    GetBlock,
    GetBlockHeight,
    GetBlockTime,
    GetClusterNodes,
    GetEpochInfo,
    GetGenesisHash,
    GetHealth,
    GetLatestBlockhash,
    GetMinimumBalanceForRentExemption,
    GetMultipleAccounts,
    GetSignatureStatuses,
    GetSlot,
    GetSupply,
    GetTokenAccountBalance,
    GetTokenAccountsByOwner,
    GetTransaction,
    GetTransactionCount,
    GetVersion,
    GetVoteAccounts,
    IsBlockhashValid,
    RequestAirdrop,
    SendTransaction,
    SimulateTransaction,
}

impl ToolId {
    pub const ALL: [ToolId; 25] = [
        ToolId::GetAccountInfo,
        ToolId::GetBalance,
        ToolId::GetBlock,
        ToolId::GetBlockHeight,
        ToolId::GetBlockTime,
        ToolId::GetClusterNodes,
        ToolId::GetEpochInfo,
        ToolId::GetGenesisHash,
        ToolId::GetHealth,
        ToolId::GetLatestBlockhash,
        ToolId::GetMinimumBalanceForRentExemption,
        ToolId::GetMultipleAccounts,
        ToolId::GetSignatureStatuses,
        ToolId::GetSlot,
        ToolId::GetSupply,
        ToolId::GetTokenAccountBalance,
        ToolId::GetTokenAccountsByOwner,
        ToolId::GetTransaction,
        ToolId::GetTransactionCount,
        ToolId::GetVersion,
        ToolId::GetVoteAccounts,
        ToolId::IsBlockhashValid,
        ToolId::RequestAirdrop,
        ToolId::SendTransaction,
        ToolId::SimulateTransaction,
    ];

    /// The wire name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolId::GetAccountInfo => "getAccountInfo",
            ToolId::GetBalance => "getBalance",
            ToolId::GetBlock => "getBlock",
            ToolId::GetBlockHeight => "getBlockHeight",
            ToolId::GetBlockTime => "getBlockTime",
            ToolId::GetClusterNodes => "getClusterNodes",
            ToolId::GetEpochInfo => "getEpochInfo",
            ToolId::GetGenesisHash => "getGenesisHash",
            ToolId::GetHealth => "getHealth",
            ToolId::GetLatestBlockhash => "getLatestBlockhash",
            ToolId::GetMinimumBalanceForRentExemption => "getMinimumBalanceForRentExemption",
            ToolId::GetMultipleAccounts => "getMultipleAccounts",
            ToolId::GetSignatureStatuses => "getSignatureStatuses",
            ToolId::GetSlot => "getSlot",
            ToolId::GetSupply => "getSupply",
            ToolId::GetTokenAccountBalance => "getTokenAccountBalance",
            ToolId::GetTokenAccountsByOwner => "getTokenAccountsByOwner",
            ToolId::GetTransaction => "getTransaction",
            ToolId::GetTransactionCount => "getTransactionCount",
            ToolId::GetVersion => "getVersion",
            ToolId::GetVoteAccounts => "getVoteAccounts",
            ToolId::IsBlockhashValid => "isBlockhashValid",
            ToolId::RequestAirdrop => "requestAirdrop",
            ToolId::SendTransaction => "sendTransaction",
            ToolId::SimulateTransaction => "simulateTransaction",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    fn descriptor(self) -> Value {
        match self {
            ToolId::GetAccountInfo => json!({
                "name": "getAccountInfo",
                "description": "Returns all information associated with the account of provided Pubkey",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "address": {"type": "string", "description": "The account public key (base58 encoded)"},
                        "commitment": {"type": "string", "description": "Commitment level (processed, confirmed, finalized)", "default": "confirmed"}
                    },
                    "required": ["address"]
                }
            }),
            ToolId::GetBalance => json!({
                "name": "getBalance",
                "description": "Returns the balance of the account of provided Pubkey",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "address": {"type": "string", "description": "The account public key (base58 encoded)"},
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    },
                    "required": ["address"]
                }
            }),
            ToolId::GetBlock => json!({
                "name": "getBlock",
                "description": "Returns identity and transaction information about a confirmed block in the ledger",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "slot": {"type": "number", "description": "Slot number"},
                        "maxSupportedTransactionVersion": {"type": "number", "description": "Max transaction version to return", "default": 0}
                    },
                    "required": ["slot"]
                }
            }),
            ToolId::GetBlockHeight => json!({
                "name": "getBlockHeight",
                "description": "Returns the current block height of the node",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetBlockTime => json!({
                "name": "getBlockTime",
                "description": "Returns the estimated production time of a block",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "slot": {"type": "number", "description": "Slot number"}
                    },
                    "required": ["slot"]
                }
            }),
            ToolId::GetClusterNodes => json!({
                "name": "getClusterNodes",
                "description": "Returns information about all the nodes participating in the cluster",
                "inputSchema": { "type": "object", "properties": {} }
            }),
            ToolId::GetEpochInfo => json!({
                "name": "getEpochInfo",
                "description": "Returns information about the current epoch",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetGenesisHash => json!({
                "name": "getGenesisHash",
                "description": "Returns the genesis hash",
                "inputSchema": { "type": "object", "properties": {} }
            }),
            ToolId::GetHealth => json!({
                "name": "getHealth",
                "description": "Returns the current health of the node",
                "inputSchema": { "type": "object", "properties": {} }
            }),
            ToolId::GetLatestBlockhash => json!({
                "name": "getLatestBlockhash",
                "description": "Returns the latest blockhash",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetMinimumBalanceForRentExemption => json!({
                "name": "getMinimumBalanceForRentExemption",
                "description": "Returns minimum balance required to make account rent exempt",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dataLength": {"type": "number", "description": "Account data length"}
                    },
                    "required": ["dataLength"]
                }
            }),
            ToolId::GetMultipleAccounts => json!({
                "name": "getMultipleAccounts",
                "description": "Returns the account information for a list of Pubkeys",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "addresses": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Array of account public keys (base58 encoded)"
                        },
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    },
                    "required": ["addresses"]
                }
            }),
            ToolId::GetSignatureStatuses => json!({
                "name": "getSignatureStatuses",
                "description": "Returns the statuses of a list of signatures",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "signatures": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Array of transaction signatures"
                        }
                    },
                    "required": ["signatures"]
                }
            }),
            ToolId::GetSlot => json!({
                "name": "getSlot",
                "description": "Returns the slot that has reached the given or default commitment level",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetSupply => json!({
                "name": "getSupply",
                "description": "Returns information about the current supply",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetTokenAccountBalance => json!({
                "name": "getTokenAccountBalance",
                "description": "Returns the token balance of an SPL Token account",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "address": {"type": "string", "description": "Token account address (base58 encoded)"},
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    },
                    "required": ["address"]
                }
            }),
            ToolId::GetTokenAccountsByOwner => json!({
                "name": "getTokenAccountsByOwner",
                "description": "Returns all SPL Token accounts by token owner",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "owner": {"type": "string", "description": "Owner public key (base58 encoded)"},
                        "mint": {"type": "string", "description": "Pubkey of the specific token Mint to limit accounts to"},
                        "programId": {"type": "string", "description": "Pubkey of the Token program to limit accounts to"}
                    },
                    "required": ["owner"]
                }
            }),
            ToolId::GetTransaction => json!({
                "name": "getTransaction",
                "description": "Returns transaction details for a confirmed transaction",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "signature": {"type": "string", "description": "Transaction signature"},
                        "maxSupportedTransactionVersion": {"type": "number", "description": "Max transaction version to return", "default": 0}
                    },
                    "required": ["signature"]
                }
            }),
            ToolId::GetTransactionCount => json!({
                "name": "getTransactionCount",
                "description": "Returns the current Transaction count from the ledger",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::GetVersion => json!({
                "name": "getVersion",
                "description": "Returns the current Solana version running on the node",
                "inputSchema": { "type": "object", "properties": {} }
            }),
            ToolId::GetVoteAccounts => json!({
                "name": "getVoteAccounts",
                "description": "Returns the account info and associated stake for all the voting accounts in the current bank",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    }
                }
            }),
            ToolId::IsBlockhashValid => json!({
                "name": "isBlockhashValid",
                "description": "Returns whether a blockhash is still valid or not",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "blockhash": {"type": "string", "description": "The blockhash to validate"},
                        "commitment": {"type": "string", "description": "Commitment level", "default": "confirmed"}
                    },
                    "required": ["blockhash"]
                }
            }),
            ToolId::RequestAirdrop => json!({
                "name": "requestAirdrop",
                "description": "Requests an airdrop of lamports to a Pubkey (only available on devnet/testnet)",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "address": {"type": "string", "description": "Pubkey to receive lamports (base58 encoded)"},
                        "lamports": {"type": "number", "description": "Amount of lamports to airdrop"}
                    },
                    "required": ["address", "lamports"]
                }
            }),
            ToolId::SendTransaction => json!({
                "name": "sendTransaction",
                "description": "Submits a signed transaction to the cluster for processing",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "transaction": {"type": "string", "description": "Signed Transaction (base64 encoded)"},
                        "skipPreflight": {"type": "boolean", "description": "Skip preflight checks", "default": false}
                    },
                    "required": ["transaction"]
                }
            }),
            ToolId::SimulateTransaction => json!({
                "name": "simulateTransaction",
                "description": "Simulate sending a transaction",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "transaction": {"type": "string", "description": "Transaction to simulate (base64 encoded)"},
                        "sigVerify": {"type": "boolean", "description": "Verify transaction signatures", "default": false}
                    },
                    "required": ["transaction"]
                }
            }),
        }
    }
}

lazy_static! {
    static ref DESCRIPTORS: Vec<Value> = ToolId::ALL.iter().map(|t| t.descriptor()).collect();
}

/// Full descriptor list for `tools/list`, in registry order.
pub fn descriptors() -> &'static [Value] {
    &DESCRIPTORS
}
