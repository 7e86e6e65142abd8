//! MCP method router.
//!
//! Serves `initialize`, `tools/list`, and `tools/call` over the JSON-RPC
//! envelope. Tool execution failures never surface here: the dispatcher
//! embeds them in the call result, so protocol-level errors exist only for
//! protocol misuse (unknown method, malformed params).

use serde_json::json;
use tracing::debug;

use crate::mcp::protocol::{error_codes, Request, Response};
use crate::tools;
use crate::AppState;

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    debug!("handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(req, state).await,
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by handing it to the tool dispatcher.
async fn handle_tools_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id.clone(),
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    let result = tools::call_tool(&state, name, arguments).await;
    match serde_json::to_value(&result) {
        Ok(value) => Response::success(req.id.clone(), value),
        Err(e) => Response::error(
            req.id.clone(),
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        ),
    }
}

/// Handles the 'initialize' request.
fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "solana-mcp-server",
        "version": env!("CARGO_PKG_VERSION"),
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions = "Solana MCP server for querying chain state: accounts, balances, blocks, transactions, supply, and vote accounts.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request from the static registry.
fn handle_tools_list(req: &Request) -> Response {
    Response::success(req.id.clone(), json!({ "tools": tools::descriptors() }))
}
