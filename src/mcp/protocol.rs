// src/mcp/protocol.rs

//! JSON-RPC 2.0 envelope types for the MCP stdio transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

fn default_jsonrpc() -> String {
    "2.0".to_string()
}

impl Request {
    /// Requests without an id are notifications and receive no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(ErrorObject { code, message }),
        }
    }
}

// Standard JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_without_id_is_notification() {
        let req: Request =
            serde_json::from_value(json!({"method": "notifications/initialized"})).unwrap();
        assert!(req.is_notification());
        assert_eq!(req.jsonrpc, "2.0");
    }

    #[test]
    fn request_with_id_is_not_notification() {
        let req: Request =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 7, "method": "tools/list"}))
                .unwrap();
        assert!(!req.is_notification());
    }

    #[test]
    fn success_response_omits_error_member() {
        let resp = Response::success(json!(1), json!({"ok": true}));
        let wire = serde_json::to_value(&resp).unwrap();
        assert_eq!(wire["result"]["ok"], true);
        assert!(wire.get("error").is_none());
    }

    #[test]
    fn error_response_omits_result_member() {
        let resp = Response::error(json!(1), error_codes::METHOD_NOT_FOUND, "nope".to_string());
        let wire = serde_json::to_value(&resp).unwrap();
        assert_eq!(wire["error"]["code"], -32601);
        assert!(wire.get("result").is_none());
    }
}
