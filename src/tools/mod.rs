// src/tools/mod.rs

pub mod dispatch;
pub mod registry;

pub use dispatch::call_tool;
pub use registry::{descriptors, ToolId};

use serde::Serialize;

/// Result envelope for one tool invocation. The envelope itself always
/// succeeds; failures are reported in the text content with `is_error` set.
#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: true,
        }
    }
}
