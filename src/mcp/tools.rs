//! MCP tool definitions for the keyword search server.
//!
//! Request and error payload types for the `search_keyword` tool. The
//! success payload is [`crate::types::SearchResult`].

use serde::{Deserialize, Serialize};

/// Request for searching a keyword in a file
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchKeywordRequest {
    /// Path to the file to search in
    #[schemars(description = "Path to the file to search in")]
    pub filepath: String,

    /// Keyword to search for
    #[schemars(description = "Keyword to search for (case-insensitive unless caseSensitive is true)")]
    pub keyword: String,

    /// Match case exactly (default: false)
    #[schemars(description = "Whether to perform case-sensitive search (default: false)")]
    #[schemars(extend("default" = false))]
    pub case_sensitive: Option<bool>,
}

/// Payload of a flagged-error tool result
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
