use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All occurrences of the keyword on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    /// 1-based line number
    pub line_number: usize,
    /// The original line text, never case-folded
    pub line_content: String,
    /// Zero-based character offsets where an occurrence starts, ascending
    pub match_positions: Vec<usize>,
}

/// Outcome of scanning one file for one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Absolute path of the scanned file
    pub filepath: PathBuf,
    /// The keyword as given by the caller
    pub keyword: String,
    pub total_matches: usize,
    /// One entry per line with at least one occurrence, in file order
    pub matches: Vec<LineMatch>,
}

impl SearchResult {
    pub fn new(filepath: PathBuf, keyword: impl Into<String>, matches: Vec<LineMatch>) -> Self {
        let total_matches = matches.iter().map(|m| m.match_positions.len()).sum();
        Self {
            filepath,
            keyword: keyword.into(),
            total_matches,
            matches,
        }
    }
}
