//! Report preview results returned by the query collaborator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page of preview rows.
///
/// Collaborators may attach arbitrary extra keys; they are kept in `extra`
/// and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreviewResult {
    pub fn is_truncated(&self) -> bool {
        (self.rows.len() as u64) < self.total_rows
    }
}
