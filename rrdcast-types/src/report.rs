use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// A merged output row: field name to value, including the public `time`
/// field once normalized.
pub type Row = BTreeMap<String, FieldValue>;

/// Metadata accumulated across all series that contributed to a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledMeta {
    /// Window start, rendered per the request's time format.
    pub start: FieldValue,
    /// Sampling step in seconds.
    pub step: i64,
    /// Window end, rendered per the request's time format.
    pub end: FieldValue,
    /// Number of distinct timestamps in `data`.
    pub rows: usize,
    /// Series labels in emission order, one per merged sequence.
    pub data_sources: Vec<String>,
}

/// The final JSON-shaped value produced for one series file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledResult {
    /// Accumulated metadata block.
    pub meta: CompiledMeta,
    /// Merged rows, ordered by timestamp.
    pub data: Vec<Row>,
}
