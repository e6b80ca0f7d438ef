use std::path::Path;

use async_trait::async_trait;

use rrdcast_types::{FieldValue, RrdcastError, Window};

/// Metadata block attached to one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMeta {
    /// Window start, epoch seconds.
    pub start: i64,
    /// Sampling step, seconds.
    pub step: i64,
    /// Window end, epoch seconds.
    pub end: i64,
    /// Human-readable label the tool attached to the exported series.
    pub legend: String,
}

/// One exported sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// Sample timestamp, epoch seconds.
    pub ts: i64,
    /// Raw sample value. Missing samples are `Null`; implementations may
    /// also surface raw text that the normalizer coerces later.
    pub value: FieldValue,
}

/// The canonical payload of one export operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    /// Export metadata.
    pub meta: ExportMeta,
    /// Samples in ascending timestamp order.
    pub rows: Vec<ExportRow>,
}

/// The external round-robin database tool, as the pipeline sees it.
///
/// The production implementation shells out to the `rrdtool` binary; tests
/// and demos use an in-memory mock. Implementations are expected to be
/// deterministic: the pipeline never retries a failed invocation.
#[async_trait]
pub trait RrdTool: Send + Sync {
    /// Whether `file` exists in this tool's storage.
    ///
    /// Checked by the pipeline before any other operation so missing files
    /// surface as `NotFound` rather than a tool failure.
    async fn has_file(&self, file: &Path) -> bool;

    /// Fetch the line-oriented `key = value` metadata for `file`.
    ///
    /// # Errors
    /// Returns `RrdcastError::Tool` if the underlying invocation fails.
    async fn info(&self, file: &Path) -> Result<String, RrdcastError>;

    /// Export one data source of `file` over `window`.
    ///
    /// With `Window::Default` the tool picks its own window (the most
    /// recent ~24h) and `step` is passed as a resolution hint; with an
    /// explicit window the bounds are used as given.
    ///
    /// # Errors
    /// Returns `RrdcastError::Tool` on non-zero exit or unparsable output.
    async fn xport(
        &self,
        file: &Path,
        ds: &str,
        step: i64,
        window: Window,
    ) -> Result<Export, RrdcastError>;
}
