//! Mock `RrdTool` backend for CI-safe tests and examples.
//!
//! Serves deterministic synthetic series: no subprocess, no filesystem.
//! Registered files exist, everything else does not, and sample values are
//! a pure function of the data source and timestamp so tests can recompute
//! expected output exactly.
#![warn(missing_docs)]

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use rrdcast_core::{Export, ExportMeta, ExportRow, FieldValue, RrdTool, RrdcastError, Window};

/// Fixed "now" the default-window export ends at.
pub const MOCK_NOW: i64 = 1_700_000_000;

#[derive(Debug, Clone)]
struct MockFile {
    step: i64,
    sources: Vec<String>,
    broken: bool,
}

/// Deterministic in-memory tool with a configurable set of files.
#[derive(Debug, Clone)]
pub struct MockRrdTool {
    files: HashMap<PathBuf, MockFile>,
    now: i64,
}

impl Default for MockRrdTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRrdTool {
    /// An empty mock; register files with [`MockRrdTool::with_file`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            now: MOCK_NOW,
        }
    }

    /// Register a file with the given step and data-source names.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, step: i64, sources: &[&str]) -> Self {
        self.files.insert(
            path.into(),
            MockFile {
                step,
                sources: sources.iter().map(ToString::to_string).collect(),
                broken: false,
            },
        );
        self
    }

    /// Register a file whose info/xport invocations fail.
    #[must_use]
    pub fn with_broken_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(
            path.into(),
            MockFile {
                step: 300,
                sources: vec!["BROKEN".to_string()],
                broken: true,
            },
        );
        self
    }

    /// Override the fixed "now" the default window ends at.
    #[must_use]
    pub fn with_now(mut self, now: i64) -> Self {
        self.now = now;
        self
    }

    /// The deterministic sample value for a source index at a timestamp.
    ///
    /// A sawtooth with a period that is not a whole number of days, so
    /// day- and week-shifted windows see different values.
    #[must_use]
    pub fn sample(source_index: usize, ts: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let base = (source_index * 10_000) as f64;
        #[allow(clippy::cast_precision_loss)]
        let phase = (ts / 60).rem_euclid(10_007) as f64;
        base + phase
    }

    fn file(&self, path: &Path) -> Result<&MockFile, RrdcastError> {
        self.files
            .get(path)
            .ok_or_else(|| RrdcastError::not_found(path.display().to_string()))
    }
}

#[async_trait]
impl RrdTool for MockRrdTool {
    async fn has_file(&self, file: &Path) -> bool {
        self.files.contains_key(file)
    }

    async fn info(&self, file: &Path) -> Result<String, RrdcastError> {
        let mock = self.file(file)?;
        if mock.broken {
            return Err(RrdcastError::tool("info", "forced failure"));
        }
        let mut out = String::new();
        let _ = writeln!(out, "filename = \"{}\"", file.display());
        let _ = writeln!(out, "rrd_version = \"0003\"");
        let _ = writeln!(out, "step = {}", mock.step);
        let _ = writeln!(out, "last_update = {}", self.now);
        for (i, ds) in mock.sources.iter().enumerate() {
            let _ = writeln!(out, "ds[{ds}].index = {i}");
            let _ = writeln!(out, "ds[{ds}].type = \"GAUGE\"");
            let _ = writeln!(out, "ds[{ds}].min = 0.0000000000e+00");
        }
        let _ = writeln!(out, "rra[0].cf = \"AVERAGE\"");
        Ok(out)
    }

    async fn xport(
        &self,
        file: &Path,
        ds: &str,
        step: i64,
        window: Window,
    ) -> Result<Export, RrdcastError> {
        let mock = self.file(file)?;
        if mock.broken {
            return Err(RrdcastError::tool("xport", "forced failure"));
        }
        let source_index = mock
            .sources
            .iter()
            .position(|s| s == ds)
            .ok_or_else(|| RrdcastError::tool("xport", format!("no such data source: {ds}")))?;

        let (start, end) = match window {
            Window::Default => {
                let end = self.now - self.now.rem_euclid(step);
                (end - 86_400, end)
            }
            Window::Explicit { start, end } => (start, end),
        };
        let mut rows = Vec::new();
        let mut ts = start + step;
        while ts <= end {
            rows.push(ExportRow {
                ts,
                value: FieldValue::Float(Self::sample(source_index, ts)),
            });
            ts += step;
        }
        Ok(Export {
            meta: ExportMeta {
                start,
                step,
                end,
                legend: ds.to_string(),
            },
            rows,
        })
    }
}
