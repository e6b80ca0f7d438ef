//! rrdcast-rrdtool
//!
//! Production [`RrdTool`] backend that shells out to the `rrdtool` binary.
//! Construction probes the binary once and requires a supported major
//! version; request-time failures surface as `RrdcastError::Tool` with the
//! tool's stderr attached. Invocations are sequential and never retried.
#![warn(missing_docs)]

/// Parsing of `rrdtool xport --json` payloads into canonical exports.
pub mod payload;

use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use rrdcast_core::{Export, RrdTool, RrdcastError, ToolConfig, Window};

/// Marker required in the version probe output. Only the 1.x major line is
/// supported; its info and xport formats are what the parsers expect.
const VERSION_MARKER: &str = "RRDtool 1.";

/// `RrdTool` implementation backed by the `rrdtool` command-line binary.
#[derive(Debug, Clone)]
pub struct RrdToolCli {
    config: ToolConfig,
}

impl RrdToolCli {
    /// Probe the configured binary and build a handle.
    ///
    /// # Errors
    /// Returns `RrdcastError::Unavailable` when the binary cannot be run or
    /// its version output lacks the supported-major marker. This is the
    /// only place availability is checked; requests assume a working tool.
    pub async fn connect(config: ToolConfig) -> Result<Self, RrdcastError> {
        let output = Command::new(&config.binary)
            .arg("--version")
            .output()
            .await
            .map_err(|e| {
                RrdcastError::unavailable(format!(
                    "cannot run {}: {e}",
                    config.binary.display()
                ))
            })?;
        // Some builds print the banner on stderr; accept either stream.
        let banner = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        if !banner.contains(VERSION_MARKER) {
            return Err(RrdcastError::unavailable(
                "version output does not report a supported RRDtool 1.x",
            ));
        }
        Ok(Self { config })
    }

    /// Probe `rrdtool` from `PATH` with the default configuration.
    ///
    /// # Errors
    /// See [`RrdToolCli::connect`].
    pub async fn connect_default() -> Result<Self, RrdcastError> {
        Self::connect(ToolConfig::default()).await
    }

    /// The configuration this handle was built with.
    #[must_use]
    pub const fn config(&self) -> &ToolConfig {
        &self.config
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(op = op))
    )]
    async fn run(&self, op: &str, args: &[String]) -> Result<String, RrdcastError> {
        let output: Output = Command::new(&self.config.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                RrdcastError::tool(op, format!("cannot run {}: {e}", self.config.binary.display()))
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RrdcastError::tool(op, stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl RrdTool for RrdToolCli {
    async fn has_file(&self, file: &Path) -> bool {
        tokio::fs::metadata(file)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    async fn info(&self, file: &Path) -> Result<String, RrdcastError> {
        self.run("info", &["info".to_string(), file.display().to_string()])
            .await
    }

    async fn xport(
        &self,
        file: &Path,
        ds: &str,
        step: i64,
        window: Window,
    ) -> Result<Export, RrdcastError> {
        let def = format!("DEF:data={}:{ds}:AVERAGE", file.display());
        let xport = format!("XPORT:data:{ds}");
        let mut args = vec!["xport".to_string(), "--json".to_string()];
        match window {
            Window::Default => {
                // No explicit bounds: let the tool pick its default window,
                // with the file's step as the resolution hint.
                args.extend(["--step".to_string(), step.to_string(), def, xport]);
            }
            Window::Explicit { start, end } => {
                args.extend([
                    def,
                    xport,
                    "--start".to_string(),
                    start.to_string(),
                    "--end".to_string(),
                    end.to_string(),
                ]);
            }
        }
        let raw = self.run("xport", &args).await?;
        payload::parse_xport(&raw, ds)
    }
}
