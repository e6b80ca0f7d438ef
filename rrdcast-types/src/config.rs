//! Configuration for the external tool collaborator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the rrdtool subprocess backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path to the rrdtool binary. Defaults to `"rrdtool"`, resolved via
    /// `PATH`.
    pub binary: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("rrdtool"),
        }
    }
}
