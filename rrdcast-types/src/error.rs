use thiserror::Error;

/// Unified error type for the rrdcast workspace.
///
/// This wraps dependency availability failures, tool invocation failures,
/// request validation errors, and not-found conditions for referenced files.
#[derive(Debug, Error)]
pub enum RrdcastError {
    /// The external tool is missing or reports an unsupported version.
    ///
    /// Raised once, when a tool handle is constructed; never at request time.
    #[error("rrdtool unavailable: {msg}")]
    Unavailable {
        /// Description of the probe failure (missing binary, version mismatch).
        msg: String,
    },

    /// A tool invocation exited non-zero or produced unparsable output.
    #[error("rrdtool {op} failed: {msg}")]
    Tool {
        /// The operation that failed (e.g. "info", "xport", "version").
        op: String,
        /// Human-readable error message, typically the tool's stderr.
        msg: String,
    },

    /// Malformed or contradictory request parameters.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A referenced series file could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. a file path.
        what: String,
    },
}

impl RrdcastError {
    /// Helper: build an `Unavailable` error from a probe failure message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable { msg: msg.into() }
    }

    /// Helper: build a `Tool` error with the failing operation and message.
    pub fn tool(op: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Tool {
            op: op.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Validation` error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
