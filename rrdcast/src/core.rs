use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rrdcast_core::{CompiledResult, RrdTool, RrdcastError, SeriesQuery};

use crate::compile::compile_file;

/// Orchestrator that compiles series files through a tool backend.
///
/// Holds a shared [`RrdTool`] and nothing else; every compilation is
/// request-scoped and leaves no state behind.
pub struct Rrdcast {
    tool: Arc<dyn RrdTool>,
}

impl std::fmt::Debug for Rrdcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rrdcast").finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Rrdcast`] orchestrator.
#[derive(Default)]
pub struct RrdcastBuilder {
    tool: Option<Arc<dyn RrdTool>>,
}

impl RrdcastBuilder {
    /// Create a new builder with no tool registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the tool backend compilations run against.
    #[must_use]
    pub fn with_tool(mut self, tool: Arc<dyn RrdTool>) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns `RrdcastError::Validation` if no tool was registered.
    pub fn build(self) -> Result<Rrdcast, RrdcastError> {
        let tool = self
            .tool
            .ok_or_else(|| RrdcastError::validation("a tool backend is required"))?;
        Ok(Rrdcast { tool })
    }
}

impl Rrdcast {
    /// Start building a new orchestrator.
    #[must_use]
    pub fn builder() -> RrdcastBuilder {
        RrdcastBuilder::new()
    }

    /// Compile one series file into its merged, normalized result.
    ///
    /// # Errors
    /// - `RrdcastError::NotFound` when the file does not exist.
    /// - `RrdcastError::Validation` for an unusable baseline spec.
    /// - `RrdcastError::Tool` when an underlying invocation fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "rrdcast::compile",
            skip_all,
            fields(file = %file.as_ref().display()),
        )
    )]
    pub async fn compile(
        &self,
        file: impl AsRef<Path>,
        query: &SeriesQuery,
    ) -> Result<CompiledResult, RrdcastError> {
        compile_file(self.tool.as_ref(), file.as_ref(), query).await
    }

    /// Compile several files concurrently, one task per file.
    ///
    /// Results are keyed by the caller-supplied alias (commonly the file
    /// path itself). Files are independent until collection; the first
    /// failure aborts the batch.
    ///
    /// # Errors
    /// As [`Rrdcast::compile`], for whichever file fails first.
    pub async fn compile_many<I, S, P>(
        &self,
        files: I,
        query: &SeriesQuery,
    ) -> Result<HashMap<String, CompiledResult>, RrdcastError>
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let mut handles = Vec::new();
        for (alias, path) in files {
            let tool = Arc::clone(&self.tool);
            let query = query.clone();
            let alias = alias.into();
            let path = path.into();
            handles.push(tokio::spawn(async move {
                let result = compile_file(tool.as_ref(), &path, &query).await;
                (alias, result)
            }));
        }

        let mut results = HashMap::with_capacity(handles.len());
        for joined in futures::future::join_all(handles).await {
            let (alias, result) =
                joined.map_err(|e| RrdcastError::tool("compile", e.to_string()))?;
            results.insert(alias, result?);
        }
        Ok(results)
    }
}
