//! Rrdcast turns round-robin database files into structured JSON.
//!
//! Overview
//! - Enumerates a file's data sources once, exports each over the requested
//!   window, and merges everything into one timestamp-keyed result.
//! - Timeshift mode reads a shifted historical window and reports it at
//!   nominal timestamps; baseline mode annotates each row with mean/stddev
//!   across N historical periods at matching offsets.
//! - Output is normalized field by field: numeric-looking text becomes bare
//!   JSON numbers, the NaN marker becomes `null`, timestamps render as
//!   epoch integers or formatted UTC text.
//!
//! Key behaviors and trade-offs
//! - Sources are processed strictly in catalog order; merge order decides
//!   which field wins when two sequences collide on a timestamp, so
//!   determinism matters more than parallelism inside one file.
//! - Multi-file requests fan out one task per file; a single failing file
//!   aborts the batch.
//! - No retries anywhere: the underlying tool is deterministic, so a failed
//!   invocation is surfaced, not papered over.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use rrdcast::{Rrdcast, SeriesQuery, TimeFormat};
//! use rrdcast_rrdtool::RrdToolCli;
//!
//! let tool = Arc::new(RrdToolCli::connect_default().await?);
//! let caster = Rrdcast::builder().with_tool(tool).build()?;
//! let query = SeriesQuery::new(None, None, TimeFormat::Utc, None, Some("3w".into()))?;
//! let result = caster.compile("port-2.rrd", &query).await?;
//! ```
#![warn(missing_docs)]

mod compile;
mod core;

pub use crate::core::{Rrdcast, RrdcastBuilder};

// Re-export the contract types so callers can depend on `rrdcast` only.
pub use rrdcast_core::{
    CompiledMeta, CompiledResult, Export, ExportMeta, ExportRow, FieldValue, QueryMode, Row,
    RrdTool, RrdcastError, SeriesQuery, TimeFormat, ToolConfig, Window,
};
