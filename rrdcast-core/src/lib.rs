//! rrdcast-core
//!
//! Core trait and transformation pipeline shared across the rrdcast
//! ecosystem.
//!
//! - `tool`: the `RrdTool` collaborator trait and canonical export payload.
//! - `catalog`: parsing of the tool's line-oriented info output.
//! - `timeshift`: compact duration specs and baseline period specs.
//! - `series`: row merging, baseline statistics, and output normalization.
//!
//! Everything in this crate is pure, request-scoped logic: implementations
//! of [`RrdTool`] own all I/O, and the pipeline helpers only transform
//! in-memory structures. One invocation of the pipeline is strictly
//! sequential; callers that want parallelism run whole invocations side by
//! side.
#![warn(missing_docs)]

/// Parsing of the tool's `key = value` metadata output.
pub mod catalog;
/// Row merging, baseline statistics, and output normalization.
pub mod series;
/// Compact duration specs (`"3w"`, `"2d4h"`) and baseline period specs.
pub mod timeshift;
/// The `RrdTool` collaborator trait and canonical export payload types.
pub mod tool;

pub use catalog::SourceCatalog;
pub use series::baseline::{RunningStats, baseline_frames};
pub use series::merge::MergedFrame;
pub use series::normalize::{coerce_value, compile_frame, format_timestamp, normalize_result};
pub use series::{SeriesFrame, mean_field, stddev_field};
pub use timeshift::{BaselineSpec, resolve};
pub use tool::{Export, ExportMeta, ExportRow, RrdTool};

// The DTO layer is re-exported wholesale so downstream crates can depend on
// `rrdcast-core` only.
pub use rrdcast_types::{
    CompiledMeta, CompiledResult, FieldValue, NAN_MARKER, QueryMode, Row, RrdcastError,
    SeriesQuery, TimeFormat, ToolConfig, Window,
};
