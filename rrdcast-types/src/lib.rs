//! rrdcast-specific data transfer objects shared across the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod query;
mod report;
mod value;

pub use config::ToolConfig;
pub use error::RrdcastError;
pub use query::{QueryMode, SeriesQuery, TimeFormat, Window};
pub use report::{CompiledMeta, CompiledResult, Row};
pub use value::{FieldValue, NAN_MARKER};
