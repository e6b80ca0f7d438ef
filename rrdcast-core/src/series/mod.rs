//! Row-level transformation helpers: merging, baseline statistics, and
//! output normalization.

pub mod baseline;
pub mod merge;
pub mod normalize;

use rrdcast_types::Row;

use crate::tool::Export;

/// Field name carrying the baseline mean for data source `ds`.
#[must_use]
pub fn mean_field(ds: &str) -> String {
    format!("{ds}_baseline_mean")
}

/// Field name carrying the baseline standard deviation for data source `ds`.
#[must_use]
pub fn stddev_field(ds: &str) -> String {
    format!("{ds}_baseline_stddev")
}

/// One named, timestamp-ordered row sequence ready for merging.
///
/// This is the unit the merger consumes: a raw per-source export with its
/// value field renamed after the source, or a derived baseline mean/stddev
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    /// Window start, epoch seconds.
    pub start: i64,
    /// Sampling step, seconds.
    pub step: i64,
    /// Window end, epoch seconds.
    pub end: i64,
    /// Series label for the result's `data_sources` list.
    pub label: String,
    /// Rows as (timestamp, fields) pairs, ascending by timestamp.
    pub rows: Vec<(i64, Row)>,
}

impl SeriesFrame {
    /// Turn a raw export into a frame named after its data source.
    ///
    /// The generic value field is keyed by the lower-cased source name so
    /// frames from different sources merge without collisions.
    #[must_use]
    pub fn from_export(export: Export, ds: &str) -> Self {
        let field = ds.to_lowercase();
        let rows = export
            .rows
            .into_iter()
            .map(|row| {
                let mut fields = Row::new();
                fields.insert(field.clone(), row.value);
                (row.ts, fields)
            })
            .collect();
        Self {
            start: export.meta.start,
            step: export.meta.step,
            end: export.meta.end,
            label: export.meta.legend,
            rows,
        }
    }
}
