//! Baseline statistics across historical periods of one data source.

use rrdcast_types::{FieldValue, Row, RrdcastError};

use crate::series::{SeriesFrame, mean_field, stddev_field};
use crate::tool::Export;

/// Label suffix for the derived mean series.
const MEAN_SUFFIX: &str = "_BASELINE_MEAN";
/// Label suffix for the derived standard-deviation series.
const STDDEV_SUFFIX: &str = "_BASELINE_STDDEV";

/// Single-pass mean and sample standard deviation (Welford's update).
///
/// The incremental form keeps the squared-deviation sum numerically stable
/// for long period counts; the reported mean is the plain total over count.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStats {
    count: u32,
    total: f64,
    mean: f64,
    sq_diff: f64,
}

impl RunningStats {
    /// A fresh accumulator with no samples.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one valid sample into the accumulator.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
        let delta = value - self.mean;
        self.mean += delta / f64::from(self.count);
        // The second factor uses the updated mean; that is what keeps the
        // sum of squared deviations stable.
        self.sq_diff += delta * (value - self.mean);
    }

    /// Number of samples folded in so far.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Mean over the samples, defined only for two or more samples.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 1).then(|| self.total / f64::from(self.count))
    }

    /// Sample standard deviation (N−1 correction), defined only for two or
    /// more samples.
    #[must_use]
    pub fn stddev(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.sq_diff / f64::from(self.count - 1)).sqrt())
    }
}

/// Compute per-position baseline statistics over N period exports.
///
/// `periods` holds the shifted exports in offset order (1 period back
/// first); `ds` is the data-source name the derived field names are built
/// from. Rows are aligned by ordinal position across periods — each period
/// covers the same relative offsets — so a period shorter than the first
/// simply contributes missing values at the positions it lacks.
///
/// Returns the mean frame and the stddev frame, both carrying the first
/// period's timestamps and metadata with suffixed labels.
///
/// # Errors
/// Returns `RrdcastError::Validation` when fewer than 2 periods are given
/// or the first period's export holds no rows.
pub fn baseline_frames(
    periods: &[Export],
    ds: &str,
) -> Result<(SeriesFrame, SeriesFrame), RrdcastError> {
    if periods.len() < 2 {
        return Err(RrdcastError::validation(
            "at least 2 series required for baseline",
        ));
    }
    let first = &periods[0];
    if first.rows.is_empty() {
        return Err(RrdcastError::validation("no data series found"));
    }

    let mean_key = mean_field(&ds.to_lowercase());
    let stddev_key = stddev_field(&ds.to_lowercase());
    let mut mean_rows: Vec<(i64, Row)> = Vec::with_capacity(first.rows.len());
    let mut stddev_rows: Vec<(i64, Row)> = Vec::with_capacity(first.rows.len());

    for (position, anchor) in first.rows.iter().enumerate() {
        let mut stats = RunningStats::new();
        for period in periods {
            if let Some(value) = period.rows.get(position).and_then(|r| r.value.numeric()) {
                stats.push(value);
            }
        }
        let mut mean = Row::new();
        mean.insert(mean_key.clone(), FieldValue::from(stats.mean()));
        mean_rows.push((anchor.ts, mean));
        let mut stddev = Row::new();
        stddev.insert(stddev_key.clone(), FieldValue::from(stats.stddev()));
        stddev_rows.push((anchor.ts, stddev));
    }

    let frame = |suffix: &str, rows: Vec<(i64, Row)>| SeriesFrame {
        start: first.meta.start,
        step: first.meta.step,
        end: first.meta.end,
        label: format!("{}{suffix}", first.meta.legend),
        rows,
    };
    Ok((
        frame(MEAN_SUFFIX, mean_rows),
        frame(STDDEV_SUFFIX, stddev_rows),
    ))
}
