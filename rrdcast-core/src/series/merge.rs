//! Timestamp-keyed accumulation of named row sequences.

use std::collections::BTreeMap;

use rrdcast_types::Row;

use crate::series::SeriesFrame;

/// Accumulator that merges row sequences into one wide, timestamp-keyed
/// frame.
///
/// Sequences are absorbed in arrival order: rows sharing a timestamp are
/// field-unioned with later fields overwriting earlier same-named ones, so
/// absorption order is part of the observable contract. Each absorbed
/// sequence overwrites the accumulated start/step/end while labels append.
#[derive(Debug, Clone, Default)]
pub struct MergedFrame {
    pub(crate) start: i64,
    pub(crate) step: i64,
    pub(crate) end: i64,
    pub(crate) labels: Vec<String>,
    pub(crate) rows: BTreeMap<i64, Row>,
}

impl MergedFrame {
    /// An empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one named sequence into the accumulator.
    pub fn absorb(&mut self, frame: SeriesFrame) {
        self.start = frame.start;
        self.step = frame.step;
        self.end = frame.end;
        self.labels.push(frame.label);
        for (ts, fields) in frame.rows {
            self.rows.entry(ts).or_default().extend(fields);
        }
    }

    /// Number of distinct timestamps accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if nothing has been absorbed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels of the absorbed sequences, in absorption order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
