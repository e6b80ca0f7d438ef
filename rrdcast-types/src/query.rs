use serde::{Deserialize, Serialize};

use crate::RrdcastError;

/// Output rendering for timestamps and meta start/end fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Calendar date-time string in UTC (`"%Y-%m-%d %H:%M:%S"`).
    #[default]
    Utc,
    /// Raw epoch seconds as a bare integer.
    Epoch,
}

/// The time window an export is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Window {
    /// Let the tool pick its default window (the most recent ~24h).
    #[default]
    Default,
    /// Explicit epoch-second bounds.
    Explicit {
        /// Window start, epoch seconds.
        start: i64,
        /// Window end, epoch seconds.
        end: i64,
    },
}

/// What kind of series derivation the request asks for.
///
/// Timeshift and baseline are mutually exclusive by construction; the specs
/// are kept as raw strings here and resolved by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryMode {
    /// Plain export of the current window.
    #[default]
    Raw,
    /// Read a shifted historical window, reported at nominal timestamps.
    /// The spec is a compact duration string such as `"3w"` or `"2d4h"`.
    Timeshift(String),
    /// Annotate with mean/stddev across N historical periods. The spec is a
    /// single `<N><unit>` token with unit in d/w/M/y, e.g. `"3w"`.
    Baseline(String),
}

/// A validated per-file query.
///
/// Construction is the single place invalid parameter combinations are
/// rejected; once a `SeriesQuery` exists its shape is internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesQuery {
    window: Window,
    format: TimeFormat,
    mode: QueryMode,
}

impl SeriesQuery {
    /// Validate raw request parameters into a query.
    ///
    /// # Errors
    /// Returns `RrdcastError::Validation` if exactly one of `start`/`end` is
    /// given, or if both a timeshift and a baseline spec are given.
    pub fn new(
        start: Option<i64>,
        end: Option<i64>,
        format: TimeFormat,
        timeshift: Option<String>,
        baseline: Option<String>,
    ) -> Result<Self, RrdcastError> {
        let window = match (start, end) {
            (Some(start), Some(end)) => Window::Explicit { start, end },
            (None, None) => Window::Default,
            _ => {
                return Err(RrdcastError::validation(
                    "if a start or end time is specified, both must be specified",
                ));
            }
        };
        let mode = match (timeshift, baseline) {
            (Some(_), Some(_)) => {
                return Err(RrdcastError::validation(
                    "cannot use both timeshift and baseline",
                ));
            }
            (Some(ts), None) => QueryMode::Timeshift(ts),
            (None, Some(bl)) => QueryMode::Baseline(bl),
            (None, None) => QueryMode::Raw,
        };
        Ok(Self {
            window,
            format,
            mode,
        })
    }

    /// The requested time window.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// The requested timestamp rendering.
    #[must_use]
    pub const fn format(&self) -> TimeFormat {
        self.format
    }

    /// The requested derivation mode.
    #[must_use]
    pub const fn mode(&self) -> &QueryMode {
        &self.mode
    }
}
