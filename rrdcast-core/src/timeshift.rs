use rrdcast_types::RrdcastError;

/// Seconds per duration unit. Months are 30 days, years 365 days.
const fn unit_seconds(unit: char) -> Option<i64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(3_600),
        'd' => Some(86_400),
        'w' => Some(604_800),
        'M' => Some(2_592_000),
        'y' | 'Y' => Some(31_536_000),
        _ => None,
    }
}

/// Resolve a compact duration spec into an offset in seconds.
///
/// The spec is a concatenation of `<integer><unit>` tokens, e.g. `"3w"` or
/// `"2d4h"`. Text that does not form a token contributes nothing:
/// `resolve("so what")` is 0, and `resolve("x12h")` is 43200. Magnitudes
/// saturate instead of wrapping.
#[must_use]
pub fn resolve(spec: &str) -> i64 {
    let mut total: i64 = 0;
    let mut digits = String::new();
    for ch in spec.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty()
            && let Some(secs) = unit_seconds(ch)
            && let Ok(n) = digits.parse::<i64>()
        {
            total = total.saturating_add(n.saturating_mul(secs));
        }
        digits.clear();
    }
    total
}

/// A parsed baseline period spec: N periods of one calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineSpec {
    /// Number of historical periods to aggregate over.
    pub periods: u32,
    /// Calendar unit, one of `d`, `w`, `M`, `y`.
    pub unit: char,
}

impl BaselineSpec {
    /// Parse the first `<N><unit>` token with a calendar unit out of `spec`.
    ///
    /// # Errors
    /// Returns `RrdcastError::Validation` when no such token exists.
    pub fn parse(spec: &str) -> Result<Self, RrdcastError> {
        let mut run_start: Option<usize> = None;
        for (i, ch) in spec.char_indices() {
            if ch.is_ascii_digit() {
                run_start.get_or_insert(i);
                continue;
            }
            if let Some(start) = run_start
                && matches!(ch, 'd' | 'w' | 'M' | 'y')
            {
                let periods = spec[start..i].parse::<u32>().map_err(|_| {
                    RrdcastError::validation(format!("baseline period count out of range in {spec:?}"))
                })?;
                return Ok(Self { periods, unit: ch });
            }
            run_start = None;
        }
        Err(RrdcastError::validation(
            "baseline timeframe must be specified (e.g. \"3w\", \"2w\")",
        ))
    }

    /// Length of one period, seconds.
    #[must_use]
    pub fn period_seconds(&self) -> i64 {
        // The unit was validated by `parse`.
        unit_seconds(self.unit).unwrap_or(0)
    }

    /// Offset of the n-th period back from the nominal window, seconds.
    #[must_use]
    pub fn offset_seconds(&self, n: u32) -> i64 {
        i64::from(n).saturating_mul(self.period_seconds())
    }
}
