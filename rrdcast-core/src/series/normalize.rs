//! Conversion of a merged frame into the final JSON-shaped result.

use chrono::DateTime;

use rrdcast_types::{CompiledMeta, CompiledResult, FieldValue, NAN_MARKER, TimeFormat};

use crate::series::merge::MergedFrame;

/// Public name of the timestamp field in emitted rows.
const TIME_FIELD: &str = "time";

/// Render an epoch timestamp per the requested output format.
///
/// Formatted output is `"%Y-%m-%d %H:%M:%S"` in UTC. Timestamps chrono
/// cannot represent fall back to the epoch form.
#[must_use]
pub fn format_timestamp(ts: i64, format: TimeFormat) -> FieldValue {
    match format {
        TimeFormat::Epoch => FieldValue::Int(ts),
        TimeFormat::Utc => DateTime::from_timestamp(ts, 0).map_or(FieldValue::Int(ts), |dt| {
            FieldValue::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string())
        }),
    }
}

/// The single numeric coercion applied to every emitted field value.
///
/// - Text equal to the NaN marker becomes `Null`.
/// - Text parsing as an integer becomes `Int`; text parsing as a finite
///   float (including scientific notation) becomes `Float`; text parsing
///   as a non-finite float becomes `Null`.
/// - Non-finite floats become `Null`.
/// - Everything else passes through unchanged, so the pass is idempotent.
#[must_use]
pub fn coerce_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) => {
            if s == NAN_MARKER {
                return FieldValue::Null;
            }
            if let Ok(i) = s.parse::<i64>() {
                return FieldValue::Int(i);
            }
            match s.parse::<f64>() {
                Ok(f) if f.is_finite() => FieldValue::Float(f),
                Ok(_) => FieldValue::Null,
                Err(_) => FieldValue::Text(s),
            }
        }
        FieldValue::Float(f) if !f.is_finite() => FieldValue::Null,
        other => other,
    }
}

/// Compile a merged frame into the final result.
///
/// Each row's timestamp is shifted by `display_shift` seconds (0 outside
/// timeshift/baseline modes), rendered per `format`, and emitted under the
/// public `time` field; all other fields pass through [`coerce_value`].
/// Meta start/end render through the same formatter, unshifted.
#[must_use]
pub fn compile_frame(frame: MergedFrame, format: TimeFormat, display_shift: i64) -> CompiledResult {
    let meta = CompiledMeta {
        start: format_timestamp(frame.start, format),
        step: frame.step,
        end: format_timestamp(frame.end, format),
        rows: frame.rows.len(),
        data_sources: frame.labels,
    };
    let data = frame
        .rows
        .into_iter()
        .map(|(ts, fields)| {
            let mut row: rrdcast_types::Row = fields
                .into_iter()
                .map(|(name, value)| (name, coerce_value(value)))
                .collect();
            row.insert(
                TIME_FIELD.to_string(),
                format_timestamp(ts.saturating_add(display_shift), format),
            );
            row
        })
        .collect();
    CompiledResult { meta, data }
}

/// Re-run the normalization pass over an already-compiled result.
///
/// Compilation normalizes everything it emits, so this is a no-op on
/// results produced by [`compile_frame`]; it exists for payloads that were
/// deserialized from elsewhere and must hold the same invariants.
pub fn normalize_result(result: &mut CompiledResult) {
    let recoerce = |slot: &mut FieldValue| {
        let taken = std::mem::replace(slot, FieldValue::Null);
        *slot = coerce_value(taken);
    };
    recoerce(&mut result.meta.start);
    recoerce(&mut result.meta.end);
    for row in &mut result.data {
        row.values_mut().for_each(recoerce);
    }
}
