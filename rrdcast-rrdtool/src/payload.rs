use serde::Deserialize;

use rrdcast_core::{Export, ExportMeta, ExportRow, FieldValue, RrdcastError};

#[derive(Debug, Deserialize)]
struct RawXport {
    meta: RawMeta,
    data: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    start: i64,
    step: i64,
    end: i64,
    #[serde(default)]
    legend: Vec<String>,
}

/// Parse an `rrdtool xport --json` payload into a canonical export.
///
/// The payload's rows carry values only; timestamps are reconstructed from
/// the meta block as `start + (i + 1) * step`, matching the row range the
/// tool reports (first sample at `start + step`, last at `end`). `ds` is
/// the fallback legend when the payload omits one.
///
/// # Errors
/// Returns `RrdcastError::Tool` when the payload is not valid JSON of the
/// expected shape.
pub fn parse_xport(raw: &str, ds: &str) -> Result<Export, RrdcastError> {
    let sanitized = sanitize_unquoted_nan(raw);
    let parsed: RawXport = serde_json::from_str(&sanitized)
        .map_err(|e| RrdcastError::tool("xport", format!("unparsable payload: {e}")))?;

    let legend = parsed
        .meta
        .legend
        .into_iter()
        .next()
        .unwrap_or_else(|| ds.to_string());
    let rows = parsed
        .data
        .into_iter()
        .enumerate()
        .map(|(i, cells)| ExportRow {
            ts: parsed.meta.start + (i as i64 + 1) * parsed.meta.step,
            value: match cells.into_iter().next().flatten() {
                Some(v) if v.is_finite() => FieldValue::Float(v),
                _ => FieldValue::Null,
            },
        })
        .collect();

    Ok(Export {
        meta: ExportMeta {
            start: parsed.meta.start,
            step: parsed.meta.step,
            end: parsed.meta.end,
            legend,
        },
        rows,
    })
}

/// Replace bare `NaN`/`Infinity` tokens with `null`.
///
/// rrdtool's JSON writer up to 1.5 emitted unknown samples as bare `NaN`,
/// which strict JSON parsers reject. Tokens inside quoted strings are left
/// alone.
fn sanitize_unquoted_nan(raw: &str) -> String {
    const TOKENS: [&str; 3] = ["NaN", "-Infinity", "Infinity"];
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut in_string = false;
    let mut escaped = false;
    while let Some(ch) = rest.chars().next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            rest = &rest[ch.len_utf8()..];
        } else if ch == '"' {
            in_string = true;
            out.push('"');
            rest = &rest[1..];
        } else if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}
