use serde::{Deserialize, Serialize};

/// The textual marker the export format uses for unknown samples.
pub const NAN_MARKER: &str = "NaN";

/// A single field value inside a result row.
///
/// Missing samples are `Null`, which is distinct from a zero value. Raw tool
/// output arrives as `Text` or `Float`; the output normalizer coerces
/// numeric-looking text into `Int`/`Float` and the NaN marker into `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A missing or undefined sample; serializes as JSON `null`.
    Null,
    /// An integral value; serializes as a bare JSON integer.
    Int(i64),
    /// A floating-point value; non-finite values serialize as `null`.
    Float(f64),
    /// Raw text, either a not-yet-coerced number or a genuine string.
    Text(String),
}

impl FieldValue {
    /// True if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value as a finite sample, if it is one.
    ///
    /// `Int` and finite `Float` values convert directly; `Text` is parsed,
    /// with the NaN marker and anything non-numeric treated as missing.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Int(i) => {
                // i64 -> f64 can lose precision for huge magnitudes; sample
                // values in practice are far below 2^53.
                #[allow(clippy::cast_precision_loss)]
                let v = *i as f64;
                Some(v)
            }
            Self::Float(f) => f.is_finite().then_some(*f),
            Self::Text(s) => s.parse::<f64>().ok().filter(|f| f.is_finite()),
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Null, Self::Float)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn numeric_treats_nan_marker_as_missing() {
        assert_eq!(FieldValue::Text("NaN".into()).numeric(), None);
        assert_eq!(FieldValue::Text("1.07e+01".into()).numeric(), Some(10.7));
        assert_eq!(FieldValue::Null.numeric(), None);
        assert_eq!(FieldValue::Float(f64::NAN).numeric(), None);
        assert_eq!(FieldValue::Int(3).numeric(), Some(3.0));
    }
}
