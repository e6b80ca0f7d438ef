use std::collections::HashSet;

use rrdcast_types::RrdcastError;

/// Step size and data-source names extracted from a file's info output.
///
/// Names keep their first-seen order; the info output repeats each name once
/// per attribute (`ds[<name>].type`, `ds[<name>].min`, ...) and the catalog
/// deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCatalog {
    /// Sampling interval of the file, seconds.
    pub step: i64,
    /// Data-source names, first-seen order, deduplicated.
    pub sources: Vec<String>,
}

impl SourceCatalog {
    /// Parse the tool's line-oriented `key = value` info text.
    ///
    /// # Errors
    /// Returns `RrdcastError::Tool` when no usable `step` key is present —
    /// the output is not recognizable as file metadata.
    pub fn parse(info: &str) -> Result<Self, RrdcastError> {
        let mut step: Option<i64> = None;
        let mut seen: HashSet<String> = HashSet::new();
        let mut sources: Vec<String> = Vec::new();

        for line in info.lines() {
            let Some((key, value)) = line.split_once(" = ") else {
                continue;
            };
            if key == "step" {
                step = value.trim().parse::<i64>().ok();
            }
            if let Some(name) = ds_name(key)
                && seen.insert(name.to_string())
            {
                sources.push(name.to_string());
            }
        }

        let step = step.ok_or_else(|| {
            RrdcastError::tool("info", "output carries no parsable step value")
        })?;
        Ok(Self { step, sources })
    }
}

/// Extract `<name>` from keys of the shape `ds[<name>].<attr>`.
fn ds_name(key: &str) -> Option<&str> {
    let rest = key.strip_prefix("ds[")?;
    let close = rest.find(']')?;
    // Require a trailing attribute so unrelated bracketed keys don't match.
    rest[close..].starts_with("].").then(|| &rest[..close])
}
