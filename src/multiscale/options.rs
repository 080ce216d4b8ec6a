//! Per-call options accepted by `add` and `finalize`.

use serde::{Deserialize, Serialize};

/// Named options of a decomposition call.
///
/// Only annotates diagnostic output; numbering and validation never depend
/// on it. Missing keys fall back to their defaults and unknown keys are
/// ignored, so options can be read from a larger configuration table.
///
/// ```rust
/// use mesh_multiscale::multiscale::DecompositionOptions;
/// let opts: DecompositionOptions = serde_json::from_str(r#"{"prefix": "  "}"#).unwrap();
/// assert_eq!(opts.prefix, "  ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionOptions {
    /// Prepended to every diagnostic line.
    pub prefix: String,
}

impl DecompositionOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let opts: DecompositionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DecompositionOptions::default());
        assert!(opts.prefix.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let opts: DecompositionOptions =
            serde_json::from_str(r#"{"prefix": "dd: ", "verbose": true}"#).unwrap();
        assert_eq!(opts, DecompositionOptions::with_prefix("dd: "));
    }
}
