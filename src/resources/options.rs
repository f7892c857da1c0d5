use serde::{Deserialize, Serialize};

/// Options that control how much of a property the projection emits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// Expand the output with the relation-derived detail blocks.
    pub detailed: bool,
}

impl ProjectionOptions {
    pub fn summary() -> Self {
        Self::default()
    }

    pub fn detailed() -> Self {
        Self { detailed: true }
    }

    /// Derives the mode from the `detalhado` query parameter. Only the
    /// literal string `"true"` turns detailed mode on; anything else,
    /// including absence, keeps the summary baseline.
    pub fn from_query(param: Option<&str>) -> Self {
        match param {
            Some("true") => Self::detailed(),
            _ => Self::summary(),
        }
    }
}
