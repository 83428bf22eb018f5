use serde::{Deserialize, Serialize};

/// How an element equal to more than one counterpart is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchPolicy {
    /// Synchronize every equal pair (a warning is logged).
    #[default]
    ProcessAll,
    /// Fail with `Error::AmbiguousMatch` before touching the target.
    Reject,
}

/// Configuration for the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    pub multi_match: MultiMatchPolicy,
}

impl ReconcileConfig {
    /// Configuration that treats non-singleton matches as errors.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            multi_match: MultiMatchPolicy::Reject,
        }
    }
}
