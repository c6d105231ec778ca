use serde::{Deserialize, Serialize};

/// How the client lays out the job list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Requested result ordering. Stored and exposed, but never applied to
/// query results; the catalog keeps its own order until product intent
/// on sorting is settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Company,
    Relevance,
}

/// The durable subset of preference state: what survives a restart.
/// Active filter criteria are deliberately not part of this; every
/// session starts unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Bookmarked posting ids, unique, in insertion order. Ids are kept
    /// even when they no longer resolve in the current catalog.
    pub saved_jobs: Vec<String>,
    pub view_mode: ViewMode,
    pub sort_by: SortKey,
}
