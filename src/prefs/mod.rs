// Preference store: user-local state with a durable subset (saved jobs,
// view mode, sort key) written through an injected storage adapter.
// Filter criteria stay in memory only; every session starts
// unconstrained.

pub mod storage;

pub use storage::{FilePreferenceStorage, PreferenceStorage};

use tokio::sync::Mutex;

use crate::models::job::{JobFilters, JobFiltersPatch};
use crate::models::preferences::{Preferences, SortKey, ViewMode};

struct State {
    durable: Preferences,
    filters: JobFilters,
}

pub struct PreferenceStore {
    state: Mutex<State>,
    storage: Box<dyn PreferenceStorage>,
}

impl PreferenceStore {
    /// Read the durable subset back from storage, merging over defaults.
    /// A missing or unreadable backing is never fatal: the store starts
    /// from defaults and keeps running in memory.
    pub async fn load(storage: Box<dyn PreferenceStorage>) -> Self {
        let durable = match storage.load().await {
            Ok(Some(prefs)) => {
                tracing::info!("Loaded stored preferences ({} saved jobs)", prefs.saved_jobs.len());
                prefs
            }
            Ok(None) => Preferences::default(),
            Err(e) => {
                tracing::warn!("Failed to load stored preferences, using defaults: {e}");
                Preferences::default()
            }
        };
        Self {
            state: Mutex::new(State {
                durable,
                filters: JobFilters::default(),
            }),
            storage,
        }
    }

    pub async fn filters(&self) -> JobFilters {
        self.state.lock().await.filters.clone()
    }

    /// Shallow-merge a patch into the active criteria. Not persisted.
    pub async fn set_filters(&self, patch: JobFiltersPatch) -> JobFilters {
        let mut state = self.state.lock().await;
        state.filters.apply(patch);
        state.filters.clone()
    }

    /// Restore every criteria field to its unconstrained default. Saved
    /// jobs, view mode, and sort key are untouched.
    pub async fn reset_filters(&self) -> JobFilters {
        let mut state = self.state.lock().await;
        state.filters = JobFilters::default();
        state.filters.clone()
    }

    /// Bookmark a posting id. Idempotent: an already-saved id is left
    /// alone and never duplicated.
    pub async fn save_job(&self, id: &str) -> Vec<String> {
        let snapshot = {
            let mut state = self.state.lock().await;
            if state.durable.saved_jobs.iter().any(|saved| saved == id) {
                return state.durable.saved_jobs.clone();
            }
            state.durable.saved_jobs.push(id.to_string());
            state.durable.clone()
        };
        self.persist(&snapshot).await;
        snapshot.saved_jobs
    }

    /// Drop a bookmark. A no-op when the id is not saved.
    pub async fn unsave_job(&self, id: &str) -> Vec<String> {
        let snapshot = {
            let mut state = self.state.lock().await;
            let before = state.durable.saved_jobs.len();
            state.durable.saved_jobs.retain(|saved| saved != id);
            if state.durable.saved_jobs.len() == before {
                return state.durable.saved_jobs.clone();
            }
            state.durable.clone()
        };
        self.persist(&snapshot).await;
        snapshot.saved_jobs
    }

    pub async fn is_saved(&self, id: &str) -> bool {
        self.state
            .lock()
            .await
            .durable
            .saved_jobs
            .iter()
            .any(|saved| saved == id)
    }

    pub async fn saved_jobs(&self) -> Vec<String> {
        self.state.lock().await.durable.saved_jobs.clone()
    }

    pub async fn set_view_mode(&self, mode: ViewMode) -> Preferences {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.durable.view_mode = mode;
            state.durable.clone()
        };
        self.persist(&snapshot).await;
        snapshot
    }

    pub async fn set_sort_by(&self, key: SortKey) -> Preferences {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.durable.sort_by = key;
            state.durable.clone()
        };
        self.persist(&snapshot).await;
        snapshot
    }

    pub async fn preferences(&self) -> Preferences {
        self.state.lock().await.durable.clone()
    }

    /// Write the durable subset through the adapter. A failed write is
    /// logged and the in-memory state stays authoritative.
    async fn persist(&self, prefs: &Preferences) {
        if let Err(e) = self.storage.store(prefs).await {
            tracing::warn!("Failed to persist preferences: {e}");
        }
    }
}
