use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::models::job::{JobFilters, JobFiltersPatch, JobPosting};
use crate::models::preferences::{Preferences, SortKey, ViewMode};

/// Full preference state: the durable subset plus the active criteria.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceView {
    pub saved_jobs: Vec<String>,
    pub view_mode: ViewMode,
    pub sort_by: SortKey,
    pub filters: JobFilters,
}

pub async fn get(State(state): State<AppState>) -> Json<PreferenceView> {
    let prefs = state.prefs.preferences().await;
    let filters = state.prefs.filters().await;
    Json(PreferenceView {
        saved_jobs: prefs.saved_jobs,
        view_mode: prefs.view_mode,
        sort_by: prefs.sort_by,
        filters,
    })
}

pub async fn set_filters(
    State(state): State<AppState>,
    Json(patch): Json<JobFiltersPatch>,
) -> Json<JobFilters> {
    Json(state.prefs.set_filters(patch).await)
}

pub async fn reset_filters(State(state): State<AppState>) -> Json<JobFilters> {
    Json(state.prefs.reset_filters().await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewMode {
    pub view_mode: ViewMode,
}

pub async fn set_view_mode(
    State(state): State<AppState>,
    Json(input): Json<SetViewMode>,
) -> Json<Preferences> {
    Json(state.prefs.set_view_mode(input.view_mode).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSortBy {
    pub sort_by: SortKey,
}

pub async fn set_sort_by(
    State(state): State<AppState>,
    Json(input): Json<SetSortBy>,
) -> Json<Preferences> {
    Json(state.prefs.set_sort_by(input.sort_by).await)
}

/// The saved set plus the postings that still resolve in the catalog.
/// A saved id with no matching posting is kept in the set but silently
/// skipped here; stale bookmarks are tolerated, not errors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJobsView {
    pub saved_jobs: Vec<String>,
    pub jobs: Vec<JobPosting>,
}

pub async fn saved(State(state): State<AppState>) -> Json<SavedJobsView> {
    let saved_jobs = state.prefs.saved_jobs().await;
    let jobs = saved_jobs
        .iter()
        .filter_map(|id| state.jobs.catalog().get(id).cloned())
        .collect();
    Json(SavedJobsView { saved_jobs, jobs })
}

pub async fn is_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "saved": state.prefs.is_saved(&id).await }))
}

pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let saved_jobs = state.prefs.save_job(&id).await;
    Json(serde_json::json!({ "saved": true, "savedJobs": saved_jobs }))
}

pub async fn unsave(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let saved_jobs = state.prefs.unsave_job(&id).await;
    Json(serde_json::json!({ "saved": false, "savedJobs": saved_jobs }))
}
