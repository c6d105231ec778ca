use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::models::job::{JobFilters, JobPosting, JobsPage};

/// Wire form of the filter criteria: query-string parameters, with the
/// accepted job types comma-separated. Unknown enum values are rejected
/// at this boundary with a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub job_types: Option<String>,
    pub experience_level: Option<String>,
    pub remote: Option<bool>,
    pub location: Option<String>,
    pub page: Option<u32>,
}

impl JobListQuery {
    pub fn into_filters(self) -> Result<(JobFilters, u32), AppError> {
        let mut filters = JobFilters::default();
        if let Some(search) = self.search {
            filters.search = search;
        }
        if let Some(types) = self.job_types {
            filters.job_types = types
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()?;
        }
        if let Some(level) = self.experience_level
            && !level.is_empty()
        {
            filters.experience_level = Some(level.parse()?);
        }
        filters.remote = self.remote;
        if let Some(location) = self.location {
            filters.location = location;
        }
        Ok((filters, self.page.unwrap_or(1)))
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<JobsPage>, AppError> {
    let (filters, page) = query.into_filters()?;
    Ok(Json(state.jobs.list_jobs(&filters, page).await))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .jobs
        .get_job(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
