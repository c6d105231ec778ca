use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One job listing. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub location: Location,
    /// Non-empty by construction.
    pub job_type: Vec<JobType>,
    pub experience_level: ExperienceLevel,
    pub remote: bool,
    pub published_date: DateTime<Utc>,
    pub application_url: String,
    /// Rich-text (HTML fragment) body.
    pub description: String,
    pub skills: Vec<String>,
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub logo: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Invariant: min <= max.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl std::str::FromStr for JobType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(JobType::FullTime),
            "Part-time" => Ok(JobType::PartTime),
            "Contract" => Ok(JobType::Contract),
            "Internship" => Ok(JobType::Internship),
            "Freelance" => Ok(JobType::Freelance),
            _ => Err(AppError::BadRequest(format!("Unknown job type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl std::str::FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entry" => Ok(ExperienceLevel::Entry),
            "Mid" => Ok(ExperienceLevel::Mid),
            "Senior" => Ok(ExperienceLevel::Senior),
            "Lead" => Ok(ExperienceLevel::Lead),
            "Executive" => Ok(ExperienceLevel::Executive),
            _ => Err(AppError::BadRequest(format!(
                "Unknown experience level: {s}"
            ))),
        }
    }
}

/// Active filter constraints for a catalog query.
///
/// Every field defaults to "unconstrained": empty strings and the empty
/// type set match everything, `None` means "don't care".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilters {
    pub search: String,
    pub job_types: Vec<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub remote: Option<bool>,
    pub location: String,
}

/// Partial update for [`JobFilters`]. A field that is absent from the
/// input leaves the current value unchanged; an explicit `null` clears
/// the optional fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFiltersPatch {
    pub search: Option<String>,
    pub job_types: Option<Vec<JobType>>,
    #[serde(deserialize_with = "double_option")]
    pub experience_level: Option<Option<ExperienceLevel>>,
    #[serde(deserialize_with = "double_option")]
    pub remote: Option<Option<bool>>,
    pub location: Option<String>,
}

/// Distinguishes an absent field (leave unchanged) from an explicit
/// null (clear the constraint).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

impl JobFilters {
    /// Shallow-merge a patch into the current criteria.
    pub fn apply(&mut self, patch: JobFiltersPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(job_types) = patch.job_types {
            self.job_types = job_types;
        }
        if let Some(experience_level) = patch.experience_level {
            self.experience_level = experience_level;
        }
        if let Some(remote) = patch.remote {
            self.remote = remote;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}

/// One page of a filtered catalog query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsPage {
    pub jobs: Vec<JobPosting>,
    /// Full filtered count, not the page length.
    pub total: usize,
    pub page: u32,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_wire_names_round_trip() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"Full-time\"");
        let back: JobType = serde_json::from_str("\"Part-time\"").unwrap();
        assert_eq!(back, JobType::PartTime);
        assert_eq!("Contract".parse::<JobType>().unwrap(), JobType::Contract);
        assert!("full-time".parse::<JobType>().is_err());
    }

    #[test]
    fn filters_default_is_unconstrained() {
        let filters = JobFilters::default();
        assert!(filters.search.is_empty());
        assert!(filters.job_types.is_empty());
        assert_eq!(filters.experience_level, None);
        assert_eq!(filters.remote, None);
        assert!(filters.location.is_empty());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut filters = JobFilters {
            search: "rust".into(),
            remote: Some(true),
            ..Default::default()
        };
        filters.apply(JobFiltersPatch {
            location: Some("Berlin".into()),
            ..Default::default()
        });
        assert_eq!(filters.search, "rust");
        assert_eq!(filters.remote, Some(true));
        assert_eq!(filters.location, "Berlin");
    }

    #[test]
    fn patch_null_clears_optional_fields() {
        let mut filters = JobFilters {
            remote: Some(false),
            experience_level: Some(ExperienceLevel::Senior),
            ..Default::default()
        };
        let patch: JobFiltersPatch =
            serde_json::from_str(r#"{"remote": null, "experienceLevel": null}"#).unwrap();
        filters.apply(patch);
        assert_eq!(filters.remote, None);
        assert_eq!(filters.experience_level, None);
    }

    #[test]
    fn posting_serializes_with_camel_case_keys() {
        let job = JobPosting {
            id: "job-1".into(),
            title: "Backend Developer".into(),
            company: Company {
                name: "Spotify".into(),
                logo: "https://example.com/logo.jpg".into(),
                website: Some("https://spotify.com".into()),
                linkedin: None,
                twitter: None,
            },
            location: Location {
                city: "Berlin".into(),
                state: "Berlin".into(),
                country: "Germany".into(),
                coordinates: None,
            },
            job_type: vec![JobType::FullTime],
            experience_level: ExperienceLevel::Mid,
            remote: true,
            published_date: Utc::now(),
            application_url: "https://spotify.com/careers/apply/1".into(),
            description: "<p>Hello</p>".into(),
            skills: vec!["Rust".into()],
            salary: Some(Salary {
                min: 90_000,
                max: 140_000,
                currency: "USD".into(),
            }),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobType"][0], "Full-time");
        assert_eq!(value["experienceLevel"], "Mid");
        assert!(value["publishedDate"].is_string());
        assert_eq!(value["salary"]["min"], 90_000);
    }
}
