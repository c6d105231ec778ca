// Catalog module: the fixed set of job postings and the query service
// answering filtered, paginated list queries and single-item lookups.

pub mod client;
pub mod seed;

pub use client::CatalogClient;

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::job::{JobFilters, JobPosting, JobsPage};

/// Fixed page size for list queries.
pub const PAGE_SIZE: usize = 20;

/// Immutable snapshot of all postings, generated once at startup.
pub struct Catalog {
    jobs: Vec<JobPosting>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog, indexing postings by id. Ids must be unique.
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self, AppError> {
        let mut by_id = HashMap::with_capacity(jobs.len());
        for (index, job) in jobs.iter().enumerate() {
            if by_id.insert(job.id.clone(), index).is_some() {
                return Err(AppError::Internal(format!("Duplicate job id: {}", job.id)));
            }
        }
        Ok(Self { jobs, by_id })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Lookup by id. Unknown ids are `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.by_id.get(id).map(|&index| &self.jobs[index])
    }

    /// Answer a filtered, paginated query. Pure: the same criteria over
    /// the same catalog always yield the same page.
    ///
    /// Pages are 1-indexed (0 is treated as 1) and always `PAGE_SIZE`
    /// postings long except the last. A page past the end of the
    /// filtered set yields an empty list with `has_more = false`.
    pub fn list(&self, filters: &JobFilters, page: u32) -> JobsPage {
        let matching: Vec<&JobPosting> = self
            .jobs
            .iter()
            .filter(|job| Self::matches(job, filters))
            .collect();
        let total = matching.len();

        let page = page.max(1);
        let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
        let end = start.saturating_add(PAGE_SIZE).min(total);
        let jobs = if start < total {
            matching[start..end].iter().map(|job| (*job).clone()).collect()
        } else {
            Vec::new()
        };

        JobsPage {
            jobs,
            total,
            page,
            has_more: end < total,
        }
    }

    /// All predicates ANDed; every unconstrained field matches.
    fn matches(job: &JobPosting, filters: &JobFilters) -> bool {
        if !filters.search.is_empty() {
            let needle = filters.search.to_lowercase();
            let hit = job.title.to_lowercase().contains(&needle)
                || job.company.name.to_lowercase().contains(&needle)
                || job
                    .skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if !filters.job_types.is_empty()
            && !job
                .job_type
                .iter()
                .any(|job_type| filters.job_types.contains(job_type))
        {
            return false;
        }

        if let Some(level) = filters.experience_level
            && job.experience_level != level
        {
            return false;
        }

        if let Some(remote) = filters.remote
            && job.remote != remote
        {
            return false;
        }

        if !filters.location.is_empty() {
            let needle = filters.location.to_lowercase();
            let hit = job.location.city.to_lowercase().contains(&needle)
                || job.location.state.to_lowercase().contains(&needle)
                || job.location.country.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::job::{Company, ExperienceLevel, JobType, Location, Salary};

    fn posting(id: &str, title: &str, company: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: Company {
                name: company.to_string(),
                logo: format!("https://example.com/{}.jpg", company.to_lowercase()),
                website: None,
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
            remote: false,
            published_date: Utc::now(),
            application_url: format!("https://example.com/apply/{id}"),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: Some(Salary {
                min: 90_000,
                max: 140_000,
                currency: "USD".into(),
            }),
        }
    }

    fn catalog_of(count: usize) -> Catalog {
        let jobs = (1..=count)
            .map(|n| posting(&format!("job-{n}"), "Backend Developer", "Acme", &["Rust"]))
            .collect();
        Catalog::new(jobs).unwrap()
    }

    #[test]
    fn unconstrained_filters_return_full_catalog() {
        let catalog = catalog_of(45);
        let page = catalog.list(&JobFilters::default(), 1);
        assert_eq!(page.total, 45);
        assert_eq!(page.jobs.len(), PAGE_SIZE);
        assert!(page.has_more);
    }

    #[test]
    fn pagination_walks_45_matches_as_20_20_5() {
        let catalog = catalog_of(45);
        let filters = JobFilters::default();

        let first = catalog.list(&filters, 1);
        assert_eq!(first.jobs.len(), 20);
        assert!(first.has_more);

        let third = catalog.list(&filters, 3);
        assert_eq!(third.jobs.len(), 5);
        assert!(!third.has_more);

        let fourth = catalog.list(&filters, 4);
        assert!(fourth.jobs.is_empty());
        assert_eq!(fourth.total, 45);
        assert!(!fourth.has_more);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_set() {
        let catalog = catalog_of(53);
        let filters = JobFilters::default();

        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let result = catalog.list(&filters, page);
            collected.extend(result.jobs.iter().map(|job| job.id.clone()));
            if !result.has_more {
                break;
            }
            page += 1;
        }

        let expected: Vec<String> = (1..=53).map(|n| format!("job-{n}")).collect();
        assert_eq!(collected, expected);
    }

    #[test]
    fn search_matches_title_company_or_skills_case_insensitively() {
        let jobs = vec![
            posting("job-1", "Frontend Developer", "Acme", &["React"]),
            posting("job-2", "Data Scientist", "Rustworks", &["Python"]),
            posting("job-3", "Product Manager", "Globex", &["Rust", "AWS"]),
            posting("job-4", "Designer", "Initech", &["Figma"]),
        ];
        let catalog = Catalog::new(jobs).unwrap();

        let filters = JobFilters {
            search: "RUST".into(),
            ..Default::default()
        };
        let page = catalog.list(&filters, 1);
        let ids: Vec<&str> = page.jobs.iter().map(|job| job.id.as_str()).collect();
        // job-2 by company name, job-3 by skill; job-1 and job-4 lack the
        // substring everywhere and must be excluded.
        assert_eq!(ids, ["job-2", "job-3"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn remote_filter_selects_exactly_the_remote_posting() {
        let mut a = posting("job-a", "Engineer", "Acme", &["Rust"]);
        a.remote = true;
        a.job_type = vec![JobType::FullTime];
        let mut b = posting("job-b", "Engineer", "Acme", &["Rust"]);
        b.remote = false;
        b.job_type = vec![JobType::Contract];
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let filters = JobFilters {
            remote: Some(true),
            ..Default::default()
        };
        let page = catalog.list(&filters, 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.jobs[0].id, "job-a");
        assert!(!page.has_more);
    }

    #[test]
    fn job_type_filter_intersects_type_sets() {
        let mut a = posting("job-a", "Engineer", "Acme", &[]);
        a.job_type = vec![JobType::FullTime, JobType::Contract];
        let mut b = posting("job-b", "Engineer", "Acme", &[]);
        b.job_type = vec![JobType::Internship];
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let filters = JobFilters {
            job_types: vec![JobType::Contract, JobType::Freelance],
            ..Default::default()
        };
        let page = catalog.list(&filters, 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.jobs[0].id, "job-a");
    }

    #[test]
    fn experience_and_location_filters_are_exact_and_substring() {
        let mut a = posting("job-a", "Engineer", "Acme", &[]);
        a.experience_level = ExperienceLevel::Senior;
        a.location.city = "San Francisco".into();
        a.location.state = "CA".into();
        a.location.country = "USA".into();
        let mut b = posting("job-b", "Engineer", "Acme", &[]);
        b.experience_level = ExperienceLevel::Entry;
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let filters = JobFilters {
            experience_level: Some(ExperienceLevel::Senior),
            location: "francisco".into(),
            ..Default::default()
        };
        let page = catalog.list(&filters, 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.jobs[0].id, "job-a");
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let catalog = catalog_of(5);
        let page = catalog.list(&JobFilters::default(), 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.jobs.len(), 5);
    }

    #[test]
    fn unknown_id_lookup_is_none() {
        let catalog = catalog_of(3);
        assert!(catalog.get("job-2").is_some());
        assert!(catalog.get("job-999").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_at_construction() {
        let jobs = vec![
            posting("job-1", "Engineer", "Acme", &[]),
            posting("job-1", "Engineer", "Globex", &[]),
        ];
        assert!(Catalog::new(jobs).is_err());
    }
}
