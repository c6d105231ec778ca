// Seeded mock-data layer. There is no upstream job source: the catalog
// is generated here once at startup and treated as read-only afterwards.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::job::{
    Company, ExperienceLevel, JobPosting, JobType, Location, Salary,
};

const COMPANIES: [(&str, &str); 8] = [
    (
        "Google",
        "https://images.pexels.com/photos/4439901/pexels-photo-4439901.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Microsoft",
        "https://images.pexels.com/photos/4508751/pexels-photo-4508751.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Meta",
        "https://images.pexels.com/photos/4439632/pexels-photo-4439632.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Amazon",
        "https://images.pexels.com/photos/4792728/pexels-photo-4792728.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Apple",
        "https://images.pexels.com/photos/4439901/pexels-photo-4439901.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Netflix",
        "https://images.pexels.com/photos/4508751/pexels-photo-4508751.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Spotify",
        "https://images.pexels.com/photos/4439632/pexels-photo-4439632.jpeg?w=100&h=100&fit=crop",
    ),
    (
        "Airbnb",
        "https://images.pexels.com/photos/4792728/pexels-photo-4792728.jpeg?w=100&h=100&fit=crop",
    ),
];

const TITLES: [&str; 10] = [
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Mobile Developer",
    "UI/UX Designer",
    "Product Manager",
    "Software Architect",
    "Site Reliability Engineer",
];

const LOCATIONS: [(&str, &str, &str); 8] = [
    ("San Francisco", "CA", "USA"),
    ("New York", "NY", "USA"),
    ("Seattle", "WA", "USA"),
    ("Austin", "TX", "USA"),
    ("London", "England", "UK"),
    ("Berlin", "Berlin", "Germany"),
    ("Toronto", "ON", "Canada"),
    ("Amsterdam", "NH", "Netherlands"),
];

const JOB_TYPES: [JobType; 5] = [
    JobType::FullTime,
    JobType::PartTime,
    JobType::Contract,
    JobType::Internship,
    JobType::Freelance,
];

const EXPERIENCE_LEVELS: [ExperienceLevel; 5] = [
    ExperienceLevel::Entry,
    ExperienceLevel::Mid,
    ExperienceLevel::Senior,
    ExperienceLevel::Lead,
    ExperienceLevel::Executive,
];

const SKILLS: [&str; 13] = [
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "Kubernetes",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "Microservices",
    "CI/CD",
];

/// Generate `count` postings. The same seed always yields the same
/// catalog, so a deployment can be reproduced from its logged seed.
pub fn generate(count: usize, seed: u64) -> Vec<JobPosting> {
    let mut rng = StdRng::seed_from_u64(seed);
    let now = Utc::now();
    (1..=count).map(|n| posting(&mut rng, n, now)).collect()
}

fn posting(rng: &mut StdRng, n: usize, now: DateTime<Utc>) -> JobPosting {
    let (company_name, logo) = COMPANIES[rng.random_range(0..COMPANIES.len())];
    let title = TITLES[rng.random_range(0..TITLES.len())];
    let (city, state, country) = LOCATIONS[rng.random_range(0..LOCATIONS.len())];
    let job_type = JOB_TYPES[rng.random_range(0..JOB_TYPES.len())];
    let experience_level = EXPERIENCE_LEVELS[rng.random_range(0..EXPERIENCE_LEVELS.len())];
    let slug = company_name.to_lowercase();

    // Published some time within the last 30 days.
    let published_date = now - Duration::seconds(rng.random_range(0..30 * 24 * 60 * 60));

    let salary = rng.random_bool(0.7).then(|| {
        let min = rng.random_range(80_000..180_000);
        // The range stays well-formed even when the draws cross.
        let max = rng.random_range(120_000..220_000).max(min);
        Salary {
            min,
            max,
            currency: "USD".into(),
        }
    });

    let skill_count = rng.random_range(3..=7);
    let skills = rand::seq::index::sample(rng, SKILLS.len(), skill_count)
        .iter()
        .map(|index| SKILLS[index].to_string())
        .collect();

    JobPosting {
        id: format!("job-{n}"),
        title: title.to_string(),
        description: description(title, company_name, experience_level),
        company: Company {
            name: company_name.to_string(),
            logo: logo.to_string(),
            website: Some(format!("https://{slug}.com")),
            linkedin: Some(format!("https://linkedin.com/company/{slug}")),
            twitter: Some(format!("https://twitter.com/{slug}")),
        },
        location: Location {
            city: city.to_string(),
            state: state.to_string(),
            country: country.to_string(),
            coordinates: None,
        },
        job_type: vec![job_type],
        experience_level,
        remote: rng.random_bool(0.6),
        published_date,
        application_url: format!("https://{slug}.com/careers/apply/{n}"),
        skills,
        salary,
    }
}

fn description(title: &str, company: &str, level: ExperienceLevel) -> String {
    let years = match level {
        ExperienceLevel::Entry => "0-2",
        ExperienceLevel::Mid => "2-5",
        _ => "5+",
    };
    format!(
        r#"<p>We are looking for a talented {title} to join our growing team at {company}.</p>

<h3>Responsibilities:</h3>
<ul>
  <li>Develop and maintain high-quality software solutions</li>
  <li>Collaborate with cross-functional teams to deliver features</li>
  <li>Write clean, maintainable, and efficient code</li>
  <li>Participate in code reviews and technical discussions</li>
</ul>

<h3>Requirements:</h3>
<ul>
  <li>{years} years of professional experience</li>
  <li>Strong knowledge of modern development practices</li>
  <li>Experience with version control systems (Git)</li>
  <li>Excellent problem-solving and communication skills</li>
</ul>

<h3>Benefits:</h3>
<ul>
  <li>Competitive salary and equity package</li>
  <li>Comprehensive health, dental, and vision insurance</li>
  <li>Flexible working hours and remote work options</li>
</ul>"#
    )
}
