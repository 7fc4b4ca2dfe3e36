//! Job-description parser: turns pasted posting text into structured fields.
//!
//! Pure and synchronous: the result depends only on the three inputs and, for
//! `posted_at`, the reference instant. Every sub-extractor degrades to
//! `None` / empty on a miss; nothing here returns an error.
//!
//! Pipeline:
//! 1. Detect the source format; LinkedIn text goes through the header parser,
//!    which seeds company, title, location, posting age, workplace type and the
//!    cleaned description.
//! 2. Salary runs on the (cleaned) text as written; experience and skills on
//!    its lowercased form; remote status on title + location + text when the
//!    header did not settle it.
//! 3. Title and company fall back to generic heuristics over the raw input.

pub mod experience;
pub mod fallback;
pub mod format;
pub mod freshness;
pub mod handlers;
pub mod linkedin;
pub mod remote;
pub mod salary;
pub mod skills;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parser::experience::parse_experience;
use crate::parser::fallback::{parse_company_name, parse_job_title};
use crate::parser::format::detect_format;
use crate::parser::linkedin::parse_linkedin_header;
use crate::parser::remote::parse_remote_status;
use crate::parser::salary::parse_salary;
use crate::parser::skills::parse_skills;

/// Layout convention the posting was pasted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    #[default]
    Generic,
    Linkedin,
}

/// Structured view of a posting. Built fresh per call; callers persist a copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobInfo {
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub salary_text: Option<String>,
    /// `None` means unknown, which is not the same as on-site.
    pub is_remote: Option<bool>,
    /// `"N+"` or `"N-M"`.
    pub experience_years: Option<String>,
    pub skills: Vec<String>,
    pub extracted_title: Option<String>,
    pub extracted_company: Option<String>,
    pub extracted_location: Option<String>,
    pub cleaned_description: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub source_format: SourceFormat,
}

/// Parses a posting using the current time for relative posting ages.
pub fn parse_job_description(description: &str, title: &str, location: &str) -> ParsedJobInfo {
    parse_job_description_at(description, title, location, Utc::now())
}

/// Parses a posting, resolving "3 weeks ago" style ages against `now`.
pub fn parse_job_description_at(
    description: &str,
    title: &str,
    location: &str,
    now: DateTime<Utc>,
) -> ParsedJobInfo {
    let mut info = ParsedJobInfo::default();

    if description.is_empty() {
        return info;
    }

    info.source_format = detect_format(description);
    if info.source_format == SourceFormat::Linkedin {
        let header = parse_linkedin_header(description, now);
        info.extracted_company = header.company;
        info.extracted_title = header.title;
        info.extracted_location = header.location;
        info.cleaned_description = header.cleaned_description;
        info.posted_at = header.posted_at;
        info.is_remote = header.is_remote;
    }

    // The LinkedIn header carries "1 day ago" and similar noise; parse the body only.
    let parse_text = info.cleaned_description.as_deref().unwrap_or(description);
    let text = parse_text.to_lowercase();
    let full_text = format!("{title} {location} {parse_text}").to_lowercase();

    let salary = parse_salary(parse_text);
    info.salary_min = salary.salary_min;
    info.salary_max = salary.salary_max;
    info.salary_text = salary.salary_text;

    if info.is_remote.is_none() {
        info.is_remote = parse_remote_status(&full_text, location);
    }

    info.experience_years = parse_experience(&text);
    info.skills = parse_skills(&text);

    if info.extracted_title.is_none() {
        info.extracted_title = parse_job_title(description);
    }
    if info.extracted_company.is_none() {
        info.extracted_company = parse_company_name(description);
    }

    debug!(
        "Parsed job ({:?}): salary={:?}, remote={:?}, exp={:?}, skills={}, title={:?}, company={:?}, location={:?}",
        info.source_format,
        info.salary_text,
        info.is_remote,
        info.experience_years,
        info.skills.len(),
        info.extracted_title,
        info.extracted_company,
        info.extracted_location
    );

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::salary::{SALARY_CEILING, SALARY_FLOOR};
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    const LINKEDIN_POSTING: &str = "Acme Corp\nShare\nSenior Software Engineer\nUnited States · 3 weeks ago · 50 applicants\nEasy Apply\nSave\nAbout the job\nBuild reliable services in Python on AWS.\n5+ years of experience required.";

    const GENERIC_POSTING: &str = "Senior Backend Engineer\n\
        Globex Corporation is hiring a Senior Backend Engineer to scale our payments platform.\n\
        This is a fully remote position.\n\
        Requirements: 3-5 years of experience with Go, PostgreSQL and Kubernetes.\n\
        Compensation: $160,000 - $190,000 per year.";

    #[test]
    fn test_empty_description_returns_blank_record() {
        let info = parse_job_description_at("", "Engineer", "Remote", now());
        assert_eq!(info, ParsedJobInfo::default());
        assert_eq!(info.source_format, SourceFormat::Generic);
        assert!(info.skills.is_empty());
    }

    #[test]
    fn test_salary_scenario() {
        let info = parse_job_description_at("$150,000 - $200,000 per year", "", "", now());
        assert_eq!(info.salary_min, Some(150_000));
        assert_eq!(info.salary_max, Some(200_000));
        assert_eq!(
            info.salary_text.as_deref(),
            Some("$150,000 - $200,000 per year")
        );
    }

    #[test]
    fn test_experience_scenario() {
        let info = parse_job_description_at("5+ years of experience required", "", "", now());
        assert_eq!(info.experience_years.as_deref(), Some("5+"));
    }

    #[test]
    fn test_remote_and_skills_scenario() {
        let info = parse_job_description_at(
            "Remote role. You will write Python services deployed on AWS.",
            "",
            "",
            now(),
        );
        assert_eq!(info.is_remote, Some(true));
        let python = info.skills.iter().position(|s| s == "Python").unwrap();
        let aws = info.skills.iter().position(|s| s == "AWS").unwrap();
        assert!(python < aws, "skills must follow catalog order");
    }

    #[test]
    fn test_linkedin_scenario() {
        let info = parse_job_description_at(LINKEDIN_POSTING, "", "", now());
        assert_eq!(info.source_format, SourceFormat::Linkedin);
        assert_eq!(info.extracted_company.as_deref(), Some("Acme Corp"));
        assert_eq!(
            info.extracted_title.as_deref(),
            Some("Senior Software Engineer")
        );
        assert_eq!(info.extracted_location.as_deref(), Some("United States"));
        assert_eq!(info.posted_at, Some(now() - TimeDelta::days(21)));
        assert_eq!(
            info.cleaned_description.as_deref(),
            Some("Build reliable services in Python on AWS.\n5+ years of experience required.")
        );
        assert_eq!(info.experience_years.as_deref(), Some("5+"));
        assert_eq!(info.skills, vec!["Python".to_string(), "AWS".to_string()]);
    }

    #[test]
    fn test_generic_posting() {
        let info = parse_job_description_at(GENERIC_POSTING, "", "", now());
        assert_eq!(info.source_format, SourceFormat::Generic);
        assert!(info.cleaned_description.is_none());
        assert!(info.posted_at.is_none());
        assert_eq!(info.salary_min, Some(160_000));
        assert_eq!(info.salary_max, Some(190_000));
        assert_eq!(info.is_remote, Some(true));
        assert_eq!(info.experience_years.as_deref(), Some("3-5"));
        assert_eq!(
            info.skills,
            vec![
                "Go".to_string(),
                "Kubernetes".to_string(),
                "PostgreSQL".to_string()
            ]
        );
        assert_eq!(
            info.extracted_title.as_deref(),
            Some("Senior Backend Engineer")
        );
        assert_eq!(
            info.extracted_company.as_deref(),
            Some("Globex Corporation")
        );
    }

    #[test]
    fn test_location_hint_feeds_remote_classifier() {
        let info = parse_job_description_at("Build compilers.", "Compiler Engineer", "Remote - US", now());
        assert_eq!(info.is_remote, Some(true));
    }

    #[test]
    fn test_onsite_wins_over_remote() {
        let info = parse_job_description_at(
            "Remote interviews, but the job itself is on-site in Denver.",
            "",
            "",
            now(),
        );
        assert_eq!(info.is_remote, Some(false));
    }

    #[test]
    fn test_unknown_remote_stays_none() {
        let info = parse_job_description_at("We write compilers.", "", "", now());
        assert_eq!(info.is_remote, None);
    }

    #[test]
    fn test_linkedin_workplace_type_not_overridden() {
        let text = "Acme\nOn-site\nEasy Apply\nAbout the job\nThis role is remote friendly.";
        let info = parse_job_description_at(text, "", "", now());
        assert_eq!(info.is_remote, Some(false));
    }

    #[test]
    fn test_linkedin_header_noise_not_parsed_as_experience() {
        let text = "Acme\nData Engineer\nAustin, TX · 2 days ago · 5 applicants\nAbout the job\nWork on pipelines.";
        let info = parse_job_description_at(text, "", "", now());
        assert!(info.experience_years.is_none());
        assert!(info.salary_text.is_none());
    }

    #[test]
    fn test_parser_is_total_over_odd_input() {
        let inputs = [
            "   \n\t  ",
            "职位描述：远程工作，需要五年经验",
            "\u{0}\u{1}\u{7f}garbage$$$,,,k-k",
            "$,,, - $,,, per year · ago · applicants\nAbout the job\n",
            "·\n·\n·",
        ];
        for input in inputs {
            let info = parse_job_description_at(input, "", "", now());
            if let Some(min) = info.salary_min {
                assert!((SALARY_FLOOR..=SALARY_CEILING).contains(&min));
            }
        }
    }

    #[test]
    fn test_deterministic_apart_from_clock() {
        let first = parse_job_description(GENERIC_POSTING, "t", "l");
        let second = parse_job_description(GENERIC_POSTING, "t", "l");
        assert_eq!(
            ParsedJobInfo {
                posted_at: None,
                ..first
            },
            ParsedJobInfo {
                posted_at: None,
                ..second
            }
        );
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let info = parse_job_description_at(LINKEDIN_POSTING, "", "", now());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["source_format"], "linkedin");
        assert_eq!(json["posted_at"], "2025-05-11T12:00:00Z");
        assert_eq!(json["salary_min"], serde_json::Value::Null);
        assert!(json["is_remote"].is_null() || json["is_remote"].is_boolean());
    }
}
