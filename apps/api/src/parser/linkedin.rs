//! LinkedIn header parser.
//!
//! A posting copied from LinkedIn's job view starts with a block of page chrome
//! (company, share buttons, title, "Location · 3 weeks ago · 50 applicants",
//! workplace type, hiring team...) and the real description follows an
//! "About the job" line. The header is mined for the fields the description
//! itself rarely states; the body becomes the cleaned description.

use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

/// Fields recovered from a LinkedIn header. Anything not found stays `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedInHeader {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub cleaned_description: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

static ABOUT_THE_JOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\n\s*About the job\s*\n").expect("valid header split regex"));

/// LinkedIn UI lines that never carry posting data. Matched against the
/// lowercased, trimmed line from its start.
static UI_CHROME: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^share$",
        r"^show more options$",
        r"^easy apply$",
        r"^save$",
        r"^promoted",
        r"^message$",
        r"^follow$",
        r"^\d+",
        r"^meet the",
        r"^you'd be",
        r"^your profile",
        r"^show match",
        r"^tailor",
        r"^help me",
        r"^create cover",
        r"^beta$",
        r"^is this information",
        r"^people you can",
        r"^company alumni",
        r"^show all$",
        r"^hiring team",
        r"^job poster$",
        r"^\d+\w*$",
        r"^researcher$",
    ])
    .expect("valid UI chrome patterns")
});

/// Words that mark a line as a title or job attribute rather than a company name.
const NON_COMPANY_WORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "analyst",
    "remote",
    "full-time",
    "part-time",
];

const TITLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "architect",
    "lead",
    "director",
    "analyst",
    "scientist",
    "designer",
    "specialist",
    "consultant",
    "administrator",
    "coordinator",
    "associate",
    "senior",
    "junior",
    "staff",
    "principal",
    "head of",
    "vp ",
    "vice president",
];

static TITLE_AT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+at\s+.*$").expect("valid title suffix regex"));
static TITLE_DOT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*·.*$").expect("valid title suffix regex"));

static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(hour|day|week|month)s?\s*ago").expect("valid posting age regex")
});

/// "Luxoft · United States (Remote)": the capitalized segment after the last `·`.
static COMPANY_LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"·\s*([A-Z][A-Za-z\s,()]+)$").expect("valid company/location regex")
});

/// Splits a LinkedIn posting into header and body and extracts header fields.
///
/// `now` anchors relative ages like "3 weeks ago".
pub fn parse_linkedin_header(text: &str, now: DateTime<Utc>) -> LinkedInHeader {
    let mut header = LinkedInHeader::default();

    let header_text = match ABOUT_THE_JOB_RE.find(text) {
        Some(split) => {
            let body = text[split.end()..].trim();
            if !body.is_empty() {
                header.cleaned_description = Some(body.to_string());
            }
            &text[..split.start()]
        }
        None => text,
    };

    let lines: Vec<&str> = header_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return header;
    }

    let content_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !is_ui_chrome(line))
        .collect();

    header.company = find_company(&content_lines);
    header.title = find_title(&content_lines, header.company.as_deref());

    let (location, posted_at) = find_location_and_age(&lines, now);
    header.location = location;
    header.posted_at = posted_at;

    header.is_remote = workplace_type(&lines);
    if header
        .location
        .as_deref()
        .is_some_and(|loc| loc.to_lowercase().contains("(remote)"))
    {
        header.is_remote = Some(true);
    }

    header
}

fn is_ui_chrome(line: &str) -> bool {
    UI_CHROME.is_match(&line.to_lowercase())
}

fn find_company(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| {
            let len = line.chars().count();
            let lower = line.to_lowercase();
            len > 1 && len < 60 && !NON_COMPANY_WORDS.iter().any(|w| lower.contains(w))
        })
        .map(|line| line.to_string())
}

fn find_title(lines: &[&str], company: Option<&str>) -> Option<String> {
    for &line in lines {
        if company == Some(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if !TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }

        let title = TITLE_AT_SUFFIX_RE.replace(line, "");
        let title = TITLE_DOT_SUFFIX_RE.replace(&title, "");
        let title = title.trim();
        let len = title.chars().count();
        if len > 3 && len < 80 {
            return Some(title.to_string());
        }
    }
    None
}

/// Location and posting age come from the "Location · 3 weeks ago · N applicants"
/// line. Without one, a "Company · Location" line still yields a location.
fn find_location_and_age(
    lines: &[&str],
    now: DateTime<Utc>,
) -> (Option<String>, Option<DateTime<Utc>>) {
    let listing_line = lines.iter().find(|line| {
        let lower = line.to_lowercase();
        line.contains('·') && (lower.contains("ago") || lower.contains("applicant"))
    });

    if let Some(line) = listing_line {
        let segments: Vec<&str> = line.split('·').collect();
        let location = segments
            .first()
            .map(|segment| segment.trim())
            .filter(|candidate| is_plausible_location(candidate))
            .map(str::to_string);
        let posted_at = segments
            .iter()
            .find_map(|segment| posted_at_from_age(segment, now));
        return (location, posted_at);
    }

    let location = lines
        .iter()
        .filter(|line| line.contains('·'))
        .find_map(|line| {
            let caps = COMPANY_LOCATION_RE.captures(line)?;
            let candidate = caps[1].trim();
            let len = candidate.chars().count();
            (len > 2 && len < 50).then(|| candidate.to_string())
        });
    (location, None)
}

fn is_plausible_location(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if len <= 2 || len >= 60 {
        return false;
    }
    if candidate.chars().next().is_some_and(|c| c.is_numeric()) {
        return false;
    }
    !matches!(
        candidate.to_lowercase().as_str(),
        "share" | "save" | "easy apply"
    )
}

/// Converts "3 weeks ago" style text into an absolute instant before `now`.
/// A month counts as 30 days. Ages too large to represent yield `None`.
pub(crate) fn posted_at_from_age(segment: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = segment.to_lowercase();
    let caps = AGE_RE.captures(&lower)?;
    let amount: i64 = caps[1].parse().ok()?;
    let age = match &caps[2] {
        "hour" => TimeDelta::try_hours(amount)?,
        "day" => TimeDelta::try_days(amount)?,
        "week" => TimeDelta::try_weeks(amount)?,
        "month" => TimeDelta::try_days(amount.checked_mul(30)?)?,
        _ => return None,
    };
    now.checked_sub_signed(age)
}

/// Reads the workplace-type line. Hybrid counts as remote.
fn workplace_type(lines: &[&str]) -> Option<bool> {
    for line in lines {
        let lower = line.to_lowercase();
        if lower.contains("remote") && (lower.contains("workplace type") || lower == "remote") {
            return Some(true);
        }
        if lower.contains("on-site") || lower.contains("onsite") {
            return Some(false);
        }
        if lower.contains("hybrid") {
            return Some(true);
        }
    }
    None
}
