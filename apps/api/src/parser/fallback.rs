//! Heuristic title and company extraction from free-form posting text.
//!
//! Used when the format-specific parser left these fields empty. Each list is
//! tried in order and the first acceptable candidate wins; a rejected
//! candidate moves on to the next pattern rather than the next match.
//! Candidates never span a line break.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Job Title: Senior Software Engineer / Position: ...
        r"(?im)(?:job\s+title|position|role|title)[:\s]+([A-Z][^\n\r.]{5,60})",
        // We are hiring a Senior Software Engineer
        r"(?im)(?:we are (?:hiring|looking for|seeking)(?: a| an)?|join .* as(?: a| an)?)\s+([A-Z][^\n\r.,]{5,60})",
        // Senior Software Engineer - Company, at the start of a line
        r"(?im)^([A-Z][A-Za-z \t\-/]+(?:Engineer|Developer|Manager|Architect|Lead|Director|Analyst|Scientist|Designer|Specialist|Consultant|Administrator))",
        // About the Senior Software Engineer role
        r"(?im)about the\s+([A-Z][^\n\r.]{5,60})\s+(?:role|position)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid title regex"))
    .collect()
});

static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Company: Acme Corp
        r"(?im)(?:company|employer|organization)[:\s]+([A-Z][^\n\r,]{2,50})",
        // About Acme Corp, opening a line
        r"(?im)^about\s+([A-Z][A-Za-z0-9 \t&.,]+?)(?:\s*\n|\s+is\b|\s+was\b)",
        // Acme Corp is hiring / is looking for
        r"(?im)^([A-Z][A-Za-z0-9 \t&.,]+?)\s+(?:is looking|is hiring|is seeking|seeks|wants)",
        // Join Acme Corp / Join the Acme Corp team
        r"(?im)join\s+(?:the\s+)?([A-Z][A-Za-z0-9 \t&.,]+?)(?:\s+team|\s+as\b|!|\.|$)",
        // Senior Engineer at Acme Corp
        r"(?im)(?:Engineer|Developer|Manager|Architect|Lead)\s+at\s+([A-Z][A-Za-z0-9 \t&.,]+?)(?:\s*\n|\s*$|\.)",
        // Work at Acme Corp
        r"(?im)work(?:ing)?\s+(?:at|for)\s+([A-Z][A-Za-z0-9 \t&.,]+?)(?:\s*[,.]|\s+(?:is|and|where))",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid company regex"))
    .collect()
});

static TRAILING_DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-–]\s*$").expect("valid title cleanup regex"));
static AT_CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+at\s+.*$").expect("valid title cleanup regex"));
static IN_CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+in\s+.*$").expect("valid title cleanup regex"));
static TRAILING_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,.]$").expect("valid company cleanup regex"));

/// Phrases that show a company candidate is really prose or a role.
const NON_COMPANY_PHRASES: &[&str] = &[
    "the team",
    "our team",
    "a team",
    "this role",
    "the role",
    "engineer",
    "developer",
    "manager",
    "we are",
    "you will",
];

/// Best-effort job title, 6 to 79 characters after cleanup.
pub fn parse_job_title(text: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let title = caps[1].trim();
        let title = TRAILING_DASH_RE.replace(title, "");
        let title = AT_CLAUSE_RE.replace(&title, "");
        let title = IN_CLAUSE_RE.replace(&title, "");
        let len = title.chars().count();
        (len > 5 && len < 80).then(|| title.into_owned())
    })
}

/// Best-effort company name, 3 to 59 characters after cleanup.
pub fn parse_company_name(text: &str) -> Option<String> {
    COMPANY_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let company = caps[1].trim();
        let company = TRAILING_PUNCT_RE.replace(company, "");
        let company = company.trim_end();

        let lower = company.to_lowercase();
        if NON_COMPANY_PHRASES.iter().any(|p| lower.contains(p)) {
            return None;
        }
        let len = company.chars().count();
        (len > 2 && len < 60).then(|| company.to_string())
    })
}
