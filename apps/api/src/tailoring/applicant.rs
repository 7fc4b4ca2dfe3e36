//! Applicant contact details pulled from the top of a Markdown résumé.
//!
//! Expected shape:
//!
//! ```text
//! # Jane Doe
//! jane.doe@example.com | (555) 123-4567 | San Diego, CA
//! ```
//!
//! The heading may sit inside HTML wrappers, and `<style>` blocks are ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Only the résumé header is scanned.
const HEADER_LINES: usize = 50;

static STYLE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style regex"));
static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w.-]+)@[\w.-]+\.\w+").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

pub fn extract_applicant_info(resume_markdown: &str) -> ApplicantInfo {
    let content = STYLE_BLOCK_RE.replace_all(resume_markdown, "");
    let lines: Vec<&str> = content
        .trim()
        .lines()
        .take(HEADER_LINES)
        .map(str::trim)
        .collect();

    let mut info = ApplicantInfo::default();

    if let Some((first, last)) = name_from_heading(&lines).or_else(|| name_from_email(&lines)) {
        info.first_name = first;
        info.last_name = last;
    }

    for line in lines.iter().filter(|l| !l.starts_with('#')) {
        if info.email.is_empty() {
            if let Some(m) = EMAIL_RE.find(line) {
                info.email = m.as_str().to_string();
            }
        }
        if info.phone.is_empty() {
            if let Some(m) = PHONE_RE.find(line) {
                info.phone = m.as_str().to_string();
            }
        }
        if !info.email.is_empty() && !info.phone.is_empty() {
            break;
        }
    }

    debug!(
        "Applicant info: name={:?} {:?}, email={}, phone={}",
        info.first_name,
        info.last_name,
        !info.email.is_empty(),
        !info.phone.is_empty()
    );

    info
}

/// Name from the first level-1 heading. A one-word heading yields only a first name.
fn name_from_heading(lines: &[&str]) -> Option<(String, String)> {
    let heading = lines
        .iter()
        .filter(|l| !(l.starts_with('<') && !l.contains('#')))
        .find(|l| l.starts_with('#') && !l.starts_with("##"))?;

    let name = HTML_TAG_RE.replace_all(heading.trim_start_matches('#'), "");
    let mut parts = name.split_whitespace();
    let first = parts.next()?.to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    Some((first, last))
}

/// Name from an e-mail local part such as `jane.doe` or `jane_doe`.
fn name_from_email(lines: &[&str]) -> Option<(String, String)> {
    let local = lines
        .iter()
        .find_map(|l| EMAIL_RE.captures(l))
        .map(|caps| caps[1].to_string())?;

    let mut parts = local.split(['.', '_']);
    let first = capitalize(parts.next().unwrap_or_default());
    if first.is_empty() {
        return None;
    }
    let last = capitalize(parts.next().unwrap_or_default());
    Some((first, last))
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
