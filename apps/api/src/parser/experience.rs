//! Required years of experience.
//!
//! The range pattern is tried before the "N+" floor on purpose: tried later it
//! could never fire, because "3-5 years" always contains "5 years". A text that
//! states both a floor and a range therefore reports the range.

use once_cell::sync::Lazy;
use regex::Regex;

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 5-7 years experience
        r"(?i)(\d+)\s*[-–to]+\s*(\d+)\s*(?:years?|yrs?)(?:\s+of)?\s+(?:experience|exp)",
        // 5+ years of experience
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)(?:\s+of)?\s+(?:experience|exp)",
        // minimum 5 years
        r"(?i)(?:minimum|at least|min)\s*(\d+)\s*(?:years?|yrs?)",
        // experience: 5+ years
        r"(?i)experience[:\s]+(\d+)\+?\s*(?:years?|yrs?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid experience regex"))
    .collect()
});

/// Returns the experience requirement as `"N-M"` for a range or `"N+"` for a
/// floor. The value stays textual so ranges survive storage unchanged.
pub fn parse_experience(text: &str) -> Option<String> {
    EXPERIENCE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        match (caps.get(1), caps.get(2)) {
            (Some(low), Some(high)) => Some(format!("{}-{}", low.as_str(), high.as_str())),
            (Some(low), None) => Some(format!("{}+", low.as_str())),
            _ => None,
        }
    })
}
