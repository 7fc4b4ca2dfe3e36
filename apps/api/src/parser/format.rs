//! Source-format detection for pasted job postings.

use crate::parser::SourceFormat;

/// UI strings that LinkedIn's job view leaves behind when a posting is copied.
/// Matched case-sensitively, exactly as they appear on the page.
const LINKEDIN_INDICATORS: &[&str] = &[
    "About the job",
    "Easy Apply",
    "Save\nSave",
    "applicants",
    "Show more options",
    "Matches your job preferences",
    "Meet the hiring team",
];

/// A single indicator can appear in an ordinary posting ("applicants"), so at
/// least this many must be present before the text is treated as LinkedIn.
const LINKEDIN_THRESHOLD: usize = 2;

/// Classifies the layout convention of a pasted posting.
pub fn detect_format(text: &str) -> SourceFormat {
    if is_linkedin_format(text) {
        SourceFormat::Linkedin
    } else {
        SourceFormat::Generic
    }
}

/// Returns true when the text carries enough LinkedIn UI artifacts.
pub fn is_linkedin_format(text: &str) -> bool {
    let hits = LINKEDIN_INDICATORS
        .iter()
        .filter(|&&indicator| text.contains(indicator))
        .count();
    hits >= LINKEDIN_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_indicator_is_generic() {
        let text = "We had over 300 applicants last cycle for this role.";
        assert_eq!(detect_format(text), SourceFormat::Generic);
    }

    #[test]
    fn test_two_indicators_is_linkedin() {
        let text = "Acme\nEasy Apply\n120 applicants\nWe build rockets.";
        assert_eq!(detect_format(text), SourceFormat::Linkedin);
    }

    #[test]
    fn test_indicators_are_case_sensitive() {
        let text = "about the job\neasy apply\nAPPLICANTS";
        assert_eq!(detect_format(text), SourceFormat::Generic);
    }

    #[test]
    fn test_save_save_artifact_counts() {
        let text = "Acme\nSave\nSave\nAbout the job\nBody";
        assert!(is_linkedin_format(text));
    }

    #[test]
    fn test_empty_text_is_generic() {
        assert_eq!(detect_format(""), SourceFormat::Generic);
    }
}
