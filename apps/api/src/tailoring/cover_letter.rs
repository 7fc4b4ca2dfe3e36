//! Post-processing for generated cover letters.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Whole-line placeholders and bare dates the model sometimes emits in a letter header.
static PLACEHOLDER_LINES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)^\[Current Date\]",
        r"(?i)^\[Your Name\]",
        r"(?i)^\[Your Address\]",
        r"(?i)^\[City,?\s*State,?\s*Zip\]",
        r"(?i)^\[Company Address\]",
        r"(?i)^\[Company Name\]",
        r"(?i)^\[Hiring Manager\]",
        r"(?i)^\[Phone\]",
        r"(?i)^\[Email\]",
        r"(?i)^\[Date\]",
        // 12/09/2025
        r"^\d{1,2}/\d{1,2}/\d{2,4}$",
        // December 9, 2025
        r"(?i)^[A-Z][a-z]+ \d{1,2},? \d{4}$",
    ])
    .expect("valid placeholder regexes")
});

/// Drops placeholder lines, any blank lines that directly follow them, and
/// leading blank lines.
pub fn clean_cover_letter(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut after_placeholder = false;

    for line in text.split('\n') {
        let stripped = line.trim();

        if PLACEHOLDER_LINES.is_match(stripped) {
            after_placeholder = true;
            continue;
        }
        if after_placeholder && stripped.is_empty() {
            continue;
        }

        after_placeholder = false;
        if kept.is_empty() && stripped.is_empty() {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}
