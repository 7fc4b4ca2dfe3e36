//! Remote / hybrid / on-site classification for generic postings.

use once_cell::sync::Lazy;
use regex::RegexSet;

static REMOTE_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"\bremote\b",
        r"\bwork from home\b",
        r"\bwfh\b",
        r"\bfully remote\b",
        r"\b100% remote\b",
        r"\bremote[- ]first\b",
        r"\banywhere\b",
    ])
    .expect("valid remote patterns")
});

static ONSITE_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"\bon[- ]?site\b",
        r"\bin[- ]?office\b",
        r"\bin[- ]?person\b",
        r"\bno remote\b",
    ])
    .expect("valid on-site patterns")
});

static HYBRID_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"\bhybrid\b",
        r"\bremote[/ ]hybrid\b",
        r"\bflexible location\b",
    ])
    .expect("valid hybrid patterns")
});

/// Classifies a posting as remote (`Some(true)`), on-site (`Some(false)`) or
/// unknown (`None`).
///
/// `full_text` is the lowercased title + location + description. An on-site
/// mention beats a remote one; hybrid counts as remote. Without any signal the
/// answer is `None`, never `Some(false)`.
pub fn parse_remote_status(full_text: &str, location: &str) -> Option<bool> {
    let text = full_text.to_lowercase();
    let location = location.to_lowercase();

    let onsite = ONSITE_PATTERNS.is_match(&text);

    if onsite {
        return Some(false);
    }

    if REMOTE_PATTERNS.is_match(&text) || REMOTE_PATTERNS.is_match(&location) {
        return Some(true);
    }

    if HYBRID_PATTERNS.is_match(&text) || HYBRID_PATTERNS.is_match(&location) {
        return Some(true);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_mention() {
        assert_eq!(parse_remote_status("this is a remote role", ""), Some(true));
        assert_eq!(parse_remote_status("we are remote-first", ""), Some(true));
        assert_eq!(parse_remote_status("work from home fridays", ""), Some(true));
    }

    #[test]
    fn test_remote_in_location_only() {
        assert_eq!(parse_remote_status("backend engineer", "Remote, US"), Some(true));
    }

    #[test]
    fn test_onsite_beats_remote() {
        assert_eq!(
            parse_remote_status("remote candidates welcome but this role is on-site", ""),
            Some(false)
        );
        assert_eq!(parse_remote_status("no remote work", ""), Some(false));
    }

    #[test]
    fn test_onsite_alone() {
        assert_eq!(parse_remote_status("5 days in-office in denver", ""), Some(false));
        assert_eq!(parse_remote_status("onsite at our lab", ""), Some(false));
    }

    #[test]
    fn test_hybrid_counts_as_remote() {
        assert_eq!(parse_remote_status("hybrid schedule, 2 days a week", ""), Some(true));
        assert_eq!(parse_remote_status("engineer", "Hybrid - Boston"), Some(true));
    }

    #[test]
    fn test_no_signal_is_unknown() {
        assert_eq!(parse_remote_status("we write compilers", ""), None);
        assert_eq!(parse_remote_status("", ""), None);
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(parse_remote_status("remotely interesting", ""), None);
    }
}
