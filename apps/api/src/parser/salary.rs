//! Salary extraction and display formatting.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use serde::{Deserialize, Serialize};

/// Annual USD bounds a figure must fall in to count as a salary.
pub const SALARY_FLOOR: u64 = 30_000;
pub const SALARY_CEILING: u64 = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInfo {
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    /// The matched substring, as written in the posting.
    pub salary_text: Option<String>,
}

/// Tried in order; the first pattern that yields an in-range figure wins.
static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // $150,000 - $200,000 per year, $150k-$200k
        r"(?i)\$\s*([\d,]+)k?\s*[-–to]+\s*\$?\s*([\d,]+)k?\s*(?:per\s+)?(?:year|annually|yr|/yr|pa)?",
        // $150,000/year
        r"(?i)\$\s*([\d,]+)k?\s*(?:per\s+)?(?:year|annually|yr|/yr|pa)",
        // 150k - 200k
        r"(?i)([\d,]+)k\s*[-–to]+\s*([\d,]+)k",
        // Base salary: $150,000
        r"(?i)(?:base\s+)?salary[:\s]+\$?\s*([\d,]+)k?\s*[-–to]*\s*\$?\s*([\d,]+)?k?",
        // Compensation: 150,000 - 200,000
        r"(?i)compensation[:\s]+\$?\s*([\d,]+)\s*[-–to]+\s*\$?\s*([\d,]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid salary regex"))
    .collect()
});

/// Extracts a salary range from raw (not lowercased) posting text.
///
/// A candidate is abandoned, and the next pattern tried, when a figure fails
/// to parse or lands outside [`SALARY_FLOOR`, `SALARY_CEILING`].
pub fn parse_salary(text: &str) -> SalaryInfo {
    for pattern in SALARY_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };

        let Some(min) = caps.get(1).and_then(|m| normalize_figure(text, m)) else {
            continue;
        };
        if !in_range(min) {
            continue;
        }

        let max = match caps.get(2) {
            Some(m) => match normalize_figure(text, m) {
                Some(value) if in_range(value) => Some(value),
                _ => continue,
            },
            None => None,
        };

        return SalaryInfo {
            salary_min: Some(min),
            salary_max: max,
            salary_text: Some(caps[0].trim().to_string()),
        };
    }

    SalaryInfo::default()
}

/// Strips thousands separators and scales thousands shorthand.
///
/// A figure followed by `k`, or any figure below 1000, is multiplied by 1000.
/// The second rule also scales a bare "$999"; that is the established behavior.
fn normalize_figure(text: &str, figure: Match<'_>) -> Option<u64> {
    let digits = figure.as_str().replace(',', "");
    let value: u64 = digits.parse().ok()?;
    let k_suffix = text[figure.end()..].starts_with(['k', 'K']);
    if k_suffix || value < 1000 {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

fn in_range(value: u64) -> bool {
    (SALARY_FLOOR..=SALARY_CEILING).contains(&value)
}

/// Renders a salary range for display, e.g. "$150k - $200k".
pub fn format_salary(min: Option<u64>, max: Option<u64>) -> String {
    match (min, max) {
        (None, None) => String::new(),
        (Some(min), Some(max)) => format!("{} - {}", short_amount(min), short_amount(max)),
        (Some(min), None) => format!("{}+", short_amount(min)),
        (None, Some(max)) => format!("Up to {}", short_amount(max)),
    }
}

fn short_amount(value: u64) -> String {
    if value >= 1000 {
        format!("${}k", value / 1000)
    } else {
        format!("${value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_range_per_year() {
        let info = parse_salary("$150,000 - $200,000 per year");
        assert_eq!(info.salary_min, Some(150_000));
        assert_eq!(info.salary_max, Some(200_000));
        assert_eq!(
            info.salary_text.as_deref(),
            Some("$150,000 - $200,000 per year")
        );
    }

    #[test]
    fn test_k_range_with_dollars() {
        let info = parse_salary("Pay: $150k-$200k depending on level");
        assert_eq!(info.salary_min, Some(150_000));
        assert_eq!(info.salary_max, Some(200_000));
    }

    #[test]
    fn test_single_figure_with_year_qualifier() {
        let info = parse_salary("Starting at $120,000/yr plus equity");
        assert_eq!(info.salary_min, Some(120_000));
        assert_eq!(info.salary_max, None);
        assert_eq!(info.salary_text.as_deref(), Some("$120,000/yr"));
    }

    #[test]
    fn test_bare_k_range() {
        let info = parse_salary("The band is 140K to 180K.");
        assert_eq!(info.salary_min, Some(140_000));
        assert_eq!(info.salary_max, Some(180_000));
        assert_eq!(info.salary_text.as_deref(), Some("140K to 180K"));
    }

    #[test]
    fn test_compensation_label() {
        let info = parse_salary("Compensation: 150,000 - 200,000");
        assert_eq!(info.salary_min, Some(150_000));
        assert_eq!(info.salary_max, Some(200_000));
    }

    #[test]
    fn test_out_of_range_falls_through_to_next_pattern() {
        let info = parse_salary("$10 - $20 per hour. Salary: $95,000");
        assert_eq!(info.salary_min, Some(95_000));
        assert_eq!(info.salary_max, None);
        assert_eq!(info.salary_text.as_deref(), Some("Salary: $95,000"));
    }

    #[test]
    fn test_sub_thousand_figure_is_scaled() {
        let info = parse_salary("$999 per year");
        assert_eq!(info.salary_min, Some(999_000));
    }

    #[test]
    fn test_out_of_range_max_rejects_match() {
        let info = parse_salary("$90,000 - $5,000,000 a year");
        assert_eq!(info, SalaryInfo::default());
    }

    #[test]
    fn test_no_salary() {
        assert_eq!(parse_salary("Great team, great snacks."), SalaryInfo::default());
        assert_eq!(parse_salary(""), SalaryInfo::default());
    }

    #[test]
    fn test_separator_only_capture_does_not_panic() {
        assert_eq!(parse_salary("$, - $, per year"), SalaryInfo::default());
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(None, None), "");
        assert_eq!(format_salary(Some(150_000), Some(200_000)), "$150k - $200k");
        assert_eq!(format_salary(Some(150_000), None), "$150k+");
        assert_eq!(format_salary(None, Some(200_000)), "Up to $200k");
        assert_eq!(format_salary(Some(500), None), "$500+");
    }
}
