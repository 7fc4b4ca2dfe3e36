//! Posting freshness: how long ago a job went up, bucketed for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessLevel {
    Fresh,
    Recent,
    Aging,
    Stale,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freshness {
    pub days: Option<i64>,
    pub label: String,
    pub level: FreshnessLevel,
}

/// Buckets the age of a posting relative to `now`. Future timestamps count as today.
pub fn posting_freshness(posted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Freshness {
    let Some(posted_at) = posted_at else {
        return Freshness {
            days: None,
            label: "Unknown".to_string(),
            level: FreshnessLevel::Unknown,
        };
    };

    let days = (now - posted_at).num_days().max(0);
    let label = match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d => format!("{d}d ago"),
    };
    let level = match days {
        0..=3 => FreshnessLevel::Fresh,
        4..=7 => FreshnessLevel::Recent,
        8..=30 => FreshnessLevel::Aging,
        _ => FreshnessLevel::Stale,
    };

    Freshness {
        days: Some(days),
        label,
        level,
    }
}
