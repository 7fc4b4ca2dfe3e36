//! Axum route handlers for the Parser API.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::parser::freshness::{posting_freshness, Freshness};
use crate::parser::salary::format_salary;
use crate::parser::{parse_job_description_at, ParsedJobInfo};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseJobRequest {
    pub description: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct ParseJobResponse {
    #[serde(flatten)]
    pub parsed: ParsedJobInfo,
    pub salary_display: String,
    pub freshness: Freshness,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/parse
///
/// Extracts salary, remote status, experience, skills and (for LinkedIn pastes)
/// header fields from a raw posting. Never fails on content: an empty
/// description yields the all-null record.
pub async fn handle_parse_job(Json(request): Json<ParseJobRequest>) -> Json<ParseJobResponse> {
    Json(build_parse_response(&request))
}

pub(crate) fn build_parse_response(request: &ParseJobRequest) -> ParseJobResponse {
    let now = Utc::now();
    let parsed =
        parse_job_description_at(&request.description, &request.title, &request.location, now);
    let salary_display = format_salary(parsed.salary_min, parsed.salary_max);
    let freshness = posting_freshness(parsed.posted_at, now);

    ParseJobResponse {
        parsed,
        salary_display,
        freshness,
    }
}
