//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::parser::{parse_job_description, ParsedJobInfo};
use crate::state::AppState;
use crate::tailoring::applicant::{extract_applicant_info, ApplicantInfo};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub master_resume: String,
    pub description: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub parsed: ParsedJobInfo,
    pub tailored_resume: String,
    pub cover_letter: String,
    pub applicant: ApplicantInfo,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/tailor
///
/// Parses the posting, tailors the master résumé against its cleaned text, then
/// writes a cover letter from the tailored résumé.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    if request.master_resume.trim().is_empty() {
        return Err(AppError::Validation(
            "master_resume must not be empty".to_string(),
        ));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description must not be empty".to_string(),
        ));
    }

    let tailor = state.tailor.as_ref().ok_or(AppError::AiUnavailable)?;

    let title_hint = request.title.as_deref().unwrap_or_default();
    let location_hint = request.location.as_deref().unwrap_or_default();
    let parsed = parse_job_description(&request.description, title_hint, location_hint);

    let job_text = parsed
        .cleaned_description
        .as_deref()
        .unwrap_or(&request.description);
    let company = first_present(&[request.company.as_deref(), parsed.extracted_company.as_deref()])
        .unwrap_or("the company");
    let job_title = first_present(&[request.title.as_deref(), parsed.extracted_title.as_deref()])
        .unwrap_or("the role");

    info!("Tailoring application: {job_title} at {company}");

    let tailored_resume = tailor.tailor_resume(&request.master_resume, job_text).await?;
    let cover_letter = tailor
        .write_cover_letter(&tailored_resume, job_text, company, job_title)
        .await?;
    let applicant = extract_applicant_info(&request.master_resume);

    Ok(Json(TailorResponse {
        parsed,
        tailored_resume,
        cover_letter,
        applicant,
    }))
}

/// First candidate that is present and not blank, trimmed.
fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .map(str::trim)
        .find(|s| !s.is_empty())
}
