//! Tailoring: rewrites a master résumé and drafts a cover letter for one posting.
//!
//! The AI capability sits behind the [`Tailor`] trait so handlers never depend on a
//! concrete provider. `AppState` carries it as `Option<Arc<dyn Tailor>>`; `None`
//! means no API key was configured.

pub mod applicant;
pub mod cover_letter;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{MARKDOWN_ONLY_SYSTEM, TRUTHFULNESS_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::tailoring::cover_letter::clean_cover_letter;
use crate::tailoring::prompts::{
    COVER_LETTER_MAX_TOKENS, COVER_LETTER_PROMPT_TEMPLATE, RESUME_MAX_TOKENS,
    RESUME_PROMPT_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Given résumé text and job text, return tailored text.
#[async_trait]
pub trait Tailor: Send + Sync {
    async fn tailor_resume(
        &self,
        master_resume: &str,
        job_description: &str,
    ) -> Result<String, AppError>;

    async fn write_cover_letter(
        &self,
        resume: &str,
        job_description: &str,
        company: &str,
        job_title: &str,
    ) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// AnthropicTailor
// ────────────────────────────────────────────────────────────────────────────

/// Claude-backed tailor.
pub struct AnthropicTailor(pub LlmClient);

impl AnthropicTailor {
    pub fn new(api_key: String) -> Result<Self, AppError> {
        let client = LlmClient::new(api_key).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to build LLM client: {e}"))
        })?;
        Ok(Self(client))
    }
}

#[async_trait]
impl Tailor for AnthropicTailor {
    async fn tailor_resume(
        &self,
        master_resume: &str,
        job_description: &str,
    ) -> Result<String, AppError> {
        let prompt = build_resume_prompt(master_resume, job_description);
        info!(
            "Tailoring resume ({} chars) against posting ({} chars)",
            master_resume.len(),
            job_description.len()
        );

        self.0
            .call_text(&prompt, MARKDOWN_ONLY_SYSTEM, RESUME_MAX_TOKENS)
            .await
            .map_err(|e| AppError::Llm(format!("Resume tailoring failed: {e}")))
    }

    async fn write_cover_letter(
        &self,
        resume: &str,
        job_description: &str,
        company: &str,
        job_title: &str,
    ) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(resume, job_description, company, job_title);
        info!("Writing cover letter for {job_title} at {company}");

        let letter = self
            .0
            .call_text(&prompt, MARKDOWN_ONLY_SYSTEM, COVER_LETTER_MAX_TOKENS)
            .await
            .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

        Ok(clean_cover_letter(&letter))
    }
}

fn build_resume_prompt(master_resume: &str, job_description: &str) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{truthfulness_instruction}", TRUTHFULNESS_INSTRUCTION)
        .replace("{job_description}", job_description)
        .replace("{master_resume}", master_resume)
}

fn build_cover_letter_prompt(
    resume: &str,
    job_description: &str,
    company: &str,
    job_title: &str,
) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{truthfulness_instruction}", TRUTHFULNESS_INSTRUCTION)
        .replace("{company}", company)
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description)
        .replace("{resume}", resume)
}
