// LLM prompt constants for the Tailoring module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Output budget for a full tailored résumé.
pub const RESUME_MAX_TOKENS: u32 = 8192;

/// Output budget for a cover letter.
pub const COVER_LETTER_MAX_TOKENS: u32 = 2048;

/// Résumé tailoring prompt. Replace `{master_resume}`, `{job_description}` and
/// `{truthfulness_instruction}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Rework the master resume below so it targets the job posting that follows.

MASTER RESUME:
{master_resume}

JOB DESCRIPTION:
{job_description}

Rules:
- Keep the existing Markdown structure, including any HTML/CSS styling blocks, unchanged.
- Every position in the Professional Experience section stays; never drop a job.
- Rewrite each position's bullet points to foreground the skills this role asks for.
- Work keywords from the job description into the bullets where they read naturally.
- Retune the Professional Summary toward the most relevant experience.
- Reorder Technical Skills so the most relevant ones come first.
- Job dates, titles and employer names are copied exactly.
- The result must stay ATS-friendly: plain headings, no tables of icons.

{truthfulness_instruction}

Return the tailored resume only."#;

/// Cover-letter prompt. Replace `{resume}`, `{job_description}`, `{company}`,
/// `{job_title}` and `{truthfulness_instruction}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert cover letter writer. Write a cover letter for the application below.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

COMPANY: {company}
POSITION: {job_title}

Rules:
- Open with specific enthusiasm for this role at this company.
- Tie two or three concrete experiences from the resume to the posting's requirements.
- Show some understanding of the company or its industry.
- Close with a clear call to action.
- Three or four paragraphs, professional but personable.
- No placeholders such as [Current Date], [Your Name], [Company Address] or [City, State, Zip].
- No address header: begin directly with the greeting, e.g. "Dear Hiring Manager,".
- Sign with the applicant's name as it appears in the resume.

{truthfulness_instruction}

Return the cover letter only."#;
