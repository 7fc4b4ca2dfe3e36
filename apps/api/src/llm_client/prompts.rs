// Shared prompt fragments.
// Each capability that needs LLM calls defines its own prompts.rs alongside it;
// this file only holds cross-cutting pieces.

/// System prompt for calls whose answer is a whole Markdown document.
pub const MARKDOWN_ONLY_SYSTEM: &str = "You are a careful career-documents writer. \
    Respond with the requested document in Markdown only. \
    Do NOT add explanations, notes or commentary before or after it. \
    Do NOT wrap the document in code fences.";

/// Appended to every generation prompt so the model never invents history.
pub const TRUTHFULNESS_INSTRUCTION: &str = "\
    CRITICAL: Only use facts present in the resume. Do NOT invent employers, \
    titles, dates, degrees, certifications or metrics. Rephrasing and reordering \
    are allowed; fabrication is not.";
