// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces plain-text output.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a careful editor. \
    Respond with the rewritten text only. \
    Do NOT use markdown code fences. \
    Do NOT include explanations, apologies or preambles.";

/// Common instruction appended to every rewrite prompt.
pub const FIDELITY_INSTRUCTION: &str = "\
    CRITICAL: Preserve every time window, number, date, colour, gemstone and mantra exactly as given. \
    Do NOT add predictions, remedies or facts that are not in the draft. \
    Keep bold markers (**...**) and line breaks where they are.";

/// Joins a system fragment with the fidelity rule.
pub fn with_fidelity(system: &str) -> String {
    format!("{system}\n\n{FIDELITY_INSTRUCTION}")
}
