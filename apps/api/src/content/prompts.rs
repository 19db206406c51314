// All LLM prompt constants for the content module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::content::locale::Lang;

/// System prompt for English polishing of a composed horoscope.
pub const POLISH_SYSTEM: &str = "You are Astro-Baba, a warm Vedic astrology writer. \
    Polish the draft horoscope so it reads naturally and kindly. \
    Keep it concise and keep its structure.";

/// System prompt for Hindi translation.
pub const TRANSLATE_SYSTEM: &str = "You are Astro-Baba, translating astrology content into natural Hindi \
    written in Devanagari script. Use simple, respectful language. \
    Keep proper names of planets, muhurats and mantras in their conventional Hindi forms.";

/// System prompt for package report narratives.
pub const REPORT_SYSTEM: &str = "You are Astro-Baba, writing a short personalised astrology report. \
    Expand the grounding notes into two or three warm paragraphs. \
    Never contradict the notes.";

/// System prompt for the chat assistant.
pub const CHAT_SYSTEM: &str = "You are Astro-Baba, a friendly Vedic astrology guide. \
    Answer briefly and kindly. Offer reflection, not certainty. \
    Never give medical, legal or financial directives.";

/// Builds the polish prompt; the draft is embedded verbatim.
pub fn polish_prompt(draft: &str) -> String {
    format!("Polish this horoscope draft:\n\n{draft}")
}

pub fn translate_prompt(text: &str) -> String {
    format!("Translate this into Hindi:\n\n{text}")
}

pub fn report_prompt(grounding: &str, lang: Lang, notes: Option<&str>) -> String {
    let language = match lang {
        Lang::En => "English",
        Lang::Hi => "Hindi (Devanagari script)",
    };
    let mut prompt = format!("Write in {language}.\n\nGrounding notes:\n{grounding}");
    if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
        prompt.push_str("\n\nThe reader asked us to keep in mind:\n");
        prompt.push_str(notes.trim());
    }
    prompt
}
