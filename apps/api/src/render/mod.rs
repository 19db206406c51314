// Document Renderer Adapter.
// Builders turn composed content into a `ReportDocument`; `pdf` lays it out.
// Rendering is CPU-bound and always runs on the blocking pool.

pub mod brand;
pub mod documents;
pub mod font_metrics;
pub mod fonts;
pub mod layout;
pub mod pdf;

use thiserror::Error;

use crate::content::locale::Lang;
use crate::render::fonts::FontLibrary;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Layout-agnostic report content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: Option<String>,
    pub header_lines: Vec<String>,
    pub sections: Vec<Section>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.bullets.push(text.into());
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(items.into_iter().map(Into::into));
        self
    }
}

/// Renders `document` with the font pair for `lang` on the blocking pool.
pub async fn render_pdf(
    document: ReportDocument,
    lang: Lang,
    fonts: &FontLibrary,
    logo: Option<Vec<u8>>,
) -> Result<Vec<u8>, RenderError> {
    let pair = fonts.pair(lang);
    let started = std::time::Instant::now();
    let bytes = tokio::task::spawn_blocking(move || pdf::write_pdf(&document, &pair, logo.as_deref()))
        .await??;
    tracing::debug!(
        lang = %lang,
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rendered pdf"
    );
    Ok(bytes)
}
