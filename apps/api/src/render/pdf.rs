//! PDF writer: lays a `ReportDocument` out on A4 pages with `printpdf`.
//!
//! Runs synchronously; callers go through `render::render_pdf`, which moves the
//! work onto the blocking pool.

use std::borrow::Cow;
use std::io::Cursor;

use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line as Rule, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};
use tracing::warn;

use crate::render::font_metrics::{get_metrics, FontFace};
use crate::render::fonts::{FontFile, FontPair};
use crate::render::layout::{word_offsets, wrap};
use crate::render::{RenderError, ReportDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const PT_TO_MM: f32 = 25.4 / 72.0;
const BULLET_INDENT_MM: f32 = 5.0;
const LOGO_HEIGHT_MM: f32 = 14.0;

struct TextStyle {
    size_pt: f32,
    face: FontFace,
    /// Line height as a multiple of the font size.
    leading: f32,
    gray: f32,
}

impl TextStyle {
    fn size_mm(&self) -> f32 {
        self.size_pt * PT_TO_MM
    }

    fn line_height_mm(&self) -> f32 {
        self.size_mm() * self.leading
    }

    /// Available width in em units for a block of `width_mm`.
    fn width_em(&self, width_mm: f32) -> f32 {
        width_mm / self.size_mm()
    }
}

const TITLE: TextStyle = TextStyle {
    size_pt: 20.0,
    face: FontFace::Bold,
    leading: 1.3,
    gray: 0.10,
};
const SUBTITLE: TextStyle = TextStyle {
    size_pt: 11.0,
    face: FontFace::Regular,
    leading: 1.4,
    gray: 0.30,
};
const HEADER_LINE: TextStyle = TextStyle {
    size_pt: 9.5,
    face: FontFace::Regular,
    leading: 1.4,
    gray: 0.35,
};
const HEADING: TextStyle = TextStyle {
    size_pt: 13.0,
    face: FontFace::Bold,
    leading: 1.5,
    gray: 0.10,
};
const BODY: TextStyle = TextStyle {
    size_pt: 10.5,
    face: FontFace::Regular,
    leading: 1.45,
    gray: 0.15,
};
const FOOTER: TextStyle = TextStyle {
    size_pt: 8.0,
    face: FontFace::Regular,
    leading: 1.35,
    gray: 0.45,
};

struct PdfFonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Builtin Helvetica only covers WinAnsi; text is normalized before drawing.
    builtin: bool,
}

impl PdfFonts {
    fn load(pdf: &PdfDocumentReference, pair: &FontPair) -> Result<Self, RenderError> {
        if let Some(regular) = pair.regular.as_ref() {
            match external(pdf, regular) {
                Ok(regular_ref) => {
                    let bold_ref = match pair.bold.as_ref().map(|b| external(pdf, b)) {
                        Some(Ok(bold_ref)) => bold_ref,
                        _ => regular_ref.clone(),
                    };
                    return Ok(Self {
                        regular: regular_ref,
                        bold: bold_ref,
                        builtin: false,
                    });
                }
                Err(e) => {
                    warn!(path = %regular.path.display(), error = %e, "font rejected, using builtin");
                }
            }
        }

        Ok(Self {
            regular: pdf
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Pdf(e.to_string()))?,
            bold: pdf
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Pdf(e.to_string()))?,
            builtin: true,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }

    fn bullet_glyph(&self) -> &'static str {
        if self.builtin {
            "-"
        } else {
            "•"
        }
    }

    fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.builtin {
            winansi_safe(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn external(pdf: &PdfDocumentReference, file: &FontFile) -> Result<IndirectFontRef, RenderError> {
    pdf.add_external_font(Cursor::new(file.bytes.as_slice()))
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Replaces typographic characters the builtin encoding handles inconsistently.
fn winansi_safe(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '•' | '·' => '-',
                '–' | '—' => '-',
                '‘' | '’' => '\'',
                '“' | '”' => '"',
                other => other,
            })
            .collect(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Page writer
// ────────────────────────────────────────────────────────────────────────────

struct PageWriter<'a> {
    pdf: &'a PdfDocumentReference,
    fonts: &'a PdfFonts,
    layer: PdfLayerReference,
    /// Top of the free area, in mm from the page bottom.
    y: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn ensure_space(&mut self, height_mm: f32) {
        if self.y - height_mm < MARGIN_MM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.pdf.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Page {}", self.pages),
        );
        self.layer = self.pdf.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Draws one line of text with its top at the cursor and advances.
    fn line_at(&mut self, text: &str, style: &TextStyle, x_mm: f32) {
        self.ensure_space(style.line_height_mm());
        let baseline = self.y - style.size_mm();
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(style.gray, style.gray, style.gray, None)));
        self.layer.use_text(
            text,
            style.size_pt,
            Mm(x_mm),
            Mm(baseline),
            self.fonts.get(style.face),
        );
        self.y -= style.line_height_mm();
    }

    /// Wraps `text` into the block `[x_mm, x_mm + width_mm]`, optionally justified.
    fn block(&mut self, text: &str, style: &TextStyle, x_mm: f32, width_mm: f32, justify: bool) {
        let text = self.fonts.normalize(text);
        let metrics = get_metrics(style.face);
        let width_em = style.width_em(width_mm);

        for line in wrap(&text, metrics, width_em) {
            if !justify || line.last || line.words.len() < 2 {
                self.line_at(&line.text(), style, x_mm);
                continue;
            }
            self.ensure_space(style.line_height_mm());
            let baseline = self.y - style.size_mm();
            let font = self.fonts.get(style.face);
            self.layer
                .set_fill_color(Color::Rgb(Rgb::new(style.gray, style.gray, style.gray, None)));
            for (word, offset_em) in line.words.iter().zip(word_offsets(&line, metrics, width_em)) {
                self.layer.use_text(
                    word.as_str(),
                    style.size_pt,
                    Mm(x_mm + offset_em * style.size_mm()),
                    Mm(baseline),
                    font,
                );
            }
            self.y -= style.line_height_mm();
        }
    }

    fn bullet(&mut self, text: &str, style: &TextStyle) {
        // Keep the glyph on the same page as the first line of its text.
        self.ensure_space(style.line_height_mm());
        let glyph_y = self.y;
        self.layer.use_text(
            self.fonts.bullet_glyph(),
            style.size_pt,
            Mm(MARGIN_MM + 1.0),
            Mm(glyph_y - style.size_mm()),
            self.fonts.get(style.face),
        );
        self.block(
            text,
            style,
            MARGIN_MM + BULLET_INDENT_MM,
            CONTENT_WIDTH_MM - BULLET_INDENT_MM,
            false,
        );
    }

    fn rule(&mut self) {
        self.ensure_space(3.0);
        let y = self.y - 1.5;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.75, 0.75, 0.75, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(Rule {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
            ],
            is_closed: false,
        });
        self.y -= 3.0;
    }

    /// Places the logo at the top-left. Undecodable bytes are skipped.
    fn logo(&mut self, bytes: &[u8]) {
        let image = match image_crate::load_from_memory(bytes) {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "logo skipped: undecodable image");
                return;
            }
        };
        let (_, height_px) = image.dimensions();
        // Choose the DPI that makes the image exactly LOGO_HEIGHT_MM tall.
        let dpi = height_px.max(1) as f32 * 25.4 / LOGO_HEIGHT_MM;
        Image::from_dynamic_image(&image).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(self.y - LOGO_HEIGHT_MM)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        self.y -= LOGO_HEIGHT_MM + 4.0;
    }
}

/// Renders the document to PDF bytes.
pub fn write_pdf(
    document: &ReportDocument,
    fonts: &FontPair,
    logo: Option<&[u8]>,
) -> Result<Vec<u8>, RenderError> {
    let (pdf, page, layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Page 1",
    );
    let pdf_fonts = PdfFonts::load(&pdf, fonts)?;
    let layer = pdf.get_page(page).get_layer(layer);

    let mut w = PageWriter {
        pdf: &pdf,
        fonts: &pdf_fonts,
        layer,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
        pages: 1,
    };

    if let Some(bytes) = logo {
        w.logo(bytes);
    }

    w.block(&document.title, &TITLE, MARGIN_MM, CONTENT_WIDTH_MM, false);
    if let Some(subtitle) = document.subtitle.as_deref() {
        w.block(subtitle, &SUBTITLE, MARGIN_MM, CONTENT_WIDTH_MM, false);
    }
    for line in &document.header_lines {
        w.block(line, &HEADER_LINE, MARGIN_MM, CONTENT_WIDTH_MM, false);
    }
    w.rule();

    for section in &document.sections {
        w.gap(2.0);
        // Avoid a heading stranded at the bottom of a page.
        w.ensure_space(HEADING.line_height_mm() + BODY.line_height_mm());
        w.block(&section.heading, &HEADING, MARGIN_MM, CONTENT_WIDTH_MM, false);
        for paragraph in &section.paragraphs {
            w.block(paragraph, &BODY, MARGIN_MM, CONTENT_WIDTH_MM, true);
            w.gap(1.5);
        }
        for item in &section.bullets {
            w.bullet(item, &BODY);
        }
    }

    if let Some(footer) = document.footer.as_deref() {
        w.gap(4.0);
        w.rule();
        w.block(footer, &FOOTER, MARGIN_MM, CONTENT_WIDTH_MM, true);
    }

    drop(w);
    pdf.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
