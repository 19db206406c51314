//! Optional TTF overrides, loaded once at startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::FontPaths;
use crate::content::locale::Lang;

#[derive(Debug, Clone)]
pub struct FontFile {
    pub path: PathBuf,
    pub bytes: Arc<Vec<u8>>,
}

/// Regular/bold files for one language. `None` slots use builtin Helvetica.
#[derive(Debug, Clone, Default)]
pub struct FontPair {
    pub regular: Option<FontFile>,
    pub bold: Option<FontFile>,
}

#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    en: FontPair,
    hi: FontPair,
}

/// One configured slot as reported by `/debug/fonts`.
#[derive(Debug, Clone, Serialize)]
pub struct FontSlotStatus {
    pub slot: &'static str,
    pub path: Option<String>,
    pub loaded: bool,
    pub bytes: usize,
}

impl FontLibrary {
    /// Reads every configured path. Unreadable files are logged and left unset.
    pub fn load(paths: &FontPaths) -> Self {
        let library = Self {
            en: FontPair {
                regular: read_slot("FONT_EN_REGULAR", paths.en_regular.as_deref()),
                bold: read_slot("FONT_EN_BOLD", paths.en_bold.as_deref()),
            },
            hi: FontPair {
                regular: read_slot("FONT_HI_REGULAR", paths.hi_regular.as_deref()),
                bold: read_slot("FONT_HI_BOLD", paths.hi_bold.as_deref()),
            },
        };
        if library.hi.regular.is_none() {
            warn!("no Devanagari font configured (FONT_HI_REGULAR); Hindi PDFs will be rendered in English");
        }
        library
    }

    /// Whether `lang` can be drawn. Builtin Helvetica has no Devanagari glyphs.
    pub fn can_render(&self, lang: Lang) -> bool {
        match lang {
            Lang::En => true,
            Lang::Hi => self.hi.regular.is_some(),
        }
    }

    /// `lang` if it can be drawn, otherwise English.
    pub fn render_lang(&self, lang: Lang) -> Lang {
        if self.can_render(lang) {
            lang
        } else {
            warn!(requested = %lang, "no font for language, rendering report in English");
            Lang::En
        }
    }

    /// Font pair for `lang`; a missing bold face reuses the regular one.
    pub fn pair(&self, lang: Lang) -> FontPair {
        let pair = match lang {
            Lang::En => &self.en,
            Lang::Hi => &self.hi,
        };
        FontPair {
            regular: pair.regular.clone(),
            bold: pair.bold.clone().or_else(|| pair.regular.clone()),
        }
    }

    pub fn status(&self) -> Vec<FontSlotStatus> {
        [
            ("en.regular", &self.en.regular),
            ("en.bold", &self.en.bold),
            ("hi.regular", &self.hi.regular),
            ("hi.bold", &self.hi.bold),
        ]
        .into_iter()
        .map(|(slot, file)| FontSlotStatus {
            slot,
            path: file.as_ref().map(|f| f.path.display().to_string()),
            loaded: file.is_some(),
            bytes: file.as_ref().map(|f| f.bytes.len()).unwrap_or(0),
        })
        .collect()
    }
}

fn read_slot(var: &str, path: Option<&Path>) -> Option<FontFile> {
    let path = path?;
    match std::fs::read(path) {
        Ok(bytes) => {
            info!(var, path = %path.display(), bytes = bytes.len(), "loaded font");
            Some(FontFile {
                path: path.to_path_buf(),
                bytes: Arc::new(bytes),
            })
        }
        Err(e) => {
            warn!(var, path = %path.display(), error = %e, "font unreadable, using builtin");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_paths_fall_back_to_builtin() {
        let library = FontLibrary::load(&FontPaths {
            en_regular: Some(PathBuf::from("/nonexistent/font.ttf")),
            ..FontPaths::default()
        });
        assert!(library.pair(Lang::En).regular.is_none());
        assert!(library.status().iter().all(|s| !s.loaded));
    }

    #[test]
    fn test_bold_reuses_regular_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regular.ttf");
        std::fs::write(&path, b"not really a font").unwrap();

        let library = FontLibrary::load(&FontPaths {
            hi_regular: Some(path.clone()),
            ..FontPaths::default()
        });
        let pair = library.pair(Lang::Hi);
        assert_eq!(pair.regular.as_ref().map(|f| f.path.clone()), Some(path.clone()));
        assert_eq!(pair.bold.as_ref().map(|f| f.path.clone()), Some(path));
        assert!(library.pair(Lang::En).regular.is_none());
        assert_eq!(library.render_lang(Lang::Hi), Lang::Hi);
    }

    #[test]
    fn test_hindi_without_font_renders_in_english() {
        let library = FontLibrary::load(&FontPaths::default());
        assert!(!library.can_render(Lang::Hi));
        assert_eq!(library.render_lang(Lang::Hi), Lang::En);
        assert_eq!(library.render_lang(Lang::En), Lang::En);
    }
}
