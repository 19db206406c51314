//! Greedy line breaking and justification over the static metric tables.

use crate::render::font_metrics::FontMetricTable;

/// Justified gaps wider than this many spaces fall back to natural spacing.
const MAX_STRETCH_SPACES: f32 = 3.0;

/// One wrapped line. `width_em` uses natural (single-space) spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub words: Vec<String>,
    pub width_em: f32,
    /// Last line of its paragraph; left ragged.
    pub last: bool,
}

impl Line {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Greedy word wrap at `max_width_em`.
///
/// A word wider than the line gets a line of its own.
pub fn wrap(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word);
        let space_w = if words.is_empty() { 0.0 } else { metrics.space_width };

        if !words.is_empty() && current_width + space_w + word_w > max_width_em {
            // Current line is full; push it and start a new one with this word.
            lines.push(Line {
                words: std::mem::take(&mut words),
                width_em: current_width,
                last: false,
            });
            current_width = word_w;
        } else {
            current_width += space_w + word_w;
        }
        words.push(word.to_string());
    }

    if !words.is_empty() {
        lines.push(Line {
            words,
            width_em: current_width,
            last: true,
        });
    }
    lines
}

/// Start offset (em) of each word on the line.
///
/// Inner lines stretch their gaps to fill `max_width_em`; the last line, single-word
/// lines and lines that would need more than `MAX_STRETCH_SPACES` per gap keep
/// natural spacing.
pub fn word_offsets(line: &Line, metrics: &FontMetricTable, max_width_em: f32) -> Vec<f32> {
    let gaps = line.words.len().saturating_sub(1);
    let mut gap = metrics.space_width;
    if !line.last && gaps > 0 {
        let stretched = metrics.space_width + (max_width_em - line.width_em).max(0.0) / gaps as f32;
        if stretched <= metrics.space_width * MAX_STRETCH_SPACES {
            gap = stretched;
        }
    }

    let mut offsets = Vec::with_capacity(line.words.len());
    let mut x = 0.0_f32;
    for word in &line.words {
        offsets.push(x);
        x += metrics.measure_str(word) + gap;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::font_metrics::{get_metrics, FontFace};

    const PARAGRAPH: &str = "Your patience will be tested today but steady effort brings rewards. \
        Speak kindly with elders and keep your promises, because trust earned now will carry \
        you through the busy weeks ahead.";

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap("   ", get_metrics(FontFace::Regular), 40.0).is_empty());
    }

    #[test]
    fn test_wrap_respects_width_and_keeps_words() {
        let metrics = get_metrics(FontFace::Regular);
        let lines = wrap(PARAGRAPH, metrics, 20.0);
        assert!(lines.len() > 2);
        for line in &lines {
            assert!(line.width_em <= 20.0 || line.words.len() == 1);
        }
        let rejoined: Vec<String> = lines.iter().map(Line::text).collect();
        assert_eq!(rejoined.join(" "), PARAGRAPH.split_whitespace().collect::<Vec<_>>().join(" "));
        assert!(lines.last().unwrap().last);
        assert!(lines[..lines.len() - 1].iter().all(|l| !l.last));
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let metrics = get_metrics(FontFace::Regular);
        let lines = wrap("a supercalifragilisticexpialidocious b", metrics, 5.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].words, vec!["supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn test_justified_line_ends_at_right_edge() {
        let metrics = get_metrics(FontFace::Regular);
        let lines = wrap(PARAGRAPH, metrics, 20.0);
        let line = &lines[0];
        let offsets = word_offsets(line, metrics, 20.0);
        let last_word = line.words.last().unwrap();
        let right = offsets.last().unwrap() + metrics.measure_str(last_word);
        assert!((right - 20.0).abs() < 1e-3, "right edge {right}");
    }

    #[test]
    fn test_last_line_is_ragged() {
        let metrics = get_metrics(FontFace::Regular);
        let lines = wrap(PARAGRAPH, metrics, 20.0);
        let line = lines.last().unwrap();
        let offsets = word_offsets(line, metrics, 20.0);
        if line.words.len() > 1 {
            let gap = offsets[1] - metrics.measure_str(&line.words[0]);
            assert!((gap - metrics.space_width).abs() < 1e-6);
        }
    }
}
