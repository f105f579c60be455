//! Text measurement and word wrapping.
//!
//! Shaping is the caller's business: the engine only asks a [`TextMeasurer`]
//! for the extent of word-sized fragments and breaks lines between them.

use crate::config::{TextConfig, TextWrap};
use common::Size;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Measures the extent of a text fragment in a given font.
pub trait TextMeasurer {
    fn measure(&self, text: &str, config: &TextConfig) -> Size;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextConfig) -> Size,
{
    fn measure(&self, text: &str, config: &TextConfig) -> Size {
        self(text, config)
    }
}

/// Fixed-advance measurer: every grapheme is `font_size * advance_ratio` wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.5, 1.2)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, config: &TextConfig) -> Size {
        let font_size = config.font_size as f32;
        let graphemes = text.graphemes(true).count() as f32;
        Size::new(
            graphemes * font_size * self.advance_ratio,
            font_size * self.line_height_ratio,
        )
    }
}

/// A word together with its trailing whitespace, or a hard line break.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredWord {
    pub start: usize,
    /// Byte length including trailing whitespace.
    pub len: usize,
    /// Byte length without trailing whitespace.
    pub trimmed_len: usize,
    pub width: f32,
    pub trimmed_width: f32,
    pub is_break: bool,
}

/// Words and natural extent of a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredText {
    pub words: Vec<MeasuredWord>,
    /// Width with breaks only at explicit newlines.
    pub width: f32,
    /// Width of the whole content measured as one line, newlines included.
    pub single_line_width: f32,
    /// Height of one line as reported by the measurer.
    pub natural_line_height: f32,
    pub letter_spacing: f32,
}

/// One wrapped line of a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Byte range into the element's content.
    pub range: Range<usize>,
    pub width: f32,
}

fn split_words(content: &str) -> Vec<(usize, usize, usize, bool)> {
    // (start, len, trimmed_len, is_break)
    let mut words = Vec::new();
    let mut current: Option<(usize, usize, usize)> = None;
    let mut trailing_space = false;

    for (offset, segment) in content.split_word_bound_indices() {
        if segment == "\n" || segment == "\r\n" {
            if let Some((start, len, trimmed)) = current.take() {
                words.push((start, len, trimmed, false));
            }
            words.push((offset, 0, 0, true));
            trailing_space = false;
        } else if segment.chars().all(char::is_whitespace) {
            match current.as_mut() {
                Some((_, len, _)) => *len += segment.len(),
                None => current = Some((offset, segment.len(), 0)),
            }
            trailing_space = true;
        } else {
            if trailing_space {
                if let Some((start, len, trimmed)) = current.take() {
                    words.push((start, len, trimmed, false));
                }
                trailing_space = false;
            }
            match current.as_mut() {
                Some((_, len, trimmed)) => {
                    *len += segment.len();
                    *trimmed = *len;
                }
                None => current = Some((offset, segment.len(), segment.len())),
            }
        }
    }
    if let Some((start, len, trimmed)) = current {
        words.push((start, len, trimmed, false));
    }
    words
}

/// Split `content` into words and measure each one.
pub fn measure_text(
    measurer: &dyn TextMeasurer,
    content: &str,
    config: &TextConfig,
) -> MeasuredText {
    let words: Vec<MeasuredWord> = split_words(content)
        .into_iter()
        .map(|(start, len, trimmed_len, is_break)| {
            if is_break {
                return MeasuredWord {
                    start,
                    len,
                    trimmed_len,
                    width: 0.0,
                    trimmed_width: 0.0,
                    is_break,
                };
            }
            let width = measurer.measure(&content[start..start + len], config).width;
            let trimmed_width = if trimmed_len == len {
                width
            } else {
                measurer.measure(&content[start..start + trimmed_len], config).width
            };
            MeasuredWord {
                start,
                len,
                trimmed_len,
                width,
                trimmed_width,
                is_break,
            }
        })
        .collect();

    let natural_line_height = measurer.measure(content, config).height;
    let single_line_width = measurer.measure(content.trim_end(), config).width;
    let mut measured = MeasuredText {
        words,
        width: 0.0,
        single_line_width,
        natural_line_height,
        letter_spacing: config.letter_spacing as f32,
    };
    measured.width = measured
        .break_lines(f32::INFINITY)
        .iter()
        .map(|line| line.width)
        .fold(0.0, f32::max);
    measured
}

impl MeasuredText {
    /// Line advance for `config`.
    pub fn line_height(&self, config: &TextConfig) -> f32 {
        if config.line_height > 0 {
            config.line_height as f32
        } else {
            self.natural_line_height
        }
    }

    /// Width a `Fit` text element takes before wrapping.
    pub fn fit_width(&self, config: &TextConfig) -> f32 {
        match config.wrap {
            TextWrap::None => self.single_line_width,
            TextWrap::Words | TextWrap::Newlines => self.width,
        }
    }

    /// Greedy line breaking at word boundaries. A word wider than
    /// `max_width` gets a line of its own.
    fn break_lines(&self, max_width: f32) -> Vec<TextLine> {
        let mut lines = Vec::new();
        let mut start: Option<usize> = None;
        let mut end = 0;
        let mut width = 0.0;
        let mut trimmed = 0.0;

        for word in &self.words {
            if word.is_break {
                let line_start = start.take().unwrap_or(word.start);
                let line_end = if end > line_start { end } else { line_start };
                lines.push(TextLine {
                    range: line_start..line_end,
                    width: trimmed,
                });
                width = 0.0;
                trimmed = 0.0;
                continue;
            }

            let spacing = if start.is_some() { self.letter_spacing } else { 0.0 };
            if start.is_some() && width + spacing + word.trimmed_width > max_width {
                if let Some(line_start) = start.take() {
                    lines.push(TextLine {
                        range: line_start..end,
                        width: trimmed,
                    });
                }
                width = 0.0;
            }

            let spacing = if start.is_some() { self.letter_spacing } else { 0.0 };
            if start.is_none() {
                start = Some(word.start);
            }
            trimmed = width + spacing + word.trimmed_width;
            width += spacing + word.width;
            end = word.start + word.trimmed_len;
        }

        if let Some(line_start) = start {
            lines.push(TextLine {
                range: line_start..end.max(line_start),
                width: trimmed,
            });
        } else if lines.is_empty() {
            lines.push(TextLine { range: 0..0, width: 0.0 });
        }
        lines
    }

    /// Lay the text out into lines no wider than `max_width` where the wrap
    /// mode allows it. `None` ignores hard breaks and keeps the whole content
    /// on one line.
    pub fn wrap(&self, content: &str, config: &TextConfig, max_width: f32) -> Vec<TextLine> {
        match config.wrap {
            TextWrap::Words => self.break_lines(max_width),
            TextWrap::Newlines => self.break_lines(f32::INFINITY),
            TextWrap::None => vec![TextLine {
                range: 0..content.trim_end().len(),
                width: self.single_line_width,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TextConfig {
        TextConfig::default().font_size(10)
    }

    // 5px per grapheme, 15px lines at font size 10.
    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::new(0.5, 1.5)
    }

    fn line_texts<'a>(content: &'a str, lines: &[TextLine]) -> Vec<&'a str> {
        lines.iter().map(|l| &content[l.range.clone()]).collect()
    }

    #[test]
    fn test_measure_unwrapped() {
        let measured = measure_text(&measurer(), "hello world", &config());
        assert_eq!(measured.width, 55.0);
        assert_eq!(measured.natural_line_height, 15.0);
        assert_eq!(measured.words.len(), 2);
        assert_eq!(measured.words[0].width, 30.0);
        assert_eq!(measured.words[0].trimmed_width, 25.0);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let content = "one two three";
        let measured = measure_text(&measurer(), content, &config());
        let lines = measured.wrap(content, &config(), 40.0);
        assert_eq!(line_texts(content, &lines), vec!["one two", "three"]);
        assert_eq!(lines[0].width, 35.0);
        assert_eq!(lines[1].width, 25.0);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let content = "a extraordinary b";
        let measured = measure_text(&measurer(), content, &config());
        let lines = measured.wrap(content, &config(), 20.0);
        assert_eq!(line_texts(content, &lines), vec!["a", "extraordinary", "b"]);
    }

    #[test]
    fn test_hard_breaks() {
        let content = "ab\ncd";
        let measured = measure_text(&measurer(), content, &config());
        let lines = measured.wrap(content, &config().wrap(TextWrap::Newlines), 1000.0);
        assert_eq!(line_texts(content, &lines), vec!["ab", "cd"]);
        assert_eq!(measured.width, 10.0);
    }

    #[test]
    fn test_blank_line_preserved() {
        let content = "ab\n\ncd";
        let measured = measure_text(&measurer(), content, &config());
        let lines = measured.wrap(content, &config(), 1000.0);
        assert_eq!(line_texts(content, &lines), vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_no_wrap_ignores_hard_breaks() {
        let content = "ab\ncd\n";
        let config = config().wrap(TextWrap::None);
        let measured = measure_text(&measurer(), content, &config);
        let lines = measured.wrap(content, &config, 1000.0);
        assert_eq!(line_texts(content, &lines), vec!["ab\ncd"]);
        // Five graphemes including the newline.
        assert_eq!(lines[0].width, 25.0);
        assert_eq!(measured.fit_width(&config), 25.0);
        assert_eq!(measured.fit_width(&config.wrap(TextWrap::Newlines)), 10.0);
    }

    #[test]
    fn test_no_wrap_keeps_single_line() {
        let content = "one two three";
        let measured = measure_text(&measurer(), content, &config());
        let lines = measured.wrap(content, &config().wrap(TextWrap::None), 10.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 65.0);
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let measured = measure_text(&measurer(), "", &config());
        assert_eq!(measured.wrap("", &config(), 100.0).len(), 1);
        assert_eq!(measured.width, 0.0);
    }

    #[test]
    fn test_closure_measurer() {
        let measurer = |text: &str, _: &TextConfig| Size::new(text.len() as f32, 8.0);
        let measured = measure_text(&measurer, "abc de", &config());
        assert_eq!(measured.width, 6.0);
        assert_eq!(measured.line_height(&config().line_height(20)), 20.0);
        assert_eq!(measured.line_height(&config()), 8.0);
    }
}
