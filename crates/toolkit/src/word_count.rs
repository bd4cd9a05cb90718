//! Word counter

use serde::Serialize;

/// Average reading speed, words per minute
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_minutes: usize,
}

pub fn count(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats {
            characters: text.chars().count(),
            ..TextStats::default()
        };
    }

    let words = text.split_whitespace().count();

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences: text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count(),
        paragraphs: count_paragraphs(text),
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Blocks of non-blank lines separated by at least one blank line
fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            paragraphs += 1;
        }
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text() {
        assert_eq!(count(""), TextStats::default());
        let stats = count("  \n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.characters, 4);
    }

    #[test]
    fn test_counts() {
        let stats = count("Hello world. How are you?\n\nFine!");
        assert_eq!(stats.characters, 32);
        assert_eq!(stats.characters_no_spaces, 26);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn test_punctuation_runs_are_one_break() {
        assert_eq!(count("Wait... what?! Ok").sentences, 3);
    }

    #[test]
    fn test_blank_lines_with_spaces_split_paragraphs() {
        assert_eq!(count("one\n   \ntwo\nstill two\n\n\nthree").paragraphs, 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(count(&text).reading_time_minutes, 2);
        let text = "word ".repeat(200);
        assert_eq!(count(&text).reading_time_minutes, 1);
    }
}
