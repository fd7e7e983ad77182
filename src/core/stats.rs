//! Live character/word counts for the input field.

use unicode_segmentation::UnicodeSegmentation;

use crate::shared::types::TextStats;

pub fn analyse(text: &str) -> TextStats {
    let trimmed = text.trim();
    TextStats {
        characters: trimmed.graphemes(true).count(),
        words: trimmed.unicode_words().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ascii_text() {
        let stats = analyse("hi mom!");
        assert_eq!(stats.characters, 7);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn empty_and_whitespace_count_zero() {
        for input in ["", "   ", "\n\t"] {
            let stats = analyse(input);
            assert_eq!(stats.characters, 0);
            assert_eq!(stats.words, 0);
        }
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        // "héllo" with a combining accent is 5 graphemes
        let stats = analyse("he\u{0301}llo");
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.words, 1);
    }
}
