use serde::{Deserialize, Serialize};

use crate::sentences::split_sentences;

/// Surface statistics over a piece of submitted text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextStats {
    /// Total characters including whitespace.
    pub character_count: usize,
    /// Whitespace-delimited words.
    pub word_count: usize,
    /// Sentences after splitting.
    pub sentence_count: usize,
    /// Mean words per sentence; 0 when there are no sentences.
    pub avg_words_per_sentence: f64,
    /// Mean characters per word; 0 when there are no words.
    pub avg_chars_per_word: f64,
}

/// Computes surface statistics for the given text.
#[must_use]
pub fn text_stats(text: &str) -> TextStats {
    let character_count = text.chars().count();
    let word_count = text.split_whitespace().count();
    let sentence_count = split_sentences(text).len();
    let avg_words_per_sentence = mean(word_count, sentence_count);
    let avg_chars_per_word = mean(character_count, word_count);
    TextStats {
        character_count,
        word_count,
        sentence_count,
        avg_words_per_sentence,
        avg_chars_per_word,
    }
}

fn mean(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = numerator as f64 / denominator as f64;
    ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_and_sentences() {
        let stats = text_stats("The member clicks the button. The system responds.");
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.sentence_count, 2);
        assert!((stats.avg_words_per_sentence - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_text_yields_zeroed_stats() {
        let stats = text_stats("");
        assert_eq!(stats, TextStats::default());
    }

    #[test]
    fn averages_never_divide_by_zero() {
        let stats = text_stats("   \n\t  ");
        assert!(stats.avg_words_per_sentence.abs() < f64::EPSILON);
        assert!(stats.avg_chars_per_word.abs() < f64::EPSILON);
    }
}
