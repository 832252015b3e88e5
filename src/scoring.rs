/// Final score of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub wpm: u32,
    /// Percentage in `0..=100`.
    pub accuracy: u32,
}

/// Live status of one prompt word while the round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum WordMark {
    Correct,
    Incorrect,
    Current,
    Pending,
}

/// Whitespace-separated words of `text`; runs of whitespace never yield empty tokens.
pub fn input_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count positions where the typed word equals the prompt word at the same index.
///
/// An extra or missing word shifts every later comparison.
pub fn count_correct<S: AsRef<str>>(prompt: &[S], input: &[&str]) -> usize {
    input
        .iter()
        .zip(prompt)
        .filter(|&(typed, expected)| {
            let expected: &str = expected.as_ref();
            *typed == expected
        })
        .count()
}

pub fn score<S: AsRef<str>>(prompt: &[S], typed_text: &str) -> RoundResult {
    let words = input_words(typed_text);
    let correct = count_correct(prompt, &words);
    let total = words.len();

    // NOTE: this is matched words / 5, not typed chars / 5 per elapsed minute.
    // Elapsed time is ignored, so it only reads as a rate for full 60s rounds.
    let wpm = (correct as f64 / 5.0).round() as u32;

    let accuracy = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    };

    RoundResult { wpm, accuracy }
}

/// Mark each prompt word against what has been typed so far.
///
/// The last typed word counts as `Current` until whitespace follows it.
pub fn word_marks<S: AsRef<str>>(prompt: &[S], typed_text: &str) -> Vec<WordMark> {
    let words = input_words(typed_text);
    let in_progress = !typed_text.is_empty()
        && !typed_text.ends_with(char::is_whitespace)
        && !words.is_empty();
    let settled = if in_progress {
        words.len() - 1
    } else {
        words.len()
    };

    prompt
        .iter()
        .enumerate()
        .map(|(idx, expected)| {
            let expected: &str = expected.as_ref();
            if idx < settled {
                if words[idx] == expected {
                    WordMark::Correct
                } else {
                    WordMark::Incorrect
                }
            } else if idx == settled {
                WordMark::Current
            } else {
                WordMark::Pending
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_input_words_discards_empty_tokens() {
        assert_eq!(input_words("a   b"), vec!["a", "b"]);
        assert_eq!(input_words("  a\tb\n c  "), vec!["a", "b", "c"]);
        assert!(input_words("").is_empty());
        assert!(input_words("   ").is_empty());
    }

    #[test]
    fn test_all_correct() {
        let result = score(&abc(), "a b c");
        assert_eq!(result, RoundResult { wpm: 1, accuracy: 100 });
    }

    #[test]
    fn test_one_wrong_in_the_middle() {
        let result = score(&abc(), "a x c");
        assert_eq!(result.accuracy, 67);
        assert_eq!(result.wpm, 0);
    }

    #[test]
    fn test_empty_input_does_not_divide_by_zero() {
        assert_eq!(score(&abc(), ""), RoundResult { wpm: 0, accuracy: 0 });
        assert_eq!(score(&abc(), "   "), RoundResult { wpm: 0, accuracy: 0 });
    }

    #[test]
    fn test_multiple_spaces_between_words() {
        let prompt = vec!["a", "b"];
        assert_eq!(count_correct(&prompt, &input_words("a   b")), 2);
        assert_eq!(score(&prompt, "a   b").accuracy, 100);
    }

    #[test]
    fn test_missing_word_desynchronizes_the_rest() {
        // "b" skipped: "c" lands on index 1 and no longer matches.
        let result = score(&abc(), "a c");
        assert_eq!(result.accuracy, 50);
    }

    #[test]
    fn test_extra_words_beyond_prompt_count_as_typed() {
        let result = score(&abc(), "a b c d e");
        assert_eq!(result.accuracy, 60);
    }

    #[test]
    fn test_wpm_rounds_to_nearest() {
        let prompt: Vec<String> = (0..13).map(|_| "w".to_string()).collect();
        let typed = vec!["w"; 13].join(" ");
        // 13 / 5 = 2.6
        assert_eq!(score(&prompt, &typed).wpm, 3);

        let typed = vec!["w"; 12].join(" ");
        // 12 / 5 = 2.4
        assert_eq!(score(&prompt, &typed).wpm, 2);
    }

    #[test]
    fn test_word_marks_in_progress() {
        let marks = word_marks(&abc(), "a x c");
        assert_eq!(
            marks,
            vec![WordMark::Correct, WordMark::Incorrect, WordMark::Current]
        );
    }

    #[test]
    fn test_word_marks_after_space() {
        let marks = word_marks(&abc(), "a b ");
        assert_eq!(
            marks,
            vec![WordMark::Correct, WordMark::Correct, WordMark::Current]
        );
    }

    #[test]
    fn test_word_marks_nothing_typed() {
        let marks = word_marks(&abc(), "");
        assert_eq!(
            marks,
            vec![WordMark::Current, WordMark::Pending, WordMark::Pending]
        );
    }

    #[test]
    fn test_word_mark_display() {
        assert_eq!(WordMark::Incorrect.to_string(), "Incorrect");
    }
}
