//! Number-word folding used for answer comparison.

use super::split::split_with_options;

/// Characters that may wrap a number word in free text.
const NUMBER_BOUNDARIES: &[char] = &[' ', ',', '.', '?', '!', '(', ')'];

const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
];

/// Replaces standalone number words `zero`..`ten` (any case) with digits.
///
/// Punctuation and spacing are preserved, and words that merely contain a
/// digit or a number word (`walking2`, `someone`) are left unchanged.
///
/// `one, two or (three)?` -> `1, 2 or (3)?`
pub fn recognize_numbers(text: &str) -> String {
    split_with_options(text, NUMBER_BOUNDARIES, false, true)
        .into_iter()
        .map(|part| match digit_for_word(&part) {
            Some(digit) => digit.to_string(),
            None => part,
        })
        .collect()
}

fn digit_for_word(word: &str) -> Option<&'static str> {
    let lowered = word.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, digit)| *digit)
}
