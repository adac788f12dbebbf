//! Quote-aware line splitting.

/// Splits `line` on `sep` with quote awareness, dropping separators.
///
/// This is the tokenizer used for shell command lines:
///
/// `create_question 1 "Who am I?" me`
/// -> `["create_question", "1", "\"Who am I?\"", "me"]`
pub fn split(line: &str, sep: char) -> Vec<String> {
    split_with_options(line, &[sep], true, false)
}

/// Splits `line` on any of `seps`.
///
/// - With `quote_aware`, every `"` toggles a quoted span; separators inside
///   the span are kept as literal characters. The quote itself stays in the
///   token.
/// - Empty runs between separators are dropped.
/// - With `include_separators`, each separator is emitted as its own token.
/// - The trailing run is always appended, even when empty, so the result is
///   never empty.
pub fn split_with_options(
    line: &str,
    seps: &[char],
    quote_aware: bool,
    include_separators: bool,
) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if quote_aware && ch == '"' {
            in_quotes = !in_quotes;
        }

        if !in_quotes && seps.contains(&ch) {
            if !run.is_empty() {
                tokens.push(std::mem::take(&mut run));
            }
            if include_separators {
                tokens.push(ch.to_string());
            }
            continue;
        }

        run.push(ch);
    }

    tokens.push(run);
    tokens
}
