//! Word tokenizing and sorted-set helpers.

use std::collections::BTreeSet;

/// Returns true for characters that belong to a word: letters, digits, and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits text on runs of non-word characters, skipping empty pieces.
///
/// # Examples
///
/// ```
/// use parlance_domain::common::words;
///
/// let tokens: Vec<&str> = words("  put the ball, in box!").collect();
/// assert_eq!(tokens, ["put", "the", "ball", "in", "box"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Owned version of [`words`].
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).map(str::to_string).collect()
}

/// Collects items into an ascending, duplicate-free vector.
pub fn sorted_unique<T, I>(items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
