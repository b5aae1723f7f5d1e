//! Anchor slug derivation for heading text

use itertools::Itertools;

/// Derive a URL-safe anchor id from heading text.
///
/// Lowercases the input, strips every character that is not an ASCII word
/// character, whitespace, or a hyphen, then collapses each whitespace run
/// into a single hyphen.
///
/// Deterministic and pure: two headings whose text normalizes to the same
/// string produce the same slug. Uniqueness is not enforced here — see
/// [`build_toc`](crate::content::build_toc) for collision reporting.
///
/// # Examples
///
/// ```
/// use postdoc::slug::slugify;
///
/// assert_eq!(slugify("Choosing the Right Lighting!"), "choosing-the-right-lighting");
/// assert_eq!(slugify("FAQ"), "faq");
/// ```
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace() || c == '-')
        .collect();

    kept.split_whitespace().join("-")
}

/// Word characters in the `\w` (ASCII) sense: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
