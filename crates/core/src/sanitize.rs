//! Markup stripping for free-text input.

use std::collections::HashSet;

/// Removes every HTML tag from `input` and trims the result.
///
/// Text inside tags is kept, the bodies of `script` and `style` are dropped.
/// The result is plain text: entities the cleaner writes are decoded again,
/// so `Rent & bills` stays as typed.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let cleaned = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(input)
        .to_string();

    html_escape::decode_html_entities(&cleaned).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Salary", "Salary")]
    #[case("  Rent  ", "Rent")]
    #[case("<b>Groceries</b>", "Groceries")]
    #[case("<p> Gym </p>", "Gym")]
    #[case("<script>alert(1)</script>Rent", "Rent")]
    #[case("<img src=x onerror=alert(1)>", "")]
    #[case("Rent & bills", "Rent & bills")]
    #[case("<i>Tom & Jerry</i> > 3", "Tom & Jerry > 3")]
    fn test_strip_markup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_markup(input), expected);
    }
}
