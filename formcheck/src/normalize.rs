//! Cleanup of label and legend text before it is shown in the summary.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = "[^a-zA-Z0-9 áéíóúÁÉÍÓÚàèìòùÀÈÌÒÙãõÃÕçÇâÂýÝñÑ]";
    Regex::new(pattern).expect("Invalid regex pattern")
});

/// Trim `text`, then drop every character outside Latin letters (including
/// the common accented ones), digits and space.
///
/// Trimming happens first, so whitespace left next to removed punctuation
/// survives: `"Name *"` becomes `"Name "`.
pub fn normalize(text: &str) -> String {
    DISALLOWED.replace_all(text.trim(), "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("  Full name \n"), "Full name");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("E-mail:"), "Email");
        assert_eq!(normalize("Name *"), "Name ");
    }

    #[test]
    fn test_keeps_accented_letters_and_digits() {
        assert_eq!(normalize("Opção nº 2"), "Opção n 2");
        assert_eq!(normalize("Año"), "Año");
    }

    #[test]
    fn test_drops_markup_characters() {
        assert_eq!(normalize("<b>Bold</b>"), "bBoldb");
    }
}
