//! Validity filter for cell and field text.

/// Characters that, alone or combined with whitespace, make a string
/// punctuation-only noise rather than content.
const NOISE_CHARS: &str = ".,;:-[]()";

/// Returns true if `text` is meaningful content.
///
/// Rejects empty/whitespace-only strings, the usual spreadsheet placeholders
/// (`N/A`, `NA`, `NONE`, case-insensitive), anything carrying an upstream
/// error marker (`(DATA TRUNCATED)`, `NO DATA AVAILABLE`), and strings made
/// up entirely of punctuation and brackets. Used as a gate both before a
/// value is stored in the model and before a resolved value is returned.
pub fn is_valid_content(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let upper = trimmed.to_uppercase();
    if matches!(upper.as_str(), "N/A" | "NA" | "NONE") {
        return false;
    }
    if upper.contains("(DATA TRUNCATED)") || upper.contains("NO DATA AVAILABLE") {
        return false;
    }

    if trimmed
        .chars()
        .all(|ch| ch.is_whitespace() || NOISE_CHARS.contains(ch))
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_placeholders() {
        assert!(!is_valid_content(""));
        assert!(!is_valid_content("   "));
        assert!(!is_valid_content("N/A"));
        assert!(!is_valid_content("n/a"));
        assert!(!is_valid_content("na"));
        assert!(!is_valid_content("NONE"));
    }

    #[test]
    fn rejects_error_markers_anywhere() {
        assert!(!is_valid_content("NO DATA AVAILABLE"));
        assert!(!is_valid_content("some text (data truncated) more"));
        assert!(!is_valid_content("prefix no data available"));
    }

    #[test]
    fn rejects_punctuation_only_strings() {
        assert!(!is_valid_content("..."));
        assert!(!is_valid_content("[-]"));
        assert!(!is_valid_content(".]"));
        assert!(!is_valid_content("( )"));
        assert!(!is_valid_content(", ; :"));
    }

    #[test]
    fn accepts_real_content() {
        assert!(is_valid_content("Rich in fiber"));
        assert!(is_valid_content("25g carbs"));
        assert!(is_valid_content("a"));
        // Placeholder words embedded in longer text are fine
        assert!(is_valid_content("none known interactions"));
    }
}
