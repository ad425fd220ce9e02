//! Resolution of a stored field value against a requested basis.

use std::collections::BTreeMap;

use compendium_model::{is_valid_content, Basis, FieldValue};

use crate::extract::extract_basis_span;

/// Pick the single best display string for `basis` out of a stored value.
///
/// Plain strings pass through for `All` and go through marker extraction for
/// a specific basis. Per-basis mappings try the direct entry first, then fall
/// back to extraction over the remaining entries, since structured data
/// sometimes hides a concatenation inside one entry. `None` means "nothing
/// to display for this basis", never an error.
pub fn resolve(value: &FieldValue, basis: Basis) -> Option<String> {
    match value {
        FieldValue::Text(text) => {
            if !is_valid_content(text) {
                return None;
            }
            if basis == Basis::All {
                return Some(text.clone());
            }
            extract_basis_span(text, basis)
        }
        FieldValue::PerBasis(entries) => {
            if basis == Basis::All {
                return join_for_all(entries);
            }
            if let Some(direct) = entries.get(&basis) {
                if is_valid_content(direct) {
                    return Some(direct.clone());
                }
            }
            entries
                .values()
                .filter(|text| is_valid_content(text))
                .find_map(|text| extract_basis_span(text, basis))
        }
    }
}

/// Merge every valid entry into the `All` view.
///
/// A lone valid `All` entry passes through untouched. Otherwise entries are
/// ordered by basis name and, when several are present, each non-`All` entry
/// is prefixed with its bold single-letter label so the merged view stays
/// attributable.
fn join_for_all(entries: &BTreeMap<Basis, String>) -> Option<String> {
    let mut valid: Vec<(Basis, &str)> = entries
        .iter()
        .filter(|(_, text)| is_valid_content(text))
        .map(|(basis, text)| (*basis, text.as_str()))
        .collect();

    if valid.is_empty() {
        return None;
    }
    if valid.len() == 1 && valid[0].0 == Basis::All {
        return Some(valid[0].1.to_string());
    }

    valid.sort_by_key(|(basis, _)| basis.as_str());
    let label_entries = valid.len() > 1;

    let parts: Vec<String> = valid
        .iter()
        .map(|(basis, text)| match basis.display_label() {
            Some(label) if label_entries => format!("<strong>[{label}]</strong> {text}"),
            _ => (*text).to_string(),
        })
        .collect();

    let joined = parts.join("\n\n");
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compendium_model::FieldValue;

    fn per_basis(entries: &[(Basis, &str)]) -> FieldValue {
        entries
            .iter()
            .map(|(basis, text)| (*basis, (*text).to_string()))
            .collect()
    }

    #[test]
    fn plain_text_passes_through_for_all() {
        let value = FieldValue::text("Rich in fiber");
        assert_eq!(resolve(&value, Basis::All).as_deref(), Some("Rich in fiber"));
    }

    #[test]
    fn invalid_plain_text_resolves_to_none() {
        assert_eq!(resolve(&FieldValue::text("N/A"), Basis::All), None);
        assert_eq!(resolve(&FieldValue::text("..."), Basis::Research), None);
    }

    #[test]
    fn plain_text_extracts_for_specific_basis() {
        let value = FieldValue::text("General info. R: research detail. B: book detail.");
        assert_eq!(
            resolve(&value, Basis::Research).as_deref(),
            Some("R: research detail.")
        );
        assert_eq!(
            resolve(&value, Basis::Book).as_deref(),
            Some("B: book detail.")
        );
        assert_eq!(resolve(&value, Basis::Gen), None);
    }

    #[test]
    fn direct_entry_wins_for_specific_basis() {
        let value = per_basis(&[(Basis::Research, "direct"), (Basis::All, "R: embedded")]);
        assert_eq!(resolve(&value, Basis::Research).as_deref(), Some("direct"));
    }

    #[test]
    fn falls_back_to_extraction_from_other_entries() {
        let value = per_basis(&[(Basis::All, "overview. B: from the book.")]);
        assert_eq!(
            resolve(&value, Basis::Book).as_deref(),
            Some("B: from the book.")
        );
        assert_eq!(resolve(&value, Basis::Gen), None);
    }

    #[test]
    fn invalid_direct_entry_still_falls_back() {
        let value = per_basis(&[
            (Basis::Research, "N/A"),
            (Basis::All, "summary. R: the trial result."),
        ]);
        assert_eq!(
            resolve(&value, Basis::Research).as_deref(),
            Some("R: the trial result.")
        );
    }

    #[test]
    fn lone_all_entry_fast_path() {
        let value = per_basis(&[(Basis::All, "x")]);
        assert_eq!(resolve(&value, Basis::All).as_deref(), Some("x"));
    }

    #[test]
    fn lone_specific_entry_is_not_labeled() {
        let value = per_basis(&[(Basis::Research, "a")]);
        assert_eq!(resolve(&value, Basis::All).as_deref(), Some("a"));
    }

    #[test]
    fn merged_view_labels_and_orders_by_basis_name() {
        let value = per_basis(&[(Basis::Research, "a"), (Basis::Book, "b")]);
        let merged = resolve(&value, Basis::All).unwrap();
        // Book sorts before Research
        assert_eq!(
            merged,
            "<strong>[B]</strong> b\n\n<strong>[R]</strong> a"
        );
    }

    #[test]
    fn merged_view_skips_invalid_entries() {
        let value = per_basis(&[
            (Basis::Research, "a"),
            (Basis::Book, "N/A"),
            (Basis::Gen, "..."),
        ]);
        assert_eq!(resolve(&value, Basis::All).as_deref(), Some("a"));
    }

    #[test]
    fn all_invalid_entries_resolve_to_none() {
        let value = per_basis(&[(Basis::Research, ""), (Basis::Book, "NONE")]);
        assert_eq!(resolve(&value, Basis::All), None);
    }
}
