//! Case-insensitive snippet search across a resolved model.
//!
//! Field values are resolved at the requested basis before matching, so the
//! search sees exactly what the display layer would show.

use serde::Serialize;

use compendium_model::{Basis, ContentModel};

use crate::extract::find_ascii_ci;
use crate::resolve::resolve;

/// Context kept around a match, in characters.
const SNIPPET_BEFORE: usize = 20;
const SNIPPET_AFTER: usize = 30;

/// One matching section of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Field name, or `Name` for a hit on the item name itself.
    pub section: String,
    /// Snippet around the first occurrence, with matches highlighted.
    pub snippet: String,
}

/// All matches for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub category: String,
    pub item: String,
    pub matches: Vec<SearchMatch>,
}

/// Search every item of `model` for `term` as seen at `basis`.
///
/// Terms shorter than two characters match nothing. An optional category
/// filter restricts the walk to one category.
pub fn search(
    model: &ContentModel,
    term: &str,
    basis: Basis,
    category: Option<&str>,
) -> Vec<SearchHit> {
    let term = term.trim();
    if term.chars().count() < 2 {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for (cat, item, fields) in model.iter_items() {
        if category.is_some_and(|filter| filter != cat) {
            continue;
        }

        let mut matches = Vec::new();
        if find_ascii_ci(item, term, 0).is_some() {
            matches.push(SearchMatch {
                section: "Name".to_string(),
                snippet: item.to_string(),
            });
        }

        for (field, value) in fields {
            let Some(content) = resolve(value, basis) else {
                continue;
            };
            let Some(offset) = find_ascii_ci(&content, term, 0) else {
                continue;
            };
            matches.push(SearchMatch {
                section: field.clone(),
                snippet: snippet_around(&content, offset, term),
            });
        }

        if !matches.is_empty() {
            hits.push(SearchHit {
                category: cat.to_string(),
                item: item.to_string(),
                matches,
            });
        }
    }
    hits
}

/// Cut a window around the match, add ellipses at trimmed edges, and wrap
/// every occurrence of the term in a highlight span.
fn snippet_around(content: &str, offset: usize, term: &str) -> String {
    let start = step_back(content, offset, SNIPPET_BEFORE);
    let end = step_forward(content, offset, term.chars().count() + SNIPPET_AFTER);

    let mut snippet = highlight(&content[start..end], term);
    if start > 0 {
        snippet = format!("...{snippet}");
    }
    if end < content.len() {
        snippet.push_str("...");
    }
    snippet
}

/// Byte offset `chars` characters before `offset`.
fn step_back(text: &str, offset: usize, chars: usize) -> usize {
    text[..offset]
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map_or(offset, |(idx, _)| idx)
}

/// Byte offset `chars` characters after `offset`.
fn step_forward(text: &str, offset: usize, chars: usize) -> usize {
    text[offset..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| offset + idx)
}

fn highlight(snippet: &str, term: &str) -> String {
    let mut out = String::with_capacity(snippet.len());
    let mut from = 0;
    while let Some(at) = find_ascii_ci(snippet, term, from) {
        let end = at + term.len();
        out.push_str(&snippet[from..at]);
        out.push_str("<span class='bg-yellow-200 font-bold'>");
        out.push_str(&snippet[at..end]);
        out.push_str("</span>");
        from = end;
    }
    out.push_str(&snippet[from..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use compendium_model::Basis;

    fn sample_model() -> ContentModel {
        let mut model = ContentModel::new();
        model.insert_basis_value(
            "Fruits",
            "Apple",
            "Macros",
            Basis::All,
            "Rich in fiber and natural sugars",
        );
        model.insert_basis_value(
            "Spices",
            "Ginger",
            "Traditional Use",
            Basis::All,
            "warming, eases nausea and indigestion",
        );
        model.insert_basis_value("Spices", "Fennel", "Macros", Basis::Research, "fiber rich");
        model
    }

    #[test]
    fn short_terms_match_nothing() {
        let model = sample_model();
        assert!(search(&model, "f", Basis::All, None).is_empty());
        assert!(search(&model, " ", Basis::All, None).is_empty());
    }

    #[test]
    fn matches_item_names_and_fields() {
        let model = sample_model();
        let hits = search(&model, "ginger", Basis::All, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "Ginger");
        assert_eq!(hits[0].matches[0].section, "Name");
    }

    #[test]
    fn field_hits_carry_highlighted_snippets() {
        let model = sample_model();
        let hits = search(&model, "fiber", Basis::All, None);
        let apple = hits.iter().find(|hit| hit.item == "Apple").unwrap();
        let snippet = &apple.matches[0].snippet;
        assert!(snippet.contains("<span class='bg-yellow-200 font-bold'>fiber</span>"));
    }

    #[test]
    fn category_filter_restricts_the_walk() {
        let model = sample_model();
        let hits = search(&model, "fiber", Basis::All, Some("Spices"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "Fennel");
    }

    #[test]
    fn basis_restricts_what_content_is_searched() {
        let model = sample_model();
        // Fennel's macros exist only under Research; at Book basis nothing
        // resolves, so only Apple matches
        let hits = search(&model, "fiber", Basis::Book, None);
        assert!(hits.iter().all(|hit| hit.item != "Fennel"));
    }

    #[test]
    fn long_content_is_trimmed_with_ellipses() {
        let mut model = ContentModel::new();
        model.insert_basis_value(
            "Fruits",
            "Apple",
            "Notes",
            Basis::All,
            "a very long preamble that keeps going before the keyword fiber and then trails off for a while afterwards",
        );
        let hits = search(&model, "fiber", Basis::All, None);
        let snippet = &hits[0].matches[0].snippet;
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
    }
}
