//! Interval-segmentation parse of basis markers inside concatenated text.
//!
//! A cell like `General info. R: research detail. B: book detail.` carries
//! several bases in one string. Every recognized marker opens a span that
//! runs to the next marker of any basis, or to end of text. This is a flat
//! offset scan, not a grammar.

use compendium_model::{is_valid_content, Basis};

#[derive(Debug, Clone, Copy)]
struct MarkerHit {
    offset: usize,
    basis: Basis,
}

/// Extract the span belonging to `basis` out of `text`.
///
/// Returns `None` when the basis has no marker in the text, when the span is
/// not valid content, or when `All` is requested (`All` never appears as an
/// embedded marker; callers handle it separately).
pub fn extract_basis_span(text: &str, basis: Basis) -> Option<String> {
    if basis == Basis::All || text.is_empty() {
        return None;
    }

    let mut hits = collect_marker_hits(text);
    hits.sort_by_key(|hit| hit.offset);

    let open = hits.iter().find(|hit| hit.basis == basis)?;
    let end = hits
        .iter()
        .find(|hit| hit.offset > open.offset)
        .map_or(text.len(), |hit| hit.offset);

    let span = text[open.offset..end].trim();
    is_valid_content(span).then(|| span.to_string())
}

/// Every marker occurrence of every non-`All` basis, unordered.
fn collect_marker_hits(text: &str) -> Vec<MarkerHit> {
    let mut hits = Vec::new();
    for basis in Basis::NON_ALL {
        for phrase in basis.marker_phrases() {
            let mut from = 0;
            while let Some(offset) = find_ascii_ci(text, phrase, from) {
                if opens_span(text, offset) {
                    hits.push(MarkerHit { offset, basis });
                }
                from = offset + 1;
            }
        }
    }
    hits
}

/// A marker only counts when preceded by start-of-text or a non-alphanumeric
/// character, so `r:` inside an ordinary word is not a marker.
fn opens_span(text: &str, offset: usize) -> bool {
    offset == 0
        || text[..offset]
            .chars()
            .next_back()
            .is_some_and(|ch| !ch.is_ascii_alphanumeric())
}

/// Byte offset of the next ASCII-case-insensitive occurrence of `needle` in
/// `haystack` at or after `from`. Matching an ASCII needle can only start at
/// a character boundary, so the returned offset is always safe to slice at.
pub(crate) fn find_ascii_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from + needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
