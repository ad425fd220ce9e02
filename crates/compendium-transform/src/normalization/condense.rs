//! The concise-display pipeline.

use std::sync::LazyLock;

use regex::Regex;

use super::{run_pipeline, Step};

/// `(More info ...)` / `[More info ...]` pointers, non-greedy to the first
/// closing bracket.
static MORE_INFO_POINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[(\[]\s*More info.*?[)\]]").unwrap());

/// Complete square-bracket spans: citation codes, internal notes.
static BRACKET_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

/// A single-letter basis marker at start of text or after whitespace.
static BASIS_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(^|\s)[GBR]:").unwrap());

/// The four steps, in order. Pointers go first so a basis marker hidden
/// inside a pointer never becomes a cut point; bracket spans go before the
/// cut for the same reason.
pub const CONDENSE_STEPS: [Step; 4] = [
    Step::new("strip-more-info-pointers", strip_more_info_pointers),
    Step::new("strip-bracket-spans", strip_bracket_spans),
    Step::new("cut-at-basis-marker", cut_at_basis_marker),
    Step::new("trim-edge-punctuation", trim_edge_punctuation),
];

/// Produce the concise variant of `text`.
///
/// Total over any input; empty in, empty out. Idempotent: the output carries
/// no pointers, bracket spans, or cut-eligible markers for a second run to
/// act on.
pub fn condense(text: &str) -> String {
    run_pipeline(&CONDENSE_STEPS, text)
}

fn strip_more_info_pointers(text: &str) -> String {
    MORE_INFO_POINTER.replace_all(text, "").into_owned()
}

fn strip_bracket_spans(text: &str) -> String {
    BRACKET_SPAN.replace_all(text, "").into_owned()
}

/// Delete the first embedded basis marker and everything after it.
fn cut_at_basis_marker(text: &str) -> String {
    match BASIS_MARKER.find(text) {
        Some(found) => text[..found.start()].to_string(),
        None => text.to_string(),
    }
}

fn trim_edge_punctuation(text: &str) -> String {
    text.trim_matches(|ch: char| ch.is_whitespace() || matches!(ch, '.' | ',' | ';' | ':' | '-'))
        .to_string()
}
