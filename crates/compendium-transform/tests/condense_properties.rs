//! Property tests for the condense pipeline.

use compendium_transform::condense;
use proptest::prelude::{prop_oneof, proptest, Just, Strategy};

/// Realistic cell fragments: words, citation codes, more-info pointers, and
/// basis-tagged tails, joined with spaces the way sheet cells are written.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("[1]".to_string()),
        Just("[Note 4]".to_string()),
        Just("(More info: see page 12)".to_string()),
        Just("[More info in appendix]".to_string()),
        Just("(boiled, strained)".to_string()),
        Just("R: trial data follows".to_string()),
        Just("B: folk record follows".to_string()),
        Just("G: common knowledge".to_string()),
    ]
}

fn cell_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(fragment(), 0..6).prop_map(|fragments| fragments.join(" "))
}

proptest! {
    #[test]
    fn condense_is_idempotent(text in cell_text()) {
        let once = condense(&text);
        let twice = condense(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn condense_never_leaves_bracket_spans(text in cell_text()) {
        let out = condense(&text);
        assert!(!out.contains("[Note"), "bracket span survived: {out}");
    }

    #[test]
    fn condense_never_leaves_edge_punctuation(text in cell_text()) {
        let out = condense(&text);
        if let (Some(first), Some(last)) = (out.chars().next(), out.chars().last()) {
            for ch in [first, last] {
                assert!(
                    !(ch.is_whitespace() || matches!(ch, '.' | ',' | ';' | ':' | '-')),
                    "edge punctuation survived: {out:?}"
                );
            }
        }
    }
}
