//! Property-based tests for literal tokenization.
//!
//! Inputs are assembled from literal chunks without a marker-open and
//! non-empty expressions without a `}`, so every `${` is terminated.

use interpol_syntax::{SegmentKind, TokenizeError, render, tokenize};
use proptest::prelude::*;

fn literal_chunk() -> impl Strategy<Value = String> {
    "[a-z $.{}\\\\é]{0,12}".prop_filter("contains a marker-open", |s| !s.contains("${"))
}

fn expression_text() -> impl Strategy<Value = String> {
    "[a-z0-9 +.()\\[\\]${]{1,10}"
}

/// Text where every `${` has a closing `}` and no marker is empty.
fn interpolated_text() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((literal_chunk(), expression_text()), 0..6),
        literal_chunk(),
    )
        .prop_map(|(parts, tail)| {
            let mut text = String::new();
            for (literal, expression) in parts {
                text.push_str(&literal);
                text.push_str("${");
                text.push_str(&expression);
                text.push('}');
            }
            text.push_str(&tail);
            text
        })
}

proptest! {
    #[test]
    fn test_render_inverts_tokenize(text in interpolated_text(), base in 0usize..64) {
        let segments = tokenize(&text, base).unwrap();
        prop_assert_eq!(render(&segments), text);
    }

    #[test]
    fn test_offsets_never_decrease(text in interpolated_text(), base in 0usize..64) {
        let segments = tokenize(&text, base).unwrap();
        for pair in segments.windows(2) {
            prop_assert!(pair[0].offset() <= pair[1].offset(), "{:?}", segments);
        }
        if let Some(first) = segments.first() {
            prop_assert!(first.offset() >= base);
        }
    }

    #[test]
    fn test_no_empty_literal_segments(text in interpolated_text()) {
        let segments = tokenize(&text, 0).unwrap();
        for segment in &segments {
            if segment.kind() == SegmentKind::Literal {
                prop_assert!(!segment.text().is_empty(), "{:?}", segments);
            }
        }
    }

    #[test]
    fn test_unterminated_marker_reports_full_text(
        text in interpolated_text(),
        tail in "[a-z0-9 +.${]{0,10}",
    ) {
        let input = format!("{text}${{{tail}");
        prop_assert_eq!(
            tokenize(&input, 0),
            Err(TokenizeError::UnterminatedInterpolation { text: input.clone() })
        );
    }
}
