//! Property tests for literal encoding, key classification and whitespace
//! elision.

use proptest::prelude::*;
use tojs_codegen::literal::{number_literal, str_literal, to_object_literal_key, RESERVED_WORDS};
use tojs_codegen::whitespace::retained;
use tojs_codegen::{emit, Mode};
use tojs_types::{Node, Tag};

fn is_unsafe(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}') || u32::from(c) > 0xFFFF
}

proptest! {
    #[test]
    fn string_literals_decode_to_the_input(s in any::<String>()) {
        let lit = str_literal(&s);
        let decoded: String = serde_json::from_str(&lit).unwrap();
        prop_assert_eq!(decoded, s);
    }

    #[test]
    fn string_literals_hold_no_unsafe_code_points(s in "[a\u{2028}\u{2029}\u{1F600}\u{10000}-\u{10FFFF} \"\\\\]*") {
        let lit = str_literal(&s);
        prop_assert!(!lit.chars().any(is_unsafe), "unescaped code point in {}", lit);
    }

    #[test]
    fn finite_numbers_decode_to_the_input(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let lit = number_literal(n);
        let decoded: f64 = lit.parse().unwrap();
        prop_assert_eq!(decoded, n);
    }

    #[test]
    fn identifier_keys_stay_bare(key in "[a-zA-Z$_][a-zA-Z$0-9_]{0,12}") {
        prop_assume!(!RESERVED_WORDS.contains(&key.as_str()));
        let rendered = to_object_literal_key(&key);
        prop_assert_eq!(rendered.as_ref(), key.as_str());
    }

    #[test]
    fn non_identifier_keys_are_string_literals(key in "[0-9-][a-z0-9-]{0,8}") {
        let encoded = to_object_literal_key(&key).into_owned();
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, key);
    }

    #[test]
    fn elision_only_removes_blank_strings(texts in prop::collection::vec("[ a\t\n]{0,3}", 0..8)) {
        let siblings: Vec<Node> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| if i % 3 == 2 { Tag::new("b").into() } else { Node::from(t.as_str()) })
            .collect();
        let kept: Vec<&Node> = retained(&siblings).collect();
        for node in &siblings {
            let blank = node.as_str().is_some_and(|s| s.trim().is_empty());
            prop_assert_eq!(kept.contains(&node), !blank);
        }
    }

    #[test]
    fn text_children_round_trip_through_generic_output(text in "[a-z]{1,10}") {
        let out = emit(&Tag::new("p").with_child(text.as_str()).into(), Mode::Generic).unwrap();
        prop_assert_eq!(out, format!("HTML.P({})", str_literal(&text)));
    }
}

#[test]
fn every_reserved_word_is_quoted() {
    for word in RESERVED_WORDS {
        assert_eq!(to_object_literal_key(word), str_literal(word));
    }
}
