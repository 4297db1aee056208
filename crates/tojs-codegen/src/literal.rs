//! JavaScript literal encoding and object-key classification.
//!
//! JSON text is almost a JavaScript literal. Two gaps remain:
//! - U+2028 and U+2029 are legal raw inside JSON strings but terminate lines
//!   in older JavaScript parsers.
//! - Surrogate halves (the UTF-16 form of every character outside the BMP)
//!   break pipelines that re-encode the generated source.
//!
//! [`to_js_literal`] closes both by rewriting those code points as `\uXXXX`.

use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

/// The `null` literal.
pub const NULL_LITERAL: &str = "null";

/// Every reserved word of the target language, including the future and
/// strict-mode reserved words of older editions.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "else", "instanceof", "super", "boolean", "enum", "int", "switch",
    "break", "export", "interface", "synchronized", "byte", "extends", "let", "this",
    "case", "false", "long", "throw", "catch", "final", "native", "throws",
    "char", "finally", "new", "transient", "class", "float", "null", "true",
    "const", "for", "package", "try", "continue", "function", "private", "typeof",
    "debugger", "goto", "protected", "var", "default", "if", "public", "void",
    "delete", "implements", "return", "volatile", "do", "import", "short", "while",
    "double", "in", "static", "with",
];

static RESERVED_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RESERVED_WORDS.iter().copied().collect());

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z$_][a-zA-Z$0-9_]*$").expect("identifier pattern is valid"));

/// Largest integer an IEEE double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ══════════════════════════════════════════════════════════════════════════════
// Literals
// ══════════════════════════════════════════════════════════════════════════════

/// Turn any JSON value into JavaScript literal source.
pub fn to_js_literal(value: &Value) -> String {
    escape_unsafe_code_points(value.to_string())
}

/// A double-quoted string literal.
pub fn str_literal(s: &str) -> String {
    to_js_literal(&Value::String(s.to_string()))
}

/// A number literal. Integral values print without a fraction; NaN and the
/// infinities print as `null`, as JSON encoders do.
pub fn number_literal(n: f64) -> String {
    if !n.is_finite() {
        return NULL_LITERAL.to_string();
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return format!("{}", n as i64);
    }
    Number::from_f64(n).map_or_else(|| NULL_LITERAL.to_string(), |num| num.to_string())
}

pub fn bool_literal(b: bool) -> String {
    to_js_literal(&Value::Bool(b))
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}') || u32::from(c) > 0xFFFF
}

fn escape_unsafe_code_points(json: String) -> String {
    if !json.chars().any(needs_escape) {
        return json;
    }

    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if needs_escape(c) {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ══════════════════════════════════════════════════════════════════════════════
// Object keys
// ══════════════════════════════════════════════════════════════════════════════

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORD_SET.contains(word)
}

/// An object-literal key: the bare name when it is a plain identifier and not
/// a reserved word, otherwise a string literal.
pub fn to_object_literal_key(key: &str) -> Cow<'_, str> {
    if IDENTIFIER.is_match(key) && !is_reserved_word(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(str_literal(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_json_escaped() {
        assert_eq!(str_literal("hi"), r#""hi""#);
        assert_eq!(str_literal("a\"b\\c\nd"), r#""a\"b\\c\nd""#);
        assert_eq!(str_literal("\u{0001}"), r#""\u0001""#);
    }

    #[test]
    fn line_separators_are_escaped() {
        assert_eq!(str_literal("a\u{2028}b\u{2029}c"), r#""a\u2028b\u2029c""#);
    }

    #[test]
    fn astral_characters_become_surrogate_escapes() {
        assert_eq!(str_literal("\u{1F600}"), r#""\ud83d\ude00""#);
        assert_eq!(str_literal("x\u{1D11E}y"), r#""x\ud834\udd1ey""#);
    }

    #[test]
    fn bmp_text_is_left_alone() {
        assert_eq!(str_literal("héllo – 日本"), "\"héllo – 日本\"");
    }

    #[test]
    fn nested_values_are_escaped_everywhere() {
        let value = json!({"k\u{2028}": ["\u{1F600}", 1, null, true]});
        assert_eq!(
            to_js_literal(&value),
            r#"{"k\u2028":["\ud83d\ude00",1,null,true]}"#
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(number_literal(3.0), "3");
        assert_eq!(number_literal(-0.0), "0");
        assert_eq!(number_literal(1.5), "1.5");
        assert_eq!(number_literal(f64::NAN), "null");
        assert_eq!(number_literal(f64::INFINITY), "null");
        assert_eq!(number_literal(-42.0), "-42");
    }

    #[test]
    fn booleans() {
        assert_eq!(bool_literal(true), "true");
        assert_eq!(bool_literal(false), "false");
    }

    #[test]
    fn plain_identifiers_stay_bare() {
        for key in ["id", "$el", "_private", "a1", "dataX", "className"] {
            assert_eq!(to_object_literal_key(key), key);
        }
    }

    #[test]
    fn reserved_words_are_quoted() {
        assert_eq!(to_object_literal_key("class"), r#""class""#);
        assert_eq!(to_object_literal_key("new"), r#""new""#);
        assert_eq!(to_object_literal_key("if"), r#""if""#);
        assert_eq!(to_object_literal_key("for"), r#""for""#);
    }

    #[test]
    fn non_identifiers_are_quoted() {
        assert_eq!(to_object_literal_key("data-x"), r#""data-x""#);
        assert_eq!(to_object_literal_key(""), r#""""#);
        assert_eq!(to_object_literal_key("1a"), r#""1a""#);
        assert_eq!(to_object_literal_key("a b"), r#""a b""#);
        assert_eq!(to_object_literal_key("é"), r#""é""#);
    }

    #[test]
    fn reserved_table_has_no_duplicates() {
        assert_eq!(RESERVED_WORD_SET.len(), RESERVED_WORDS.len());
    }
}
