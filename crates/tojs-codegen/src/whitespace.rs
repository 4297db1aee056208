//! Whitespace elision for sibling lists.
//!
//! Indentation between tags turns into text nodes that nobody wants at
//! runtime (element-factory runtimes wrap each one in its own span). A
//! whitespace-only string is dropped unless it sits next to a simple
//! interpolation, where it separates words: `{{first}} {{last}}`.

use once_cell::sync::Lazy;
use regex::Regex;
use tojs_types::Node;

/// Whitespace as JavaScript's `\s` defines it, plus BOM and NBSP.
static BLANK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*$")
        .expect("blank pattern is valid")
});

/// `true` if `node` is a string with nothing left after trimming whitespace.
pub fn is_blank(node: &Node) -> bool {
    node.as_str().is_some_and(|s| BLANK.is_match(s))
}

/// `true` if `node` is a bare value lookup (`{{name}}`, `{{a.b}}`).
pub fn is_simple_interpolation(node: &Node) -> bool {
    match node {
        Node::Opaque(opaque) => opaque.is_simple_interpolation(),
        _ => false,
    }
}

/// Whether `siblings[i]` may be left out of the output.
///
/// Positions before the first and after the last sibling count as "not an
/// interpolation", so leading and trailing whitespace is always removable.
pub fn is_removable_whitespace(siblings: &[Node], i: usize) -> bool {
    let Some(node) = siblings.get(i) else {
        return false;
    };
    let before = i.checked_sub(1).and_then(|j| siblings.get(j));
    let after = siblings.get(i + 1);

    is_blank(node)
        && !before.is_some_and(is_simple_interpolation)
        && !after.is_some_and(is_simple_interpolation)
}

/// The siblings that survive elision, in order.
pub fn retained(siblings: &[Node]) -> impl Iterator<Item = &Node> {
    siblings
        .iter()
        .enumerate()
        .filter(move |(i, _)| !is_removable_whitespace(siblings, *i))
        .map(|(_, node)| node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tojs_types::{EmitCode, Interpolation, Tag};

    fn interp(name: &str) -> Node {
        Node::opaque(Interpolation::lookup(name))
    }

    #[test]
    fn blank_strings() {
        assert!(is_blank(&Node::from("")));
        assert!(is_blank(&Node::from("  \n\t ")));
        assert!(is_blank(&Node::from("\u{FEFF}\u{A0}\u{3000}")));
        assert!(!is_blank(&Node::from(" x ")));
        assert!(!is_blank(&Node::Null));
        assert!(!is_blank(&Node::from(Tag::new("b"))));
    }

    #[test]
    fn next_line_is_not_javascript_whitespace() {
        assert!(!is_blank(&Node::from("\u{85}")));
    }

    #[test]
    fn whitespace_between_tags_is_dropped() {
        let siblings = vec![Node::from("  "), Tag::new("b").into(), Node::from("  ")];
        let kept: Vec<_> = retained(&siblings).collect();
        assert_eq!(kept, vec![&siblings[1]]);
    }

    #[test]
    fn whitespace_next_to_interpolation_is_kept() {
        let siblings = vec![Node::from("  "), interp("name"), Node::from("  ")];
        assert_eq!(retained(&siblings).count(), 3);
    }

    #[test]
    fn only_neighbors_count() {
        let siblings = vec![interp("a"), Node::from(" "), Tag::new("i").into(), Node::from(" ")];
        assert!(!is_removable_whitespace(&siblings, 1));
        assert!(is_removable_whitespace(&siblings, 3));
    }

    #[test]
    fn helper_calls_and_code_do_not_protect_whitespace() {
        let helper = Node::opaque(Interpolation::lookup("fmt").with_arg("x"));
        let code = Node::opaque(EmitCode::new("Spacebars.mustache(view.lookup(\"x\"))"));
        let siblings = vec![helper, Node::from(" "), code];
        assert!(is_removable_whitespace(&siblings, 1));
    }

    #[test]
    fn out_of_range_is_not_removable() {
        assert!(!is_removable_whitespace(&[], 0));
        assert!(!is_removable_whitespace(&[Node::from(" ")], 1));
    }
}
