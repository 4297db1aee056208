//! The tree-walking generator.
//!
//! [`Generator::visit`] turns one node into one JavaScript expression. Tags
//! are handed to the [`TagRenderer`] chosen for the output mode; opaque nodes
//! render themselves and get the generator back so their nested nodes use
//! the same mode.

use serde_json::Value;
use tojs_types::{AttrDict, Emit, Mode, Node, TreeResult};

use crate::error::CodegenResult;
use crate::literal::{bool_literal, number_literal, str_literal, to_object_literal_key, NULL_LITERAL};
use crate::tag::{ElementFactoryTags, GenericTags, TagRenderer};
use crate::whitespace;

/// Runtime constructor for comments.
pub const COMMENT_CONSTRUCTOR: &str = "HTML.Comment";
/// Runtime constructor for raw HTML.
pub const RAW_CONSTRUCTOR: &str = "HTML.Raw";

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Emit JavaScript that rebuilds `node` at runtime.
///
/// Either the whole tree is emitted or an error comes back; there is no
/// partial output.
pub fn emit(node: &Node, mode: Mode) -> CodegenResult<String> {
    tracing::debug!(%mode, root = node.kind(), "emitting markup tree");
    Ok(Generator::new(mode).visit(node)?)
}

/// [`emit`] for a tree in its JSON form (see [`Node::from_json`]).
pub fn emit_json(value: &Value, mode: Mode) -> CodegenResult<String> {
    let node = Node::from_json(value)?;
    emit(&node, mode)
}

// ══════════════════════════════════════════════════════════════════════════════
// Generator
// ══════════════════════════════════════════════════════════════════════════════

/// Per-call generator state: just the tag renderer for the output mode.
#[derive(Clone, Copy)]
pub struct Generator<'r> {
    renderer: &'r dyn TagRenderer,
}

impl Generator<'static> {
    pub fn new(mode: Mode) -> Self {
        let renderer: &'static dyn TagRenderer = match mode {
            Mode::Generic => &GenericTags,
            Mode::ElementFactory => &ElementFactoryTags,
        };
        Self { renderer }
    }
}

impl<'r> Generator<'r> {
    /// A generator with a caller-supplied tag renderer.
    pub fn with_renderer(renderer: &'r dyn TagRenderer) -> Self {
        Self { renderer }
    }

    pub fn mode(&self) -> Mode {
        self.renderer.mode()
    }

    /// Emit one node.
    pub fn visit(&self, node: &Node) -> TreeResult<String> {
        match node {
            Node::Null => Ok(NULL_LITERAL.to_string()),
            Node::Str(s) => Ok(str_literal(s)),
            Node::Bool(b) => Ok(bool_literal(*b)),
            Node::Number(n) => Ok(number_literal(*n)),
            Node::Sequence(items) => self.visit_sequence(items),
            Node::Tag(tag) => self.renderer.render_tag(self, tag),
            Node::Comment(comment) => Ok(call(COMMENT_CONSTRUCTOR, &[str_literal(&comment.value)])),
            Node::CharRef(char_ref) => Ok(str_literal(&char_ref.decoded)),
            Node::Raw(raw) => Ok(call(RAW_CONSTRUCTOR, &[str_literal(&raw.value)])),
            Node::Opaque(opaque) => opaque.to_code(self),
        }
    }

    /// `[a, b, ...]` over the siblings that survive whitespace elision.
    pub fn visit_sequence(&self, items: &[Node]) -> TreeResult<String> {
        Ok(format!("[{}]", self.visit_children(items)?.join(", ")))
    }

    /// Emit each sibling that survives whitespace elision, in order.
    pub fn visit_children(&self, siblings: &[Node]) -> TreeResult<Vec<String>> {
        whitespace::retained(siblings)
            .map(|node| self.visit(node))
            .collect()
    }

    /// `{id: "x", "data-x": ...}`, skipping null values.
    ///
    /// Returns `None` when no entry is left, so callers can drop the argument
    /// instead of passing `{}`.
    pub fn attrs_dictionary(&self, dict: &AttrDict) -> TreeResult<Option<String>> {
        let mut entries = Vec::new();
        for (name, value) in dict.iter() {
            if value.is_null() {
                continue;
            }
            entries.push(format!("{}: {}", to_object_literal_key(name), self.visit(value)?));
        }

        if entries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(format!("{{{}}}", entries.join(", "))))
        }
    }
}

impl Emit for Generator<'_> {
    fn mode(&self) -> Mode {
        self.renderer.mode()
    }

    fn emit(&self, node: &Node) -> TreeResult<String> {
        self.visit(node)
    }
}

/// `callee(arg, arg, ...)`
pub(crate) fn call(callee: &str, args: &[String]) -> String {
    format!("{callee}({})", args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tojs_types::{CharRef, Comment, Raw, Tag};

    fn generic(node: impl Into<Node>) -> String {
        Generator::new(Mode::Generic).visit(&node.into()).unwrap()
    }

    #[test]
    fn leaves() {
        assert_eq!(generic(Node::Null), "null");
        assert_eq!(generic("a\"b"), r#""a\"b""#);
        assert_eq!(generic(true), "true");
        assert_eq!(generic(7), "7");
        assert_eq!(generic(0.25), "0.25");
    }

    #[test]
    fn comments_raw_and_char_refs() {
        assert_eq!(generic(Comment::new(" note ")), r#"HTML.Comment(" note ")"#);
        assert_eq!(generic(Comment::new("  ")), r#"HTML.Comment("  ")"#);
        assert_eq!(generic(Raw::new("<br>")), r#"HTML.Raw("<br>")"#);
        assert_eq!(generic(CharRef::new("&amp;", "&")), r#""&""#);
    }

    #[test]
    fn sequences() {
        assert_eq!(generic(Vec::<Node>::new()), "[]");
        assert_eq!(
            generic(vec![Node::from(1), Node::from("a"), Node::Null]),
            r#"[1, "a", null]"#
        );
        assert_eq!(
            generic(vec![Node::from(" "), Tag::new("br").into(), Node::from("\n")]),
            "[HTML.BR()]"
        );
    }

    #[test]
    fn dictionary_skips_nulls_and_quotes_keys() {
        let gen = Generator::new(Mode::Generic);
        let dict = AttrDict::new()
            .with("id", "x")
            .with("hidden", Node::Null)
            .with("data-x", 1)
            .with("class", "c");
        assert_eq!(
            gen.attrs_dictionary(&dict).unwrap().as_deref(),
            Some(r#"{id: "x", "data-x": 1, "class": "c"}"#)
        );
    }

    #[test]
    fn empty_dictionary_is_absent() {
        let gen = Generator::new(Mode::Generic);
        assert_eq!(gen.attrs_dictionary(&AttrDict::new()).unwrap(), None);
        let only_null = AttrDict::new().with("x", Node::Null);
        assert_eq!(gen.attrs_dictionary(&only_null).unwrap(), None);
    }

    #[test]
    fn generator_reports_mode() {
        assert_eq!(Generator::new(Mode::Generic).mode(), Mode::Generic);
        assert_eq!(Generator::new(Mode::ElementFactory).mode(), Mode::ElementFactory);
        assert_eq!(Generator::with_renderer(&ElementFactoryTags).mode(), Mode::ElementFactory);
    }
}
