//! Markup-literal tree nodes.
//!
//! The tree is built once by a parser, read by the code generator and then
//! dropped; nothing here is mutated during emission.
//! Attribute dictionaries keep insertion order: the generator emits keys in
//! the order the template wrote them.

use crate::opaque::{OpaqueRef, ToCode};

// ══════════════════════════════════════════════════════════════════════════════
// Node
// ══════════════════════════════════════════════════════════════════════════════

/// A node of the markup-literal tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Absent content. `undefined` and `null` in a template both land here.
    Null,
    Str(String),
    Bool(bool),
    Number(f64),
    /// Ordered siblings. Order is significant.
    Sequence(Vec<Node>),
    Tag(Tag),
    Comment(Comment),
    CharRef(CharRef),
    Raw(Raw),
    /// Anything outside the core variants; renders itself through [`ToCode`].
    Opaque(OpaqueRef),
}

impl Node {
    /// Wrap a [`ToCode`] implementor as an opaque node.
    pub fn opaque(value: impl ToCode + 'static) -> Self {
        Node::Opaque(OpaqueRef::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// The string payload of a `Str` node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short variant name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Str(_) => "string",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::Sequence(_) => "sequence",
            Node::Tag(_) => "tag",
            Node::Comment(_) => "comment",
            Node::CharRef(_) => "charRef",
            Node::Raw(_) => "raw",
            Node::Opaque(_) => "opaque",
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Str(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Str(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(f64::from(n))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Tag(tag)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

impl From<CharRef> for Node {
    fn from(char_ref: CharRef) -> Self {
        Node::CharRef(char_ref)
    }
}

impl From<Raw> for Node {
    fn from(raw: Raw) -> Self {
        Node::Raw(raw)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Tags
// ══════════════════════════════════════════════════════════════════════════════

/// `<name attrs...>children</name>`
///
/// `name` is either a plain tag name (`div`, `my-widget`) or a dotted code
/// path (`Template.foo`) that is already a valid callee.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attrs: Option<Attributes>,
    pub children: Vec<Node>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: None,
            children: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Attributes
// ══════════════════════════════════════════════════════════════════════════════

/// The attributes of a tag: one block, or several blocks merged at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
    Single(AttrBlock),
    Many(Vec<AttrBlock>),
}

impl Attributes {
    /// The blocks in order. A single block is a one-element slice.
    pub fn blocks(&self) -> &[AttrBlock] {
        match self {
            Attributes::Single(block) => std::slice::from_ref(block),
            Attributes::Many(blocks) => blocks,
        }
    }
}

impl From<AttrDict> for Attributes {
    fn from(dict: AttrDict) -> Self {
        Attributes::Single(AttrBlock::Dict(dict))
    }
}

impl From<AttrBlock> for Attributes {
    fn from(block: AttrBlock) -> Self {
        Attributes::Single(block)
    }
}

impl From<Vec<AttrBlock>> for Attributes {
    fn from(blocks: Vec<AttrBlock>) -> Self {
        Attributes::Many(blocks)
    }
}

/// One attribute block: a plain dictionary, or an opaque value that renders
/// to an attributes expression (e.g. `{{attrs}}` in a start tag).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrBlock {
    Dict(AttrDict),
    Opaque(OpaqueRef),
}

impl AttrBlock {
    pub fn opaque(value: impl ToCode + 'static) -> Self {
        AttrBlock::Opaque(OpaqueRef::new(value))
    }
}

impl From<AttrDict> for AttrBlock {
    fn from(dict: AttrDict) -> Self {
        AttrBlock::Dict(dict)
    }
}

/// Attribute name → value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrDict {
    entries: Vec<(String, Node)>,
}

impl AttrDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AttrDict::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`. An existing entry keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Node>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for AttrDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = AttrDict::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Leaf wrappers
// ══════════════════════════════════════════════════════════════════════════════

/// `<!-- value -->`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
}

impl Comment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A character reference such as `&amp;`.
///
/// `decoded` is what the reference stands for; the generator emits it as a
/// string literal and never re-derives it from `html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRef {
    pub html: String,
    pub decoded: String,
}

impl CharRef {
    pub fn new(html: impl Into<String>, decoded: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            decoded: decoded.into(),
        }
    }
}

/// HTML inserted verbatim at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    pub value: String,
}

impl Raw {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
