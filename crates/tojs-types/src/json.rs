//! JSON form of the markup tree.
//!
//! Parsers outside this workspace hand trees over as JSON. Plain JSON values
//! map onto the primitive and sequence variants; every other node is an
//! object tagged with a `"$node"` kind:
//!
//! ```json
//! {"$node": "tag", "name": "div", "attrs": {"id": "x"}, "children": ["hi"]}
//! {"$node": "comment", "value": " note "}
//! {"$node": "charRef", "html": "&amp;", "str": "&"}
//! {"$node": "raw", "value": "<br>"}
//! {"$node": "code", "value": "view.templateInstance()"}
//! {"$node": "lookup", "path": ["user", "name"], "args": []}
//! {"$node": "producer", "value": "function () { return view.lookup(\"a\"); }"}
//! ```
//!
//! `attrs` is an object (one dictionary block), a `code`/`lookup` node (one
//! opaque block) or an array of those.

use serde_json::{Map, Value};

use crate::error::{TreeError, TreeResult};
use crate::node::{AttrBlock, AttrDict, Attributes, CharRef, Comment, Node, Raw, Tag};
use crate::opaque::{EmitCode, Interpolation, Producer};

/// Key that marks a JSON object as a tree node.
pub const NODE_KIND_KEY: &str = "$node";

impl Node {
    /// Convert the JSON form of a tree into a [`Node`].
    ///
    /// Fails with [`TreeError::Construction`] when a leaf wrapper gets a
    /// non-string payload, and with [`TreeError::UnsupportedNode`] for objects
    /// that are not a known node kind.
    pub fn from_json(value: &Value) -> TreeResult<Node> {
        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(b) => Ok(Node::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(Node::Number)
                .ok_or_else(|| TreeError::UnsupportedNode(n.to_string())),
            Value::String(s) => Ok(Node::Str(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Node::from_json)
                .collect::<TreeResult<Vec<_>>>()
                .map(Node::Sequence),
            Value::Object(map) => node_from_object(map, value),
        }
    }
}

fn node_from_object(map: &Map<String, Value>, value: &Value) -> TreeResult<Node> {
    let Some(kind) = map.get(NODE_KIND_KEY).and_then(Value::as_str) else {
        return Err(TreeError::UnsupportedNode(value.to_string()));
    };

    match kind {
        "tag" => tag_from_object(map).map(Node::Tag),
        "comment" => Ok(Node::Comment(Comment::new(string_field(map, "comment", "value")?))),
        "raw" => Ok(Node::Raw(Raw::new(string_field(map, "raw", "value")?))),
        "charRef" => Ok(Node::CharRef(CharRef::new(
            string_field(map, "charRef", "html")?,
            string_field(map, "charRef", "str")?,
        ))),
        "code" => Ok(Node::opaque(EmitCode::new(string_field(map, "code", "value")?))),
        "lookup" => interpolation_from_object(map).map(Node::opaque),
        "producer" => Ok(Node::opaque(Producer::new(string_field(map, "producer", "value")?))),
        _ => Err(TreeError::UnsupportedNode(value.to_string())),
    }
}

fn string_field(map: &Map<String, Value>, kind: &'static str, field: &str) -> TreeResult<String> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(TreeError::construction(kind, other.to_string())),
        None => Err(TreeError::construction(kind, "nothing")),
    }
}

fn tag_from_object(map: &Map<String, Value>) -> TreeResult<Tag> {
    let mut tag = Tag::new(string_field(map, "tag", "name")?);

    tag.attrs = match map.get("attrs") {
        None | Some(Value::Null) => None,
        Some(Value::Array(blocks)) => Some(Attributes::Many(
            blocks
                .iter()
                .map(attr_block_from_json)
                .collect::<TreeResult<Vec<_>>>()?,
        )),
        Some(block) => Some(Attributes::Single(attr_block_from_json(block)?)),
    };

    tag.children = match map.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(children)) => children
            .iter()
            .map(Node::from_json)
            .collect::<TreeResult<Vec<_>>>()?,
        Some(other) => return Err(TreeError::UnsupportedNode(other.to_string())),
    };

    Ok(tag)
}

fn attr_block_from_json(value: &Value) -> TreeResult<AttrBlock> {
    match value {
        Value::Object(map) if map.contains_key(NODE_KIND_KEY) => match Node::from_json(value)? {
            Node::Opaque(opaque) => Ok(AttrBlock::Opaque(opaque)),
            _ => Err(TreeError::UnsupportedNode(value.to_string())),
        },
        Value::Object(map) => map
            .iter()
            .map(|(name, v)| Ok((name.clone(), Node::from_json(v)?)))
            .collect::<TreeResult<AttrDict>>()
            .map(AttrBlock::Dict),
        other => Err(TreeError::UnsupportedNode(other.to_string())),
    }
}

fn interpolation_from_object(map: &Map<String, Value>) -> TreeResult<Interpolation> {
    let segments = match map.get("path") {
        Some(Value::Array(segments)) => segments
            .iter()
            .map(|s| match s {
                Value::String(s) => Ok(s.clone()),
                other => Err(TreeError::construction("lookup", other.to_string())),
            })
            .collect::<TreeResult<Vec<_>>>()?,
        Some(Value::String(name)) => vec![name.clone()],
        Some(other) => return Err(TreeError::construction("lookup", other.to_string())),
        None => return Err(TreeError::construction("lookup", "nothing")),
    };

    let mut interp = Interpolation::path(segments)?;
    if let Some(args) = map.get("args") {
        let Value::Array(args) = args else {
            return Err(TreeError::UnsupportedNode(args.to_string()));
        };
        for arg in args {
            interp = interp.with_arg(Node::from_json(arg)?);
        }
    }
    Ok(interp)
}
