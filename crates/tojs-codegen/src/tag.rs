//! Tag rendering strategies.
//!
//! The two output shapes only disagree on tags. Each shape is a
//! [`TagRenderer`]; the generator picks one when emission starts and every
//! other node variant goes through the shared visitor.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tojs_types::{AttrBlock, AttrDict, Attributes, Mode, Node, Tag, TreeResult};

use crate::literal::{str_literal, NULL_LITERAL};
use crate::visitor::{call, Generator};

/// Runtime namespace holding the tag constructors.
pub const HTML_NAMESPACE: &str = "HTML";
/// Looks a tag constructor up by name at runtime.
pub const GET_TAG: &str = "HTML.getTag";
/// Merges several attribute blocks at runtime.
pub const MERGE_ATTRS: &str = "HTML.Attrs";
/// The three-argument element factory.
pub const ELEMENT_FACTORY: &str = "React.createElement";
/// Merges several attribute objects in element-factory output.
pub const OBJECT_ASSIGN: &str = "Object.assign";

/// Wraps a producer expression: calls it and joins list results into a string.
const PRODUCER_PREFIX: &str =
    "(function (propFunc) {var props = propFunc();return _.isArray(props) ? props.join(\"\") : props})(";

/// Elements the runtime defines constructors for up front (`HTML.DIV`, ...).
pub const KNOWN_ELEMENT_NAMES: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio",
    "b", "base", "basefont", "bdi", "bdo", "big", "blockquote", "body", "br", "button",
    "canvas", "caption", "center", "cite", "code", "col", "colgroup", "command",
    "data", "datagrid", "datalist", "dd", "del", "details", "dfn", "dir", "div", "dl",
    "dt", "em", "embed", "eventsource", "fieldset", "figcaption", "figure", "font",
    "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head",
    "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "isindex",
    "kbd", "keygen", "label", "legend", "li", "link", "main", "map", "mark", "menu",
    "meta", "meter", "nav", "noframes", "noscript", "object", "ol", "optgroup",
    "option", "output", "p", "param", "pre", "progress", "q", "rp", "rt", "ruby", "s",
    "samp", "script", "section", "select", "small", "source", "span", "strike",
    "strong", "style", "sub", "summary", "sup", "table", "tbody", "td", "textarea",
    "tfoot", "th", "thead", "time", "title", "tr", "track", "tt", "u", "ul", "var",
    "video", "wbr",
];

static KNOWN_ELEMENTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KNOWN_ELEMENT_NAMES.iter().copied().collect());

pub fn is_known_element(name: &str) -> bool {
    KNOWN_ELEMENTS.contains(name)
}

/// `"foo-bar"` → `"FOO_BAR"`
pub fn symbol_name(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

/// Callee for a tag in generic output.
///
/// A dotted name is already a code path; a known element uses its symbol in
/// the runtime namespace; anything else is looked up at runtime.
pub fn tag_callee(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else if is_known_element(name) {
        format!("{HTML_NAMESPACE}.{}", symbol_name(name))
    } else {
        call(GET_TAG, &[str_literal(name)])
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Strategy
// ══════════════════════════════════════════════════════════════════════════════

/// Renders a [`Tag`] in one output shape.
pub trait TagRenderer: Send + Sync {
    fn mode(&self) -> Mode;

    /// Render `tag`, emitting nested nodes through `gen`.
    fn render_tag(&self, gen: &Generator<'_>, tag: &Tag) -> TreeResult<String>;
}

/// `HTML.DIV({id: "x"}, "hi")`
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericTags;

/// `React.createElement("div", {"id":"x"}, "hi")`
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementFactoryTags;

impl TagRenderer for GenericTags {
    fn mode(&self) -> Mode {
        Mode::Generic
    }

    fn render_tag(&self, gen: &Generator<'_>, tag: &Tag) -> TreeResult<String> {
        tracing::trace!(tag = %tag.name, "rendering tag call");

        let mut args = Vec::new();
        if let Some(attrs) = &tag.attrs {
            args.extend(self.render_attrs(gen, attrs)?);
        }
        args.extend(gen.visit_children(&tag.children)?);
        Ok(call(&tag_callee(&tag.name), &args))
    }
}

impl GenericTags {
    /// One dictionary is passed as is. Anything else (several blocks, or an
    /// opaque block whose shape is only known at runtime) goes through
    /// `HTML.Attrs`. `None` when every block came out empty.
    pub fn render_attrs(&self, gen: &Generator<'_>, attrs: &Attributes) -> TreeResult<Option<String>> {
        let mut parts = Vec::new();
        let mut needs_merge = false;

        for block in attrs.blocks() {
            match block {
                AttrBlock::Opaque(opaque) => {
                    parts.push(opaque.to_code(gen)?);
                    needs_merge = true;
                }
                AttrBlock::Dict(dict) => parts.extend(gen.attrs_dictionary(dict)?),
            }
        }

        Ok(match parts.len() {
            0 => None,
            1 if !needs_merge => parts.pop(),
            _ => Some(call(MERGE_ATTRS, &parts)),
        })
    }
}

impl TagRenderer for ElementFactoryTags {
    fn mode(&self) -> Mode {
        Mode::ElementFactory
    }

    fn render_tag(&self, gen: &Generator<'_>, tag: &Tag) -> TreeResult<String> {
        tracing::trace!(tag = %tag.name, "rendering element factory call");

        let attrs = match &tag.attrs {
            Some(attrs) => self.render_attrs(gen, attrs)?,
            None => None,
        };

        let mut args = vec![
            str_literal(&tag.name),
            attrs.unwrap_or_else(|| NULL_LITERAL.to_string()),
        ];
        args.extend(gen.visit_children(&tag.children)?);
        Ok(call(ELEMENT_FACTORY, &args))
    }
}

impl ElementFactoryTags {
    /// The props object, or `None` when there is nothing to pass.
    pub fn render_attrs(&self, gen: &Generator<'_>, attrs: &Attributes) -> TreeResult<Option<String>> {
        let mut parts = Vec::new();
        for block in attrs.blocks() {
            match block {
                AttrBlock::Opaque(opaque) => parts.push(opaque.to_code(gen)?),
                AttrBlock::Dict(dict) => parts.extend(self.props_object(gen, dict)?),
            }
        }

        Ok(match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => {
                parts.insert(0, "{}".to_string());
                Some(call(OBJECT_ASSIGN, &parts))
            }
        })
    }

    /// `{"className":"a","title":...}`; `class` is renamed, null values skipped.
    /// Producers are called through the wrapper; every other value, opaque or
    /// not, is emitted as is.
    pub fn props_object(&self, gen: &Generator<'_>, dict: &AttrDict) -> TreeResult<Option<String>> {
        let mut entries = Vec::new();
        for (name, value) in dict.iter() {
            let value = match value {
                Node::Null => continue,
                Node::Str(s) => str_literal(s),
                Node::Opaque(opaque) if opaque.is_producer() => {
                    format!("{PRODUCER_PREFIX}{})", opaque.to_code(gen)?)
                }
                other => gen.visit(other)?,
            };
            let name = if name == "class" { "className" } else { name };
            entries.push(format!("{}:{}", str_literal(name), value));
        }

        if entries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(format!("{{{}}}", entries.join(","))))
        }
    }
}
