//! tojs code generator: turns a markup-literal tree into JavaScript source.
//!
//! # Architecture
//!
//! [`emit`] walks a [`tojs_types::Node`] tree and returns one JavaScript
//! expression that rebuilds the tree at runtime. It is pure: the input is
//! only read, and the same tree and mode always give the same text.
//!
//! ## Output modes
//! - [`Mode::Generic`]: `HTML.DIV({id: "x"}, "hi")`, with unknown tags
//!   resolved through `HTML.getTag(name)` and attribute blocks merged
//!   through `HTML.Attrs(...)`
//! - [`Mode::ElementFactory`]: `React.createElement("div", {"id":"x"}, "hi")`
//!
//! ## Pieces
//! - [`literal`]: JSON-based literal encoding, object-key classification
//! - [`whitespace`]: which whitespace-only siblings can be dropped
//! - [`visitor`]: the generator and the dispatch over node variants
//! - [`tag`]: the per-mode tag renderers
//!
//! ## Runtime contract
//! The output calls `HTML.Comment`, `HTML.Raw`, `HTML.<TAG>`, `HTML.getTag`,
//! `HTML.Attrs`, `Spacebars.mustache`, `Spacebars.dot`, `view.lookup` and,
//! in element-factory mode, `React.createElement` and `_.isArray`.

pub mod error;
pub mod literal;
pub mod tag;
pub mod visitor;
pub mod whitespace;

pub use error::{CodegenError, CodegenResult};
pub use literal::{to_js_literal, to_object_literal_key};
pub use tag::{ElementFactoryTags, GenericTags, TagRenderer};
pub use tojs_types::Mode;
pub use visitor::{emit, emit_json, Generator};
