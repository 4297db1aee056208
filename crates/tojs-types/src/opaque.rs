//! Opaque nodes: values outside the core variants that render themselves.
//!
//! An opaque node never gets inspected by the generator. It implements
//! [`ToCode`] and receives the active generator as a [`Emit`] so anything it
//! nests is emitted in the same output mode.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{TreeError, TreeResult};
use crate::mode::Mode;
use crate::node::Node;

/// The generator as seen from inside an opaque node.
pub trait Emit {
    /// Output mode of the current emission.
    fn mode(&self) -> Mode;

    /// Emit a nested node.
    fn emit(&self, node: &Node) -> TreeResult<String>;
}

/// Capability hook for opaque nodes.
pub trait ToCode: fmt::Debug + Send + Sync {
    /// Render this value as a JavaScript expression.
    fn to_code(&self, emitter: &dyn Emit) -> TreeResult<String>;

    /// `true` for a bare value lookup rendered as text (`{{name}}`,
    /// `{{user.name}}`), as opposed to a block or a helper call with
    /// arguments. Whitespace next to such a node is never elided.
    fn is_simple_interpolation(&self) -> bool {
        false
    }

    /// `true` when the rendered code is a function that yields the value when
    /// called, rather than the value itself. Element-factory props call such a
    /// function once and join list results into a string.
    fn is_producer(&self) -> bool {
        false
    }
}

/// Shared handle to an opaque node. Equality is identity.
#[derive(Clone)]
pub struct OpaqueRef(Arc<dyn ToCode>);

impl OpaqueRef {
    pub fn new(value: impl ToCode + 'static) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn ToCode>> for OpaqueRef {
    fn from(value: Arc<dyn ToCode>) -> Self {
        Self(value)
    }
}

impl Deref for OpaqueRef {
    type Target = dyn ToCode;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for OpaqueRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OpaqueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.0).finish()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Built-in opaque nodes
// ══════════════════════════════════════════════════════════════════════════════

/// A JavaScript fragment emitted exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitCode {
    value: String,
}

impl EmitCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToCode for EmitCode {
    fn to_code(&self, _emitter: &dyn Emit) -> TreeResult<String> {
        Ok(self.value.clone())
    }
}

/// Function source that yields an attribute value when called, e.g.
/// `function () { return [view.lookup("a"), " b"]; }` for `class="{{a}} b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    source: String,
}

impl Producer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ToCode for Producer {
    fn to_code(&self, _emitter: &dyn Emit) -> TreeResult<String> {
        Ok(self.source.clone())
    }

    fn is_producer(&self) -> bool {
        true
    }
}

/// A `{{path arg...}}` interpolation.
///
/// Renders as `Spacebars.mustache(view.lookup("a"), args...)`; a dotted path
/// goes through `Spacebars.dot(view.lookup("a"), "b", ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    path: Vec<String>,
    args: Vec<Node>,
}

impl Interpolation {
    /// `{{name}}`
    pub fn lookup(name: impl Into<String>) -> Self {
        Self {
            path: vec![name.into()],
            args: Vec::new(),
        }
    }

    /// `{{a.b.c}}`. Fails on an empty path.
    pub fn path<I, S>(segments: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = segments.into_iter().map(Into::into).collect();
        if path.is_empty() {
            return Err(TreeError::construction("lookup", "[]"));
        }
        Ok(Self {
            path,
            args: Vec::new(),
        })
    }

    pub fn with_arg(mut self, arg: impl Into<Node>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }
}

impl ToCode for Interpolation {
    fn to_code(&self, emitter: &dyn Emit) -> TreeResult<String> {
        let (head, rest) = self
            .path
            .split_first()
            .ok_or_else(|| TreeError::UnsupportedNode(format!("{self:?}")))?;

        let mut lookup = format!("view.lookup({})", emitter.emit(&Node::from(head.as_str()))?);
        if !rest.is_empty() {
            let mut parts = vec![lookup];
            for segment in rest {
                parts.push(emitter.emit(&Node::from(segment.as_str()))?);
            }
            lookup = format!("Spacebars.dot({})", parts.join(", "));
        }

        let mut parts = vec![lookup];
        for arg in &self.args {
            parts.push(emitter.emit(arg)?);
        }
        Ok(format!("Spacebars.mustache({})", parts.join(", ")))
    }

    fn is_simple_interpolation(&self) -> bool {
        self.args.is_empty()
    }
}
