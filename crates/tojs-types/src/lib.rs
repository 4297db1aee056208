//! Shared types for the tojs code generator.
//!
//! This crate defines the markup-literal tree (tags, attributes, text,
//! comments, character references, raw fragments), the [`ToCode`] hook that
//! opaque nodes implement, the output [`Mode`] and the error types used by
//! tree construction and emission.

mod error;
mod json;
mod mode;
pub mod node;
pub mod opaque;

pub use error::{TreeError, TreeResult};
pub use json::NODE_KIND_KEY;
pub use mode::{Mode, UnknownMode};
pub use node::{AttrBlock, AttrDict, Attributes, CharRef, Comment, Node, Raw, Tag};
pub use opaque::{Emit, EmitCode, Interpolation, OpaqueRef, Producer, ToCode};
