//! Preference schema knowledge base.
//!
//! Pipeline: preference descriptors → schema registry → per-request cursor context.
//! All spans are UTF-8 byte offsets into the document, using `[start, end)`.
//! Candidate resolution, ranking and insertion happen in `hints`.

mod context;
pub mod keys;
pub mod schema;
mod span;
mod text_edit;

#[cfg(test)]
mod tests;

pub use context::{Context, Token, TokenType};
pub use schema::{PreferenceDescriptor, SchemaEntry, SchemaError, SchemaRegistry, ValueType};
pub use span::Span;
pub use text_edit::TextEdit;
