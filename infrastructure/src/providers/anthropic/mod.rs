//! Anthropic Messages API text-editor tooling
//!
//! Wire-level knowledge for the built-in text-editor tool family:
//! which revisions exist, how each one is spelled in a request body,
//! and which Claude models accept which revision.

mod editor_map;
mod registry;
mod types;

pub use editor_map::{descriptor_for, revision_for_model};
pub use registry::EditorToolRegistry;
pub use types::{ToolDescriptor, WireParams};
