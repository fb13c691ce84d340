//! Infrastructure layer for editor-compat
//!
//! This crate holds the provider-facing side of the registry: wire
//! descriptors, revision tables, and the read-only lookup facade.
//! Domain value objects come from `editor-compat-domain`.

pub mod providers;

// Re-export commonly used types
pub use providers::anthropic::{
    EditorToolRegistry, ToolDescriptor, WireParams, descriptor_for, revision_for_model,
};
