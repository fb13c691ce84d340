//! Domain layer for editor-compat
//!
//! This crate contains the core value objects of the text-editor tool
//! compatibility registry. It has no dependencies on infrastructure
//! concerns: no wire strings, no tables, no I/O.
//!
//! # Core Concepts
//!
//! ## Revision
//!
//! The provider versions its text-editor tool with dated schema
//! revisions. A revision fixes the wire identifiers and the command
//! verbs the tool accepts; [`EditorRevision`] is the closed set of
//! revisions this registry knows about.
//!
//! ## Compatibility
//!
//! Each Claude model snapshot accepts exactly one revision. [`Model`]
//! carries the snapshot identifiers; the mapping itself lives in the
//! infrastructure layer next to the wire tables it points into.

pub mod core;
pub mod tool;

// Re-export commonly used types
pub use crate::core::{error::RegistryError, model::Model};
pub use crate::tool::{command::EditCommand, revision::EditorRevision};
