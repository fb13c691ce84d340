//! Text-editor tool vocabulary
//!
//! This module defines the provider-neutral pieces of the **Tool Version
//! System** — the dated revision tags the registry is keyed by and the
//! command verbs a revision may accept.
//!
//! # Overview
//!
//! A model declares exactly one text-editor tool, identified on the wire
//! by a `(type, name)` pair, and the pair it must declare depends on the
//! model snapshot. This module only carries the vocabulary:
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ EditorRevision   │     │ EditCommand      │
//! │ (dated schema)   │     │ (accepted verbs) │
//! └────────┬─────────┘     └────────┬─────────┘
//!          │                        │
//!          └── wire identifiers and per-revision command sets
//!              live in the infrastructure tables
//! ```
//!
//! # Architecture
//!
//! The split follows the Onion Architecture principle:
//!
//! - **Domain** (this module): closed value objects, no wire strings
//! - **Infrastructure** (`providers::anthropic`): descriptor tables,
//!   model compatibility mapping, and the registry lookup surface
//!
//! # Key Types
//!
//! - [`EditorRevision`] — closed set of registered schema revisions
//! - [`EditCommand`] — closed set of command verbs, snake_case wire form

pub mod command;
pub mod revision;

pub use command::EditCommand;
pub use revision::EditorRevision;
