//! Wire metadata types for the text-editor tool family
//!
//! These are the provider-facing halves of the registry: the immutable
//! descriptor recorded per revision, and the exact `{type, name}` pair
//! serialized into an outbound tool-definition payload.

use editor_compat_domain::{EditCommand, EditorRevision};
use serde::Serialize;

/// Immutable wire metadata for one registered revision
///
/// Descriptors are `'static` table entries; nothing mutates them after
/// process start, so they can be shared across threads freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Revision this descriptor belongs to
    pub revision: EditorRevision,
    /// `type` field of the outbound tool definition (schema version)
    pub wire_type: &'static str,
    /// `name` field of the outbound tool definition (callable name)
    pub wire_name: &'static str,
    /// Full accepted command set; every revision declares its own
    pub commands: &'static [EditCommand],
}

impl ToolDescriptor {
    /// Whether this revision accepts `command`
    pub fn supports(&self, command: EditCommand) -> bool {
        self.commands.contains(&command)
    }

    /// The exact pair to serialize when declaring this tool
    pub fn wire_params(&self) -> WireParams {
        WireParams {
            r#type: self.wire_type,
            name: self.wire_name,
        }
    }
}

/// The `{ "type", "name" }` pair declared to the provider API
///
/// Serializes to exactly those two fields, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WireParams {
    pub r#type: &'static str,
    pub name: &'static str,
}

impl WireParams {
    /// Ready-to-embed JSON value for an outbound `tools` array
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.r#type,
            "name": self.name,
        })
    }
}
