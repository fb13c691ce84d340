//! Editor tool registry
//!
//! Read-only facade over the revision tables in `editor_map`. All
//! lookups are synchronous constant-time reads against process-wide
//! static data; the registry itself carries no state and is free to
//! copy anywhere a lookup is needed.

use editor_compat_domain::{EditCommand, EditorRevision, Model, RegistryError};

use super::editor_map::{descriptor_for, revision_for_model};
use super::types::{ToolDescriptor, WireParams};

/// Capability registry for the Anthropic text-editor tool family.
///
/// Answers three questions: what a revision looks like on the wire,
/// which revision a model accepts, and whether a revision understands
/// a given command.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorToolRegistry;

impl EditorToolRegistry {
    pub const fn new() -> Self {
        Self
    }

    /// Full descriptor for a registered revision.
    pub fn describe(&self, revision: EditorRevision) -> &'static ToolDescriptor {
        descriptor_for(revision)
    }

    /// Descriptor lookup from an untrusted revision identifier.
    pub fn describe_id(&self, revision_id: &str) -> Result<&'static ToolDescriptor, RegistryError> {
        let revision: EditorRevision = revision_id.parse()?;
        Ok(descriptor_for(revision))
    }

    /// Descriptor of the revision the given model accepts.
    pub fn resolve_for_model(
        &self,
        model: &Model,
    ) -> Result<&'static ToolDescriptor, RegistryError> {
        match revision_for_model(model) {
            Some(revision) => {
                tracing::debug!(model = %model, revision = %revision, "resolved editor revision");
                Ok(descriptor_for(revision))
            }
            None => {
                tracing::debug!(model = %model, "no editor revision registered for model");
                Err(RegistryError::UnknownModel(model.to_string()))
            }
        }
    }

    /// [`Self::resolve_for_model`] from an untrusted model identifier.
    pub fn resolve_for_model_id(
        &self,
        model_id: &str,
    ) -> Result<&'static ToolDescriptor, RegistryError> {
        self.resolve_for_model(&Model::from(model_id))
    }

    /// Whether a revision accepts the given command.
    pub fn supports_command(&self, revision: EditorRevision, command: EditCommand) -> bool {
        descriptor_for(revision).supports(command)
    }

    /// [`Self::supports_command`] from an untrusted revision identifier.
    pub fn supports_command_id(
        &self,
        revision_id: &str,
        command: EditCommand,
    ) -> Result<bool, RegistryError> {
        let revision: EditorRevision = revision_id.parse()?;
        Ok(descriptor_for(revision).supports(command))
    }

    /// Request-body parameter block for a revision.
    pub fn to_wire_params(&self, revision: EditorRevision) -> WireParams {
        descriptor_for(revision).wire_params()
    }

    /// Every registered revision, oldest first.
    pub fn revisions(&self) -> &'static [EditorRevision] {
        &EditorRevision::ALL
    }

    /// Every model with a compatibility entry.
    pub fn supported_models(&self) -> Vec<Model> {
        Model::known()
    }
}
