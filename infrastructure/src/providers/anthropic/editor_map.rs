//! Text-editor revision tables
//!
//! Maps each registered revision to its immutable wire descriptor, and
//! Claude model snapshots to the revision they accept. The literal
//! values mirror the provider documentation; a wrong pair would only
//! surface as a protocol-level rejection downstream, so every entry is
//! pinned by the tests below.

use editor_compat_domain::{EditCommand, EditorRevision, Model};

use super::types::ToolDescriptor;

// Each revision declares its full command set. Command sets are never
// shared or inherited between revisions, so adding a revision cannot
// silently leak a capability into it.

const COMMANDS_20241022: &[EditCommand] = &[
    EditCommand::View,
    EditCommand::Create,
    EditCommand::StrReplace,
    EditCommand::Insert,
    EditCommand::UndoEdit,
];

const COMMANDS_20250124: &[EditCommand] = &[
    EditCommand::View,
    EditCommand::Create,
    EditCommand::StrReplace,
    EditCommand::Insert,
    EditCommand::UndoEdit,
];

// The 2025-04-29 generation drops `undo_edit` together with the wire
// rename. Deliberate regression, not an omission.
const COMMANDS_20250429: &[EditCommand] = &[
    EditCommand::View,
    EditCommand::Create,
    EditCommand::StrReplace,
    EditCommand::Insert,
];

static DESCRIPTOR_20241022: ToolDescriptor = ToolDescriptor {
    revision: EditorRevision::V20241022,
    wire_type: "text_editor_20241022",
    wire_name: "str_replace_editor",
    commands: COMMANDS_20241022,
};

static DESCRIPTOR_20250124: ToolDescriptor = ToolDescriptor {
    revision: EditorRevision::V20250124,
    wire_type: "text_editor_20250124",
    wire_name: "str_replace_editor",
    commands: COMMANDS_20250124,
};

static DESCRIPTOR_20250429: ToolDescriptor = ToolDescriptor {
    revision: EditorRevision::V20250429,
    wire_type: "text_editor_20250429",
    wire_name: "str_replace_based_edit_tool",
    commands: COMMANDS_20250429,
};

/// Wire descriptor for a registered revision.
///
/// Total over [`EditorRevision`]: the closed enum cannot name an
/// unregistered revision, so there is no failure path here.
pub fn descriptor_for(revision: EditorRevision) -> &'static ToolDescriptor {
    match revision {
        EditorRevision::V20241022 => &DESCRIPTOR_20241022,
        EditorRevision::V20250124 => &DESCRIPTOR_20250124,
        EditorRevision::V20250429 => &DESCRIPTOR_20250429,
    }
}

/// Revision the given model accepts.
///
/// Returns `None` for models without a compatibility entry (including
/// every `Custom` identifier); the registry turns that into a typed
/// `UnknownModel` error at its boundary.
pub fn revision_for_model(model: &Model) -> Option<EditorRevision> {
    match model {
        Model::Claude35SonnetV2 | Model::Claude35SonnetV1 => Some(EditorRevision::V20241022),
        Model::Claude37Sonnet => Some(EditorRevision::V20250124),
        Model::ClaudeSonnet4 | Model::ClaudeOpus4 => Some(EditorRevision::V20250429),
        Model::Custom(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_20241022_wire_identifiers() {
        let descriptor = descriptor_for(EditorRevision::V20241022);
        assert_eq!(descriptor.wire_type, "text_editor_20241022");
        assert_eq!(descriptor.wire_name, "str_replace_editor");
    }

    #[test]
    fn test_descriptor_20250124_wire_identifiers() {
        let descriptor = descriptor_for(EditorRevision::V20250124);
        assert_eq!(descriptor.wire_type, "text_editor_20250124");
        assert_eq!(descriptor.wire_name, "str_replace_editor");
    }

    #[test]
    fn test_descriptor_20250429_wire_identifiers() {
        let descriptor = descriptor_for(EditorRevision::V20250429);
        assert_eq!(descriptor.wire_type, "text_editor_20250429");
        assert_eq!(descriptor.wire_name, "str_replace_based_edit_tool");
    }

    #[test]
    fn test_undo_edit_support_differences() {
        // The 2024-10-22 and 2025-01-24 generations accept undo_edit;
        // the 2025-04-29 generation dropped it.
        assert!(descriptor_for(EditorRevision::V20241022).supports(EditCommand::UndoEdit));
        assert!(descriptor_for(EditorRevision::V20250124).supports(EditCommand::UndoEdit));
        assert!(!descriptor_for(EditorRevision::V20250429).supports(EditCommand::UndoEdit));
    }

    #[test]
    fn test_base_commands_shared_by_all_revisions() {
        for revision in EditorRevision::ALL {
            let descriptor = descriptor_for(revision);
            for command in [
                EditCommand::View,
                EditCommand::Create,
                EditCommand::StrReplace,
                EditCommand::Insert,
            ] {
                assert!(
                    descriptor.supports(command),
                    "revision {} must accept {}",
                    revision,
                    command
                );
            }
        }
    }

    #[test]
    fn test_sonnet_35_models_map_to_20241022() {
        assert_eq!(
            revision_for_model(&Model::Claude35SonnetV2),
            Some(EditorRevision::V20241022)
        );
        assert_eq!(
            revision_for_model(&Model::Claude35SonnetV1),
            Some(EditorRevision::V20241022)
        );
    }

    #[test]
    fn test_sonnet_37_maps_to_20250124() {
        assert_eq!(
            revision_for_model(&Model::Claude37Sonnet),
            Some(EditorRevision::V20250124)
        );
    }

    #[test]
    fn test_claude_4_models_map_to_20250429() {
        assert_eq!(
            revision_for_model(&Model::ClaudeSonnet4),
            Some(EditorRevision::V20250429)
        );
        assert_eq!(
            revision_for_model(&Model::ClaudeOpus4),
            Some(EditorRevision::V20250429)
        );
    }

    #[test]
    fn test_custom_model_has_no_entry() {
        let model = Model::Custom("my-fine-tuned-model".to_string());
        assert_eq!(revision_for_model(&model), None);
    }

    #[test]
    fn test_every_known_model_resolves() {
        for model in Model::known() {
            assert!(
                revision_for_model(&model).is_some(),
                "no compatibility entry for {}",
                model
            );
        }
    }

    #[test]
    fn test_descriptor_revision_matches_key() {
        for revision in EditorRevision::ALL {
            assert_eq!(descriptor_for(revision).revision, revision);
        }
    }

    #[test]
    fn test_wire_fields_and_command_sets_non_empty() {
        for revision in EditorRevision::ALL {
            let descriptor = descriptor_for(revision);
            assert!(!descriptor.wire_type.is_empty());
            assert!(!descriptor.wire_name.is_empty());
            assert!(!descriptor.commands.is_empty());
        }
    }

    #[test]
    fn test_wire_pairs_uniquely_identify_revisions() {
        // (wire_type, wire_name) must determine the revision: both
        // undo-capable revisions share a name but differ in type.
        let pairs: Vec<(&str, &str)> = EditorRevision::ALL
            .iter()
            .map(|r| {
                let d = descriptor_for(*r);
                (d.wire_type, d.wire_name)
            })
            .collect();

        for (i, a) in pairs.iter().enumerate() {
            for b in pairs.iter().skip(i + 1) {
                assert_ne!(a, b, "two revisions share wire identifiers");
            }
        }
    }
}
