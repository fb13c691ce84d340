//! Edit command verbs accepted by text-editor tool revisions

use serde::{Deserialize, Serialize};

/// A command verb a text-editor tool revision may accept (Value Object)
///
/// The wire form is the snake_case verb the provider expects in the
/// `command` field of a tool-use block. Which verbs a given revision
/// actually accepts is recorded per descriptor in the infrastructure
/// tables; membership there is a plain slice lookup, no reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
    View,
    Create,
    StrReplace,
    Insert,
    UndoEdit,
}

impl EditCommand {
    /// Every command verb any revision has ever accepted
    pub const ALL: [EditCommand; 5] = [
        EditCommand::View,
        EditCommand::Create,
        EditCommand::StrReplace,
        EditCommand::Insert,
        EditCommand::UndoEdit,
    ];

    /// Get the wire verb for this command
    pub const fn as_str(&self) -> &'static str {
        match self {
            EditCommand::View => "view",
            EditCommand::Create => "create",
            EditCommand::StrReplace => "str_replace",
            EditCommand::Insert => "insert",
            EditCommand::UndoEdit => "undo_edit",
        }
    }

    /// Try to parse a wire verb from a string
    ///
    /// Returns `None` for verbs outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(EditCommand::View),
            "create" => Some(EditCommand::Create),
            "str_replace" => Some(EditCommand::StrReplace),
            "insert" => Some(EditCommand::Insert),
            "undo_edit" => Some(EditCommand::UndoEdit),
            _ => None,
        }
    }
}

impl std::fmt::Display for EditCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
