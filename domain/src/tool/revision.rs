//! Text-editor tool revision value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::RegistryError;

/// A dated revision of the text-editor tool wire schema (Value Object)
///
/// This is a closed set: one variant per revision the registry knows.
/// An unregistered revision is unrepresentable as a value, so lookups
/// keyed by `EditorRevision` cannot fail — only the string-id entry
/// points can, and those fail with [`RegistryError::UnknownRevision`].
///
/// Revisions never inherit anything from each other. Each one declares
/// its full wire identifiers and command set in the infrastructure
/// tables, which is what keeps a newly added revision from silently
/// picking up capabilities it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorRevision {
    /// 2024-10-22 generation (Sonnet 3.5), undo-capable
    V20241022,
    /// 2025-01-24 generation (Sonnet 3.7), undo-capable
    V20250124,
    /// 2025-04-29 generation (Claude 4); drops `undo_edit`, renames the tool
    V20250429,
}

impl EditorRevision {
    /// Every registered revision, oldest first
    pub const ALL: [EditorRevision; 3] = [
        EditorRevision::V20241022,
        EditorRevision::V20250124,
        EditorRevision::V20250429,
    ];

    /// Get the dated tag for this revision
    pub const fn as_str(&self) -> &'static str {
        match self {
            EditorRevision::V20241022 => "20241022",
            EditorRevision::V20250124 => "20250124",
            EditorRevision::V20250429 => "20250429",
        }
    }

    /// The newest registered revision
    pub const fn latest() -> Self {
        EditorRevision::V20250429
    }
}

impl std::fmt::Display for EditorRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EditorRevision {
    type Err = RegistryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "20241022" => Ok(EditorRevision::V20241022),
            "20250124" => Ok(EditorRevision::V20250124),
            "20250429" => Ok(EditorRevision::V20250429),
            other => Err(RegistryError::UnknownRevision(other.to_string())),
        }
    }
}

impl Serialize for EditorRevision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EditorRevision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
