//! Model value object representing a Claude model snapshot

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Claude model snapshot identifiers (Value Object)
///
/// Each variant is one dated snapshot as it appears in API requests.
/// Unrecognized identifiers are preserved as [`Model::Custom`] rather
/// than rejected at parse time; they fail later, at resolution time,
/// with a typed error that names the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// claude-3-5-sonnet-20241022 (Sonnet 3.5 v2)
    Claude35SonnetV2,
    /// claude-3-5-sonnet-20240620 (Sonnet 3.5 v1)
    Claude35SonnetV1,
    /// claude-3-7-sonnet-20250219
    Claude37Sonnet,
    /// claude-sonnet-4-20250514
    ClaudeSonnet4,
    /// claude-opus-4-20250514
    ClaudeOpus4,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Claude35SonnetV2 => "claude-3-5-sonnet-20241022",
            Model::Claude35SonnetV1 => "claude-3-5-sonnet-20240620",
            Model::Claude37Sonnet => "claude-3-7-sonnet-20250219",
            Model::ClaudeSonnet4 => "claude-sonnet-4-20250514",
            Model::ClaudeOpus4 => "claude-opus-4-20250514",
            Model::Custom(s) => s,
        }
    }

    /// Every model snapshot with a compatibility entry, newest last
    pub fn known() -> Vec<Model> {
        vec![
            Model::Claude35SonnetV1,
            Model::Claude35SonnetV2,
            Model::Claude37Sonnet,
            Model::ClaudeSonnet4,
            Model::ClaudeOpus4,
        ]
    }

    /// Check if this is a Claude 4 generation model
    pub fn is_claude_4(&self) -> bool {
        matches!(self, Model::ClaudeSonnet4 | Model::ClaudeOpus4)
    }

    /// Check if this is a Sonnet-class model
    pub fn is_sonnet(&self) -> bool {
        matches!(
            self,
            Model::Claude35SonnetV2
                | Model::Claude35SonnetV1
                | Model::Claude37Sonnet
                | Model::ClaudeSonnet4
        )
    }

    /// Check if this is an Opus-class model
    pub fn is_opus(&self) -> bool {
        matches!(self, Model::ClaudeOpus4)
    }
}

impl Default for Model {
    /// Returns the default model (newest Sonnet snapshot)
    fn default() -> Self {
        Model::ClaudeSonnet4
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "claude-3-5-sonnet-20241022" => Model::Claude35SonnetV2,
            "claude-3-5-sonnet-20240620" => Model::Claude35SonnetV1,
            "claude-3-7-sonnet-20250219" => Model::Claude37Sonnet,
            "claude-sonnet-4-20250514" => Model::ClaudeSonnet4,
            "claude-opus-4-20250514" => Model::ClaudeOpus4,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
