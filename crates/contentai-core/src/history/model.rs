//! History entry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::generation::Idea;

/// Kind of generation a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    Ideas,
    Script,
}

/// What was generated. The variant determines the entry's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryPayload {
    Ideas {
        niche: String,
        audience: String,
        ideas: Vec<Idea>,
    },
    Script {
        idea: String,
        script: String,
    },
}

impl HistoryPayload {
    pub fn kind(&self) -> HistoryKind {
        match self {
            HistoryPayload::Ideas { .. } => HistoryKind::Ideas,
            HistoryPayload::Script { .. } => HistoryKind::Script,
        }
    }

    /// One-line summary for listings.
    pub fn summary(&self) -> String {
        match self {
            HistoryPayload::Ideas {
                niche,
                audience,
                ideas,
            } => format!("{} ideas for {} / {}", ideas.len(), niche, audience),
            HistoryPayload::Script { idea, .. } => format!("script: {}", idea),
        }
    }
}

/// An immutable record of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in epoch milliseconds, bumped to stay strictly increasing.
    pub id: i64,
    pub payload: HistoryPayload,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn kind(&self) -> HistoryKind {
        self.payload.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_parses_from_snake_case() {
        assert_eq!(HistoryKind::from_str("ideas").unwrap(), HistoryKind::Ideas);
        assert_eq!(HistoryKind::from_str("script").unwrap(), HistoryKind::Script);
        assert_eq!(HistoryKind::Ideas.to_string(), "ideas");
    }

    #[test]
    fn test_payload_is_tagged_with_kind() {
        let payload = HistoryPayload::Script {
            idea: "X".to_string(),
            script: "Y".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "script");
        assert_eq!(json["idea"], "X");
        assert_eq!(payload.kind(), HistoryKind::Script);
    }
}
