//! Activity event model - atoms of the practice timeline.

use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::id::EventId;
use crate::Time;

/// Semantic category of a recorded user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// The user opened or viewed the roadmap
    Visit,
    /// The user saved code or a status change
    Submission,
    /// The user finished something substantial (e.g. a whole project)
    Meaningful,
}

impl ActivityKind {
    /// Wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Visit => "visit",
            ActivityKind::Submission => "submission",
            ActivityKind::Meaningful => "meaningful",
        }
    }

    /// Parse a wire string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "visit" => Some(ActivityKind::Visit),
            "submission" => Some(ActivityKind::Submission),
            "meaningful" => Some(ActivityKind::Meaningful),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded user action.
///
/// Events are append-only: once created they are never deleted, and the only
/// permitted mutation is a one-time metadata enrichment when the first write
/// of the day carried none. Several events may share a calendar day; the
/// streak reduction collapses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Unique identifier
    pub id: EventId,

    /// Semantic category of the action
    pub kind: ActivityKind,

    /// When the action occurred (UTC, stamped at creation)
    pub occurred_at: Time,

    /// Optional free-text annotation
    pub metadata: Option<String>,
}

impl ActivityEvent {
    /// Create a new event stamped with the current instant.
    pub fn new(kind: ActivityKind, metadata: Option<String>) -> Self {
        Self {
            id: EventId::new(),
            kind,
            occurred_at: chrono::Utc::now(),
            metadata,
        }
    }

    /// The UTC calendar day this event falls on.
    pub fn day(&self) -> DayKey {
        DayKey::from_time(self.occurred_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_strings_round_trip() {
        for kind in [
            ActivityKind::Visit,
            ActivityKind::Submission,
            ActivityKind::Meaningful,
        ] {
            assert_eq!(ActivityKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ActivityKind::parse("MEANINGFUL"), Some(ActivityKind::Meaningful));
        assert_eq!(ActivityKind::parse("nonsense"), None);
    }

    #[test]
    fn test_new_event_is_stamped_today() {
        let event = ActivityEvent::new(ActivityKind::Visit, None);
        assert_eq!(event.day(), DayKey::today());
        assert!(event.metadata.is_none());
    }
}
