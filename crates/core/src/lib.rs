//! SkillMap core data models.
//!
//! This crate defines the entities shared by every other SkillMap crate:
//! the roadmap concept forest, the project portfolio, and the activity
//! timeline the daily streak is computed from.

#![warn(missing_docs)]

// Core identities
mod id;

// Calendar-day bucketing
mod day;

// Roadmap and portfolio
mod node;
mod project;

// Activity timeline
mod activity;

// Seeded curriculum
pub mod catalog;

// Re-exports
pub use id::{EventId, NodeId, ProjectId, TaskId};

pub use day::DayKey;

pub use node::{Category, NodeStatus, RoadmapNode};
pub use project::{Project, ProjectTask};

pub use activity::{ActivityEvent, ActivityKind};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
