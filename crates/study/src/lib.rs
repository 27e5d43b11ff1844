//! Study mutations for SkillMap.
//!
//! The write-side service: node submissions, project artifacts and task
//! checklists, each with its activity-logging side effect.

#![warn(missing_docs)]

pub mod manager;

pub use manager::{BasicStudyManager, StudyManager};
