//! Progress tracking for SkillMap.
//!
//! Home of the daily activity streak, the lines-of-code counter, and the
//! dashboard aggregation that turns the raw roadmap into headline numbers.

#![warn(missing_docs)]

pub mod tracker;
pub mod loc;
pub mod stats;

pub use tracker::{consecutive_run, distinct_days, ActivityTracker, BasicActivityTracker};
pub use loc::lines_of_code;
pub use stats::{
    category_breakdown, focus_nodes, focus_projects, project_task_counts, projects_with_artifacts,
    roadmap_totals, total_lines_logged, CategoryStat, ProjectTaskCounts, RoadmapTotals,
    DEFAULT_FOCUS_NODES, DEFAULT_FOCUS_PROJECTS,
};
