//! Dashboard aggregation over the roadmap and project portfolio.
//!
//! Pure functions: callers load the data, these reduce it. Status strings
//! are normalized before counting, so junk values read as pending.

use serde::Serialize;
use skillmap_core::{Category, NodeStatus, Project, ProjectId, RoadmapNode};

use crate::loc::lines_of_code;

/// How many pending concepts the focus list surfaces.
pub const DEFAULT_FOCUS_NODES: usize = 6;

/// How many artifact-less projects the focus list surfaces.
pub const DEFAULT_FOCUS_PROJECTS: usize = 3;

/// Aggregate roadmap counts.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapTotals {
    /// Number of nodes
    pub total: usize,

    /// Nodes marked mastered
    pub mastered: usize,

    /// Nodes being worked on
    pub in_progress: usize,

    /// Untouched nodes
    pub pending: usize,

    /// Rounded percentage of mastered nodes, 0 for an empty roadmap
    pub completion_percent: u32,
}

/// Mastery counts for a single category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    /// The category
    pub category: Category,

    /// Mastered nodes in this category
    pub mastered: usize,

    /// All nodes in this category
    pub total: usize,
}

/// Task completion counts for a single project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTaskCounts {
    /// The project
    pub project_id: ProjectId,

    /// Checked-off tasks
    pub completed: usize,

    /// All tasks
    pub total: usize,
}

/// Count nodes by normalized status and derive the completion percentage.
pub fn roadmap_totals(nodes: &[RoadmapNode]) -> RoadmapTotals {
    let mut mastered = 0;
    let mut in_progress = 0;
    let mut pending = 0;

    for node in nodes {
        match node.normalized_status() {
            NodeStatus::Mastered => mastered += 1,
            NodeStatus::InProgress => in_progress += 1,
            NodeStatus::Pending => pending += 1,
        }
    }

    let total = nodes.len();
    let completion_percent = if total > 0 {
        ((mastered as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    RoadmapTotals {
        total,
        mastered,
        in_progress,
        pending,
        completion_percent,
    }
}

/// Mastered-versus-total per category, always all seven in lane order.
pub fn category_breakdown(nodes: &[RoadmapNode]) -> Vec<CategoryStat> {
    Category::ALL
        .iter()
        .map(|&category| {
            let scoped = nodes.iter().filter(|n| n.category == category);
            let (mut total, mut mastered) = (0, 0);
            for node in scoped {
                total += 1;
                if node.is_mastered() {
                    mastered += 1;
                }
            }
            CategoryStat {
                category,
                mastered,
                total,
            }
        })
        .collect()
}

/// Total non-blank lines across node notes and project artifacts.
pub fn total_lines_logged(nodes: &[RoadmapNode], projects: &[Project]) -> usize {
    let node_lines: usize = nodes
        .iter()
        .map(|n| lines_of_code(n.user_code.as_deref()))
        .sum();
    let project_lines: usize = projects
        .iter()
        .map(|p| lines_of_code(p.final_code.as_deref()))
        .sum();
    node_lines + project_lines
}

/// Number of projects with a submitted final artifact.
pub fn projects_with_artifacts(projects: &[Project]) -> usize {
    projects.iter().filter(|p| p.has_artifact()).count()
}

/// The first `limit` still-pending concepts, in input order.
pub fn focus_nodes(nodes: &[RoadmapNode], limit: usize) -> Vec<&RoadmapNode> {
    nodes
        .iter()
        .filter(|n| n.normalized_status() == NodeStatus::Pending)
        .take(limit)
        .collect()
}

/// The first `limit` projects without a final artifact, in input order.
pub fn focus_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| !p.has_artifact())
        .take(limit)
        .collect()
}

/// Completed-versus-total task counts per project, in input order.
pub fn project_task_counts(projects: &[Project]) -> Vec<ProjectTaskCounts> {
    projects
        .iter()
        .map(|p| {
            let (completed, total) = p.task_counts();
            ProjectTaskCounts {
                project_id: p.id,
                completed,
                total,
            }
        })
        .collect()
}
