//! Practice project model - a multi-task build with an optional final artifact.

use serde::{Deserialize, Serialize};

use crate::id::{ProjectId, TaskId};

/// One checklist step inside a practice project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTask {
    /// Unique identifier (seeded)
    pub id: TaskId,

    /// What the step asks for
    pub description: String,

    /// Whether the step has been checked off
    pub is_completed: bool,
}

/// A practice project with a task checklist and an optional code artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (seeded)
    pub id: ProjectId,

    /// Project title
    pub title: String,

    /// Short description of what gets built
    pub description: String,

    /// Final code artifact, once one has been submitted
    pub final_code: Option<String>,

    /// Ordered task checklist
    pub tasks: Vec<ProjectTask>,
}

impl Project {
    /// Whether a non-empty final artifact has been submitted.
    pub fn has_artifact(&self) -> bool {
        self.final_code
            .as_deref()
            .map(|code| !code.trim().is_empty())
            .unwrap_or(false)
    }

    /// Completed and total task counts, in that order.
    pub fn task_counts(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.is_completed).count();
        (completed, self.tasks.len())
    }

    /// Look up a task by id.
    pub fn task(&self, task_id: TaskId) -> Option<&ProjectTask> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_project() -> Project {
        Project {
            id: ProjectId(1),
            title: "Test Project".to_string(),
            description: "A project used in tests".to_string(),
            final_code: None,
            tasks: vec![
                ProjectTask {
                    id: TaskId(1),
                    description: "First step".to_string(),
                    is_completed: true,
                },
                ProjectTask {
                    id: TaskId(2),
                    description: "Second step".to_string(),
                    is_completed: false,
                },
            ],
        }
    }

    #[test]
    fn test_task_counts() {
        let project = create_test_project();
        assert_eq!(project.task_counts(), (1, 2));
    }

    #[test]
    fn test_has_artifact_requires_non_blank_code() {
        let mut project = create_test_project();
        assert!(!project.has_artifact());

        project.final_code = Some("   \n".to_string());
        assert!(!project.has_artifact());

        project.final_code = Some("int main() { return 0; }".to_string());
        assert!(project.has_artifact());
    }

    #[test]
    fn test_task_lookup() {
        let project = create_test_project();
        assert!(project.task(TaskId(2)).is_some());
        assert!(project.task(TaskId(99)).is_none());
    }
}
