//! Study mutation service.
//!
//! All user-driven writes go through here: node status and code updates,
//! project artifacts and task checklists. Each mutation carries its recorded
//! activity side effect, so the streak stays truthful without callers having
//! to remember to log.

use std::sync::Arc;

use async_trait::async_trait;
use skillmap_core::{
    ActivityEvent, ActivityKind, NodeId, NodeStatus, Project, ProjectId, RoadmapNode, TaskId,
};
use skillmap_progress::{ActivityTracker, BasicActivityTracker};
use skillmap_storage::{Result, Storage, StorageError};
use tokio::sync::Mutex;
use tracing::info;

/// Mutation service over the roadmap and the project portfolio.
#[async_trait]
pub trait StudyManager: Send + Sync {
    /// Update a node's status and attached code, logging a submission.
    ///
    /// The status string is normalized onto the closed set before it is
    /// stored; anything unknown becomes `PENDING`.
    async fn submit_node(
        &mut self,
        id: NodeId,
        status: &str,
        user_code: Option<String>,
    ) -> Result<RoadmapNode>;

    /// Put a node back to pending with no attached code.
    async fn reset_node(&mut self, id: NodeId) -> Result<RoadmapNode>;

    /// Set or clear a project's final artifact, logging a submission.
    async fn submit_project_code(
        &mut self,
        id: ProjectId,
        final_code: Option<String>,
    ) -> Result<Project>;

    /// Check a single task on or off. Logs no activity.
    async fn set_task_completion(&mut self, task_id: TaskId, done: bool) -> Result<Project>;

    /// Finish a project: store the artifact, mark every task completed and
    /// log a meaningful event.
    async fn complete_project(
        &mut self,
        id: ProjectId,
        final_code: Option<String>,
    ) -> Result<Project>;

    /// Record a roadmap visit.
    async fn record_visit(&mut self) -> Result<ActivityEvent>;
}

/// Basic study manager implementation.
pub struct BasicStudyManager<S: Storage> {
    storage: Arc<Mutex<S>>,
    tracker: BasicActivityTracker<S>,
}

impl<S: Storage> BasicStudyManager<S> {
    /// Create a new study manager owning its storage.
    pub fn new(storage: S) -> Self {
        let storage = Arc::new(Mutex::new(storage));
        let tracker = BasicActivityTracker::with_storage(storage.clone());
        Self { storage, tracker }
    }

    /// Handle to the underlying storage, shared with the embedded tracker.
    pub fn storage(&self) -> Arc<Mutex<S>> {
        self.storage.clone()
    }
}

/// Drop code that is empty or whitespace only.
fn clean_code(code: Option<String>) -> Option<String> {
    code.filter(|c| !c.trim().is_empty())
}

#[async_trait]
impl<S: Storage + 'static> StudyManager for BasicStudyManager<S> {
    async fn submit_node(
        &mut self,
        id: NodeId,
        status: &str,
        user_code: Option<String>,
    ) -> Result<RoadmapNode> {
        let node = {
            let mut storage = self.storage.lock().await;
            let mut node = storage
                .load_node(id)
                .await?
                .ok_or_else(|| StorageError::NotFound(format!("roadmap node {}", id)))?;

            node.status = NodeStatus::normalize(status).as_str().to_string();
            node.user_code = clean_code(user_code);
            storage.save_node(&node).await?;
            node
        };

        // The lock is released before the tracker takes it again.
        self.tracker
            .record(ActivityKind::Submission, Some(format!("roadmap:{}", id)))
            .await?;

        info!("roadmap node {} set to {}", id, node.status);
        Ok(node)
    }

    async fn reset_node(&mut self, id: NodeId) -> Result<RoadmapNode> {
        self.submit_node(id, NodeStatus::Pending.as_str(), None).await
    }

    async fn submit_project_code(
        &mut self,
        id: ProjectId,
        final_code: Option<String>,
    ) -> Result<Project> {
        let project = {
            let mut storage = self.storage.lock().await;
            let mut project = storage
                .load_project(id)
                .await?
                .ok_or_else(|| StorageError::NotFound(format!("project {}", id)))?;

            project.final_code = clean_code(final_code);
            storage.save_project(&project).await?;
            project
        };

        self.tracker
            .record(ActivityKind::Submission, Some(format!("project:{}", id)))
            .await?;

        info!("project {} artifact updated", id);
        Ok(project)
    }

    async fn set_task_completion(&mut self, task_id: TaskId, done: bool) -> Result<Project> {
        let mut storage = self.storage.lock().await;

        let mut project = storage
            .list_projects()
            .await?
            .into_iter()
            .find(|p| p.tasks.iter().any(|t| t.id == task_id))
            .ok_or_else(|| StorageError::NotFound(format!("project task {}", task_id)))?;

        for task in &mut project.tasks {
            if task.id == task_id {
                task.is_completed = done;
            }
        }
        storage.save_project(&project).await?;
        Ok(project)
    }

    async fn complete_project(
        &mut self,
        id: ProjectId,
        final_code: Option<String>,
    ) -> Result<Project> {
        let project = {
            let mut storage = self.storage.lock().await;
            let mut project = storage
                .load_project(id)
                .await?
                .ok_or_else(|| StorageError::NotFound(format!("project {}", id)))?;

            project.final_code = clean_code(final_code);
            for task in &mut project.tasks {
                task.is_completed = true;
            }
            storage.save_project(&project).await?;
            project
        };

        self.tracker
            .record(
                ActivityKind::Meaningful,
                Some(format!("project-complete:{}", id)),
            )
            .await?;

        info!("project {} completed", id);
        Ok(project)
    }

    async fn record_visit(&mut self) -> Result<ActivityEvent> {
        self.tracker.record(ActivityKind::Visit, None).await
    }
}
