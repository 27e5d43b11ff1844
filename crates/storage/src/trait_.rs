//! Storage trait abstraction.

use async_trait::async_trait;
use skillmap_core::{ActivityEvent, ActivityKind, NodeId, Project, ProjectId, RoadmapNode, Time};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for SkillMap data.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Roadmap node operations ===

    /// Save a roadmap node (create or update).
    async fn save_node(&mut self, node: &RoadmapNode) -> Result<()>;

    /// Load a roadmap node by ID.
    async fn load_node(&self, id: NodeId) -> Result<Option<RoadmapNode>>;

    /// List all roadmap nodes, ordered by ascending ID.
    async fn list_nodes(&self) -> Result<Vec<RoadmapNode>>;

    // === Project operations ===

    /// Save a project (create or update).
    async fn save_project(&mut self, project: &Project) -> Result<()>;

    /// Load a project by ID.
    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// List all projects, ordered by ascending ID.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    // === Activity operations ===

    /// Append an activity event.
    async fn save_event(&mut self, event: &ActivityEvent) -> Result<()>;

    /// List all activity events, newest first.
    async fn list_events(&self) -> Result<Vec<ActivityEvent>>;

    /// Find any event of the given kind that occurred at or after `since`.
    async fn find_event_since(
        &self,
        kind: ActivityKind,
        since: Time,
    ) -> Result<Option<ActivityEvent>>;
}
