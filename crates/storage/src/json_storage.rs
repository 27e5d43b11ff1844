//! JSON file storage implementation.
//!
//! Stores data as JSON files under a data directory, one file per object:
//! `roadmap/{id}.json`, `projects/{id}.json`, `activity/{event_id}.json`.
//! Event file names are ULIDs, so a directory listing is already roughly
//! time-ordered; ordering guarantees still come from the sort in
//! `list_events`.

use std::path::Path;

use skillmap_core::{
    ActivityEvent, ActivityKind, EventId, NodeId, Project, ProjectId, RoadmapNode, Time,
};
use tokio::fs;
use tracing::debug;

use super::{Result, Storage};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: std::path::PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the subdirectories it
    /// needs. The directory itself is plain files; nothing else manages it.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("roadmap")).await?;
        fs::create_dir_all(root.join("projects")).await?;
        fs::create_dir_all(root.join("activity")).await?;

        Ok(Self { root })
    }

    fn node_path(&self, id: NodeId) -> std::path::PathBuf {
        self.root.join("roadmap").join(format!("{}.json", id))
    }
    fn project_path(&self, id: ProjectId) -> std::path::PathBuf {
        self.root.join("projects").join(format!("{}.json", id))
    }
    fn event_path(&self, id: EventId) -> std::path::PathBuf {
        self.root.join("activity").join(format!("{}.json", id))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_node(&mut self, node: &RoadmapNode) -> Result<()> {
        let path = self.node_path(node.id);
        let json = serde_json::to_string_pretty(node)?;
        fs::write(&path, json.as_bytes()).await?;
        debug!("saved roadmap node {}", node.id);
        Ok(())
    }

    async fn load_node(&self, id: NodeId) -> Result<Option<RoadmapNode>> {
        read_json(&self.node_path(id)).await
    }

    async fn list_nodes(&self) -> Result<Vec<RoadmapNode>> {
        let mut nodes: Vec<RoadmapNode> = list_dir(&self.root.join("roadmap")).await?;
        nodes.sort_by_key(|n| n.id);
        Ok(nodes)
    }

    async fn save_project(&mut self, project: &Project) -> Result<()> {
        let path = self.project_path(project.id);
        let json = serde_json::to_string_pretty(project)?;
        fs::write(&path, json.as_bytes()).await?;
        debug!("saved project {}", project.id);
        Ok(())
    }

    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>> {
        read_json(&self.project_path(id)).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = list_dir(&self.root.join("projects")).await?;
        projects.sort_by_key(|p| p.id);
        Ok(projects)
    }

    async fn save_event(&mut self, event: &ActivityEvent) -> Result<()> {
        let path = self.event_path(event.id);
        let json = serde_json::to_string_pretty(event)?;
        fs::write(&path, json.as_bytes()).await?;
        debug!("saved {} event {}", event.kind, event.id);
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<ActivityEvent>> {
        let mut events: Vec<ActivityEvent> = list_dir(&self.root.join("activity")).await?;
        // Newest first; event ID breaks timestamp ties deterministically.
        events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at).then(b.id.cmp(&a.id)));
        Ok(events)
    }

    async fn find_event_since(
        &self,
        kind: ActivityKind,
        since: Time,
    ) -> Result<Option<ActivityEvent>> {
        let events = self.list_events().await?;
        Ok(events
            .into_iter()
            .find(|e| e.kind == kind && e.occurred_at >= since))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &std::path::Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use skillmap_core::{ActivityKind, Category};

    fn create_test_node(id: u32) -> RoadmapNode {
        RoadmapNode {
            id: NodeId(id),
            title: format!("Node {}", id),
            category: Category::Memory,
            parent_id: None,
            status: "PENDING".to_string(),
            user_code: None,
        }
    }

    #[tokio::test]
    async fn test_node_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut node = create_test_node(1);
        node.status = "IN_PROGRESS".to_string();
        node.user_code = Some("struct Guard;".to_string());

        storage.save_node(&node).await.unwrap();
        let loaded = storage.load_node(NodeId(1)).await.unwrap().unwrap();

        assert_eq!(loaded.title, node.title);
        assert_eq!(loaded.status, "IN_PROGRESS");
        assert_eq!(loaded.user_code.as_deref(), Some("struct Guard;"));
    }

    #[tokio::test]
    async fn test_project_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut project = skillmap_core::catalog::project_catalog().remove(0);
        project.final_code = Some("int main() { return 0; }".to_string());
        project.tasks[0].is_completed = true;

        storage.save_project(&project).await.unwrap();
        let loaded = storage.load_project(project.id).await.unwrap().unwrap();

        assert_eq!(loaded.title, project.title);
        assert!(loaded.has_artifact());
        assert_eq!(loaded.task_counts(), (1, 5));
    }

    #[tokio::test]
    async fn test_load_missing_node_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load_node(NodeId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_nodes_ordered_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        for id in [3, 1, 2] {
            storage.save_node(&create_test_node(id)).await.unwrap();
        }

        let nodes = storage.list_nodes().await.unwrap();
        let ids: Vec<u32> = nodes.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_events_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut older = ActivityEvent::new(ActivityKind::Visit, None);
        older.occurred_at = Utc::now() - Duration::days(2);
        let newer = ActivityEvent::new(ActivityKind::Submission, Some("roadmap:1".to_string()));

        storage.save_event(&older).await.unwrap();
        storage.save_event(&newer).await.unwrap();

        let events = storage.list_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, newer.id);
        assert_eq!(events[1].id, older.id);
    }

    #[tokio::test]
    async fn test_find_event_since_filters_kind_and_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut stale = ActivityEvent::new(ActivityKind::Submission, None);
        stale.occurred_at = Utc::now() - Duration::days(3);
        let fresh_visit = ActivityEvent::new(ActivityKind::Visit, None);

        storage.save_event(&stale).await.unwrap();
        storage.save_event(&fresh_visit).await.unwrap();

        let cutoff = Utc::now() - Duration::hours(1);
        assert!(storage
            .find_event_since(ActivityKind::Submission, cutoff)
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .find_event_since(ActivityKind::Visit, cutoff)
            .await
            .unwrap()
            .is_some());
    }
}
