//! In-memory storage backend.
//!
//! Useful for tests and throwaway sessions; nothing survives the process.
//! Dependent crates exercise their services against this backend instead of
//! touching the filesystem.

use std::collections::BTreeMap;

use skillmap_core::{ActivityEvent, ActivityKind, NodeId, Project, ProjectId, RoadmapNode, Time};

use super::{Result, Storage};

/// Storage backend that keeps everything in process memory.
#[derive(Default)]
pub struct MemoryStorage {
    nodes: BTreeMap<NodeId, RoadmapNode>,
    projects: BTreeMap<ProjectId, Project>,
    events: Vec<ActivityEvent>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn save_node(&mut self, node: &RoadmapNode) -> Result<()> {
        self.nodes.insert(node.id, node.clone());
        Ok(())
    }

    async fn load_node(&self, id: NodeId) -> Result<Option<RoadmapNode>> {
        Ok(self.nodes.get(&id).cloned())
    }

    async fn list_nodes(&self) -> Result<Vec<RoadmapNode>> {
        // BTreeMap iteration is already ascending by ID.
        Ok(self.nodes.values().cloned().collect())
    }

    async fn save_project(&mut self, project: &Project) -> Result<()> {
        self.projects.insert(project.id, project.clone());
        Ok(())
    }

    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.values().cloned().collect())
    }

    async fn save_event(&mut self, event: &ActivityEvent) -> Result<()> {
        if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
            *existing = event.clone();
        } else {
            self.events.push(event.clone());
        }
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<ActivityEvent>> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at).then(b.id.cmp(&a.id)));
        Ok(events)
    }

    async fn find_event_since(
        &self,
        kind: ActivityKind,
        since: Time,
    ) -> Result<Option<ActivityEvent>> {
        Ok(self
            .events
            .iter()
            .find(|e| e.kind == kind && e.occurred_at >= since)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use skillmap_core::Category;

    #[tokio::test]
    async fn test_event_update_in_place() {
        let mut storage = MemoryStorage::new();

        let mut event = ActivityEvent::new(ActivityKind::Submission, None);
        storage.save_event(&event).await.unwrap();

        event.metadata = Some("roadmap:4".to_string());
        storage.save_event(&event).await.unwrap();

        let events = storage.list_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].metadata.as_deref(), Some("roadmap:4"));
    }

    #[tokio::test]
    async fn test_find_event_since_respects_cutoff() {
        let mut storage = MemoryStorage::new();

        let mut old = ActivityEvent::new(ActivityKind::Meaningful, None);
        old.occurred_at = Utc::now() - Duration::days(5);
        storage.save_event(&old).await.unwrap();

        let cutoff = Utc::now() - Duration::days(1);
        assert!(storage
            .find_event_since(ActivityKind::Meaningful, cutoff)
            .await
            .unwrap()
            .is_none());

        let recent = ActivityEvent::new(ActivityKind::Meaningful, None);
        storage.save_event(&recent).await.unwrap();
        assert!(storage
            .find_event_since(ActivityKind::Meaningful, cutoff)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_nodes_listed_in_id_order() {
        let mut storage = MemoryStorage::new();

        for id in [7u32, 2, 5] {
            let node = RoadmapNode {
                id: NodeId(id),
                title: format!("Node {}", id),
                category: Category::Templates,
                parent_id: None,
                status: "PENDING".to_string(),
                user_code: None,
            };
            storage.save_node(&node).await.unwrap();
        }

        let ids: Vec<u32> = storage
            .list_nodes()
            .await
            .unwrap()
            .iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }
}
