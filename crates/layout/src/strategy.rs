//! Layout output model and the strategy seam.

use serde::Serialize;
use skillmap_core::{Category, NodeId, NodeStatus, RoadmapNode};

use crate::graph::RoadmapGraph;
use crate::style::{edge_animated, status_style, StatusStyle};

/// Fixed node box width.
pub const NODE_WIDTH: f64 = 280.0;

/// Fixed node box height.
pub const NODE_HEIGHT: f64 = 110.0;

/// A node with its computed position and display metadata.
///
/// `x`/`y` address the top-left corner of the node box.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedNode {
    /// Node identity
    pub id: NodeId,

    /// Concept title
    pub title: String,

    /// Topic category
    pub category: Category,

    /// Normalized mastery status
    pub status: NodeStatus,

    /// Horizontal position
    pub x: f64,

    /// Vertical position
    pub y: f64,

    /// Box width (fixed)
    pub width: f64,

    /// Box height (fixed)
    pub height: f64,

    /// Status-derived colors and label
    pub style: StatusStyle,
}

/// A parent-to-child connection with its display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutEdge {
    /// Parent node
    pub source: NodeId,

    /// Child node
    pub target: NodeId,

    /// Drawn animated when the child is mastered
    pub animated: bool,

    /// Stroke color, taken from the child's status
    pub stroke: &'static str,
}

/// A complete computed layout: positions plus edges.
///
/// Recomputed fresh from the current node set on every request and never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    /// One entry per input node, in input order
    pub nodes: Vec<PlacedNode>,

    /// One entry per node with a resolved parent
    pub edges: Vec<LayoutEdge>,
}

/// A swappable placement policy over the roadmap forest.
///
/// Implementations are pure: same arena in, same layout out.
pub trait LayoutStrategy {
    /// Compute positions and edges for the whole forest.
    fn layout(&self, graph: &RoadmapGraph) -> Layout;
}

/// Build a placed node from its coordinates.
pub(crate) fn place(node: &RoadmapNode, x: f64, y: f64) -> PlacedNode {
    let status = node.normalized_status();
    PlacedNode {
        id: node.id,
        title: node.title.clone(),
        category: node.category,
        status,
        x,
        y,
        width: NODE_WIDTH,
        height: NODE_HEIGHT,
        style: status_style(status),
    }
}

/// The edge set every strategy shares: one edge per resolved parent, in
/// input order of the child.
pub(crate) fn build_edges(graph: &RoadmapGraph) -> Vec<LayoutEdge> {
    let mut edges = Vec::new();
    for index in 0..graph.len() {
        if let Some(parent_index) = graph.parent_index(index) {
            let child = graph.node(index);
            let status = child.normalized_status();
            edges.push(LayoutEdge {
                source: graph.node(parent_index).id,
                target: child.id,
                animated: edge_animated(status),
                stroke: status_style(status).border,
            });
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use crate::graph::RoadmapGraph;
    use crate::layered::LayeredLayout;
    use crate::strategy::LayoutStrategy;
    use skillmap_core::{Category, NodeId, RoadmapNode};

    #[test]
    fn test_layout_serializes_for_export() {
        let nodes = vec![
            RoadmapNode {
                id: NodeId(1),
                title: "RAII".to_string(),
                category: Category::Memory,
                parent_id: None,
                status: "MASTERED".to_string(),
                user_code: None,
            },
            RoadmapNode {
                id: NodeId(2),
                title: "unique_ptr".to_string(),
                category: Category::Memory,
                parent_id: Some(NodeId(1)),
                status: "IN_PROGRESS".to_string(),
                user_code: None,
            },
        ];
        let graph = RoadmapGraph::from_nodes(nodes).unwrap();
        let layout = LayeredLayout::default().layout(&graph);

        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value["nodes"][0]["id"], 1);
        assert_eq!(value["nodes"][0]["status"], "MASTERED");
        assert_eq!(value["nodes"][0]["category"], "Memory");
        assert_eq!(value["nodes"][0]["width"], 280.0);
        assert_eq!(value["nodes"][1]["style"]["label"], "Building");
        assert_eq!(value["edges"][0]["source"], 1);
        assert_eq!(value["edges"][0]["animated"], false);
    }
}
