//! Category-lane placement.
//!
//! The no-graph-theory alternative: one vertical lane per category in the
//! fixed left-to-right order, nodes stacked top-to-bottom in input order.
//! Needs nothing but per-lane running counters.

use skillmap_core::Category;

use crate::graph::RoadmapGraph;
use crate::strategy::{build_edges, place, Layout, LayoutStrategy, NODE_HEIGHT, NODE_WIDTH};

/// Category-lane layout.
#[derive(Debug, Clone)]
pub struct CategoryLanes {
    /// Horizontal gap between lanes
    pub lane_gap: f64,

    /// Vertical gap between stacked nodes in a lane
    pub row_gap: f64,

    /// Outer margin on both axes
    pub margin: f64,
}

impl Default for CategoryLanes {
    fn default() -> Self {
        Self {
            lane_gap: 70.0,
            row_gap: 24.0,
            margin: 32.0,
        }
    }
}

impl LayoutStrategy for CategoryLanes {
    fn layout(&self, graph: &RoadmapGraph) -> Layout {
        let mut counters = vec![0usize; Category::ALL.len()];

        let nodes = graph
            .nodes()
            .iter()
            .map(|node| {
                let lane = node.category.lane();
                let row = counters[lane];
                counters[lane] += 1;

                let x = self.margin + lane as f64 * (NODE_WIDTH + self.lane_gap);
                let y = self.margin + row as f64 * (NODE_HEIGHT + self.row_gap);
                place(node, x, y)
            })
            .collect();

        Layout {
            nodes,
            edges: build_edges(graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmap_core::catalog::roadmap_catalog;
    use skillmap_core::{NodeId, RoadmapNode};

    fn create_test_node(id: u32, category: Category, parent: Option<u32>) -> RoadmapNode {
        RoadmapNode {
            id: NodeId(id),
            title: format!("Node {}", id),
            category,
            parent_id: parent.map(NodeId),
            status: "PENDING".to_string(),
            user_code: None,
        }
    }

    #[test]
    fn test_lane_x_depends_only_on_category() {
        let graph = RoadmapGraph::from_nodes(vec![
            create_test_node(1, Category::Memory, None),
            create_test_node(2, Category::Optimization, None),
            create_test_node(3, Category::Memory, Some(1)),
        ])
        .unwrap();

        let strategy = CategoryLanes::default();
        let layout = strategy.layout(&graph);

        assert_eq!(layout.nodes[0].x, layout.nodes[2].x);
        let expected_last_lane =
            strategy.margin + 6.0 * (NODE_WIDTH + strategy.lane_gap);
        assert_eq!(layout.nodes[1].x, expected_last_lane);
    }

    #[test]
    fn test_stacking_follows_input_order() {
        let graph = RoadmapGraph::from_nodes(vec![
            create_test_node(5, Category::Templates, None),
            create_test_node(2, Category::Templates, None),
            create_test_node(9, Category::Templates, None),
        ])
        .unwrap();

        let strategy = CategoryLanes::default();
        let layout = strategy.layout(&graph);

        assert_eq!(layout.nodes[0].y, strategy.margin);
        assert_eq!(
            layout.nodes[1].y,
            strategy.margin + NODE_HEIGHT + strategy.row_gap
        );
        assert_eq!(
            layout.nodes[2].y,
            strategy.margin + 2.0 * (NODE_HEIGHT + strategy.row_gap)
        );
    }

    #[test]
    fn test_edges_match_layered_edge_set() {
        let nodes = roadmap_catalog();
        let graph = RoadmapGraph::from_nodes(nodes).unwrap();

        let lanes = CategoryLanes::default().layout(&graph);
        let layered = crate::layered::LayeredLayout::default().layout(&graph);

        let pairs = |layout: &Layout| -> Vec<(NodeId, NodeId)> {
            layout.edges.iter().map(|e| (e.source, e.target)).collect()
        };
        assert_eq!(pairs(&lanes), pairs(&layered));
        // 42 nodes, 7 roots.
        assert_eq!(lanes.edges.len(), 35);
    }
}
