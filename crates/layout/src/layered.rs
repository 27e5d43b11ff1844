//! Layered top-to-bottom placement (Sugiyama style).
//!
//! Ranks are parent depths, so parents always land strictly above their
//! children. A single top-down sweep orders each layer by the parent's slot
//! in the layer above; because the input is a forest, that already yields
//! zero crossings, and the stable sort keeps input order on ties. Layers
//! are centered against the widest one.

use crate::graph::RoadmapGraph;
use crate::strategy::{build_edges, place, Layout, LayoutStrategy, NODE_HEIGHT, NODE_WIDTH};

/// Layered layout with the default spacing of the recorded presentation.
#[derive(Debug, Clone)]
pub struct LayeredLayout {
    /// Horizontal gap between neighbors in a layer
    pub node_gap: f64,

    /// Vertical gap between consecutive layers
    pub rank_gap: f64,

    /// Outer margin on both axes
    pub margin: f64,
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self {
            node_gap: 70.0,
            rank_gap: 140.0,
            margin: 32.0,
        }
    }
}

impl LayeredLayout {
    fn row_width(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * NODE_WIDTH + (count as f64 - 1.0) * self.node_gap
        }
    }
}

impl LayoutStrategy for LayeredLayout {
    fn layout(&self, graph: &RoadmapGraph) -> Layout {
        let depths = graph.depths();
        let layer_count = depths.iter().map(|d| d + 1).max().unwrap_or(0);

        // Bucket nodes per rank, keeping input order inside each bucket.
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
        for (index, &depth) in depths.iter().enumerate() {
            layers[depth].push(index);
        }

        // Ordering sweep. `slot` records each node's position in its layer
        // so the layer below can sort under its parents.
        let mut slot = vec![0usize; graph.len()];
        for rank in 0..layer_count {
            if rank > 0 {
                layers[rank].sort_by_key(|&index| {
                    graph.parent_index(index).map(|p| slot[p]).unwrap_or(0)
                });
            }
            for (position, &index) in layers[rank].iter().enumerate() {
                slot[index] = position;
            }
        }

        // Coordinate assignment: rows centered against the widest.
        let max_width = layers
            .iter()
            .map(|layer| self.row_width(layer.len()))
            .fold(0.0, f64::max);

        let mut positions = vec![(0.0, 0.0); graph.len()];
        for (rank, layer) in layers.iter().enumerate() {
            let x0 = self.margin + (max_width - self.row_width(layer.len())) / 2.0;
            let y = self.margin + rank as f64 * (NODE_HEIGHT + self.rank_gap);
            for (position, &index) in layer.iter().enumerate() {
                positions[index] = (x0 + position as f64 * (NODE_WIDTH + self.node_gap), y);
            }
        }

        let nodes = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| place(node, positions[index].0, positions[index].1))
            .collect();

        Layout {
            nodes,
            edges: build_edges(graph),
        }
    }
}
