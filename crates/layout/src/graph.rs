//! Arena-backed roadmap forest.
//!
//! Nodes keep their input order; parent pointers are resolved to indices
//! once, so the layout strategies never chase ids. Structural problems are
//! rejected here, at load time, instead of being trusted by convention.

use std::collections::HashMap;

use skillmap_core::{NodeId, RoadmapNode};

/// Structural errors detected while building the arena.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The same node id appeared more than once in the input
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// Parent pointers loop back on themselves
    #[error("parent pointers form a cycle through node {0}")]
    ParentCycle(NodeId),
}

/// The roadmap forest as an arena.
///
/// A `parent_id` referencing a node absent from the input is tolerated: the
/// node is kept, treated as a root, and contributes no edge.
#[derive(Debug)]
pub struct RoadmapGraph {
    nodes: Vec<RoadmapNode>,
    parent: Vec<Option<usize>>,
}

impl RoadmapGraph {
    /// Build the arena, validating id uniqueness and acyclicity.
    pub fn from_nodes(nodes: Vec<RoadmapNode>) -> Result<Self, GraphError> {
        let mut index_of: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if index_of.insert(node.id, index).is_some() {
                return Err(GraphError::DuplicateNode(node.id));
            }
        }

        let parent: Vec<Option<usize>> = nodes
            .iter()
            .map(|n| n.parent_id.and_then(|pid| index_of.get(&pid).copied()))
            .collect();

        let graph = Self { nodes, parent };
        graph.check_acyclic()?;
        Ok(graph)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> &[RoadmapNode] {
        &self.nodes
    }

    /// The node at an arena index.
    pub fn node(&self, index: usize) -> &RoadmapNode {
        &self.nodes[index]
    }

    /// The arena index of a node's resolved parent, if it has one.
    pub fn parent_index(&self, index: usize) -> Option<usize> {
        self.parent[index]
    }

    /// Depth of every node: the length of its parent chain, roots at 0.
    ///
    /// In a forest this equals the longest path from any root, which is the
    /// rank the layered strategy places by. Memoized chain walk, linear over
    /// the arena.
    pub fn depths(&self) -> Vec<usize> {
        const UNSET: usize = usize::MAX;
        let mut depths = vec![UNSET; self.nodes.len()];

        for start in 0..self.nodes.len() {
            if depths[start] != UNSET {
                continue;
            }
            // Climb to a node with a known depth (or a root), then unwind.
            let mut chain = Vec::new();
            let mut top = start;
            let mut base = 0;
            loop {
                chain.push(top);
                match self.parent[top] {
                    Some(p) if depths[p] != UNSET => {
                        base = depths[p] + 1;
                        break;
                    }
                    Some(p) => top = p,
                    None => break,
                }
            }
            for &index in chain.iter().rev() {
                depths[index] = base;
                base += 1;
            }
        }

        depths
    }

    fn check_acyclic(&self) -> Result<(), GraphError> {
        // 0 = unvisited, 1 = on the current chain, 2 = known acyclic.
        let mut state = vec![0u8; self.nodes.len()];

        for start in 0..self.nodes.len() {
            let mut trail = Vec::new();
            let mut current = Some(start);
            while let Some(index) = current {
                match state[index] {
                    2 => break,
                    1 => return Err(GraphError::ParentCycle(self.nodes[index].id)),
                    _ => {
                        state[index] = 1;
                        trail.push(index);
                        current = self.parent[index];
                    }
                }
            }
            for index in trail {
                state[index] = 2;
            }
        }

        Ok(())
    }
}
