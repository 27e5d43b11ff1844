//! Roadmap node model - a single trackable concept with a mastery status.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Mastery status of a roadmap node (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    /// Not started yet (the default)
    Pending,
    /// Actively being studied
    InProgress,
    /// Internalized, with or without a code artifact
    Mastered,
}

impl NodeStatus {
    /// Wire string used at the storage boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Pending => "PENDING",
            NodeStatus::InProgress => "IN_PROGRESS",
            NodeStatus::Mastered => "MASTERED",
        }
    }

    /// Parse an exact wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(NodeStatus::Pending),
            "IN_PROGRESS" => Some(NodeStatus::InProgress),
            "MASTERED" => Some(NodeStatus::Mastered),
            _ => None,
        }
    }

    /// Normalize an arbitrary status string.
    ///
    /// Anything outside the closed set collapses to `Pending`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or(NodeStatus::Pending)
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topic category of a roadmap node.
///
/// The set is fixed at seven and the declaration order is the lane order
/// used by the category-lane layout, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Ownership, smart pointers, alignment
    Memory,
    /// Move semantics and value categories
    Semantics,
    /// Deduction, bindings, sum types
    #[serde(rename = "Type System")]
    TypeSystem,
    /// Generic programming
    Templates,
    /// Threads, synchronization, atomics
    Concurrency,
    /// Modern library and language features
    #[serde(rename = "Modern STL & Features")]
    ModernStl,
    /// Performance and data layout
    Optimization,
}

impl Category {
    /// All categories in fixed lane order.
    pub const ALL: [Category; 7] = [
        Category::Memory,
        Category::Semantics,
        Category::TypeSystem,
        Category::Templates,
        Category::Concurrency,
        Category::ModernStl,
        Category::Optimization,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Memory => "Memory",
            Category::Semantics => "Semantics",
            Category::TypeSystem => "Type System",
            Category::Templates => "Templates",
            Category::Concurrency => "Concurrency",
            Category::ModernStl => "Modern STL & Features",
            Category::Optimization => "Optimization",
        }
    }

    /// Parse a display name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    /// Lane index in the fixed left-to-right order.
    pub fn lane(&self) -> usize {
        match self {
            Category::Memory => 0,
            Category::Semantics => 1,
            Category::TypeSystem => 2,
            Category::Templates => 3,
            Category::Concurrency => 4,
            Category::ModernStl => 5,
            Category::Optimization => 6,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trackable concept on the roadmap.
///
/// The full node set is seeded once; afterwards only `status` and
/// `user_code` ever change. Parent pointers form a forest (roots carry
/// `None`), which the layout crate validates when it builds its arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapNode {
    /// Unique identifier (seeded)
    pub id: NodeId,

    /// Concept title
    pub title: String,

    /// Topic category
    pub category: Category,

    /// Parent concept, if any
    pub parent_id: Option<NodeId>,

    /// Raw mastery status string as the store supplies it.
    ///
    /// User-mutated, so out-of-set values can occur; always go through
    /// [`NodeStatus::normalize`] (or [`RoadmapNode::normalized_status`])
    /// before acting on it.
    pub status: String,

    /// Free-text code notes attached by the user
    pub user_code: Option<String>,
}

impl RoadmapNode {
    /// The status collapsed onto the closed set.
    pub fn normalized_status(&self) -> NodeStatus {
        NodeStatus::normalize(&self.status)
    }

    /// Whether the node has been mastered.
    pub fn is_mastered(&self) -> bool {
        self.normalized_status() == NodeStatus::Mastered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_normalize_defaults_to_pending() {
        assert_eq!(NodeStatus::normalize("MASTERED"), NodeStatus::Mastered);
        assert_eq!(NodeStatus::normalize("IN_PROGRESS"), NodeStatus::InProgress);
        assert_eq!(NodeStatus::normalize("UNKNOWN"), NodeStatus::Pending);
        assert_eq!(NodeStatus::normalize(""), NodeStatus::Pending);
        // Wire strings are exact; lowercase is out-of-set.
        assert_eq!(NodeStatus::normalize("mastered"), NodeStatus::Pending);
    }

    #[test]
    fn test_category_lane_order_matches_all() {
        for (index, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.lane(), index);
        }
    }

    #[test]
    fn test_category_parse_display_names() {
        assert_eq!(Category::parse("Type System"), Some(Category::TypeSystem));
        assert_eq!(
            Category::parse("modern stl & features"),
            Some(Category::ModernStl)
        );
        assert_eq!(Category::parse("Geometry"), None);
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::ModernStl).unwrap();
        assert_eq!(json, "\"Modern STL & Features\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::ModernStl);
    }
}
