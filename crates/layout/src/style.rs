//! Status-derived visual metadata.
//!
//! Every color and label is a pure function of the normalized status, so a
//! layout can be recomputed from scratch at any time with no hidden state.

use serde::Serialize;
use skillmap_core::NodeStatus;

/// Visual treatment of a node status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    /// Short human-readable label
    pub label: &'static str,

    /// Border and edge stroke color (CSS rgba)
    pub border: &'static str,
}

/// Look up the visual treatment for a normalized status.
pub fn status_style(status: NodeStatus) -> StatusStyle {
    match status {
        NodeStatus::Pending => StatusStyle {
            label: "Pending",
            border: "rgba(148,163,184,0.9)",
        },
        NodeStatus::InProgress => StatusStyle {
            label: "Building",
            border: "rgba(251,191,36,0.8)",
        },
        NodeStatus::Mastered => StatusStyle {
            label: "Mastered",
            border: "rgba(52,211,153,0.9)",
        },
    }
}

/// Whether the edge into a node of this status is drawn animated.
pub fn edge_animated(status: NodeStatus) -> bool {
    status == NodeStatus::Mastered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mastered_edges_animate() {
        assert!(edge_animated(NodeStatus::Mastered));
        assert!(!edge_animated(NodeStatus::InProgress));
        assert!(!edge_animated(NodeStatus::Pending));
    }

    #[test]
    fn test_styles_are_distinct() {
        let borders = [
            status_style(NodeStatus::Pending).border,
            status_style(NodeStatus::InProgress).border,
            status_style(NodeStatus::Mastered).border,
        ];
        assert_ne!(borders[0], borders[1]);
        assert_ne!(borders[1], borders[2]);
    }

    #[test]
    fn test_in_progress_reads_building() {
        assert_eq!(status_style(NodeStatus::InProgress).label, "Building");
    }
}
