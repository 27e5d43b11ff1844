//! Roadmap layout engine for SkillMap.
//!
//! Turns the flat roadmap node list into positioned nodes and styled edges
//! for an external presentation layer. Two interchangeable strategies are
//! provided: a layered top-down placement and a simpler category-lane grid.

#![warn(missing_docs)]

pub mod graph;
pub mod style;
pub mod strategy;
pub mod layered;
pub mod lanes;

pub use graph::{GraphError, RoadmapGraph};
pub use lanes::CategoryLanes;
pub use layered::LayeredLayout;
pub use strategy::{Layout, LayoutEdge, LayoutStrategy, PlacedNode, NODE_HEIGHT, NODE_WIDTH};
pub use style::{edge_animated, status_style, StatusStyle};
