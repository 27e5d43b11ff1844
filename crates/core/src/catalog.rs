//! Seed catalog: the fixed C++ roadmap and its practice projects.
//!
//! The node set and project checklists are data, not behavior. They are
//! written into the store once by `init` and only their status fields and
//! code attachments change afterwards.

use crate::id::{NodeId, ProjectId, TaskId};
use crate::node::{Category, RoadmapNode};
use crate::project::{Project, ProjectTask};

fn node(id: u32, title: &str, category: Category, parent: Option<u32>) -> RoadmapNode {
    RoadmapNode {
        id: NodeId(id),
        title: title.to_string(),
        category,
        parent_id: parent.map(NodeId),
        status: "PENDING".to_string(),
        user_code: None,
    }
}

fn project(id: u32, title: &str, description: &str, first_task: u32, tasks: [&str; 5]) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        description: description.to_string(),
        final_code: None,
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(offset, step)| ProjectTask {
                id: TaskId(first_task + offset as u32),
                description: step.to_string(),
                is_completed: false,
            })
            .collect(),
    }
}

/// The full 42-node C++ mastery roadmap, grouped by category.
///
/// Parent pointers stay within the owning category, so the forest has one
/// small tree per category with the category's first node as root.
pub fn roadmap_catalog() -> Vec<RoadmapNode> {
    use Category::*;

    vec![
        // Memory
        node(1, "RAII", Memory, None),
        node(2, "unique_ptr", Memory, Some(1)),
        node(3, "shared_ptr", Memory, Some(1)),
        node(4, "weak_ptr", Memory, Some(3)),
        node(5, "Custom Deleters", Memory, Some(2)),
        node(6, "Memory Alignment", Memory, Some(1)),
        // Semantics
        node(7, "Move Semantics (std::move)", Semantics, None),
        node(8, "Rvalue References", Semantics, Some(7)),
        node(9, "Perfect Forwarding (std::forward)", Semantics, Some(8)),
        node(10, "Copy Elision (RVO/NRVO)", Semantics, Some(7)),
        // Type System
        node(11, "auto & decltype", TypeSystem, None),
        node(12, "Structured Bindings", TypeSystem, Some(11)),
        node(13, "Type Deduction", TypeSystem, Some(11)),
        node(14, "std::any", TypeSystem, Some(13)),
        node(15, "std::variant", TypeSystem, Some(13)),
        node(16, "std::optional", TypeSystem, Some(13)),
        // Templates
        node(17, "Function/Class Templates", Templates, None),
        node(18, "Variadic Templates", Templates, Some(17)),
        node(19, "Fold Expressions", Templates, Some(18)),
        node(20, "SFINAE", Templates, Some(17)),
        node(21, "Concepts (C++20)", Templates, Some(20)),
        node(22, "Template Specialization", Templates, Some(17)),
        node(23, "constexpr if", Templates, Some(19)),
        // Concurrency
        node(24, "std::thread", Concurrency, None),
        node(25, "std::async", Concurrency, Some(24)),
        node(26, "std::future & std::promise", Concurrency, Some(25)),
        node(27, "std::mutex & locks", Concurrency, Some(24)),
        node(28, "std::condition_variable", Concurrency, Some(27)),
        node(29, "std::atomic", Concurrency, Some(24)),
        node(30, "Memory Models", Concurrency, Some(29)),
        // Modern STL & Features
        node(31, "Lambda Expressions", ModernStl, None),
        node(32, "std::function", ModernStl, Some(31)),
        node(33, "Smart Pointers Implementation details", ModernStl, Some(32)),
        node(34, "std::string_view", ModernStl, Some(31)),
        node(35, "std::span", ModernStl, Some(34)),
        node(36, "Ranges (C++20)", ModernStl, Some(34)),
        node(37, "Coroutines", ModernStl, Some(31)),
        node(38, "Modules", ModernStl, Some(37)),
        node(39, "Three-way Comparison (<=>)", ModernStl, Some(31)),
        // Optimization
        node(40, "Cache Locality", Optimization, None),
        node(41, "SOAO vs AOS", Optimization, Some(40)),
        node(42, "SIMD basics", Optimization, Some(40)),
    ]
}

/// The eight quant-flavored practice projects, five tasks each.
pub fn project_catalog() -> Vec<Project> {
    vec![
        project(
            1,
            "Order Book Matching Engine",
            "Design a production-like matcher with strict price-time priority, telemetry, and replayable audit trails.",
            1,
            [
                "Model level-2 order book structures with price buckets and FIFO queues.",
                "Implement order submission, cancellation, and amend flows with sequencing.",
                "Design the matching core for limit vs. market orders under price-time priority.",
                "Emit depth snapshots and trade prints with latency metrics.",
                "Stress test with synthetic bursts and record profiling data.",
            ],
        ),
        project(
            2,
            "Market Data Feed Handler",
            "Normalize multicast UDP packets from multiple exchanges into a single schema with replay controls.",
            6,
            [
                "Parse raw PCAP capture files into timestamped UDP payloads.",
                "Decode exchange wire formats and normalize to an internal schema.",
                "Implement replay controls, gap detection, and drop handling.",
                "Expose zero-copy snapshots for downstream consumers.",
                "Capture per-stage latency metrics for observability.",
            ],
        ),
        project(
            3,
            "Backtesting Engine",
            "Replay nano-timestamped events through strategies with deterministic timing and portfolio accounting.",
            11,
            [
                "Design the event bus and scheduling primitives for deterministic playback.",
                "Implement adapters for historical trades/quotes and align timestamps.",
                "Add portfolio accounting with transaction costs and slippage.",
                "Surface analytics for PnL, drawdown, and factor exposures.",
                "Allow plug-in strategy modules with lifecycle hooks.",
            ],
        ),
        project(
            4,
            "High-Frequency Trading Strategy",
            "Ship a latency-aware momentum or SMA crossover loop with stale-data guards and profiling hooks.",
            16,
            [
                "Implement rolling SMA calculations optimized for cache locality.",
                "Add signal gating for spread/latency constraints.",
                "Integrate with synthetic market data and risk limits.",
                "Profile the pipeline and eliminate hotspots via SIMD where possible.",
                "Record post-trade analytics to validate behavior.",
            ],
        ),
        project(
            5,
            "Option Pricing Library",
            "Blend closed-form Greeks with Monte Carlo engines to price complex structures and calibrate vols.",
            21,
            [
                "Implement analytic Black-Scholes pricers for calls/puts/greeks.",
                "Create variance-reduced Monte Carlo engines with Sobol sequences.",
                "Add calibration utilities for implied volatility surfaces.",
                "Vectorize payoff accumulation using SIMD-friendly layouts.",
                "Document benchmarks comparing analytic vs. simulation results.",
            ],
        ),
        project(
            6,
            "Cross-Venue Arbitrage Bot",
            "Automate detection of price dislocations between venues and fire synchronized orders under strict latency budgets.",
            26,
            [
                "Normalize two or more venue feeds into a shared book representation.",
                "Calculate edge after fees and latency buffers.",
                "Implement dual-order routing with synchronized cancels.",
                "Record fills and edge decay metrics for post-trade reviews.",
                "Trigger circuit breakers when edge turns negative three ticks in a row.",
            ],
        ),
        project(
            7,
            "Monte Carlo Scenario Simulator",
            "Produce risk scenarios across thousands of correlated paths with pluggable factor models and GPU acceleration.",
            31,
            [
                "Implement correlated path generation with configurable covariance.",
                "Add plug-in callbacks for pricing/strategy evaluation per path.",
                "Compute VaR/CVaR and percentile stats across simulations.",
                "Persist seeds/config to rerun exact stress scenarios.",
                "Visualize tail scenarios for reporting.",
            ],
        ),
        project(
            8,
            "Execution Cost Analyzer",
            "Analyze venue-level routing costs, queue positions, and slippage to recommend smarter execution slices.",
            36,
            [
                "Ingest historical fill logs and enrich with market context.",
                "Estimate queue position or time-to-fill metrics per venue.",
                "Compute realized spread capture by order type and participation rate.",
                "Rank venues with recommendations based on recent performance.",
                "Export a daily report for traders with actionable guidance.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roadmap_catalog_shape() {
        let nodes = roadmap_catalog();
        assert_eq!(nodes.len(), 42);

        let ids: HashSet<NodeId> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 42);

        // Every parent pointer references a seeded node in the same category.
        for n in &nodes {
            if let Some(parent_id) = n.parent_id {
                let parent = nodes
                    .iter()
                    .find(|p| p.id == parent_id)
                    .unwrap_or_else(|| panic!("missing parent for node {}", n.id));
                assert_eq!(parent.category, n.category);
            }
        }
    }

    #[test]
    fn test_roadmap_catalog_one_root_per_category() {
        let nodes = roadmap_catalog();
        for category in Category::ALL {
            let roots = nodes
                .iter()
                .filter(|n| n.category == category && n.parent_id.is_none())
                .count();
            assert_eq!(roots, 1, "category {category} should have one root");
        }
    }

    #[test]
    fn test_roadmap_catalog_starts_pending() {
        for n in roadmap_catalog() {
            assert_eq!(n.status, "PENDING");
            assert!(n.user_code.is_none());
        }
    }

    #[test]
    fn test_project_catalog_shape() {
        let projects = project_catalog();
        assert_eq!(projects.len(), 8);

        let mut task_ids = HashSet::new();
        for p in &projects {
            assert_eq!(p.tasks.len(), 5);
            assert!(p.final_code.is_none());
            for t in &p.tasks {
                assert!(!t.is_completed);
                assert!(task_ids.insert(t.id), "duplicate task id {}", t.id);
            }
        }
        assert_eq!(task_ids.len(), 40);
    }
}
