//! SkillMap command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skillmap_core::catalog::{project_catalog, roadmap_catalog};
use skillmap_core::{ActivityKind, Category, NodeId, NodeStatus, ProjectId, TaskId};
use skillmap_layout::{CategoryLanes, LayeredLayout, LayoutStrategy, RoadmapGraph};
use skillmap_progress::{
    category_breakdown, focus_nodes, focus_projects, lines_of_code, projects_with_artifacts,
    roadmap_totals, total_lines_logged, ActivityTracker, BasicActivityTracker,
    DEFAULT_FOCUS_NODES, DEFAULT_FOCUS_PROJECTS,
};
use skillmap_storage::{JsonStorage, Storage};
use skillmap_study::{BasicStudyManager, StudyManager};

#[derive(Parser)]
#[command(name = "skillmap")]
#[command(about = "Track a C++ learning roadmap from the terminal", long_about = None)]
struct Cli {
    /// Directory holding the JSON data files
    #[arg(long, global = true, default_value = ".skillmap")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the roadmap and project catalog into the data directory
    Init {
        /// Reseed even if data is already there
        #[arg(long)]
        force: bool,
    },
    /// Show overall progress and the current streak
    Status,
    /// List roadmap nodes
    List {
        /// Only nodes in this category
        #[arg(long)]
        category: Option<String>,
        /// Only nodes with this status
        #[arg(long)]
        status: Option<String>,
    },
    /// Show a single node
    Show {
        /// Node ID
        id: u32,
    },
    /// Set a node's status, optionally attaching code
    Set {
        /// Node ID
        id: u32,
        /// New status: pending, in_progress or mastered
        #[arg(long)]
        status: String,
        /// File whose contents become the node's attached code
        #[arg(long)]
        code_file: Option<PathBuf>,
    },
    /// Put a node back to pending and drop its attached code
    Reset {
        /// Node ID
        id: u32,
    },
    /// Record activity for today
    Record {
        /// Activity kind: visit, submission or meaningful
        #[arg(long)]
        kind: String,
        /// Note stored with the first event of the day
        #[arg(long)]
        note: Option<String>,
    },
    /// Show the current streak
    Streak,
    /// Show per-category progress, logged lines and focus picks
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute node positions and print them as JSON
    Layout {
        /// Placement strategy: layered or lanes
        #[arg(long, default_value = "layered")]
        strategy: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List projects with task progress
    Projects,
    /// Check a project task on or off
    Task {
        /// Task ID
        id: u32,
        /// Mark the task completed
        #[arg(long, conflicts_with = "todo")]
        done: bool,
        /// Mark the task not completed
        #[arg(long)]
        todo: bool,
    },
    /// Finish a project: store its code and mark every task completed
    Complete {
        /// Project ID
        id: u32,
        /// File whose contents become the project's final code
        #[arg(long)]
        code_file: Option<PathBuf>,
    },
    /// Set or clear a project's final code without touching tasks
    Artifact {
        /// Project ID
        id: u32,
        /// File whose contents become the final code; omit to clear it
        #[arg(long)]
        code_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut manager = BasicStudyManager::new(storage);
    let storage = manager.storage();
    let mut tracker = BasicActivityTracker::with_storage(manager.storage());

    match cli.command {
        Commands::Init { force } => {
            let mut guard = storage.lock().await;
            if !force && !guard.list_nodes().await?.is_empty() {
                anyhow::bail!(
                    "{} is already seeded, pass --force to reseed",
                    cli.data_dir.display()
                );
            }
            let nodes = roadmap_catalog();
            let projects = project_catalog();
            for node in &nodes {
                guard.save_node(node).await?;
            }
            for project in &projects {
                guard.save_project(project).await?;
            }
            println!(
                "Seeded {} nodes and {} projects into {}",
                nodes.len(),
                projects.len(),
                cli.data_dir.display()
            );
        }
        Commands::Status => {
            let nodes = storage.lock().await.list_nodes().await?;
            let totals = roadmap_totals(&nodes);
            let streak = tracker.current_streak().await?;
            println!("Roadmap");
            println!(
                "  Nodes: {} ({} mastered, {} building, {} pending)",
                totals.total, totals.mastered, totals.in_progress, totals.pending
            );
            println!("  Completion: {}%", totals.completion_percent);
            println!("  Streak: {} day(s)", streak);
        }
        Commands::List { category, status } => {
            let category = match category {
                Some(s) => Some(
                    Category::parse(&s).ok_or_else(|| anyhow::anyhow!("Unknown category: {}", s))?,
                ),
                None => None,
            };
            let status = match status {
                Some(s) => {
                    Some(parse_status(&s).ok_or_else(|| anyhow::anyhow!("Unknown status: {}", s))?)
                }
                None => None,
            };
            let nodes = storage.lock().await.list_nodes().await?;
            let rows: Vec<_> = nodes
                .iter()
                .filter(|n| category.map_or(true, |c| n.category == c))
                .filter(|n| status.map_or(true, |s| n.normalized_status() == s))
                .collect();
            println!("Nodes ({})", rows.len());
            for node in rows {
                println!(
                    "  {:>2}  {:<11}  {:<21}  {}",
                    node.id,
                    node.normalized_status(),
                    node.category,
                    node.title
                );
            }
        }
        Commands::Show { id } => {
            match storage.lock().await.load_node(NodeId(id)).await? {
                Some(node) => {
                    println!("Node {}: {}", node.id, node.title);
                    println!("  Category: {}", node.category);
                    println!("  Status: {}", node.normalized_status());
                    match node.parent_id {
                        Some(parent) => println!("  Parent: {}", parent),
                        None => println!("  Parent: none"),
                    }
                    println!("  Code lines: {}", lines_of_code(node.user_code.as_deref()));
                }
                None => println!("Node not found: {}", id),
            }
        }
        Commands::Set { id, status, code_file } => {
            let status =
                parse_status(&status).ok_or_else(|| anyhow::anyhow!("Unknown status: {}", status))?;
            let code = read_code_file(code_file).await?;
            let node = manager.submit_node(NodeId(id), status.as_str(), code).await?;
            println!("Node {} is now {}", node.id, node.normalized_status());
        }
        Commands::Reset { id } => {
            let node = manager.reset_node(NodeId(id)).await?;
            println!("Node {} reset to {}", node.id, node.normalized_status());
        }
        Commands::Record { kind, note } => {
            let kind = ActivityKind::parse(&kind)
                .ok_or_else(|| anyhow::anyhow!("Unknown activity kind: {}", kind))?;
            let event = tracker.record(kind, note).await?;
            println!("Logged {} activity for {}", event.kind, event.day());
        }
        Commands::Streak => {
            let streak = tracker.current_streak().await?;
            println!("Current streak: {} day(s)", streak);
        }
        Commands::Stats { json } => {
            let (nodes, projects) = {
                let guard = storage.lock().await;
                (guard.list_nodes().await?, guard.list_projects().await?)
            };
            let totals = roadmap_totals(&nodes);
            let categories = category_breakdown(&nodes);
            let lines = total_lines_logged(&nodes, &projects);
            let artifacts = projects_with_artifacts(&projects);
            if json {
                let value = serde_json::json!({
                    "totals": totals,
                    "categories": categories,
                    "lines_logged": lines,
                    "projects_with_artifacts": artifacts,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "Completion: {}% ({}/{} mastered)",
                    totals.completion_percent, totals.mastered, totals.total
                );
                println!("Lines logged: {}", lines);
                println!("Projects with artifacts: {}/{}", artifacts, projects.len());
                println!("Categories");
                for stat in &categories {
                    println!("  {:<21}  {}/{}", stat.category, stat.mastered, stat.total);
                }
                let focus = focus_nodes(&nodes, DEFAULT_FOCUS_NODES);
                if !focus.is_empty() {
                    println!("Focus nodes");
                    for node in focus {
                        println!(
                            "  {:>2}  {:<11}  {}",
                            node.id,
                            node.normalized_status(),
                            node.title
                        );
                    }
                }
                let focus = focus_projects(&projects, DEFAULT_FOCUS_PROJECTS);
                if !focus.is_empty() {
                    println!("Focus projects");
                    for project in focus {
                        let (done, total) = project.task_counts();
                        println!(
                            "  {:>2}  {}/{} tasks  {}",
                            project.id, done, total, project.title
                        );
                    }
                }
            }
        }
        Commands::Layout { strategy, pretty } => {
            let strategy = parse_strategy(&strategy)
                .ok_or_else(|| anyhow::anyhow!("Unknown strategy: {}", strategy))?;
            let nodes = storage.lock().await.list_nodes().await?;
            let graph = RoadmapGraph::from_nodes(nodes)?;
            let layout = strategy.layout(&graph);
            if pretty {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!("{}", serde_json::to_string(&layout)?);
            }
            manager.record_visit().await?;
        }
        Commands::Projects => {
            let projects = storage.lock().await.list_projects().await?;
            println!("Projects ({})", projects.len());
            for project in &projects {
                let (done, total) = project.task_counts();
                let marker = if project.has_artifact() { " [code]" } else { "" };
                println!(
                    "  {:>2}  {}/{} tasks  {}{}",
                    project.id, done, total, project.title, marker
                );
            }
        }
        Commands::Task { id, done, todo } => {
            if done == todo {
                anyhow::bail!("pass exactly one of --done or --todo");
            }
            let project = manager.set_task_completion(TaskId(id), done).await?;
            let (completed, total) = project.task_counts();
            println!("{}: {}/{} tasks completed", project.title, completed, total);
        }
        Commands::Complete { id, code_file } => {
            let code = read_code_file(code_file).await?;
            let project = manager.complete_project(ProjectId(id), code).await?;
            let (completed, total) = project.task_counts();
            println!("Completed {}: {}/{} tasks", project.title, completed, total);
        }
        Commands::Artifact { id, code_file } => {
            let code = read_code_file(code_file).await?;
            let project = manager.submit_project_code(ProjectId(id), code).await?;
            if project.has_artifact() {
                println!(
                    "Stored final code for {} ({} lines)",
                    project.title,
                    lines_of_code(project.final_code.as_deref())
                );
            } else {
                println!("Cleared final code for {}", project.title);
            }
        }
    }

    Ok(())
}

async fn read_code_file(path: Option<PathBuf>) -> anyhow::Result<Option<String>> {
    match path {
        Some(path) => {
            let code = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
            Ok(Some(code))
        }
        None => Ok(None),
    }
}

fn parse_status(s: &str) -> Option<NodeStatus> {
    match s.to_lowercase().as_str() {
        "pending" => Some(NodeStatus::Pending),
        "in_progress" | "in-progress" | "building" => Some(NodeStatus::InProgress),
        "mastered" => Some(NodeStatus::Mastered),
        _ => None,
    }
}

fn parse_strategy(s: &str) -> Option<Box<dyn LayoutStrategy>> {
    match s.to_lowercase().as_str() {
        "layered" => Some(Box::new(LayeredLayout::default())),
        "lanes" | "categories" => Some(Box::new(CategoryLanes::default())),
        _ => None,
    }
}
