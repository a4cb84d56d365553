#![deny(
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! Command line for building an H2H distance index from an edge-list file.
//!
//! Loads the graph, reports traversal and diameter statistics, builds the index, and optionally
//! answers distance queries, saves the index, and writes the elimination forest as DOT.
//! See binary --help for more information

use std::path::PathBuf;
use std::time::{
    Duration,
    Instant,
};

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use h2h_core::io::read_edge_list;
use h2h_core::VertexId;
use h2h_index::persist::{
    write_index,
    write_stats,
};
use h2h_index::pipeline::{
    build_index_with_progress,
    report_graph,
    ReportOptions,
};
use indicatif::{
    ProgressBar,
    ProgressFinish,
    ProgressStyle,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{
    info,
    warn,
};

/// h2h-index command-line interface to build a hierarchical 2-hop distance index over an
/// unweighted road network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge-list file: `%` comments, one `rows cols nnz` header line, then `u v` per line.
    input: PathBuf,

    /// Number of random BFS sources for the diameter bound (0 skips it).
    #[arg(short = 'k', long, default_value_t = 10)]
    diameter_samples: usize,

    /// Number of vertices, in id order, used for the sampled exact diameter (0 skips it).
    #[arg(long, default_value_t = 0)]
    exact_samples: usize,

    /// Seed for choosing random BFS sources.
    #[arg(long)]
    seed: Option<u64>,

    /// BFS start vertex; defaults to the first vertex in the file.
    #[arg(long)]
    start: Option<VertexId>,

    /// Skip traversal and diameter statistics.
    #[arg(long)]
    skip_report: bool,

    /// Write the built index here (`.json` for JSON, otherwise `MessagePack`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write build statistics here as JSON.
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Write the elimination forest as Graphviz DOT here.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Print the distance between two vertices; may be repeated.
    #[arg(short, long, num_args = 2, value_names = ["S", "T"], action = clap::ArgAction::Append)]
    query: Vec<VertexId>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

/// Progress bar tracking elimination steps.
fn elimination_progress(total: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/blue}] {pos}/{len} eliminations ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let pb = ProgressBar::new(total as u64)
        .with_style(style)
        .with_message("Elimination phase")
        .with_finish(ProgressFinish::AndLeave);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn main() -> Result<()> {
    let args = Cli::parse();
    h2h_core::logging::setup(&args.verbosity);

    let started = Instant::now();
    let parsed = read_edge_list(&args.input).with_context(|| format!("loading {}", args.input.display()))?;
    info!(elapsed = ?started.elapsed(), "graph parse time");
    if parsed.skipped > 0 {
        warn!(skipped = parsed.skipped, "skipped malformed lines");
    }
    let graph = parsed.graph;

    if !args.skip_report {
        let options = ReportOptions {
            start: args.start.or(parsed.start),
            diameter_samples: args.diameter_samples,
            exact_samples: args.exact_samples,
        };
        let mut rng = args.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let started = Instant::now();
        let report = report_graph(&graph, &options, &mut rng)?;
        info!(elapsed = ?started.elapsed(), ?report, "graph statistics");
    }

    let started = Instant::now();
    let pb = elimination_progress(graph.vertex_count());
    let build = build_index_with_progress(&graph, |step| {
        if step % 1024 == 0 {
            pb.set_position(step as u64);
        }
    })?;
    pb.set_position(graph.vertex_count() as u64);
    pb.finish_using_style();
    info!(elapsed = ?started.elapsed(), "index build time");
    let stats = build.stats();
    info!("\n{stats}");
    if let Some(path) = &args.stats {
        write_stats(&stats, path)?;
    }

    for pair in args.query.chunks_exact(2) {
        let (s, t) = (pair[0], pair[1]);
        match build.index.distance(s, t)? {
            Some(d) => info!(s, t, distance = d, "query"),
            None => info!(s, t, "query: disconnected"),
        }
    }

    if let Some(path) = &args.dot {
        std::fs::write(path, build.tree.to_dot()).with_context(|| format!("writing {}", path.display()))?;
        info!("elimination forest written to {}", path.display());
    }

    if let Some(path) = &args.output {
        write_index(&build.index, path)?;
    }

    Ok(())
}
