use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use graph_peel_analyzer::graph::{Graph, GraphBuilder, SubgraphView};
use graph_peel_analyzer::stats::Analyzer;
use graph_peel_analyzer::{storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-peel-analyzer",
    about = "Structural statistics and k-core peeling over filtered subgraphs"
)]
struct Cli {
    /// Path to input edge list (one "<source> <target>" pair per line)
    #[clap(long)]
    input: PathBuf,

    /// Write the statistics report to this path instead of stdout
    #[clap(long)]
    stats_out: Option<PathBuf>,

    /// Export the adjacency list of the analyzed graph
    #[clap(long)]
    adjacency: Option<PathBuf>,

    /// Export Vis.js-formatted network data
    #[clap(long)]
    viz: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Loading edge list from {}", args.input.display());
    let graph = load_edge_list(&args.input)?;
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let analyzer = Analyzer::with_graph(graph);
    let report = analyzer.statistics(None)?;

    match &args.stats_out {
        Some(path) => storage::save_report(&report, path)?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = &args.adjacency {
        let msg = analyzer.save_adjacency(None, path)?;
        log::info!("{}", msg);
    }

    if let Some(path) = &args.viz {
        let graph = analyzer.graph().context("no graph loaded")?;
        let network = viz::to_vis_json(&SubgraphView::full(graph));
        std::fs::write(path, serde_json::to_string_pretty(&network)?)?;
        log::info!("Network data written to {}", path.display());
    }

    Ok(())
}

/// Read a whitespace-separated edge list, interning endpoint IDs in order of
/// first appearance. Blank lines and `#` comments are skipped.
fn load_edge_list(path: &Path) -> Result<Graph> {
    let file =
        File::open(path).with_context(|| format!("opening edge list {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut builder = GraphBuilder::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (Some(source), Some(target)) = (parts.next(), parts.next()) else {
            bail!("malformed edge at line {} of {}", lineno + 1, path.display());
        };
        builder.add_labeled_edge(source, target);
    }

    Ok(builder.build())
}
