//! pathfinder CLI: load node and edge files, then report a shortest path
//! between two (by default random) vertices.
//!
//! Usage:
//!   pathfinder <NODES> <EDGES> [--from A] [--to B] [--via M | --use-intermediate]

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pathfinder_core::{load_path_finder, BuildOptions, EdgeMode, PathFinder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "pathfinder", version, about = "Shortest paths between named vertices")]
struct Args {
    /// Node file: one URL-encoded label per line
    #[arg(env = "PATHFINDER_NODES")]
    nodes: PathBuf,
    /// Edge file: "source target" URL-encoded label pairs, one per line
    #[arg(env = "PATHFINDER_EDGES")]
    edges: PathBuf,
    /// Origin label (random if omitted)
    #[arg(long)]
    from: Option<String>,
    /// Destination label (random if omitted)
    #[arg(long)]
    to: Option<String>,
    /// Required intermediate label
    #[arg(long, conflicts_with = "use_intermediate")]
    via: Option<String>,
    /// Pass through a randomly chosen intermediate vertex
    #[arg(long, alias = "useIntermediateNode")]
    use_intermediate: bool,
    /// Seed for random vertex selection
    #[arg(long, env = "PATHFINDER_SEED")]
    seed: Option<u64>,
    /// Treat each edge declaration as connecting both directions
    #[arg(long)]
    undirected: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let options = BuildOptions {
        edge_mode: if args.undirected {
            EdgeMode::Undirected
        } else {
            EdgeMode::Directed
        },
    };

    let finder = load_path_finder(&args.nodes, &args.edges, options).with_context(|| {
        format!(
            "loading graph from {} and {}",
            args.nodes.display(),
            args.edges.display()
        )
    })?;
    info!(
        vertices = finder.vertex_count(),
        edges = finder.edge_count(),
        "graph loaded"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = run_query(&finder, &args, &mut rng)?;
    let output = if args.json {
        report.render_json()?
    } else {
        report.render_text()
    };
    println!("{}", output);

    Ok(())
}

/// Log filter from `RUST_LOG`, falling back to `warn` when it is unset or empty.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Resolve the query endpoints (pinned or random) and run it.
fn run_query<R: Rng>(finder: &PathFinder, args: &Args, rng: &mut R) -> Result<Report> {
    let mut pick = |pinned: &Option<String>| -> Result<String> {
        match pinned {
            Some(label) => Ok(label.clone()),
            None => Ok(finder
                .any_label_with(rng)
                .context("choosing a random vertex")?
                .to_string()),
        }
    };

    let from = pick(&args.from)?;
    let to = pick(&args.to)?;
    let via = if args.use_intermediate {
        Some(pick(&None)?)
    } else {
        args.via.clone()
    };

    let path = match &via {
        Some(via) => finder.shortest_path_via(&from, via, &to)?,
        None => finder.shortest_path(&from, &to)?,
    };
    let length = pathfinder_core::compose::path_length(&path);

    Ok(Report {
        from,
        to,
        via,
        length,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> PathFinder {
        PathFinder::build(
            ["A", "B", "C", "D", "E"],
            [("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")],
        )
        .unwrap()
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pathfinder", "nodes.txt", "edges.txt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_pinned_query() {
        let f = diamond();
        let mut rng = StdRng::seed_from_u64(1);
        let report = run_query(&f, &args(&["--from", "A", "--to", "C"]), &mut rng).unwrap();
        assert_eq!(report.path, vec!["A", "B", "C"]);
        assert_eq!(report.length, 2);
        assert_eq!(report.via, None);
    }

    #[test]
    fn test_pinned_via_query() {
        let f = diamond();
        let mut rng = StdRng::seed_from_u64(1);
        let a = args(&["--from", "A", "--to", "C", "--via", "D"]);
        let report = run_query(&f, &a, &mut rng).unwrap();
        assert_eq!(report.path, vec!["A", "D", "C"]);
        assert_eq!(report.via.as_deref(), Some("D"));
    }

    #[test]
    fn test_random_query_is_seeded() {
        let f = diamond();
        let a = args(&["--use-intermediate"]);
        let first = run_query(&f, &a, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = run_query(&f, &a, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
        assert!(first.via.is_some());
    }

    #[test]
    fn test_unknown_pinned_label() {
        let f = diamond();
        let mut rng = StdRng::seed_from_u64(1);
        let err = run_query(&f, &args(&["--from", "Nope", "--to", "A"]), &mut rng).unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn test_random_on_empty_graph() {
        let f = PathFinder::build(Vec::<String>::new(), Vec::<(&str, &str)>::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(run_query(&f, &args(&[]), &mut rng).is_err());
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        std::env::set_var(EnvFilter::DEFAULT_ENV, "debug");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::set_var(EnvFilter::DEFAULT_ENV, "pathfinder_core=trace");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::TRACE));

        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_via_conflicts_with_use_intermediate() {
        let argv = ["pathfinder", "n", "e", "--via", "D", "--use-intermediate"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
