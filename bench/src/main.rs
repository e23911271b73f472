use pathfinder_core::{traversal, PathFinder};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: pathfinder-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Branching tree (deep paths, no back edges)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!();
        println!("Default node_count: 1000000");
        return;
    }

    if node_count < 32 {
        eprintln!("node_count must be at least 32");
        return;
    }

    println!("pathfinder-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(u32) -> EdgeList)> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Branching tree", gen_tree as fn(u32) -> EdgeList),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, node_count) {
            eprintln!("{}: {}", name, e);
        }
    }
}

/// Generated topology: vertex count plus directed edges over dense indices.
struct EdgeList {
    node_count: u32,
    edges: Vec<(u32, u32)>,
}

fn label(i: u32) -> String {
    format!("c_{}", i)
}

fn run_benchmark(
    name: &str,
    generator: fn(u32) -> EdgeList,
    node_count: u32,
) -> pathfinder_core::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let topology = generator(node_count);
    let labels: Vec<String> = (0..topology.node_count).map(label).collect();
    let gen_time = t.elapsed();

    let t = Instant::now();
    let finder = PathFinder::build(
        labels.iter().cloned(),
        topology
            .edges
            .iter()
            .map(|&(a, b)| (labels[a as usize].as_str(), labels[b as usize].as_str())),
    )?;
    let build_time = t.elapsed();
    println!(
        "Generated in {:.2}s, built in {:.2}s — {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64(),
        finder.vertex_count(),
        finder.edge_count(),
        finder.graph().memory_usage() as f64 / 1_048_576.0
    );

    // Id-level search: node 0 to last node, with visit counts
    let far = topology.node_count - 1;
    let t = Instant::now();
    let search = traversal::shortest_path_search(finder.graph(), 0, far)?;
    let elapsed = t.elapsed();
    match search.path {
        Some(p) => println!(
            "Shortest path 0 → {}: {} hops, {} visited in {:.1}ms",
            far,
            p.len() - 1,
            search.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "Shortest path 0 → {}: no path, {} visited ({:.1}ms)",
            far,
            search.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        ),
    }

    // Label-level queries between pseudo-random pairs, direct and via a third vertex
    let mut rng = FastRng::new(2024);
    let queries = 20;
    println!();
    println!("{:>8} {:>10} {:>10} {:>10}", "query", "found", "avg hops", "avg time");
    println!("{:->8} {:->10} {:->10} {:->10}", "", "", "", "");

    for via in [false, true] {
        let mut found = 0u32;
        let mut total_hops = 0i64;
        let t = Instant::now();
        for _ in 0..queries {
            let a = &labels[rng.next(topology.node_count) as usize];
            let b = &labels[rng.next(topology.node_count) as usize];
            let length = if via {
                let m = &labels[rng.next(topology.node_count) as usize];
                finder.shortest_path_via_length(a, m, b)?
            } else {
                finder.shortest_path_length(a, b)?
            };
            if length >= 0 {
                found += 1;
                total_hops += length;
            }
        }
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>10} {:>10.1} {:>8.1}ms",
            if via { "via" } else { "direct" },
            format!("{}/{}", found, queries),
            if found > 0 { total_hops as f64 / found as f64 } else { 0.0 },
            elapsed.as_secs_f64() * 1000.0 / queries as f64
        );
    }
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// Generators — all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as u32
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Edge-list capacity for `nodes * per_node` edges, computed without `u32` overflow.
fn edge_capacity(nodes: u32, per_node: u32) -> usize {
    (nodes as usize).saturating_mul(per_node as usize)
}

/// Branching tree: each node links to three children.
///
/// Edges only point away from the root, so most random pairs are unreachable
/// and via-queries mostly fail fast.
fn gen_tree(node_count: u32) -> EdgeList {
    let branching = 3u32;
    let mut edges = Vec::with_capacity(node_count as usize);

    let mut next_id: u32 = 1;
    let mut frontier: Vec<u32> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                edges.push((parent, next_id));
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    EdgeList { node_count, edges }
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each node links forward to its K nearest ring neighbors; each link is
/// rewired to a random target with probability p.
fn gen_small_world(node_count: u32) -> EdgeList {
    let k = 10u32;
    let p = 0.05f64;
    let mut edges = Vec::with_capacity(edge_capacity(node_count, k));
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = ((i as u64 + j as u64) % node_count as u64) as u32;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                edges.push((i, if rewired != i { rewired } else { neighbor }));
            } else {
                edges.push((i, neighbor));
            }
        }
    }

    EdgeList { node_count, edges }
}

/// Erdos-Renyi: ~10 uniform random out-edges per node on average.
fn gen_random(node_count: u32) -> EdgeList {
    let target_edges = edge_capacity(node_count, 10);
    let mut edges = Vec::with_capacity(target_edges);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            edges.push((from, to));
        }
    }

    EdgeList { node_count, edges }
}

/// Barbell: two dense clusters joined by a one-way chain of 10 bridge nodes.
///
/// Every path from the first cluster to the second runs through the bridge,
/// so via-queries naming a bridge node match the direct path.
fn gen_barbell(node_count: u32) -> EdgeList {
    let bridge_len = 10u32;
    let cluster = (node_count - bridge_len) / 2;
    let mut edges = Vec::with_capacity(edge_capacity(cluster, 40) + bridge_len as usize);
    let mut rng = FastRng::new(99999);

    let mut densify = |offset: u32, edges: &mut Vec<(u32, u32)>| {
        for i in 0..cluster {
            for _ in 0..20u32.min(cluster - 1) {
                let target = rng.next(cluster);
                if target != i {
                    edges.push((offset + i, offset + target));
                }
            }
        }
    };

    densify(0, &mut edges);

    let bridge_start = cluster;
    edges.push((cluster - 1, bridge_start));
    for id in bridge_start + 1..bridge_start + bridge_len {
        edges.push((id - 1, id));
    }

    let b_start = bridge_start + bridge_len;
    edges.push((b_start - 1, b_start));
    densify(b_start, &mut edges);

    EdgeList {
        node_count: b_start + cluster,
        edges,
    }
}
