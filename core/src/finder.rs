use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

use crate::compose::{join_at_junction, path_length};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::registry::NameRegistry;
use crate::traversal;

/// How edge declarations are inserted into the graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// `a b` inserts only `a -> b`.
    #[default]
    Directed,
    /// `a b` inserts `a -> b` and `b -> a`.
    Undirected,
}

/// Construction settings for [`PathFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub edge_mode: EdgeMode,
}

/// Read-only labeled graph answering shortest path queries.
///
/// Built once from label and edge declarations; there is no mutation API
/// afterwards, so a `PathFinder` can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct PathFinder {
    registry: NameRegistry,
    graph: Graph,
}

impl PathFinder {
    /// Build a directed graph from label declarations followed by edge declarations.
    ///
    /// Labels receive ids in iteration order. Fails with
    /// [`Error::DuplicateLabel`] or [`Error::UnknownLabelInEdge`]; on failure
    /// nothing is returned, partially built state included.
    pub fn build<L, E, A, B>(labels: L, edges: E) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self::build_with(BuildOptions::default(), labels, edges)
    }

    pub fn build_with<L, E, A, B>(options: BuildOptions, labels: L, edges: E) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let started = Instant::now();
        let labels = labels.into_iter();
        let (hint, _) = labels.size_hint();

        let mut registry = NameRegistry::with_capacity(hint);
        let mut graph = Graph::with_capacity(hint);

        for label in labels {
            let id = registry.register(label)?;
            let vertex = graph.add_vertex()?;
            debug_assert_eq!(id, vertex);
        }

        for (from, to) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            let resolve = |label: &str| {
                registry.id_of(label).map_err(|_| Error::UnknownLabelInEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    missing: label.to_string(),
                })
            };
            let from_id = resolve(from)?;
            let to_id = resolve(to)?;

            graph.add_edge(from_id, to_id)?;
            if options.edge_mode == EdgeMode::Undirected && from_id != to_id {
                graph.add_edge(to_id, from_id)?;
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            memory_bytes = graph.memory_usage(),
            edge_mode = ?options.edge_mode,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "path finder built"
        );

        Ok(Self { registry, graph })
    }

    /// One shortest path from `from` to `to`, as labels.
    ///
    /// `[from]` when the two are equal, empty when `to` is unreachable.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let start = self.registry.id_of(from)?;
        let target = self.registry.id_of(to)?;

        let search = traversal::shortest_path_search(&self.graph, start, target)?;
        trace!(
            from,
            to,
            visited = search.nodes_visited,
            hops = search.path.as_ref().map(|p| p.len() - 1),
            "shortest path search"
        );

        match search.path {
            Some(ids) => self.labels_for(&ids),
            None => Ok(Vec::new()),
        }
    }

    /// Hop count of [`shortest_path`](Self::shortest_path), or -1 when unreachable.
    pub fn shortest_path_length(&self, from: &str, to: &str) -> Result<i64> {
        Ok(path_length(&self.shortest_path(from, to)?))
    }

    /// Shortest `from → via` path followed by shortest `via → to` path.
    ///
    /// This is not the global shortest `from → to` path; it is empty whenever
    /// either half is, even if `to` is reachable from `from` directly.
    pub fn shortest_path_via(&self, from: &str, via: &str, to: &str) -> Result<Vec<String>> {
        let first = self.shortest_path(from, via)?;
        let second = self.shortest_path(via, to)?;
        Ok(join_at_junction(first, second))
    }

    pub fn shortest_path_via_length(&self, from: &str, via: &str, to: &str) -> Result<i64> {
        Ok(path_length(&self.shortest_path_via(from, via, to)?))
    }

    /// A uniformly random label, drawn from the thread-local RNG.
    pub fn any_label(&self) -> Result<&str> {
        self.any_label_with(&mut rand::thread_rng())
    }

    pub fn any_label_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.registry.any(rng)
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn labels_for(&self, ids: &[VertexId]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| self.registry.label_of(id).map(str::to_string))
            .collect()
    }
}
