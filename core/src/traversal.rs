use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// Outcome of one breadth-first shortest path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearch {
    /// Vertex ids from start to target inclusive, or None if unreachable.
    pub path: Option<Vec<VertexId>>,
    /// Vertices discovered before the search stopped (start included).
    pub nodes_visited: usize,
}

/// Shortest path from `start` to `target` by edge count.
///
/// Returns `Ok(None)` when the target is unreachable and
/// [`Error::UnknownVertex`] if either id was never allocated.
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    target: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    shortest_path_search(graph, start, target).map(|search| search.path)
}

/// BFS shortest path that also reports how much of the graph was touched.
///
/// Neighbors are examined in adjacency order and each vertex keeps the parent
/// it was first discovered from, so among equal-length paths the result is
/// always the same one. The search stops on discovery of `target`, not when
/// it is dequeued.
pub fn shortest_path_search(graph: &Graph, start: VertexId, target: VertexId) -> Result<PathSearch> {
    if !graph.contains(start) {
        return Err(Error::UnknownVertex(start));
    }
    if !graph.contains(target) {
        return Err(Error::UnknownVertex(target));
    }

    if start == target {
        return Ok(PathSearch {
            path: Some(vec![start]),
            nodes_visited: 1,
        });
    }

    // Predecessor map doubles as the visited set. Sentinel: start is its own parent.
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors_of(current)? {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);

            if next == target {
                return Ok(PathSearch {
                    path: Some(reconstruct_path(&parents, start, target)),
                    nodes_visited: parents.len(),
                });
            }

            queue.push_back(next);
        }
    }

    Ok(PathSearch {
        path: None,
        nodes_visited: parents.len(),
    })
}

/// Walk parent pointers from `target` back to `start`.
fn reconstruct_path(
    parents: &HashMap<VertexId, VertexId>,
    start: VertexId,
    target: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        current = parents[&current];
        path.push(current);
    }

    path.reverse();
    path
}
