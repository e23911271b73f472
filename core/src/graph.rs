use crate::error::{Error, Result};

/// Dense vertex identifier, assigned from 0 in declaration order.
pub type VertexId = u32;

/// Adjacency store over dense vertex ids.
///
/// `outgoing[v]` holds the targets of every edge leaving `v`, in insertion
/// order. That order is the BFS tie-break, so it is never sorted or deduped.
/// The id that follows `len` already-allocated ids.
pub(crate) fn next_id(len: usize) -> Result<VertexId> {
    VertexId::try_from(len).map_err(|_| Error::TooManyVertices)
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    outgoing: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            outgoing: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Allocate the next vertex id.
    ///
    /// Fails with [`Error::TooManyVertices`] once every `VertexId` is taken.
    pub fn add_vertex(&mut self) -> Result<VertexId> {
        let id = next_id(self.outgoing.len())?;
        self.outgoing.push(Vec::new());
        Ok(id)
    }

    /// Append a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.contains(from) {
            return Err(Error::UnknownVertex(from));
        }
        if !self.contains(to) {
            return Err(Error::UnknownVertex(to));
        }
        self.outgoing[from as usize].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing neighbors of `id` in insertion order.
    pub fn neighbors_of(&self, id: VertexId) -> Result<&[VertexId]> {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .ok_or(Error::UnknownVertex(id))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        (id as usize) < self.outgoing.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.outgoing.capacity() * size_of::<Vec<VertexId>>();
        let edges: usize = self
            .outgoing
            .iter()
            .map(|v| v.capacity() * size_of::<VertexId>())
            .sum();

        lists + edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_ids_are_dense() {
        let mut g = Graph::new();
        assert_eq!(g.add_vertex(), Ok(0));
        assert_eq!(g.add_vertex(), Ok(1));
        assert_eq!(g.add_vertex(), Ok(2));
        assert_eq!(g.vertex_count(), 3);
        assert!(g.contains(2));
        assert!(!g.contains(3));
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut g = Graph::new();
        for _ in 0..4 {
            g.add_vertex().unwrap();
        }
        g.add_edge(0, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(g.neighbors_of(0).unwrap(), &[3, 1, 2]);
        assert_eq!(g.neighbors_of(1).unwrap(), &[] as &[VertexId]);
    }

    #[test]
    fn test_parallel_and_self_edges_are_kept() {
        let mut g = Graph::new();
        g.add_vertex().unwrap();
        g.add_vertex().unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 1).unwrap();
        assert_eq!(g.neighbors_of(0).unwrap(), &[1, 1]);
        assert_eq!(g.neighbors_of(1).unwrap(), &[1]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_edge_to_unallocated_vertex() {
        let mut g = Graph::new();
        g.add_vertex().unwrap();
        assert_eq!(g.add_edge(0, 5), Err(Error::UnknownVertex(5)));
        assert_eq!(g.add_edge(7, 0), Err(Error::UnknownVertex(7)));
        // Failed inserts leave the store untouched
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors_of(0).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_of_unallocated_vertex() {
        let g = Graph::new();
        assert_eq!(g.neighbors_of(0), Err(Error::UnknownVertex(0)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_next_id_stops_at_id_limit() {
        assert_eq!(next_id(0), Ok(0));
        assert_eq!(next_id(VertexId::MAX as usize), Ok(VertexId::MAX));
        assert_eq!(next_id(VertexId::MAX as usize + 1), Err(Error::TooManyVertices));
    }

    #[test]
    fn test_memory_usage_grows_with_edges() {
        let mut g = Graph::new();
        g.add_vertex().unwrap();
        g.add_vertex().unwrap();
        let before = g.memory_usage();
        for _ in 0..64 {
            g.add_edge(0, 1).unwrap();
        }
        assert!(g.memory_usage() > before);
    }
}
