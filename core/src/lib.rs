//! pathfinder-core: labeled directed graph with shortest path queries.
//!
//! Vertices are declared by text label and receive dense ids in declaration
//! order; edges are declared as label pairs. Once built, a [`PathFinder`] is
//! read-only and answers BFS shortest path queries, optionally constrained
//! to pass through a given vertex.
//!
//! ```
//! use pathfinder_core::PathFinder;
//!
//! let finder = PathFinder::build(
//!     ["A", "B", "C", "D"],
//!     [("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")],
//! )
//! .unwrap();
//!
//! assert_eq!(finder.shortest_path("A", "C").unwrap(), ["A", "B", "C"]);
//! assert_eq!(finder.shortest_path_via("A", "D", "C").unwrap(), ["A", "D", "C"]);
//! assert_eq!(finder.shortest_path_length("C", "A").unwrap(), -1);
//! ```

pub mod compose;
mod error;
mod finder;
mod graph;
pub mod load;
mod registry;
pub mod traversal;

pub use error::{Error, Result};
pub use finder::{BuildOptions, EdgeMode, PathFinder};
pub use graph::{Graph, VertexId};
pub use load::{load_path_finder, LoadError};
pub use registry::NameRegistry;
pub use traversal::{shortest_path, shortest_path_search, PathSearch};
