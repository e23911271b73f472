use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by the registry, the graph store and the query facade.
///
/// "No path" is not an error: queries return an empty path (or length -1).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown label '{0}'")]
    UnknownLabel(String),

    #[error("unknown vertex id {0}")]
    UnknownId(VertexId),

    #[error("vertex {0} was never allocated")]
    UnknownVertex(VertexId),

    #[error("duplicate label '{label}' (already declared as vertex {existing})")]
    DuplicateLabel { label: String, existing: VertexId },

    #[error("edge '{from}' -> '{to}' references undeclared label '{missing}'")]
    UnknownLabelInEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("vertex limit of {} exceeded", VertexId::MAX as u64 + 1)]
    TooManyVertices,

    #[error("no labels registered")]
    EmptyRegistry,
}

pub type Result<T> = std::result::Result<T, Error>;
