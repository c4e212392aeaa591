use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a graph edge carries a negative cost.
    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeEdgeCost { from: NodeId, to: NodeId, cost: i32 },

    /// Raised when a node is not part of the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
