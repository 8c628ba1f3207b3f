//! Graph-subsystem error type.

use thiserror::Error;

use dr_core::NodeId;

/// Errors produced by `dr-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("self-loop rejected: both endpoints are {0}")]
    SelfLoop(NodeId),

    #[error("{0} is outside the current node set")]
    UnknownNode(NodeId),

    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;
