//! Planning-subsystem error type.

use thiserror::Error;

use dr_core::NodeId;
use dr_graph::GraphError;

/// Errors produced by `dr-plan`.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    /// A required leg target has no path from its leg start.  The whole
    /// multi-waypoint plan is aborted; no partial route is returned.
    #[error("no path to {target} from {from}")]
    Unreachable { target: NodeId, from: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
