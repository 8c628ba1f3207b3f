//! Engine-level error type wrapping every subsystem error.

use thiserror::Error;

use dr_fault::FaultError;
use dr_graph::GraphError;
use dr_motion::MotionError;
use dr_plan::PlanError;

/// Errors produced by `dr-sim`.
///
/// Subsystem errors pass through transparently so callers can match on the
/// underlying kind without caring which layer raised it.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// An operation needed an active plan (fault injection, motion start)
    /// but none has been made, or the last one was cleared.
    #[error("no active plan")]
    NoActivePlan,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Fault(#[from] FaultError),

    #[error(transparent)]
    Motion(#[from] MotionError),
}

pub type EngineResult<T> = Result<T, EngineError>;
