//! Motion-subsystem error type.

use thiserror::Error;

/// Errors produced by `dr-motion`.
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    /// A single-node route has nothing to animate.
    #[error("route has fewer than two nodes, nothing to animate")]
    EmptyRoute,

    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
}

pub type MotionResult<T> = Result<T, MotionError>;
