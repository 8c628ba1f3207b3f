//! Fault-subsystem error type.

use thiserror::Error;

/// Errors produced by `dr-fault`.
#[derive(Debug, Error, PartialEq)]
pub enum FaultError {
    /// Fault injection needs a route with at least one edge to break.
    #[error("no active route to inject a fault into")]
    NoActiveRoute,
}

pub type FaultResult<T> = Result<T, FaultError>;
