//! `dr-fault` — deliberate edge failure along an active route.
//!
//! Fault injection picks one edge the current route traverses, removes it
//! from the graph, and reports which edge died.  The caller then replans
//! with the route's original source and destination chain; if the removal
//! disconnected them, that replan fails with
//! [`Unreachable`](dr_plan::PlanError::Unreachable) and the failure is
//! surfaced — never silently papered over.
//!
//! # Crate layout
//!
//! | Module       | Contents                              |
//! |--------------|---------------------------------------|
//! | [`injector`] | `FaultInjector`, `EdgeFault`          |
//! | [`error`]    | `FaultError`, `FaultResult<T>`        |

pub mod error;
pub mod injector;

#[cfg(test)]
mod tests;

pub use error::{FaultError, FaultResult};
pub use injector::{EdgeFault, FaultInjector};
