//! `dr-graph` — the mutable weighted graph the planner routes over.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`graph`]    | `Graph` — adjacency store, edge mutation        |
//! | [`generate`] | `random_connected` — seeded random test graphs  |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                  |
//!
//! # Mutation discipline
//!
//! All mutation goes through `&mut self`, so the borrow checker enforces the
//! engine's single-writer rule: edges change between planning calls, never
//! while a plan is reading the adjacency.

pub mod error;
pub mod generate;
pub mod graph;


pub use error::{GraphError, GraphResult};
pub use generate::random_connected;
pub use graph::Graph;
