//! `dr-plan` — shortest-path planning over a [`dr_graph::Graph`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`route`]   | `Route` — planned node sequence + total distance    |
//! | [`planner`] | `Planner` trait, `DijkstraPlanner`, `ShortestPaths` |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                        |
//!
//! # Multi-waypoint plans
//!
//! A plan is a chain of legs: source → first destination → second
//! destination → … .  Each leg is an independent single-source Dijkstra run;
//! legs are stitched into one [`Route`] with the shared junction node
//! appearing exactly once.  An unreachable leg target aborts the whole plan
//! — no partial route ever escapes.

pub mod error;
pub mod planner;
pub mod route;


pub use error::{PlanError, PlanResult};
pub use planner::{DijkstraPlanner, Planner, ShortestPaths};
pub use route::Route;
