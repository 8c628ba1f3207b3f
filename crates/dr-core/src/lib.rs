//! `dr-core` — foundational types for the delivery routing engine.
//!
//! This crate is a dependency of every other `dr-*` crate.  It intentionally
//! has no `dr-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `NodeId`                                      |
//! | [`point`] | `Point` — canvas position, heading, lerp      |
//! | [`rng`]   | `EngineRng` — seeded deterministic RNG wrapper |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::NodeId;
pub use point::Point;
pub use rng::EngineRng;
