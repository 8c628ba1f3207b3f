//! Engine configuration.

use dr_motion::BASE_TICKS;

/// Global configuration for a [`RoutingEngine`][crate::RoutingEngine].
///
/// Plain data; construct with struct literal syntax and `..Default::default()`
/// for the fields you don't care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Root seed.  Each randomised subsystem (graph generation, fault
    /// injection) gets its own stream derived from this, so a run replays
    /// identically for the same seed and call sequence.
    pub seed: u64,

    /// Per-leg tick budget at playback speed 1.0.
    pub base_ticks: u32,

    /// Whether edge mutations add/remove single arcs (`true`) or mirrored
    /// pairs (`false`).  Applies uniformly to every edge the engine touches.
    pub directed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: 0,
            base_ticks: BASE_TICKS,
            directed: false,
        }
    }
}
