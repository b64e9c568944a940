//! Shadow Runner - a side-scrolling platformer where your own past chases you
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collision, shadow replay, level sessions)
//! - `progression`: Level sequencing, retries and victory
//! - `levels`: Built-in level layouts
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Seeded input source for demos and soak runs

pub mod autopilot;
pub mod error;
pub mod levels;
pub mod progression;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use progression::{Campaign, CampaignPhase};
pub use tuning::Tuning;

/// Engine-level constants that are not gameplay tuning
pub mod consts {
    /// Canonical tick rate the clock should drive `sim::tick` at
    pub const TICK_RATE_HZ: u32 = 60;
    /// Upper bound on ticks for a headless demo run (10 minutes at 60 Hz)
    pub const DEMO_MAX_TICKS: u64 = 60 * 60 * 10;
}
