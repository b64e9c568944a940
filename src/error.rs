//! Construction-time errors
//!
//! The simulation tick never fails. Everything that can go wrong is caught
//! while loading tuning or building a level session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read level data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning: {0}")]
    InvalidTuning(&'static str),
    #[error("level list is empty")]
    NoLevels,
    #[error("level '{level}': pursuit lag must be at least one tick")]
    ZeroPursuitLag { level: String },
    #[error("level '{level}': pursuit lag {lag} exceeds the maximum of {max} ticks")]
    PursuitLagTooLong { level: String, lag: u32, max: u32 },
    #[error("level '{level}': health must be at least 1")]
    ZeroHealth { level: String },
    #[error("level '{level}': width and floor must be positive, got {width} x {floor_y}")]
    InvalidExtent {
        level: String,
        width: f32,
        floor_y: f32,
    },
    #[error("level '{level}': {what} has a degenerate rectangle")]
    DegenerateRect { level: String, what: String },
    #[error("level '{level}': spawn ({x}, {y}) lies outside the level")]
    SpawnOutOfBounds { level: String, x: f32, y: f32 },
    #[error("level '{level}': spawn overlaps {what}")]
    SpawnInsideObstacle { level: String, what: String },
    #[error("level '{level}': goal overlaps the spawn point")]
    GoalAtSpawn { level: String },
}
