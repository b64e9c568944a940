//! Data-driven gameplay tuning
//!
//! Every physics and gameplay constant lives here and is passed into the
//! simulation explicitly, so tests can swap in alternate values.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Resistance factor per obstacle surface.
///
/// 1.0 is neutral, above 1.0 decelerates harder (sticky), below 1.0 slides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceTuning {
    pub normal: f32,
    pub cement: f32,
    pub ice: f32,
    pub door: f32,
}

impl Default for SurfaceTuning {
    fn default() -> Self {
        Self {
            normal: 1.0,
            cement: 1.5,
            ice: 0.5,
            door: 1.0,
        }
    }
}

impl SurfaceTuning {
    fn max_factor(&self) -> f32 {
        self.normal.max(self.cement).max(self.ice).max(self.door)
    }

    fn min_factor(&self) -> f32 {
        self.normal.min(self.cement).min(self.ice).min(self.door)
    }
}

/// Simulation constants, in units per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed tick rate the clock drives the simulation at
    pub tick_rate_hz: u32,
    /// Horizontal acceleration from a held direction key (units/tick²)
    pub input_accel: f32,
    /// Added to vertical velocity every airborne tick (units/tick²)
    pub gravity: f32,
    /// Upward speed set by a jump
    pub jump_speed: f32,
    /// Horizontal resistance coefficient on the ground (scaled by surface factor)
    pub ground_friction: f32,
    /// Horizontal resistance coefficient while airborne
    pub air_friction: f32,
    /// Vertical resistance coefficient
    pub vertical_resistance: f32,
    pub surfaces: SurfaceTuning,
    /// Player (and shadow) box size
    pub player_size: Vec2,
    pub projectile_speed: f32,
    pub projectile_size: Vec2,
    /// Ticks between shots while fire is held
    pub fire_cooldown_ticks: u32,
    /// Ticks the shadow pauses its replay after a projectile hit
    pub freeze_ticks: u32,
    /// Visible width for the side-scrolling camera
    pub viewport_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: crate::consts::TICK_RATE_HZ,
            input_accel: 0.5,
            gravity: 0.2,
            jump_speed: 6.0,
            ground_friction: -0.12,
            air_friction: -0.06,
            vertical_resistance: 0.0,
            surfaces: SurfaceTuning::default(),
            player_size: Vec2::new(30.0, 30.0),
            projectile_speed: 8.0,
            projectile_size: Vec2::new(10.0, 4.0),
            fire_cooldown_ticks: 15,
            freeze_ticks: 120,
            viewport_width: 400.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Seconds per tick at the configured rate
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::InvalidTuning("tick_rate_hz must be positive"));
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0) {
            return Err(ConfigError::InvalidTuning("player_size must be positive"));
        }
        if !(self.projectile_size.x > 0.0 && self.projectile_size.y > 0.0) {
            return Err(ConfigError::InvalidTuning("projectile_size must be positive"));
        }
        if self.surfaces.min_factor() < 0.0 {
            return Err(ConfigError::InvalidTuning("surface factors must be non-negative"));
        }
        // Resistance may stop motion within a tick but never reverse it
        if 1.0 + self.ground_friction * self.surfaces.max_factor() <= 0.0 {
            return Err(ConfigError::InvalidTuning("ground_friction too strong for surfaces"));
        }
        if 1.0 + self.air_friction <= 0.0 {
            return Err(ConfigError::InvalidTuning("air_friction too strong"));
        }
        if 1.0 + self.vertical_resistance <= 0.0 {
            return Err(ConfigError::InvalidTuning("vertical_resistance too strong"));
        }
        if self.viewport_width <= 0.0 {
            return Err(ConfigError::InvalidTuning("viewport_width must be positive"));
        }
        Ok(())
    }
}
