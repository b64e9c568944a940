//! Level session state
//!
//! One session per level definition. It owns every entity of the level and
//! is mutated in place by [`tick`](super::tick::tick).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::Pose;
use super::level::LevelDef;
use super::obstacle::{ObstacleKind, ObstacleSet};
use super::pursuit::{Facing, Pursuer};
use super::rect::Rect;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Lifecycle of one attempt at a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Normal play
    Active,
    /// Goal reached; terminal until the next hard reset
    Won,
    /// Health ran out; terminal until the next hard reset
    LivesExhausted,
}

/// Discrete things that happened during a tick, for sound and HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Jumped,
    Fired,
    /// A projectile hit the shadow and froze it
    ShadowHit,
    /// A key was picked up and its door unlocked
    KeyCollected { door: usize },
    /// Fell out of the level or was caught; the level was reset
    Died { health_left: u32 },
    Won,
    /// Died with no health left
    Lost,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pose: Pose,
    pub facing: Facing,
    pub size: Vec2,
    /// Set by the last tick's contact resolution
    pub grounded: bool,
    /// Ticks until fire is accepted again
    pub fire_cooldown: u32,
}

impl Player {
    pub fn spawn(pos: Vec2, size: Vec2) -> Self {
        Self {
            pose: Pose::at_rest(pos),
            facing: Facing::Right,
            size,
            grounded: false,
            fire_cooldown: 0,
        }
    }

    /// Box anchored mid-bottom at the player's position
    pub fn rect(&self) -> Rect {
        Rect::from_midbottom(self.pose.pos, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    /// Centre
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// A key and the obstacle id of the door it opens
#[derive(Debug, Clone)]
pub struct KeyDoor {
    pub key: Rect,
    pub door: usize,
    pub used: bool,
}

#[derive(Debug, Clone)]
pub struct LevelSession {
    pub(crate) def: LevelDef,
    pub(crate) tuning: Tuning,
    pub(crate) player: Player,
    pub(crate) pursuer: Pursuer,
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) obstacles: ObstacleSet,
    pub(crate) keys: Vec<KeyDoor>,
    pub(crate) health: u32,
    pub(crate) won: bool,
    /// Entered at least once since the last hard reset
    pub(crate) dirty: bool,
    pub(crate) time_ticks: u64,
    next_id: u32,
}

impl LevelSession {
    /// Validate `def` and build a fresh session
    pub fn new(def: LevelDef, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        def.validate(&tuning)?;

        let mut obstacles = ObstacleSet::new();
        for obstacle in &def.obstacles {
            obstacles.push(obstacle.kind, obstacle.rect);
        }
        let keys = def
            .keys
            .iter()
            .map(|pair| KeyDoor {
                key: pair.key,
                door: obstacles.push(ObstacleKind::Door, pair.door),
                used: false,
            })
            .collect();

        Ok(Self {
            player: Player::spawn(def.spawn, tuning.player_size),
            pursuer: Pursuer::new(def.pursuit_lag, tuning.player_size),
            projectiles: Vec::new(),
            obstacles,
            keys,
            health: def.health,
            won: false,
            dirty: false,
            time_ticks: 0,
            next_id: 1,
            def,
            tuning,
        })
    }

    /// Soft reset after a death: entities, keys and doors go back to their
    /// initial state. Health, won and dirty are kept.
    pub fn reset(&mut self) {
        self.player = Player::spawn(self.def.spawn, self.tuning.player_size);
        self.pursuer.reset();
        self.projectiles.clear();
        for key in &mut self.keys {
            key.used = false;
        }
        self.obstacles.activate_all();
    }

    /// Full reinitialisation: soft reset plus full health, not won, not dirty
    pub fn hard_reset(&mut self) {
        self.reset();
        self.health = self.def.health;
        self.won = false;
        self.dirty = false;
        self.time_ticks = 0;
    }

    /// Start an attempt. Re-entering a level that was played before wipes it.
    pub fn enter(&mut self) {
        if self.dirty {
            self.hard_reset();
        }
        self.dirty = true;
        log::info!(
            "entering level '{}' (health {}, shadow lag {} ticks)",
            self.def.name,
            self.health,
            self.pursuer.lag()
        );
    }

    pub fn status(&self) -> SessionStatus {
        if self.won {
            SessionStatus::Won
        } else if self.health == 0 {
            SessionStatus::LivesExhausted
        } else {
            SessionStatus::Active
        }
    }

    /// Allocate a projectile id
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn def(&self) -> &LevelDef {
        &self.def
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn keys(&self) -> &[KeyDoor] {
        &self.keys
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
