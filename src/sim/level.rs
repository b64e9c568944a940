//! Static level layout data
//!
//! Levels arrive as plain data (built in or parsed from JSON) and are checked
//! once, up front, so a malformed level never reaches the tick loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use super::rect::Rect;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Longest shadow delay a level may ask for (ten minutes at 60 Hz)
pub const MAX_PURSUIT_LAG: u32 = 60 * 60 * 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDef {
    #[serde(default)]
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl ObstacleDef {
    pub fn new(kind: ObstacleKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind,
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// A key pickup and the door it opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDoorDef {
    pub key: Rect,
    pub door: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Horizontal extent; x runs from 0 to `width`
    pub width: f32,
    /// Falling below this y is fatal. Also the level's vertical extent.
    pub floor_y: f32,
    /// Player start, mid-bottom anchored
    pub spawn: Vec2,
    pub goal: Rect,
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub keys: Vec<KeyDoorDef>,
    /// Ticks the shadow trails the player
    pub pursuit_lag: u32,
    /// Retries available per attempt
    pub health: u32,
}

impl LevelDef {
    /// Parse a JSON array of levels
    pub fn list_from_json(json: &str) -> Result<Vec<LevelDef>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Level extent used for projectile culling
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.floor_y)
    }

    pub fn spawn_rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_midbottom(self.spawn, tuning.player_size)
    }

    /// Reject levels that cannot be played
    pub fn validate(&self, tuning: &Tuning) -> Result<(), ConfigError> {
        let level = || self.name.clone();

        if self.pursuit_lag == 0 {
            return Err(ConfigError::ZeroPursuitLag { level: level() });
        }
        if self.pursuit_lag > MAX_PURSUIT_LAG {
            return Err(ConfigError::PursuitLagTooLong {
                level: level(),
                lag: self.pursuit_lag,
                max: MAX_PURSUIT_LAG,
            });
        }
        if self.health == 0 {
            return Err(ConfigError::ZeroHealth { level: level() });
        }
        if !(self.width > 0.0 && self.floor_y > 0.0) {
            return Err(ConfigError::InvalidExtent {
                level: level(),
                width: self.width,
                floor_y: self.floor_y,
            });
        }

        let degenerate = |what: String| ConfigError::DegenerateRect {
            level: level(),
            what,
        };
        if !self.goal.is_valid() {
            return Err(degenerate("goal".to_string()));
        }
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.rect.is_valid() {
                return Err(degenerate(format!("obstacle {}", i)));
            }
        }
        for (i, pair) in self.keys.iter().enumerate() {
            if !pair.key.is_valid() {
                return Err(degenerate(format!("key {}", i)));
            }
            if !pair.door.is_valid() {
                return Err(degenerate(format!("door {}", i)));
            }
        }

        let half_width = tuning.player_size.x / 2.0;
        let spawn_ok = self.spawn.x.is_finite()
            && self.spawn.y.is_finite()
            && self.spawn.x >= half_width
            && self.spawn.x <= self.width - half_width
            && self.spawn.y <= self.floor_y;
        if !spawn_ok {
            return Err(ConfigError::SpawnOutOfBounds {
                level: level(),
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }

        let spawn = self.spawn_rect(tuning);
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if spawn.intersects(&obstacle.rect) {
                return Err(ConfigError::SpawnInsideObstacle {
                    level: level(),
                    what: format!("obstacle {}", i),
                });
            }
        }
        for (i, pair) in self.keys.iter().enumerate() {
            if spawn.intersects(&pair.door) {
                return Err(ConfigError::SpawnInsideObstacle {
                    level: level(),
                    what: format!("door {}", i),
                });
            }
        }
        if spawn.intersects(&self.goal) {
            return Err(ConfigError::GoalAtSpawn { level: level() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_level() -> LevelDef {
        LevelDef {
            name: "flat".to_string(),
            width: 800.0,
            floor_y: 500.0,
            spawn: Vec2::new(40.0, 400.0),
            goal: Rect::new(740.0, 360.0, 30.0, 40.0),
            obstacles: vec![ObstacleDef::new(ObstacleKind::Normal, 0.0, 400.0, 800.0, 20.0)],
            keys: Vec::new(),
            pursuit_lag: 90,
            health: 3,
        }
    }

    #[test]
    fn test_valid_level() {
        assert!(flat_level().validate(&Tuning::default()).is_ok());
    }

    #[test]
    fn test_zero_lag_rejected() {
        let level = LevelDef {
            pursuit_lag: 0,
            ..flat_level()
        };
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::ZeroPursuitLag { .. })
        ));
    }

    #[test]
    fn test_huge_lag_from_json_rejected() {
        let mut level = serde_json::to_value(flat_level()).expect("serialize");
        level["pursuit_lag"] = serde_json::json!(u32::MAX);
        let json = serde_json::to_string(&vec![level]).expect("serialize");
        let levels = LevelDef::list_from_json(&json).expect("parse");
        assert!(matches!(
            levels[0].validate(&Tuning::default()),
            Err(ConfigError::PursuitLagTooLong { lag: u32::MAX, .. })
        ));
        assert!(crate::sim::LevelSession::new(levels[0].clone(), Tuning::default()).is_err());

        let longest = LevelDef {
            pursuit_lag: MAX_PURSUIT_LAG,
            ..flat_level()
        };
        assert!(longest.validate(&Tuning::default()).is_ok());
    }

    #[test]
    fn test_zero_health_rejected() {
        let level = LevelDef {
            health: 0,
            ..flat_level()
        };
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::ZeroHealth { .. })
        ));
    }

    #[test]
    fn test_goal_on_spawn_rejected() {
        let level = LevelDef {
            goal: Rect::new(30.0, 380.0, 30.0, 20.0),
            ..flat_level()
        };
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::GoalAtSpawn { .. })
        ));
    }

    #[test]
    fn test_spawn_inside_wall_rejected() {
        let mut level = flat_level();
        level
            .obstacles
            .push(ObstacleDef::new(ObstacleKind::Cement, 30.0, 300.0, 20.0, 100.0));
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::SpawnInsideObstacle { .. })
        ));
    }

    #[test]
    fn test_spawn_outside_rejected() {
        let level = LevelDef {
            spawn: Vec2::new(900.0, 400.0),
            ..flat_level()
        };
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::SpawnOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_degenerate_door_rejected() {
        let mut level = flat_level();
        level.keys.push(KeyDoorDef {
            key: Rect::new(300.0, 370.0, 10.0, 10.0),
            door: Rect::new(400.0, 300.0, 0.0, 100.0),
        });
        assert!(matches!(
            level.validate(&Tuning::default()),
            Err(ConfigError::DegenerateRect { .. })
        ));
    }

    #[test]
    fn test_parse_json_list() {
        let json = r#"[{
            "name": "tiny",
            "width": 400,
            "floor_y": 500,
            "spawn": [40, 400],
            "goal": { "x": 350, "y": 360, "w": 30, "h": 40 },
            "obstacles": [
                { "kind": "ice", "rect": { "x": 0, "y": 400, "w": 400, "h": 20 } }
            ],
            "pursuit_lag": 60,
            "health": 2
        }]"#;
        let levels = LevelDef::list_from_json(json).expect("parse");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].obstacles[0].kind, ObstacleKind::Ice);
        assert!(levels[0].keys.is_empty());
        assert!(levels[0].validate(&Tuning::default()).is_ok());
    }
}
