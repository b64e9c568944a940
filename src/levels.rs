//! Built-in level layouts
//!
//! Screen space, y down. Every level keeps its spawn on the far left at
//! ground height 400 and its goal at the far right.

use glam::Vec2;

use crate::sim::obstacle::ObstacleKind::{Cement, Ice, Normal};
use crate::sim::{KeyDoorDef, LevelDef, ObstacleDef, Rect};

const GROUND_Y: f32 = 400.0;
const FLOOR_Y: f32 = 500.0;

fn goal_at(x: f32) -> Rect {
    Rect::new(x, GROUND_Y - 50.0, 30.0, 50.0)
}

/// Gaps and a raised ledge on plain ground
pub fn first_steps() -> LevelDef {
    LevelDef {
        name: "First Steps".to_string(),
        width: 1200.0,
        floor_y: FLOOR_Y,
        spawn: Vec2::new(40.0, GROUND_Y),
        goal: goal_at(1140.0),
        obstacles: vec![
            ObstacleDef::new(Normal, 0.0, GROUND_Y, 500.0, 20.0),
            ObstacleDef::new(Normal, 560.0, GROUND_Y, 300.0, 20.0),
            ObstacleDef::new(Normal, 620.0, 330.0, 80.0, 15.0),
            ObstacleDef::new(Normal, 920.0, GROUND_Y, 280.0, 20.0),
        ],
        keys: Vec::new(),
        pursuit_lag: 120,
        health: 3,
    }
}

/// Ice that won't let you stop, cement that won't let you run
pub fn cold_feet() -> LevelDef {
    LevelDef {
        name: "Cold Feet".to_string(),
        width: 1600.0,
        floor_y: FLOOR_Y,
        spawn: Vec2::new(40.0, GROUND_Y),
        goal: goal_at(1540.0),
        obstacles: vec![
            ObstacleDef::new(Ice, 0.0, GROUND_Y, 400.0, 20.0),
            ObstacleDef::new(Cement, 400.0, GROUND_Y, 300.0, 20.0),
            ObstacleDef::new(Normal, 760.0, 360.0, 120.0, 15.0),
            ObstacleDef::new(Ice, 940.0, GROUND_Y, 360.0, 20.0),
            ObstacleDef::new(Cement, 1300.0, GROUND_Y, 300.0, 20.0),
        ],
        keys: Vec::new(),
        pursuit_lag: 90,
        health: 3,
    }
}

/// The key sits on a ledge; the door blocks the only way to the goal
pub fn locked_out() -> LevelDef {
    LevelDef {
        name: "Locked Out".to_string(),
        width: 1400.0,
        floor_y: FLOOR_Y,
        spawn: Vec2::new(40.0, GROUND_Y),
        goal: goal_at(1320.0),
        obstacles: vec![
            ObstacleDef::new(Normal, 0.0, GROUND_Y, 1400.0, 20.0),
            ObstacleDef::new(Normal, 300.0, 330.0, 100.0, 15.0),
        ],
        keys: vec![KeyDoorDef {
            key: Rect::new(344.0, 300.0, 12.0, 12.0),
            door: Rect::new(900.0, 250.0, 20.0, 150.0),
        }],
        pursuit_lag: 75,
        health: 5,
    }
}

/// The built-in campaign, in play order
pub fn builtin() -> Vec<LevelDef> {
    vec![first_steps(), cold_feet(), locked_out()]
}
