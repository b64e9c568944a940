//! Read-only frame snapshot for the renderer

use serde::Serialize;

use super::obstacle::ObstacleKind;
use super::pursuit::Facing;
use super::rect::Rect;
use super::state::{LevelSession, SessionStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub rect: Rect,
    pub facing: Facing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub level: String,
    pub tick: u64,
    pub player: EntityView,
    /// `None` while the shadow is still waiting off-screen
    pub shadow: Option<EntityView>,
    pub projectiles: Vec<Rect>,
    /// Active obstacles only; unlocked doors are absent
    pub obstacles: Vec<ObstacleView>,
    /// Keys not yet picked up
    pub keys: Vec<Rect>,
    pub goal: Rect,
    pub health: u32,
    pub status: SessionStatus,
    /// Left edge of the visible window in level coordinates
    pub camera_x: f32,
}

/// Horizontal scroll that keeps `focus_x` centred without showing past
/// either end of the level
pub fn camera_x(focus_x: f32, level_width: f32, viewport_width: f32) -> f32 {
    let max_scroll = (level_width - viewport_width).max(0.0);
    (focus_x - viewport_width / 2.0).clamp(0.0, max_scroll)
}

impl LevelSession {
    pub fn view(&self) -> FrameView {
        let player = &self.player;
        FrameView {
            level: self.def.name.clone(),
            tick: self.time_ticks,
            player: EntityView {
                rect: player.rect(),
                facing: player.facing,
            },
            shadow: self.pursuer.current().and_then(|record| {
                self.pursuer.rect().map(|rect| EntityView {
                    rect,
                    facing: record.facing,
                })
            }),
            projectiles: self.projectiles.iter().map(|p| p.rect()).collect(),
            obstacles: self
                .obstacles
                .active()
                .map(|o| ObstacleView {
                    kind: o.kind(),
                    rect: *o.rect(),
                })
                .collect(),
            keys: self
                .keys
                .iter()
                .filter(|k| !k.used)
                .map(|k| k.key)
                .collect(),
            goal: self.def.goal,
            health: self.health,
            status: self.status(),
            camera_x: camera_x(
                player.pose.pos.x,
                self.def.width,
                self.tuning.viewport_width,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_clamps_to_level() {
        assert_eq!(camera_x(50.0, 1200.0, 400.0), 0.0);
        assert_eq!(camera_x(600.0, 1200.0, 400.0), 400.0);
        assert_eq!(camera_x(1180.0, 1200.0, 400.0), 800.0);
        // Level narrower than the viewport never scrolls
        assert_eq!(camera_x(300.0, 300.0, 400.0), 0.0);
    }
}
