//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per frame
//! - Stable iteration order (obstacles in definition order, projectiles by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod level;
pub mod obstacle;
pub mod pursuit;
pub mod rect;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Contact, Contacts, Ground, classify, resolve};
pub use kinematics::{Pose, Support, integrate};
pub use level::{KeyDoorDef, LevelDef, ObstacleDef};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSet};
pub use pursuit::{Facing, MovementRecord, Pursuer};
pub use rect::Rect;
pub use state::{KeyDoor, LevelSession, Player, Projectile, SessionEvent, SessionStatus};
pub use tick::{Control, InputSource, TickInput, tick};
pub use view::{EntityView, FrameView, ObstacleView};
