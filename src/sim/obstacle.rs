//! Obstacle registry
//!
//! Obstacles are static rectangles with a surface kind. Their shape never
//! changes after construction; the only mutable state is whether each one is
//! in the active set (an unlocked door is inactive).

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::SurfaceTuning;

/// Surface kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    #[default]
    Normal,
    /// Sticky: decelerates harder than normal ground
    Cement,
    /// Slippery: decelerates less than normal ground
    Ice,
    /// Solid while locked, removed from the active set once its key is taken
    Door,
}

impl ObstacleKind {
    /// Horizontal resistance multiplier for this surface
    pub fn resistance_factor(&self, surfaces: &SurfaceTuning) -> f32 {
        match self {
            ObstacleKind::Normal => surfaces.normal,
            ObstacleKind::Cement => surfaces.cement,
            ObstacleKind::Ice => surfaces.ice,
            ObstacleKind::Door => surfaces.door,
        }
    }
}

/// A static obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    id: usize,
    kind: ObstacleKind,
    rect: Rect,
}

impl Obstacle {
    pub fn new(id: usize, kind: ObstacleKind, rect: Rect) -> Self {
        Self { id, kind, rect }
    }

    /// Index in the registry (definition order)
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn resistance_factor(&self, surfaces: &SurfaceTuning) -> f32 {
        self.kind.resistance_factor(surfaces)
    }
}

/// All obstacles of one level plus their active flags.
///
/// Iteration is always in definition order so contact resolution is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    active: Vec<bool>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an obstacle (active) and return its id
    pub fn push(&mut self, kind: ObstacleKind, rect: Rect) -> usize {
        let id = self.obstacles.len();
        self.obstacles.push(Obstacle::new(id, kind, rect));
        self.active.push(true);
        id
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    pub fn is_active(&self, id: usize) -> bool {
        self.active.get(id).copied().unwrap_or(false)
    }

    /// Remove from the active set. Returns false if it was already inactive.
    pub fn deactivate(&mut self, id: usize) -> bool {
        match self.active.get_mut(id) {
            Some(flag) if *flag => {
                *flag = false;
                true
            }
            _ => false,
        }
    }

    /// Restore every obstacle to the active set (relocks doors)
    pub fn activate_all(&mut self) {
        self.active.iter_mut().for_each(|flag| *flag = true);
    }

    /// Active obstacles in definition order
    pub fn active(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles
            .iter()
            .zip(&self.active)
            .filter_map(|(obstacle, &active)| active.then_some(obstacle))
    }

    /// Every obstacle regardless of active state
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }
}
