//! Axis-aware collision resolution against static rectangles
//!
//! The body's box is pushed one tick along its current vertical velocity (the
//! "probe"). Every active obstacle the probe touches is classified into at
//! most one contact side, checked in this order:
//!
//! 1. top    - the body is moving down (or resting) and its bottom is no more
//!             than one tick of vertical velocity below the obstacle's top:
//!             it is standing on it
//! 2. bottom - the body is moving up (or resting) and its top is no more than
//!             one tick of vertical velocity above the obstacle's bottom:
//!             it hits its head
//! 3. right  - the probe's right edge is inside the obstacle
//! 4. left   - the probe's left edge is inside the obstacle
//!
//! The resulting [`Contacts`] clamp velocity before integration and position
//! after it.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::tuning::SurfaceTuning;

/// Slack when comparing the body's edge against an obstacle edge
const CONTACT_EPSILON: f32 = 1e-3;

/// Contact side for one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Top,
    Bottom,
    Right,
    Left,
}

/// Surface the body is standing on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub obstacle: usize,
    /// y of the surface; the body's bottom is snapped here
    pub top: f32,
    pub resistance: f32,
}

/// Accumulated clamps for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    pub ground: Option<Ground>,
    /// Smallest allowed position y (body bottom) after a head hit
    pub min_y: Option<f32>,
    /// Largest allowed position x (body centre) when blocked on the right
    pub max_x: Option<f32>,
    /// Smallest allowed position x (body centre) when blocked on the left
    pub min_x: Option<f32>,
}

impl Contacts {
    pub fn grounded(&self) -> bool {
        self.ground.is_some()
    }

    /// Clamp velocity before integration: no downward carry-over while
    /// grounded, no upward motion into a ceiling, no horizontal motion into a
    /// blocking side.
    pub fn constrain_velocity(&self, vel: &mut Vec2) {
        if self.ground.is_some() {
            vel.y = vel.y.min(0.0);
        }
        if self.min_y.is_some() {
            vel.y = vel.y.max(0.0);
        }
        if self.max_x.is_some() {
            vel.x = vel.x.min(0.0);
        }
        if self.min_x.is_some() {
            vel.x = vel.x.max(0.0);
        }
    }

    /// Clamp a mid-bottom anchored position after integration.
    ///
    /// `snap_to_ground` is false on the tick a jump starts.
    pub fn constrain_position(&self, pos: &mut Vec2, snap_to_ground: bool) {
        if let (Some(ground), true) = (self.ground, snap_to_ground) {
            pos.y = ground.top;
        }
        if let Some(max_x) = self.max_x {
            pos.x = pos.x.min(max_x);
        }
        if let Some(min_x) = self.min_x {
            pos.x = pos.x.max(min_x);
        }
        if let Some(min_y) = self.min_y {
            pos.y = pos.y.max(min_y);
        }
    }
}

/// The body's box advanced by its current vertical velocity
#[inline]
pub fn probe(body: &Rect, vel: Vec2) -> Rect {
    body.translate(Vec2::new(0.0, vel.y))
}

/// Classify contact between a body moving at `vel_y` and one obstacle
pub fn classify(body: &Rect, vel_y: f32, obstacle: &Rect) -> Option<Contact> {
    let probe = probe(body, Vec2::new(0.0, vel_y));
    if !probe.touches(obstacle) {
        return None;
    }

    // Standing on it: not moving up, bottom within one tick of velocity of
    // the top (gravity can sink a landing body by less than that), and the
    // probe's bottom edge lies across it.
    if vel_y >= 0.0
        && body.bottom() <= obstacle.top() + vel_y.max(CONTACT_EPSILON)
        && probe.overlaps_x(obstacle)
    {
        return Some(Contact::Top);
    }

    if vel_y <= 0.0
        && body.top() >= obstacle.bottom() + vel_y.min(-CONTACT_EPSILON)
        && probe.overlaps_x(obstacle)
    {
        return Some(Contact::Bottom);
    }

    if probe.overlaps_y(obstacle) {
        if probe.right() >= obstacle.left() && probe.left() < obstacle.left() {
            return Some(Contact::Right);
        }
        if probe.left() <= obstacle.right() && probe.right() > obstacle.right() {
            return Some(Contact::Left);
        }
    }

    None
}

/// Resolve a body against obstacles, in the order given.
///
/// When several obstacles classify as ground the last one wins, so callers
/// must pass obstacles in a stable order. Side and ceiling clamps keep the
/// most restrictive bound.
pub fn resolve<'a, I>(body: &Rect, vel: Vec2, obstacles: I, surfaces: &SurfaceTuning) -> Contacts
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let half_width = body.w / 2.0;
    let mut contacts = Contacts::default();

    for obstacle in obstacles {
        let rect = obstacle.rect();
        match classify(body, vel.y, rect) {
            Some(Contact::Top) => {
                contacts.ground = Some(Ground {
                    obstacle: obstacle.id(),
                    top: rect.top(),
                    resistance: obstacle.resistance_factor(surfaces),
                });
            }
            Some(Contact::Bottom) => {
                let floor = rect.bottom() + body.h;
                contacts.min_y = Some(contacts.min_y.map_or(floor, |y| y.max(floor)));
            }
            Some(Contact::Right) => {
                let ceiling = rect.left() - half_width;
                contacts.max_x = Some(contacts.max_x.map_or(ceiling, |x| x.min(ceiling)));
            }
            Some(Contact::Left) => {
                let floor = rect.right() + half_width;
                contacts.min_x = Some(contacts.min_x.map_or(floor, |x| x.max(floor)));
            }
            None => {}
        }
    }

    contacts
}
