//! Fixed timestep simulation tick
//!
//! One call advances a level session by exactly one frame. Within a tick the
//! player is resolved first, then the shadow records and replays, then
//! projectiles move, and only then are pickups, deaths and the goal checked,
//! so every consequence is computed from the same pose the frame shows.

use glam::Vec2;

use super::collision::resolve;
use super::kinematics::{Support, integrate};
use super::pursuit::Facing;
use super::state::{LevelSession, Projectile, SessionEvent, SessionStatus};

/// Logical controls polled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
}

/// Anything that can answer "is this control held right now"
pub trait InputSource {
    fn is_held(&self, control: Control) -> bool;
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
}

impl TickInput {
    /// Snapshot every control from `source`
    pub fn poll<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            left: source.is_held(Control::MoveLeft),
            right: source.is_held(Control::MoveRight),
            jump: source.is_held(Control::Jump),
            fire: source.is_held(Control::Fire),
        }
    }

    /// Horizontal direction: -1, 0 or 1. Opposite keys cancel.
    pub fn drive(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

impl InputSource for TickInput {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
            Control::Jump => self.jump,
            Control::Fire => self.fire,
        }
    }
}

/// Advance the session by one fixed timestep.
///
/// Does nothing once the session is won or out of health; the caller decides
/// what happens next.
pub fn tick(session: &mut LevelSession, input: &TickInput) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    if session.status() != SessionStatus::Active {
        return events;
    }

    session.time_ticks += 1;

    if step_player(session, input) {
        events.push(SessionEvent::Jumped);
    }

    let player = &session.player;
    session.pursuer.record(player.pose.pos, player.facing);
    session.pursuer.advance();

    fire(session, input, &mut events);
    step_projectiles(session, &mut events);

    collect_keys(session, &mut events);

    if check_death(session, &mut events) && session.health == 0 {
        return events;
    }

    if session.player.rect().intersects(&session.def.goal) {
        session.won = true;
        log::info!(
            "level '{}' won after {} ticks",
            session.def.name,
            session.time_ticks
        );
        events.push(SessionEvent::Won);
    }

    events
}

/// Move the player one tick against the active obstacles.
///
/// Returns true if a jump started this tick.
fn step_player(session: &mut LevelSession, input: &TickInput) -> bool {
    let tuning = &session.tuning;
    let player = &mut session.player;

    let drive = input.drive();
    if drive < 0.0 {
        player.facing = Facing::Left;
    } else if drive > 0.0 {
        player.facing = Facing::Right;
    }

    player.pose.acc = Vec2::ZERO;
    let mut contacts = resolve(
        &player.rect(),
        player.pose.vel,
        session.obstacles.active(),
        &tuning.surfaces,
    );
    contacts.constrain_velocity(&mut player.pose.vel);

    let mut jumped = false;
    let support = match contacts.ground {
        Some(ground) => {
            if input.jump {
                player.pose.vel.y = -tuning.jump_speed;
                // Resolve along the jump velocity so a low ceiling stops it this tick
                let overhead = resolve(
                    &player.rect(),
                    player.pose.vel,
                    session.obstacles.active(),
                    &tuning.surfaces,
                );
                contacts.min_y = overhead.min_y;
                contacts.constrain_velocity(&mut player.pose.vel);
                jumped = player.pose.vel.y < 0.0;
            }
            Support::Grounded {
                resistance: ground.resistance,
            }
        }
        None => Support::Airborne,
    };

    player.pose = integrate(&player.pose, drive, support, tuning);
    contacts.constrain_position(&mut player.pose.pos, !jumped);
    player.grounded = contacts.grounded();

    // Level edges behave as walls
    let half_width = player.size.x / 2.0;
    let max_x = session.def.width - half_width;
    let pose = &mut player.pose;
    if pose.pos.x < half_width {
        pose.pos.x = half_width;
        pose.vel.x = pose.vel.x.max(0.0);
    } else if pose.pos.x > max_x {
        pose.pos.x = max_x;
        pose.vel.x = pose.vel.x.min(0.0);
    }

    jumped
}

/// Spawn a projectile if fire is held and the cooldown has expired
fn fire(session: &mut LevelSession, input: &TickInput, events: &mut Vec<SessionEvent>) {
    if session.player.fire_cooldown > 0 {
        session.player.fire_cooldown -= 1;
    }
    if !input.fire || session.player.fire_cooldown > 0 {
        return;
    }

    let id = session.next_entity_id();
    let tuning = &session.tuning;
    let player = &mut session.player;
    session.projectiles.push(Projectile {
        id,
        pos: player.rect().center(),
        vel: Vec2::new(player.facing.sign() * tuning.projectile_speed, 0.0),
        size: tuning.projectile_size,
    });
    player.fire_cooldown = tuning.fire_cooldown_ticks;
    events.push(SessionEvent::Fired);
}

/// Move projectiles, freeze the shadow on a hit, drop anything out of bounds
fn step_projectiles(session: &mut LevelSession, events: &mut Vec<SessionEvent>) {
    let bounds = session.def.bounds();
    let shadow = session.pursuer.rect();
    let mut hits = 0;

    session.projectiles.retain_mut(|projectile| {
        projectile.pos += projectile.vel;
        let rect = projectile.rect();
        if shadow.is_some_and(|shadow| shadow.intersects(&rect)) {
            hits += 1;
            return false;
        }
        bounds.intersects(&rect)
    });

    for _ in 0..hits {
        session.pursuer.freeze(session.tuning.freeze_ticks);
        events.push(SessionEvent::ShadowHit);
    }
}

/// Take any unused key the player overlaps and unlock its door
fn collect_keys(session: &mut LevelSession, events: &mut Vec<SessionEvent>) {
    let body = session.player.rect();
    for key in session.keys.iter_mut().filter(|key| !key.used) {
        if body.intersects(&key.key) {
            key.used = true;
            session.obstacles.deactivate(key.door);
            log::debug!("key collected, door {} unlocked", key.door);
            events.push(SessionEvent::KeyCollected { door: key.door });
        }
    }
}

/// Fall or capture: lose one health and soft-reset. Returns true on death.
fn check_death(session: &mut LevelSession, events: &mut Vec<SessionEvent>) -> bool {
    let body = session.player.rect();
    let fell = session.player.pose.pos.y > session.def.floor_y;
    let caught = session
        .pursuer
        .rect()
        .is_some_and(|shadow| shadow.intersects(&body));
    if !fell && !caught {
        return false;
    }

    session.health = session.health.saturating_sub(1);
    session.reset();
    log::debug!(
        "died in '{}' ({}), {} health left",
        session.def.name,
        if fell { "fell" } else { "caught" },
        session.health
    );
    events.push(SessionEvent::Died {
        health_left: session.health,
    });

    if session.health == 0 {
        log::info!("level '{}' lost", session.def.name);
        events.push(SessionEvent::Lost);
    }
    true
}
