//! The shadow: a delayed replay of the player's own trajectory
//!
//! Every tick the player's pose is appended to a FIFO. The shadow waits out a
//! countdown (initially the pursuit lag), then pops exactly one record per
//! tick and stands on it, trailing the player by a constant number of ticks.
//! A projectile hit restarts the countdown without touching the queue, so the
//! shadow falls further behind and later resumes from where it stopped.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// One tick of player history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub pos: Vec2,
    pub facing: Facing,
}

#[derive(Debug, Clone)]
pub struct Pursuer {
    history: VecDeque<MovementRecord>,
    lag: u32,
    countdown: u32,
    /// Record being replayed; `None` until the first one is consumed
    current: Option<MovementRecord>,
    size: Vec2,
}

impl Pursuer {
    /// Callers guarantee `lag > 0` (checked at level construction)
    pub fn new(lag: u32, size: Vec2) -> Self {
        Self {
            history: VecDeque::new(),
            lag,
            countdown: lag,
            current: None,
            size,
        }
    }

    /// Append the player's pose for this tick
    pub fn record(&mut self, pos: Vec2, facing: Facing) {
        self.history.push_back(MovementRecord { pos, facing });
    }

    /// Run the countdown, or replay the oldest record once it has expired.
    ///
    /// Returns true if the shadow moved this tick.
    pub fn advance(&mut self) -> bool {
        if self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }
        match self.history.pop_front() {
            Some(record) => {
                self.current = Some(record);
                true
            }
            None => false,
        }
    }

    /// Pause consumption for `ticks`. Buffered history is kept.
    pub fn freeze(&mut self, ticks: u32) {
        log::debug!(
            "shadow frozen for {} ticks ({} records buffered)",
            ticks,
            self.history.len()
        );
        self.countdown = ticks;
    }

    /// Drop all history and go back to the initial inactive countdown
    pub fn reset(&mut self) {
        self.history.clear();
        self.countdown = self.lag;
        self.current = None;
    }

    /// Whether the shadow has started replaying (visible and lethal)
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&MovementRecord> {
        self.current.as_ref()
    }

    /// Box anchored mid-bottom at the replayed position
    pub fn rect(&self) -> Option<Rect> {
        self.current
            .map(|record| Rect::from_midbottom(record.pos, self.size))
    }

    pub fn lag(&self) -> u32 {
        self.lag
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Records waiting to be replayed
    pub fn buffered(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: Vec2 = Vec2::new(30.0, 30.0);

    fn pos(t: u32) -> Vec2 {
        Vec2::new(t as f32, 400.0 - t as f32 * 0.5)
    }

    #[test]
    fn test_inactive_during_initial_countdown() {
        let mut shadow = Pursuer::new(3, SIZE);
        for t in 1..=3 {
            shadow.record(pos(t), Facing::Right);
            assert!(!shadow.advance());
            assert!(!shadow.is_active());
            assert!(shadow.rect().is_none());
        }
        shadow.record(pos(4), Facing::Left);
        assert!(shadow.advance());
        assert_eq!(shadow.current().map(|r| r.pos), Some(pos(1)));
        assert_eq!(shadow.buffered(), 3);
    }

    #[test]
    fn test_steady_state_size_equals_lag() {
        let mut shadow = Pursuer::new(5, SIZE);
        for t in 1..=50 {
            shadow.record(pos(t), Facing::Right);
            shadow.advance();
            assert_eq!(shadow.buffered(), t.min(5) as usize);
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut shadow = Pursuer::new(2, SIZE);
        for t in 1..=6 {
            shadow.record(pos(t), Facing::Left);
            shadow.advance();
        }
        assert!(shadow.is_active());
        shadow.reset();
        assert!(!shadow.is_active());
        assert_eq!(shadow.buffered(), 0);
        assert_eq!(shadow.countdown(), 2);
    }

    #[test]
    fn test_rect_anchor_and_facing() {
        let mut shadow = Pursuer::new(1, SIZE);
        shadow.record(Vec2::new(50.0, 400.0), Facing::Left);
        shadow.advance();
        shadow.record(Vec2::new(60.0, 400.0), Facing::Right);
        shadow.advance();
        assert_eq!(shadow.rect(), Some(Rect::new(35.0, 370.0, 30.0, 30.0)));
        assert_eq!(shadow.current().map(|r| r.facing), Some(Facing::Left));
    }

    proptest! {
        #[test]
        fn prop_freeze_keeps_history_and_resumes_in_order(
            lag in 1u32..20,
            freeze in 1u32..30,
            active_for in 1u32..40,
            tail in 0u32..40,
        ) {
            // Hit after the shadow has been replaying for `active_for` ticks
            let hit_at = lag + active_for;
            let total = hit_at + freeze + lag + tail;
            let mut shadow = Pursuer::new(lag, SIZE);
            let mut replayed = Vec::new();

            for t in 1..=total {
                shadow.record(pos(t), Facing::Right);
                if shadow.advance() {
                    replayed.push(shadow.current().map(|r| r.pos));
                }
                if t == hit_at {
                    let before = shadow.current().copied();
                    shadow.freeze(freeze);
                    prop_assert_eq!(shadow.current().copied(), before);
                }
                if t > hit_at && t <= hit_at + freeze {
                    // Frozen: still visible at the same spot, queue grows
                    prop_assert_eq!(shadow.current().map(|r| r.pos), Some(pos(hit_at - lag)));
                    prop_assert_eq!(shadow.buffered(), (lag + t - hit_at) as usize);
                }
            }

            // Consumption is contiguous: nothing skipped, nothing repeated
            let expected: Vec<Option<Vec2>> =
                (1..=(total - lag - freeze)).map(|t| Some(pos(t))).collect();
            prop_assert_eq!(replayed, expected);
            // The backlog never drains faster than one per tick
            prop_assert_eq!(shadow.buffered(), (lag + freeze) as usize);
        }

        #[test]
        fn prop_replay_lags_exactly(lag in 1u32..40, ticks in 1u32..200) {
            let mut shadow = Pursuer::new(lag, SIZE);
            for t in 1..=ticks {
                shadow.record(pos(t), Facing::Right);
                shadow.advance();
                if t > lag {
                    prop_assert_eq!(shadow.current().map(|r| r.pos), Some(pos(t - lag)));
                } else {
                    prop_assert!(!shadow.is_active());
                }
            }
        }
    }
}
