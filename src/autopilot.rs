//! Seeded input source for headless demo and soak runs
//!
//! Runs right the whole time, holding jump and fire for random stretches.
//! The same seed always produces the same input sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Control, InputSource, TickInput};

/// Chance per tick of starting to hold jump
const JUMP_CHANCE: f64 = 0.04;
/// Chance per tick of starting to hold fire
const FIRE_CHANCE: f64 = 0.02;
/// How long a press is held, in ticks (inclusive range)
const HOLD_TICKS: (u32, u32) = (4, 20);

pub struct Autopilot {
    rng: Pcg32,
    jump_hold: u32,
    fire_hold: u32,
    held: TickInput,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jump_hold: 0,
            fire_hold: 0,
            held: TickInput {
                right: true,
                ..Default::default()
            },
        }
    }

    fn roll_hold(&mut self, remaining: u32, chance: f64) -> u32 {
        if remaining > 0 {
            return remaining - 1;
        }
        if self.rng.random_bool(chance) {
            self.rng.random_range(HOLD_TICKS.0..=HOLD_TICKS.1)
        } else {
            0
        }
    }

    /// Reroll the held controls for the next tick
    pub fn step(&mut self) -> TickInput {
        self.jump_hold = self.roll_hold(self.jump_hold, JUMP_CHANCE);
        self.fire_hold = self.roll_hold(self.fire_hold, FIRE_CHANCE);
        self.held.jump = self.jump_hold > 0;
        self.held.fire = self.fire_hold > 0;
        self.held
    }
}

impl InputSource for Autopilot {
    fn is_held(&self, control: Control) -> bool {
        self.held.is_held(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = Autopilot::new(7);
        let mut b = Autopilot::new(7);
        for _ in 0..1000 {
            assert_eq!(a.step(), b.step());
        }
    }

    #[test]
    fn test_always_runs_right() {
        let mut pilot = Autopilot::new(1);
        for _ in 0..500 {
            let input = pilot.step();
            assert!(input.right && !input.left);
            assert_eq!(TickInput::poll(&pilot), input);
        }
    }

    #[test]
    fn test_eventually_jumps_and_fires() {
        let mut pilot = Autopilot::new(42);
        let inputs: Vec<_> = (0..2000).map(|_| pilot.step()).collect();
        assert!(inputs.iter().any(|i| i.jump));
        assert!(inputs.iter().any(|i| i.fire));
        assert!(inputs.iter().any(|i| !i.jump));
    }
}
