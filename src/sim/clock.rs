//! Frame pacing
//!
//! By default each rendered frame is one tick with the measured wall-clock
//! delta, so motion depends on frame rate. [`Clock::Fixed`] instead runs a
//! fixed-timestep accumulator: frame time is banked and spent in `SIM_DT`
//! ticks, capped at `MAX_SUBSTEPS` per frame.

use super::state::SimState;
use super::sync::RenderSync;
use super::tick::{TickInput, TickOutcome, apply_input, simulate};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    pub step: f32,
    pub max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Bank a frame delta and return how many ticks are due.
    ///
    /// Unusable deltas (non-finite or negative) bank nothing. Time left over
    /// once the substep cap is reached is dropped.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt < 0.0 || self.step <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_substeps {
            self.accumulator -= self.step;
            due += 1;
        }
        if due == self.max_substeps {
            self.accumulator = 0.0;
        }
        due
    }

    /// Banked time not yet spent
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}

/// How frame time becomes simulation ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clock {
    /// One tick per frame with the wall-clock delta
    Variable,
    Fixed(FixedStep),
}

impl Clock {
    pub fn from_settings(fixed_timestep: bool) -> Self {
        if fixed_timestep {
            Clock::Fixed(FixedStep::default())
        } else {
            Clock::Variable
        }
    }

    /// Run everything one rendered frame needs.
    ///
    /// Input is applied once per frame regardless of how many ticks run, and
    /// the ball is published once at the end.
    pub fn run_frame(
        &mut self,
        state: &mut SimState,
        input: &TickInput,
        frame_dt: f32,
        sync: &mut impl RenderSync,
    ) -> TickOutcome {
        let mut outcome = TickOutcome {
            launched: apply_input(state, input),
            ..Default::default()
        };

        match self {
            Clock::Variable => outcome.merge(simulate(state, frame_dt)),
            Clock::Fixed(fixed) => {
                let step = fixed.step;
                for _ in 0..fixed.accumulate(frame_dt) {
                    outcome.merge(simulate(state, step));
                }
            }
        }

        sync.sync_ball(state.ball.position);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{Key, KeyEvent};
    use crate::sim::state::BallMode;
    use crate::sim::sync::{LastPosition, NoSync};

    #[test]
    fn test_accumulate_banks_remainder() {
        // Binary fractions keep the arithmetic exact
        let mut fixed = FixedStep::new(0.031_25, 8);
        assert_eq!(fixed.accumulate(0.078_125), 2);
        assert_eq!(fixed.pending(), 0.015_625);
        assert_eq!(fixed.accumulate(0.015_625), 1);
        assert_eq!(fixed.pending(), 0.0);
    }

    #[test]
    fn test_accumulate_caps_substeps() {
        let mut fixed = FixedStep::new(0.01, 4);
        assert_eq!(fixed.accumulate(0.1), 4);
        assert_eq!(fixed.pending(), 0.0);
    }

    #[test]
    fn test_accumulate_rejects_bad_dt() {
        let mut fixed = FixedStep::default();
        assert_eq!(fixed.accumulate(f32::NAN), 0);
        assert_eq!(fixed.accumulate(-1.0), 0);
        assert_eq!(fixed.pending(), 0.0);
    }

    #[test]
    fn test_fixed_clock_deterministic_across_frame_rates() {
        let run = |frame_dt: f32, frames: usize| {
            let mut state = SimState::default();
            state.ball.position.x = -2.0;
            state.control.shot_power = 9.0;
            let mut clock = Clock::Fixed(FixedStep::new(1.0 / 128.0, 8));
            let shoot = TickInput::from_events([KeyEvent::Up(Key::Shoot)]);
            clock.run_frame(&mut state, &shoot, 0.0, &mut NoSync);
            for _ in 0..frames {
                clock.run_frame(&mut state, &TickInput::default(), frame_dt, &mut NoSync);
            }
            state
        };

        // 1 second either way
        let a = run(1.0 / 64.0, 64);
        let b = run(1.0 / 32.0, 32);
        assert_eq!(a.frame, 128);
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_variable_clock_single_tick() {
        let mut state = SimState::default();
        let mut sync = LastPosition::default();
        let mut clock = Clock::Variable;
        let input = TickInput::from_events([KeyEvent::Down(Key::Right)]);
        clock.run_frame(&mut state, &input, 1.0 / 30.0, &mut sync);
        assert_eq!(state.frame, 1);
        assert_eq!(state.mode, BallMode::Idle);
        assert!((state.ball.position.x - 0.1).abs() < 1e-6);
        assert_eq!(sync.0, Some(state.ball.position));
    }
}
