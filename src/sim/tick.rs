//! Per-frame simulation tick
//!
//! Fixed order every frame: apply key events, move/charge the idle ball,
//! integrate the flying ball, publish the ball position.

use std::collections::BTreeSet;

use super::control::{apply_held_keys, apply_key_event};
use super::input::{Key, KeyEvent};
use super::physics::advance;
use super::state::{BallMode, SimState};
use super::sync::RenderSync;

/// Input gathered by the host since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key transitions in arrival order
    pub events: Vec<KeyEvent>,
    /// Authoritative held-key snapshot, applied after `events` (e.g. to drop
    /// keys that were down when the window lost focus)
    pub held: Option<BTreeSet<Key>>,
}

impl TickInput {
    pub fn from_events(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            held: None,
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A shot was released this tick
    pub launched: bool,
    pub floor_hit: bool,
    pub wall_hit: bool,
    /// The ball settled and control returned to the player
    pub came_to_rest: bool,
    /// The frame delta was unusable and physics was skipped
    pub dt_rejected: bool,
}

impl TickOutcome {
    /// Fold another substep's outcome into this one
    pub fn merge(&mut self, other: TickOutcome) {
        self.launched |= other.launched;
        self.floor_hit |= other.floor_hit;
        self.wall_hit |= other.wall_hit;
        self.came_to_rest |= other.came_to_rest;
        self.dt_rejected |= other.dt_rejected;
    }
}

/// Apply the frame's key events and held snapshot
///
/// Returns true if a shot was launched.
pub fn apply_input(state: &mut SimState, input: &TickInput) -> bool {
    let was_moving = state.is_moving();
    for event in &input.events {
        apply_key_event(state, *event);
    }
    if let Some(held) = &input.held {
        state.control.keys_held.clone_from(held);
    }
    !was_moving && state.is_moving()
}

/// Advance the simulation by `dt` without touching input or render sync
pub(crate) fn simulate(state: &mut SimState, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.frame += 1;

    match state.mode {
        BallMode::Idle => apply_held_keys(state),
        BallMode::Moving => {
            let max_dt = state.tuning.physics.max_dt;
            if !crate::dt_is_valid(dt, max_dt) {
                if dt.is_finite() && dt > max_dt {
                    log::warn!("Frame delta {:.3}s over ceiling, physics skipped", dt);
                }
                outcome.dt_rejected = true;
                return outcome;
            }

            let step = advance(&state.ball, dt, &state.court.bounds, &state.tuning.physics);
            state.ball = step.ball;
            outcome.floor_hit = step.floor_hit;
            outcome.wall_hit = step.wall_hit;
            if step.at_rest {
                state.mode = BallMode::Idle;
                outcome.came_to_rest = true;
                log::debug!("Ball at rest at {:?}", state.ball.position);
            }
        }
    }

    outcome
}

/// Run one full frame with a wall-clock `dt`
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    dt: f32,
    sync: &mut impl RenderSync,
) -> TickOutcome {
    let launched = apply_input(state, input);
    let mut outcome = simulate(state, dt);
    outcome.launched = launched;
    sync.sync_ball(state.ball.position);
    outcome
}
