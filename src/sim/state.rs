//! Simulation state and core types
//!
//! Everything the per-frame tick reads or writes lives in [`SimState`]; there
//! is no module-level mutable state.

use std::collections::BTreeSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::court::CourtGeometry;
use super::input::Key;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which updater owns the ball position this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallMode {
    /// Ball sits on the floor; held direction keys move it
    #[default]
    Idle,
    /// Ball is in free flight; only the integrator moves it
    Moving,
}

/// Player-facing phase, derived from mode and held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPhase {
    Idle,
    /// Shoot key held while idle, power oscillating
    Charging,
    Moving,
}

/// The basketball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
}

impl Ball {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Current speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Put the ball back at `spawn`, motionless
    pub fn reset_to(&mut self, spawn: Vec3) {
        self.position = spawn;
        self.velocity = Vec3::ZERO;
    }

    /// Set launch velocity: `direction` normalized and scaled by `power`,
    /// with the vertical component raised to at least `min_vy`
    pub fn launch(&mut self, direction: Vec3, power: f32, min_vy: f32) {
        let mut vel = direction.normalize_or_zero() * power;
        vel.y = vel.y.max(min_vy);
        self.velocity = vel;
    }
}

/// Shot power meter direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeDirection {
    Rising,
    Falling,
}

/// Input-driven state: held keys, shot power, camera toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Current charge, in `[0, max_power]`
    pub shot_power: f32,
    pub charge: ChargeDirection,
    /// Logical keys currently down
    pub keys_held: BTreeSet<Key>,
    /// Whether the host's orbit camera should respond to the mouse
    pub orbit_enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            shot_power: 0.0,
            charge: ChargeDirection::Rising,
            keys_held: BTreeSet::new(),
            orbit_enabled: true,
        }
    }
}

impl ControlState {
    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Start a fresh charge from zero
    pub fn begin_charge(&mut self) {
        self.shot_power = 0.0;
        self.charge = ChargeDirection::Rising;
    }

    /// Advance the triangle-wave charge by one frame
    pub fn step_charge(&mut self, step: f32, max_power: f32) {
        match self.charge {
            ChargeDirection::Rising => {
                self.shot_power += step;
                if self.shot_power >= max_power {
                    self.shot_power = max_power;
                    self.charge = ChargeDirection::Falling;
                }
            }
            ChargeDirection::Falling => {
                self.shot_power -= step;
                if self.shot_power <= 0.0 {
                    self.shot_power = 0.0;
                    self.charge = ChargeDirection::Rising;
                }
            }
        }
    }

    /// Take the charged power, leaving the meter at zero
    pub fn take_power(&mut self) -> f32 {
        std::mem::take(&mut self.shot_power)
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Read-only court configuration
    pub court: CourtGeometry,
    pub tuning: Tuning,
    pub ball: Ball,
    pub mode: BallMode,
    pub control: ControlState,
    /// Ticks processed since creation
    pub frame: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(CourtGeometry::default(), Tuning::default())
    }
}

impl SimState {
    pub fn new(court: CourtGeometry, tuning: Tuning) -> Self {
        let ball = Ball::new(court.spawn_point(BALL_RADIUS));
        Self {
            court,
            tuning,
            ball,
            mode: BallMode::Idle,
            control: ControlState::default(),
            frame: 0,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.mode == BallMode::Moving
    }

    pub fn phase(&self) -> ControlPhase {
        match self.mode {
            BallMode::Moving => ControlPhase::Moving,
            BallMode::Idle if self.control.is_held(Key::Shoot) => ControlPhase::Charging,
            BallMode::Idle => ControlPhase::Idle,
        }
    }

    /// Shot power as a fraction of the maximum, in `[0, 1]`
    pub fn power_fraction(&self) -> f32 {
        let max = self.tuning.control.max_power;
        if max > 0.0 {
            (self.control.shot_power / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Return ball and meter to the spawn state. Safe from any state.
    ///
    /// Held keys and the orbit toggle are left alone: they mirror the
    /// physical keyboard and camera, not the ball.
    pub fn reset(&mut self) {
        let spawn = self.court.spawn_point(self.ball.radius);
        self.ball.reset_to(spawn);
        self.mode = BallMode::Idle;
        self.control.begin_charge();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_spawn() {
        let state = SimState::default();
        assert_eq!(state.mode, BallMode::Idle);
        assert_eq!(state.phase(), ControlPhase::Idle);
        assert!((state.ball.position - Vec3::new(0.0, 0.34, 0.0)).length() < 1e-6);
        assert_eq!(state.ball.velocity, Vec3::ZERO);
        assert_eq!(state.ball.radius, 0.24);
        assert!(state.control.orbit_enabled);
    }

    #[test]
    fn test_launch_floors_vertical_speed() {
        let mut ball = Ball::new(Vec3::ZERO);
        // Flat aim: y would be 0 without the floor
        ball.launch(Vec3::new(1.0, 0.0, 0.0), 3.0, 2.0);
        assert_eq!(ball.velocity, Vec3::new(3.0, 2.0, 0.0));

        // Steep aim keeps its own y
        ball.launch(Vec3::new(0.0, 1.0, 0.0), 10.0, 2.0);
        assert!((ball.velocity.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_charge_triangle_wave() {
        let mut control = ControlState::default();
        control.begin_charge();
        control.step_charge(5.0, 12.0);
        control.step_charge(5.0, 12.0);
        assert_eq!(control.shot_power, 10.0);
        control.step_charge(5.0, 12.0);
        assert_eq!(control.shot_power, 12.0);
        assert_eq!(control.charge, ChargeDirection::Falling);
        control.step_charge(5.0, 12.0);
        control.step_charge(5.0, 12.0);
        control.step_charge(5.0, 12.0);
        assert_eq!(control.shot_power, 0.0);
        assert_eq!(control.charge, ChargeDirection::Rising);
    }

    #[test]
    fn test_take_power_zeroes_meter() {
        let mut control = ControlState {
            shot_power: 7.5,
            ..Default::default()
        };
        assert_eq!(control.take_power(), 7.5);
        assert_eq!(control.shot_power, 0.0);
    }

    #[test]
    fn test_reset_keeps_orbit_toggle() {
        let mut state = SimState::default();
        state.control.orbit_enabled = false;
        state.mode = BallMode::Moving;
        state.ball.position = Vec3::new(3.0, 4.0, 1.0);
        state.ball.velocity = Vec3::new(1.0, 1.0, 1.0);
        state.control.shot_power = 4.0;

        state.reset();

        assert_eq!(state.mode, BallMode::Idle);
        assert_eq!(state.ball.velocity, Vec3::ZERO);
        assert_eq!(state.control.shot_power, 0.0);
        assert!(!state.control.orbit_enabled);
    }
}
