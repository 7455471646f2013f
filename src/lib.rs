//! Hoopshot - basketball ball physics and shot control
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (ball physics, input state machine, court geometry)
//! - `hud`: On-screen readouts derived from simulation state
//! - `settings`: Court dimensions, key bindings and loop options
//! - `tuning`: Data-driven physics and control balance

pub mod hud;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use hud::PowerMeter;
pub use settings::Settings;

use glam::Vec3;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep when the accumulator is enabled (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Court dimensions (metres). X spans the length, Z the width.
    pub const COURT_HALF_LENGTH: f32 = 15.0;
    pub const COURT_HALF_WIDTH: f32 = 7.5;
    /// Top surface of the court floor
    pub const FLOOR_HEIGHT: f32 = 0.1;
    /// Backboard plane inset from each baseline
    pub const HOOP_INSET: f32 = 1.2;
    /// Rim centre height above the origin
    pub const RIM_HEIGHT: f32 = 3.05;
    /// Rim centre offset from the backboard toward centre court
    pub const RIM_OFFSET: f32 = 0.30;
    pub const RIM_RADIUS: f32 = 0.23;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.24;

    /// Gravity (m/s², applied to velocity.y)
    pub const GRAVITY: f32 = -9.81;
    /// Fraction of velocity kept after a floor or wall reflection
    pub const BOUNCE_DAMPING: f32 = 0.7;
    /// Per-step velocity scale approximating air resistance
    pub const DRAG: f32 = 0.99;
    /// Vertical bounce speed below which the bounce is killed
    pub const MIN_BOUNCE_SPEED: f32 = 0.5;
    /// Total speed below which a grounded ball is at rest
    pub const REST_SPEED: f32 = 0.1;
    /// Frame deltas above this are dropped (tunnelling guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball translation per frame while a direction key is held
    pub const MOVE_STEP: f32 = 0.1;
    /// Shot power change per frame while charging
    pub const POWER_STEP: f32 = 0.3;
    pub const MAX_SHOT_POWER: f32 = 15.0;
    /// Every shot leaves with at least this upward speed
    pub const MIN_LAUNCH_VY: f32 = 2.0;
    /// Vertical component of the (unnormalized) aim toward a hoop
    pub const AIM_LIFT: f32 = 0.5;
}

/// Clamp the horizontal (x, z) components of a position to `±max` per axis.
///
/// Returns which axes were clamped so callers can reflect velocity.
#[inline]
pub fn clamp_horizontal(pos: &mut Vec3, max_x: f32, max_z: f32) -> (bool, bool) {
    let hit_x = pos.x > max_x || pos.x < -max_x;
    let hit_z = pos.z > max_z || pos.z < -max_z;
    pos.x = pos.x.clamp(-max_x, max_x);
    pos.z = pos.z.clamp(-max_z, max_z);
    (hit_x, hit_z)
}

/// Whether a frame delta is usable for integration
#[inline]
pub fn dt_is_valid(dt: f32, max_dt: f32) -> bool {
    dt.is_finite() && dt > 0.0 && dt <= max_dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_horizontal_reports_axes() {
        let mut p = Vec3::new(20.0, 1.0, -0.5);
        let (hx, hz) = clamp_horizontal(&mut p, 14.76, 7.26);
        assert!(hx);
        assert!(!hz);
        assert_eq!(p, Vec3::new(14.76, 1.0, -0.5));
    }

    #[test]
    fn test_dt_is_valid() {
        assert!(dt_is_valid(1.0 / 60.0, consts::MAX_FRAME_DT));
        assert!(dt_is_valid(0.1, consts::MAX_FRAME_DT));
        assert!(!dt_is_valid(0.0, consts::MAX_FRAME_DT));
        assert!(!dt_is_valid(-0.01, consts::MAX_FRAME_DT));
        assert!(!dt_is_valid(0.2, consts::MAX_FRAME_DT));
        assert!(!dt_is_valid(f32::NAN, consts::MAX_FRAME_DT));
        assert!(!dt_is_valid(f32::INFINITY, consts::MAX_FRAME_DT));
    }
}
