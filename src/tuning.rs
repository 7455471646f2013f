//! Data-driven simulation balance
//!
//! Every number the integrator and control state machine use, with defaults
//! taken from `crate::consts`. Loaded as part of [`crate::Settings`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Free-flight physics parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Fraction of the normal velocity kept after hitting the floor or a wall
    pub bounce_damping: f32,
    /// Per-step velocity scale
    pub drag: f32,
    /// Floor bounces slower than this are killed
    pub min_bounce_speed: f32,
    /// Grounded ball slower than this comes to rest
    pub rest_speed: f32,
    /// Largest frame delta the integrator accepts
    pub max_dt: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce_damping: BOUNCE_DAMPING,
            drag: DRAG,
            min_bounce_speed: MIN_BOUNCE_SPEED,
            rest_speed: REST_SPEED,
            max_dt: MAX_FRAME_DT,
        }
    }
}

/// Player control parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Translation per frame for each held direction key
    pub move_step: f32,
    /// Power change per frame while charging
    pub power_step: f32,
    pub max_power: f32,
    /// Floor applied to the launch velocity's y component
    pub min_launch_vy: f32,
    /// Vertical component of the aim vector before normalization
    pub aim_lift: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            power_step: POWER_STEP,
            max_power: MAX_SHOT_POWER,
            min_launch_vy: MIN_LAUNCH_VY,
            aim_lift: AIM_LIFT,
        }
    }
}

/// Combined tuning table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub control: ControlTuning,
}
