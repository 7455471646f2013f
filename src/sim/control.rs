//! Input-driven ball control
//!
//! While the ball is idle the player nudges it around the floor and charges a
//! shot; releasing the shoot key launches it toward a hoop. Once the ball is
//! moving, only the integrator may touch its position.

use glam::Vec3;

use super::court::HoopSide;
use super::input::{Key, KeyEvent};
use super::state::{BallMode, SimState};

/// Apply one discrete key transition.
///
/// A repeated key-down for a key that is already held only refreshes the
/// held set; it never re-triggers a charge or an orbit toggle.
pub fn apply_key_event(state: &mut SimState, event: KeyEvent) {
    match event {
        KeyEvent::Down(key) => {
            let fresh = state.control.keys_held.insert(key);
            match key {
                Key::Reset => {
                    state.reset();
                    log::debug!("Ball reset to spawn");
                }
                Key::ToggleOrbit if fresh => {
                    state.control.orbit_enabled = !state.control.orbit_enabled;
                    log::debug!("Orbit camera: {}", state.control.orbit_enabled);
                }
                Key::Shoot if fresh && !state.is_moving() => {
                    state.control.begin_charge();
                }
                _ => {}
            }
        }
        KeyEvent::Up(key) => {
            state.control.keys_held.remove(&key);
            if key == Key::Shoot {
                shoot(state);
            }
        }
    }
}

/// Per-frame work for an idle ball: held-key translation, then charging.
///
/// Does nothing while the ball is moving.
pub fn apply_held_keys(state: &mut SimState) {
    if state.is_moving() {
        return;
    }

    let step = state.tuning.control.move_step;
    let mut offset = Vec3::ZERO;
    for key in Key::DIRECTIONS {
        if state.control.is_held(key) {
            if let Some((dx, dz)) = key.direction() {
                offset.x += dx * step;
                offset.z += dz * step;
            }
        }
    }
    state.ball.position += offset;
    let radius = state.ball.radius;
    state.court.bounds.clamp(&mut state.ball.position, radius);

    if state.control.is_held(Key::Shoot) {
        let control = state.tuning.control;
        state
            .control
            .step_charge(control.power_step, control.max_power);
    }
}

/// Unnormalized launch direction for a ball at `position`
pub fn aim_direction(position: Vec3, aim_lift: f32) -> Vec3 {
    let side = HoopSide::target_for(position.x);
    Vec3::new(side.sign(), aim_lift, 0.0)
}

/// Launch the ball with the charged power.
///
/// Ignored (returns false) if the ball is already moving or nothing is
/// charged.
pub fn shoot(state: &mut SimState) -> bool {
    if state.is_moving() || state.control.shot_power <= 0.0 {
        return false;
    }

    let tuning = state.tuning.control;
    let power = state.control.take_power();
    let direction = aim_direction(state.ball.position, tuning.aim_lift);
    state.ball.launch(direction, power, tuning.min_launch_vy);
    state.mode = BallMode::Moving;

    log::debug!(
        "Shot launched: power {:.1}, velocity {:?}",
        power,
        state.ball.velocity
    );
    true
}
