//! Render sync boundary
//!
//! The simulation publishes the ball position once per tick; whatever draws
//! the ball implements [`RenderSync`] and copies it onto its mesh.

use glam::Vec3;

/// Receives the ball transform after every tick
pub trait RenderSync {
    fn sync_ball(&mut self, position: Vec3);
}

/// Discards updates (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSync;

impl RenderSync for NoSync {
    fn sync_ball(&mut self, _position: Vec3) {}
}

/// Keeps the last published position
#[derive(Debug, Default, Clone, Copy)]
pub struct LastPosition(pub Option<Vec3>);

impl RenderSync for LastPosition {
    fn sync_ball(&mut self, position: Vec3) {
        self.0 = Some(position);
    }
}
