//! Court geometry provider
//!
//! Fixed court dimensions and hoop placement. The scene builder draws from
//! the same numbers; the simulation only reads them.
//!
//! Coordinates: X runs along the court length, Z across its width, Y is up.
//! The court is centred on the origin.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playable volume the ball is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtBounds {
    /// Half the court length (X extent from centre to baseline)
    pub half_length: f32,
    /// Half the court width (Z extent from centre to sideline)
    pub half_width: f32,
    /// Height of the floor's top surface
    pub floor_height: f32,
}

impl Default for CourtBounds {
    fn default() -> Self {
        Self {
            half_length: COURT_HALF_LENGTH,
            half_width: COURT_HALF_WIDTH,
            floor_height: FLOOR_HEIGHT,
        }
    }
}

impl CourtBounds {
    /// Largest |x| a ball centre may reach
    #[inline]
    pub fn max_x(&self, radius: f32) -> f32 {
        self.half_length - radius
    }

    /// Largest |z| a ball centre may reach
    #[inline]
    pub fn max_z(&self, radius: f32) -> f32 {
        self.half_width - radius
    }

    /// Ball centre height when resting on the floor
    #[inline]
    pub fn rest_height(&self, radius: f32) -> f32 {
        self.floor_height + radius
    }

    /// Clamp a ball centre into the court horizontally. Returns the clamped axes.
    pub fn clamp(&self, pos: &mut Vec3, radius: f32) -> (bool, bool) {
        crate::clamp_horizontal(pos, self.max_x(radius), self.max_z(radius))
    }
}

/// Which end of the court a hoop stands at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoopSide {
    /// Negative X baseline
    Left,
    /// Positive X baseline
    Right,
}

impl HoopSide {
    /// Direction along X pointing from centre court to this hoop
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HoopSide::Left => -1.0,
            HoopSide::Right => 1.0,
        }
    }

    /// The hoop a shot from `x` is launched at: a ball left of centre court
    /// (x < 0) shoots at the right hoop, anything else at the left one.
    pub fn target_for(x: f32) -> Self {
        if x < 0.0 {
            HoopSide::Right
        } else {
            HoopSide::Left
        }
    }
}

/// One basket: backboard plane plus rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hoop {
    pub side: HoopSide,
    /// X of the backboard plane
    pub backboard_x: f32,
    /// Centre of the rim ring
    pub rim_center: Vec3,
    pub rim_radius: f32,
}

/// Court dimensions plus hoop placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtGeometry {
    pub bounds: CourtBounds,
    /// Backboard inset from each baseline
    pub hoop_inset: f32,
}

impl Default for CourtGeometry {
    fn default() -> Self {
        Self {
            bounds: CourtBounds::default(),
            hoop_inset: HOOP_INSET,
        }
    }
}

impl CourtGeometry {
    /// Hoop at the given end of the court
    pub fn hoop(&self, side: HoopSide) -> Hoop {
        let backboard_x = side.sign() * (self.bounds.half_length - self.hoop_inset);
        // Rim hangs in front of the board, toward centre court
        let rim_x = backboard_x - side.sign() * RIM_OFFSET;
        Hoop {
            side,
            backboard_x,
            rim_center: Vec3::new(rim_x, RIM_HEIGHT, 0.0),
            rim_radius: RIM_RADIUS,
        }
    }

    /// Both hoops, left then right
    pub fn hoops(&self) -> [Hoop; 2] {
        [self.hoop(HoopSide::Left), self.hoop(HoopSide::Right)]
    }

    /// Ball spawn point: centre court, resting on the floor
    pub fn spawn_point(&self, radius: f32) -> Vec3 {
        Vec3::new(0.0, self.bounds.rest_height(radius), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_match_court() {
        let b = CourtBounds::default();
        assert_eq!(b.half_length, 15.0);
        assert_eq!(b.half_width, 7.5);
        assert!((b.max_x(BALL_RADIUS) - 14.76).abs() < 1e-5);
        assert!((b.max_z(BALL_RADIUS) - 7.26).abs() < 1e-5);
        assert!((b.rest_height(BALL_RADIUS) - 0.34).abs() < 1e-6);
    }

    #[test]
    fn test_hoop_placement() {
        let court = CourtGeometry::default();
        let [left, right] = court.hoops();
        assert!((left.backboard_x + 13.8).abs() < 1e-5);
        assert!((right.backboard_x - 13.8).abs() < 1e-5);
        // Rims sit in front of their boards
        assert!(left.rim_center.x > left.backboard_x);
        assert!(right.rim_center.x < right.backboard_x);
        assert!((left.rim_center.x + 13.5).abs() < 1e-5);
        assert_eq!(right.rim_center.y, RIM_HEIGHT);
    }

    #[test]
    fn test_target_side() {
        assert_eq!(HoopSide::target_for(-3.0), HoopSide::Right);
        assert_eq!(HoopSide::target_for(0.0), HoopSide::Left);
        assert_eq!(HoopSide::target_for(4.0), HoopSide::Left);
    }

    #[test]
    fn test_spawn_point() {
        let court = CourtGeometry::default();
        let spawn = court.spawn_point(BALL_RADIUS);
        assert!((spawn - Vec3::new(0.0, 0.34, 0.0)).length() < 1e-6);
    }
}
