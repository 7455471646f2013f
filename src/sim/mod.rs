//! Ball simulation module
//!
//! All ball physics and player control lives here. This module is pure:
//! - Time only enters through the `dt` passed to a tick
//! - State lives in an explicit `SimState`, never in globals
//! - No rendering or platform dependencies (the renderer sits behind `RenderSync`)

pub mod clock;
pub mod control;
pub mod court;
pub mod input;
pub mod physics;
pub mod state;
pub mod sync;
pub mod tick;

pub use clock::{Clock, FixedStep};
pub use control::{aim_direction, apply_held_keys, apply_key_event, shoot};
pub use court::{CourtBounds, CourtGeometry, Hoop, HoopSide};
pub use input::{Key, KeyBindings, KeyEvent};
pub use physics::{Step, advance};
pub use state::{Ball, BallMode, ChargeDirection, ControlPhase, ControlState, SimState};
pub use sync::{LastPosition, NoSync, RenderSync};
pub use tick::{TickInput, TickOutcome, apply_input, tick};
