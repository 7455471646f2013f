//! Hoopshot headless driver
//!
//! Plays a seeded demo session without a renderer: wander the ball around the
//! court, charge for a random number of frames, shoot, and log where each shot
//! lands. Usage: `hoopshot [settings.json] [seed] [shots]`.

use std::path::Path;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use hoopshot::hud::control_hints;
use hoopshot::sim::{Key, KeyEvent, RenderSync, SimState, TickInput};
use hoopshot::{PowerMeter, Settings};

/// Simulated display refresh
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a shot that has not settled after this many frames
const MAX_FLIGHT_FRAMES: u32 = 60 * 60;

/// Render sync that traces the ball path and tracks its peak
#[derive(Default)]
struct TraceSync {
    peak_y: f32,
}

impl RenderSync for TraceSync {
    fn sync_ball(&mut self, position: Vec3) {
        self.peak_y = self.peak_y.max(position.y);
        log::trace!("ball {:.3} {:.3} {:.3}", position.x, position.y, position.z);
    }
}

/// Host-side loop state: simulation, pacing and pending key events
struct Session {
    settings: Settings,
    state: SimState,
    clock: hoopshot::sim::Clock,
    pending: Vec<KeyEvent>,
    sync: TraceSync,
}

impl Session {
    fn new(settings: Settings) -> Self {
        Self {
            state: settings.new_state(),
            clock: settings.clock(),
            settings,
            pending: Vec::new(),
            sync: TraceSync::default(),
        }
    }

    /// Queue a host key transition by name, as a browser would deliver it
    fn key(&mut self, name: &str, pressed: bool) {
        if let Some(event) = self.settings.keys.translate(name, pressed) {
            self.pending.push(event);
        }
    }

    fn frame(&mut self) -> hoopshot::sim::TickOutcome {
        let input = TickInput::from_events(self.pending.drain(..));
        self.clock
            .run_frame(&mut self.state, &input, FRAME_DT, &mut self.sync)
    }

    fn frames(&mut self, n: u32) {
        for _ in 0..n {
            self.frame();
        }
    }
}

fn host_name(key: Key) -> &'static str {
    match key {
        Key::Left => "ArrowLeft",
        Key::Right => "ArrowRight",
        Key::Up => "ArrowUp",
        Key::Down => "ArrowDown",
        Key::Shoot => " ",
        Key::Reset => "r",
        Key::ToggleOrbit => "o",
    }
}

fn play_shot(session: &mut Session, rng: &mut Pcg32, shot: u32) {
    // Wander
    let dir = Key::DIRECTIONS[rng.random_range(0..Key::DIRECTIONS.len())];
    let wander = rng.random_range(0..60);
    session.key(host_name(dir), true);
    session.frames(wander);
    session.key(host_name(dir), false);
    session.frame();

    // Charge
    let charge = rng.random_range(5..120);
    session.key(host_name(Key::Shoot), true);
    session.frames(charge);
    let meter = PowerMeter::from_state(&session.state, session.settings.hot_power_percent);
    let start = session.state.ball.position;
    session.key(host_name(Key::Shoot), false);

    session.sync.peak_y = start.y;
    let launch = session.frame();
    if !launch.launched {
        log::info!("Shot {}: released with no power, ignored", shot);
        return;
    }
    let velocity = session.state.ball.velocity;

    let mut bounces = 0;
    let mut flight = 1;
    while session.state.is_moving() && flight < MAX_FLIGHT_FRAMES {
        let outcome = session.frame();
        if outcome.floor_hit {
            bounces += 1;
        }
        flight += 1;
    }

    if session.state.is_moving() {
        log::warn!("Shot {}: still moving after {} frames, resetting", shot, flight);
        session.key(host_name(Key::Reset), true);
        session.frame();
        session.key(host_name(Key::Reset), false);
        return;
    }

    let end = session.state.ball.position;
    log::info!(
        "Shot {}: {} from ({:.2}, {:.2}) v=({:.2}, {:.2}, {:.2}) peak {:.2}m, {} bounces, rest at ({:.2}, {:.2}) after {:.2}s",
        shot,
        meter.label(),
        start.x,
        start.z,
        velocity.x,
        velocity.y,
        velocity.z,
        session.sync.peak_y,
        bounces,
        end.x,
        end.z,
        flight as f32 * FRAME_DT,
    );
}

fn main() {
    env_logger::init();
    log::info!("Hoopshot (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let shots: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    for line in control_hints(&settings.keys) {
        log::info!("{}", line);
    }
    log::info!("Demo session with seed {}, {} shots", seed, shots);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut session = Session::new(settings);
    for shot in 1..=shots {
        play_shot(&mut session, &mut rng, shot);
    }

    let [left, right] = session.settings.court.hoops();
    log::info!(
        "Hoops at x = {:.2} / {:.2}, ball finished at {:?}",
        left.rim_center.x,
        right.rim_center.x,
        session.state.ball.position
    );
}
