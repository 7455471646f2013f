//! On-screen readouts
//!
//! The only simulation value the UI shows is shot power; everything else here
//! is static instruction text.

use crate::sim::{Key, KeyBindings, SimState};

/// Shot power readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerMeter {
    /// Power as a rounded percentage of max, 0..=100
    pub percent: u8,
    /// Above the highlight threshold
    pub hot: bool,
}

impl PowerMeter {
    pub fn from_state(state: &SimState, hot_percent: u8) -> Self {
        let percent = (state.power_fraction() * 100.0).round() as u8;
        Self {
            percent,
            hot: percent > hot_percent,
        }
    }

    pub fn label(&self) -> String {
        format!("Shot Power: {}%", self.percent)
    }
}

/// Instruction lines for the controls panel
pub fn control_hints(keys: &KeyBindings) -> Vec<String> {
    let describe = |key: Key| {
        let mut names: Vec<String> = keys.names_for(key).map(display_key_name).collect();
        names.dedup();
        if names.is_empty() {
            "unbound".to_string()
        } else {
            names.join("/")
        }
    };

    let arrows: Vec<String> = Key::DIRECTIONS.iter().map(|k| describe(*k)).collect();
    vec![
        format!("{}: Move ball", arrows.join(" ")),
        format!("{}: Hold for power, release to shoot", describe(Key::Shoot)),
        format!("{}: Reset ball position", describe(Key::Reset)),
        format!("{}: Toggle orbit camera", describe(Key::ToggleOrbit)),
    ]
}

fn display_key_name(name: &str) -> String {
    match name {
        " " => "SPACE".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_percent() {
        let mut state = SimState::default();
        assert_eq!(PowerMeter::from_state(&state, 80).percent, 0);

        state.control.shot_power = 7.5;
        let meter = PowerMeter::from_state(&state, 80);
        assert_eq!(meter.percent, 50);
        assert!(!meter.hot);
        assert_eq!(meter.label(), "Shot Power: 50%");

        state.control.shot_power = 15.0;
        let meter = PowerMeter::from_state(&state, 80);
        assert_eq!(meter.percent, 100);
        assert!(meter.hot);
    }

    #[test]
    fn test_meter_hot_threshold_exclusive() {
        let mut state = SimState::default();
        state.control.shot_power = 12.0;
        assert!(!PowerMeter::from_state(&state, 80).hot);
        state.control.shot_power = 12.3;
        assert!(PowerMeter::from_state(&state, 80).hot);
    }

    #[test]
    fn test_control_hints() {
        let hints = control_hints(&KeyBindings::default());
        assert_eq!(hints.len(), 4);
        assert!(hints[1].starts_with("SPACE"));
        assert!(hints[2].starts_with("R:"));

        let hints = control_hints(&KeyBindings::empty());
        assert!(hints[3].starts_with("unbound"));
    }
}
