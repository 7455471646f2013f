//! Logical keys and host key bindings
//!
//! The host forwards raw key names (browser `KeyboardEvent.key` style, e.g.
//! `"ArrowLeft"`, `" "`, `"r"`); [`KeyBindings`] maps them onto the small set
//! of keys the simulation understands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Move ball toward -X
    Left,
    /// Move ball toward +X
    Right,
    /// Move ball toward -Z
    Up,
    /// Move ball toward +Z
    Down,
    /// Hold to charge, release to shoot
    Shoot,
    Reset,
    ToggleOrbit,
}

impl Key {
    /// Direction keys in the order they are applied
    pub const DIRECTIONS: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

    /// Unit horizontal offset (x, z) for a direction key
    pub fn direction(self) -> Option<(f32, f32)> {
        match self {
            Key::Left => Some((-1.0, 0.0)),
            Key::Right => Some((1.0, 0.0)),
            Key::Up => Some((0.0, -1.0)),
            Key::Down => Some((0.0, 1.0)),
            _ => None,
        }
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    pub fn key(&self) -> Key {
        match *self {
            KeyEvent::Down(k) | KeyEvent::Up(k) => k,
        }
    }
}

/// Host key name -> logical key. Names are matched lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Key>", into = "BTreeMap<String, Key>")]
pub struct KeyBindings {
    map: BTreeMap<String, Key>,
}

impl From<BTreeMap<String, Key>> for KeyBindings {
    fn from(raw: BTreeMap<String, Key>) -> Self {
        let mut bindings = Self::empty();
        for (name, key) in raw {
            bindings.bind(&name, key);
        }
        bindings
    }
}

impl From<KeyBindings> for BTreeMap<String, Key> {
    fn from(bindings: KeyBindings) -> Self {
        bindings.map
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            map: BTreeMap::new(),
        };
        bindings.bind("arrowleft", Key::Left);
        bindings.bind("arrowright", Key::Right);
        bindings.bind("arrowup", Key::Up);
        bindings.bind("arrowdown", Key::Down);
        bindings.bind(" ", Key::Shoot);
        bindings.bind("space", Key::Shoot);
        bindings.bind("r", Key::Reset);
        bindings.bind("o", Key::ToggleOrbit);
        bindings
    }
}

impl KeyBindings {
    /// Bindings with nothing mapped
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Map a host key name to a logical key, replacing any previous binding
    pub fn bind(&mut self, name: &str, key: Key) {
        self.map.insert(name.to_lowercase(), key);
    }

    /// Logical key for a host key name, if bound
    pub fn lookup(&self, name: &str) -> Option<Key> {
        self.map.get(&name.to_lowercase()).copied()
    }

    /// Translate a host key transition into a simulation event
    pub fn translate(&self, name: &str, pressed: bool) -> Option<KeyEvent> {
        let key = self.lookup(name)?;
        Some(if pressed {
            KeyEvent::Down(key)
        } else {
            KeyEvent::Up(key)
        })
    }

    /// Host names bound to `key`, for instruction text
    pub fn names_for(&self, key: Key) -> impl Iterator<Item = &str> {
        self.map
            .iter()
            .filter(move |(_, k)| **k == key)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("ArrowLeft"), Some(Key::Left));
        assert_eq!(keys.lookup("arrowdown"), Some(Key::Down));
        assert_eq!(keys.lookup(" "), Some(Key::Shoot));
        assert_eq!(keys.lookup("R"), Some(Key::Reset));
        assert_eq!(keys.lookup("o"), Some(Key::ToggleOrbit));
        assert_eq!(keys.lookup("q"), None);
    }

    #[test]
    fn test_translate() {
        let keys = KeyBindings::default();
        assert_eq!(keys.translate(" ", true), Some(KeyEvent::Down(Key::Shoot)));
        assert_eq!(keys.translate(" ", false), Some(KeyEvent::Up(Key::Shoot)));
        assert_eq!(keys.translate("Escape", true), None);
    }

    #[test]
    fn test_rebind() {
        let mut keys = KeyBindings::empty();
        keys.bind("W", Key::Up);
        assert_eq!(keys.lookup("w"), Some(Key::Up));
        let names: Vec<_> = keys.names_for(Key::Up).collect();
        assert_eq!(names, vec!["w"]);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Key::Left.direction(), Some((-1.0, 0.0)));
        assert_eq!(Key::Down.direction(), Some((0.0, 1.0)));
        assert_eq!(Key::Shoot.direction(), None);
    }

    #[test]
    fn test_bindings_json() {
        let keys: KeyBindings = serde_json::from_str(r#"{"A": "Left", "d": "Right"}"#).unwrap();
        assert_eq!(keys.lookup("A"), Some(Key::Left));
        assert_eq!(keys.lookup("arrowleft"), None);
    }
}
