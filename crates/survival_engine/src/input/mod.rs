//! Input management system
//!
//! Keyboard state is captured once per frame from the platform and then read by
//! systems, so every system in a frame sees the same keys.

use std::collections::HashSet;

/// Input manager holding the keys that are down this frame
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down or up
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Replace the held set by querying each of `keys`
    pub fn capture<F>(&mut self, keys: &[KeyCode], is_down: F)
    where
        F: Fn(KeyCode) -> bool,
    {
        self.held.clear();
        self.held
            .extend(keys.iter().copied().filter(|&key| is_down(key)));
    }

    /// Whether the key is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any of the keys is held
    pub fn is_any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| self.is_key_down(key))
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Every key the engine knows about
    pub const ALL: [Self; 33] = [
        Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G, Self::H, Self::I,
        Self::J, Self::K, Self::L, Self::M, Self::N, Self::O, Self::P, Self::Q, Self::R,
        Self::S, Self::T, Self::U, Self::V, Self::W, Self::X, Self::Y, Self::Z,
        Self::Space, Self::Enter, Self::Escape, Self::Up, Self::Down, Self::Left, Self::Right,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputManager::new();

        input.handle_key_input(KeyCode::W, true);
        assert!(input.is_key_down(KeyCode::W));

        input.handle_key_input(KeyCode::W, false);
        assert!(!input.is_key_down(KeyCode::W));
    }

    #[test]
    fn test_capture_replaces_previous_state() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Escape, true);

        input.capture(&KeyCode::ALL, |key| matches!(key, KeyCode::A | KeyCode::Up));

        assert!(input.is_key_down(KeyCode::A));
        assert!(input.is_key_down(KeyCode::Up));
        assert!(!input.is_key_down(KeyCode::Escape));
        assert!(input.is_any_down(&[KeyCode::S, KeyCode::Up]));
        assert!(!input.is_any_down(&[KeyCode::S, KeyCode::Down]));
    }

    #[test]
    fn test_capture_ignores_keys_outside_the_list() {
        let mut input = InputManager::new();

        input.capture(&[KeyCode::W], |_| true);

        assert!(input.is_key_down(KeyCode::W));
        assert!(!input.is_key_down(KeyCode::S));
    }
}
