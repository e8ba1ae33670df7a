//! Keyboard input handling

use game_core::Input;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held state of the paddle keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard {
    up: bool,
    down: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns `false` for keys the game ignores.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => self.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.down = pressed,
            _ => return false,
        }
        true
    }

    /// Clear held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
    }

    pub fn input(&self) -> Input {
        Input::new(self.up, self.down)
    }
}
