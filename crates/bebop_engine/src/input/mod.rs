//! Input management system
//!
//! Holds the *current* state of keys, mouse buttons and the cursor. Whatever
//! owns the window feeds events in; gameplay systems read the state through a
//! [`SharedInput`] handle once per tick.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::foundation::math::Vec2;

/// Input handle shared between the event source and the systems reading it
pub type SharedInput = Rc<RefCell<InputManager>>;

/// Input manager
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    pressed_keys: HashSet<KeyCode>,
    pressed_buttons: HashSet<MouseButton>,
    mouse_position: Vec2,
}

impl InputManager {
    /// Create a new input manager with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle around a fresh input manager
    pub fn shared() -> SharedInput {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.pressed_buttons.insert(button);
        } else {
            self.pressed_buttons.remove(&button);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Whether a mouse button is currently held
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Cursor position in world coordinates
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Release every key and button
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.pressed_buttons.clear();
    }
}

/// Keys the arena reads: WASD to move, Space to restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
}

/// Mouse buttons; the left button fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
}
