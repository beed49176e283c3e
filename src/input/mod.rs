//! Input events delivered by the host runtime and the fixed key bindings
//! that route them.

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// A discrete input event, delivered between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    MouseClick { x: f32, y: f32, button: MouseButton },
    /// Only the sign of `delta` matters
    Wheel { delta: f32 },
}

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move { dx: i32, dy: i32 },
    Eat,
    ToggleCrafting,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Checked in order; the first matching entry wins
    movement: Vec<(KeyCode, (i32, i32))>,
    eat: KeyCode,
    toggle_crafting: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            movement: vec![
                (KeyCode::KeyW, (0, -1)),
                (KeyCode::ArrowUp, (0, -1)),
                (KeyCode::KeyS, (0, 1)),
                (KeyCode::ArrowDown, (0, 1)),
                (KeyCode::KeyA, (-1, 0)),
                (KeyCode::ArrowLeft, (-1, 0)),
                (KeyCode::KeyD, (1, 0)),
                (KeyCode::ArrowRight, (1, 0)),
            ],
            eat: KeyCode::KeyE,
            toggle_crafting: KeyCode::KeyC,
        }
    }
}

impl KeyBindings {
    /// Cardinal step bound to `key`, if any
    pub fn movement_for(&self, key: KeyCode) -> Option<(i32, i32)> {
        self.movement
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, step)| step)
    }

    pub fn action_for(&self, key: KeyCode) -> Option<KeyAction> {
        if key == self.toggle_crafting {
            return Some(KeyAction::ToggleCrafting);
        }
        if key == self.eat {
            return Some(KeyAction::Eat);
        }
        self.movement_for(key).map(|(dx, dy)| KeyAction::Move { dx, dy })
    }
}

/// Map a wheel delta to a selection step
pub fn wheel_direction(delta: f32) -> i32 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.movement_for(KeyCode::KeyW), Some((0, -1)));
        assert_eq!(bindings.movement_for(KeyCode::ArrowDown), Some((0, 1)));
        assert_eq!(bindings.movement_for(KeyCode::KeyA), Some((-1, 0)));
        assert_eq!(bindings.movement_for(KeyCode::ArrowRight), Some((1, 0)));
        assert_eq!(bindings.movement_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_actions() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(KeyCode::KeyC), Some(KeyAction::ToggleCrafting));
        assert_eq!(bindings.action_for(KeyCode::KeyE), Some(KeyAction::Eat));
        assert_eq!(
            bindings.action_for(KeyCode::KeyD),
            Some(KeyAction::Move { dx: 1, dy: 0 })
        );
        assert_eq!(bindings.action_for(KeyCode::Space), None);
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(wheel_direction(120.0), 1);
        assert_eq!(wheel_direction(-3.0), -1);
        assert_eq!(wheel_direction(0.0), 0);
        assert_eq!(wheel_direction(f32::NAN), 0);
    }
}
