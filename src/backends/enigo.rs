//! Keyboard/mouse injection backend over `enigo`.
//!
//! [`EnigoInjector`] is the concrete [`Injector`](crate::inject::Injector)
//! shipped with the crate. Symbol incompatibilities (an unresolved capture
//! that made it to dispatch) surface here as
//! [`InjectionError`](crate::error::InjectionError)s.

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Keyboard, Mouse, Settings};

use crate::error::InjectionError;
use crate::inject::Injector;
use crate::symbol::{Key, MouseButton};

/// Injector backed by an [`Enigo`] connection.
pub struct EnigoInjector {
    enigo: Enigo,
}

impl EnigoInjector {
    pub fn new() -> Result<Self, InjectionError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectionError::new(format!("enigo connection failed: {e}")))?;
        Ok(Self { enigo })
    }

    fn key_direction(&mut self, key: &Key, direction: Direction) -> Result<(), InjectionError> {
        let key = map_key(key)?;
        self.enigo
            .key(key, direction)
            .map_err(|e| InjectionError::new(e.to_string()))
    }

    fn button_direction(
        &mut self,
        button: MouseButton,
        direction: Direction,
    ) -> Result<(), InjectionError> {
        self.enigo
            .button(map_button(button), direction)
            .map_err(|e| InjectionError::new(e.to_string()))
    }
}

impl Injector for EnigoInjector {
    fn key_press(&mut self, key: &Key) -> Result<(), InjectionError> {
        self.key_direction(key, Direction::Press)
    }

    fn key_release(&mut self, key: &Key) -> Result<(), InjectionError> {
        self.key_direction(key, Direction::Release)
    }

    fn mouse_press(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        self.button_direction(button, Direction::Press)
    }

    fn mouse_release(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        self.button_direction(button, Direction::Release)
    }

    fn move_rel(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        self.enigo
            .move_mouse(dx, dy, Coordinate::Rel)
            .map_err(|e| InjectionError::new(e.to_string()))
    }

    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        if dx != 0 {
            self.enigo
                .scroll(dx, Axis::Horizontal)
                .map_err(|e| InjectionError::new(e.to_string()))?;
        }
        if dy != 0 {
            self.enigo
                .scroll(dy, Axis::Vertical)
                .map_err(|e| InjectionError::new(e.to_string()))?;
        }
        Ok(())
    }
}

fn map_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

fn map_key(key: &Key) -> Result<enigo::Key, InjectionError> {
    use enigo::Key as E;
    Ok(match key {
        Key::Escape => E::Escape,
        Key::Enter => E::Return,
        Key::Space => E::Space,
        Key::Tab => E::Tab,
        Key::Backspace => E::Backspace,
        Key::Delete => E::Delete,
        Key::Insert => E::Insert,
        Key::Shift => E::Shift,
        Key::Control => E::Control,
        Key::Alt => E::Alt,
        Key::Meta => E::Meta,
        Key::CapsLock => E::CapsLock,
        Key::Up => E::UpArrow,
        Key::Down => E::DownArrow,
        Key::Left => E::LeftArrow,
        Key::Right => E::RightArrow,
        Key::Home => E::Home,
        Key::End => E::End,
        Key::PageUp => E::PageUp,
        Key::PageDown => E::PageDown,
        Key::F1 => E::F1,
        Key::F2 => E::F2,
        Key::F3 => E::F3,
        Key::F4 => E::F4,
        Key::F5 => E::F5,
        Key::F6 => E::F6,
        Key::F7 => E::F7,
        Key::F8 => E::F8,
        Key::F9 => E::F9,
        Key::F10 => E::F10,
        Key::F11 => E::F11,
        Key::F12 => E::F12,
        Key::Char(c) => E::Unicode(*c),
        Key::Other(s) => {
            return Err(InjectionError::new(format!(
                "capture {s:?} has no injectable key"
            )))
        }
    })
}
