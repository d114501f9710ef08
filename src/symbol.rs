//! Bound-action symbols and the capture-string translator.
//!
//! A binding UI hands this module whatever the user typed or captured (a
//! keysym like `"Escape"`, a mouse token like `"m_left"`, a pseudo-action like
//! `"m_move_up"`) and [`translate`] resolves it into a [`Symbol`]:
//!
//! - **Literal key** — resolved against the canonical named-key table, with a
//!   small alias table covering naming mismatches between capture sources.
//!   Anything unresolved passes through as a literal key; translation never
//!   fails at bind time. An incompatible literal only surfaces later as an
//!   [`InjectionError`](crate::error::InjectionError) when dispatched.
//! - **Mouse button** — `m_left` / `m_right` / `m_middle`.
//! - **Motion/scroll pseudo-action** — `m_move_*` / `m_scroll_*`. These are
//!   never forwarded as press/release; each activation issues one relative
//!   motion step or one scroll tick, and "release" is a no-op.

use serde::{Deserialize, Serialize};

/// Canonical named keys plus literal fallbacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    /// A single character with no table entry, passed through verbatim.
    Char(char),
    /// An unresolved multi-character capture. Kept as-is so the eventual
    /// rejection happens at dispatch time, not bind time.
    Other(String),
}

/// Mouse buttons addressable through the injection backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Direction of a motion or scroll pseudo-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionDir {
    Up,
    Down,
    Left,
    Right,
}

/// A bound action symbol: what a keybind presses on behalf of an input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Key(Key),
    Mouse(MouseButton),
    /// Relative mouse motion, one fixed step per activation.
    Move(MotionDir),
    /// One scroll tick per activation.
    Scroll(MotionDir),
}

impl Symbol {
    /// Pseudo-actions carry no pressed state; only repeated activation
    /// produces output.
    pub fn is_pseudo(&self) -> bool {
        matches!(self, Symbol::Move(_) | Symbol::Scroll(_))
    }
}

/// Resolve a human-entered capture string to a [`Symbol`].
///
/// Normalization is case-insensitive. Resolution never fails: an unknown
/// capture degrades to a literal key.
pub fn translate(capture: &str) -> Symbol {
    let trimmed = capture.trim();
    let norm = trimmed.to_ascii_lowercase();

    match norm.as_str() {
        "m_left" => return Symbol::Mouse(MouseButton::Left),
        "m_right" => return Symbol::Mouse(MouseButton::Right),
        "m_middle" => return Symbol::Mouse(MouseButton::Middle),
        _ => {}
    }
    if let Some(dir) = norm.strip_prefix("m_move_").and_then(motion_dir) {
        return Symbol::Move(dir);
    }
    if let Some(dir) = norm.strip_prefix("m_scroll_").and_then(motion_dir) {
        return Symbol::Scroll(dir);
    }
    if let Some(key) = named_key(&norm) {
        return Symbol::Key(key);
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        // Single character as typed, case preserved.
        (Some(c), None) => Symbol::Key(Key::Char(c)),
        _ => Symbol::Key(Key::Other(trimmed.to_string())),
    }
}

fn motion_dir(name: &str) -> Option<MotionDir> {
    Some(match name {
        "up" => MotionDir::Up,
        "down" => MotionDir::Down,
        "left" => MotionDir::Left,
        "right" => MotionDir::Right,
        _ => return None,
    })
}

/// Canonical named-key table, including aliases for the naming mismatches
/// between common capture sources (tk keysyms, pynput attribute names).
fn named_key(name: &str) -> Option<Key> {
    Some(match name {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "space" => Key::Space,
        "tab" => Key::Tab,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "insert" => Key::Insert,
        "shift" | "shift_l" | "shift_r" => Key::Shift,
        "control" | "ctrl" | "control_l" | "control_r" => Key::Control,
        "alt" | "alt_l" | "alt_r" => Key::Alt,
        "meta" | "super" | "cmd" | "win" => Key::Meta,
        "capslock" | "caps_lock" => Key::CapsLock,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "page_up" | "prior" => Key::PageUp,
        "pagedown" | "page_down" | "next" => Key::PageDown,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        _ => return None,
    })
}
