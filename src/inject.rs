//! Injection backend contract.
//!
//! An [`Injector`] synthesizes keyboard and mouse events on behalf of
//! keybinds. Calls are fire-and-forget: the core does not wait for or confirm
//! their effect, and implementations are expected not to block.
//!
//! Errors are per-call and per-symbol; the dispatching keybind logs them and
//! carries on with the rest of its bundle (see
//! [`Keybind`](crate::keybind::Keybind)).

use crate::error::InjectionError;
use crate::symbol::{Key, MouseButton};

/// Pixels of relative motion issued per `m_move_*` activation.
pub const MOVE_STEP: i32 = 10;

/// Scroll ticks issued per `m_scroll_*` activation.
pub const SCROLL_STEP: i32 = 1;

/// Synthesizes keyboard/mouse events.
pub trait Injector {
    fn key_press(&mut self, key: &Key) -> Result<(), InjectionError>;
    fn key_release(&mut self, key: &Key) -> Result<(), InjectionError>;

    fn mouse_press(&mut self, button: MouseButton) -> Result<(), InjectionError>;
    fn mouse_release(&mut self, button: MouseButton) -> Result<(), InjectionError>;

    /// Move the pointer by a relative delta, in pixels.
    fn move_rel(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError>;

    /// Scroll by a number of ticks; positive `dy` scrolls down, positive `dx`
    /// scrolls right.
    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError>;
}
