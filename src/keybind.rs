//! Keybinds: bound symbol bundles and their start/stop/repeat protocol.
//!
//! A [`Keybind`] holds the symbols a logical input drives and pushes them
//! through the injection backend. The bound list is an atomic combination:
//! `start`/`stop` press/release every symbol together, with no inter-symbol
//! ordering guarantee and no rollback — a failure on one symbol is logged and
//! the rest are still attempted.
//!
//! `always` is the turbo/repeat hook: it re-issues the press action for every
//! symbol without toggling the pressed flag. For literal keys and mouse
//! buttons that is a harmless repeated press; for motion/scroll
//! pseudo-actions it is the only mechanism that produces continuous output,
//! since those are relative-delta, not stateful press/release.

use log::warn;

use crate::error::InjectionError;
use crate::inject::{Injector, MOVE_STEP, SCROLL_STEP};
use crate::symbol::{MotionDir, Symbol};

/// An ordered, duplicate-free bundle of bound symbols plus dispatch state.
#[derive(Clone, Debug, Default)]
pub struct Keybind {
    symbols: Vec<Symbol>,
    is_pressed: bool,
    while_pressed: bool,
}

impl Keybind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a symbol. Duplicates are ignored; order of first binding is kept.
    pub fn bind(&mut self, symbol: Symbol) {
        if !self.symbols.contains(&symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Remove every bound symbol. Does not release anything already pressed.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Whether `start` has been dispatched without a matching `stop`.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Turbo flag: repeat via `always` while the input stays pressed.
    pub fn while_pressed(&self) -> bool {
        self.while_pressed
    }

    pub fn set_while_pressed(&mut self, on: bool) {
        self.while_pressed = on;
    }

    /// Press every bound symbol and mark the bind pressed.
    pub fn start(&mut self, injector: &mut dyn Injector) {
        self.is_pressed = true;
        for symbol in &self.symbols {
            if let Err(e) = press_symbol(injector, symbol) {
                warn!("press failed for {:?}: {}", symbol, e);
            }
        }
    }

    /// Release every bound symbol and mark the bind released.
    pub fn stop(&mut self, injector: &mut dyn Injector) {
        self.is_pressed = false;
        for symbol in &self.symbols {
            if let Err(e) = release_symbol(injector, symbol) {
                warn!("release failed for {:?}: {}", symbol, e);
            }
        }
    }

    /// Re-issue the press action for every bound symbol without toggling the
    /// pressed flag.
    pub fn always(&mut self, injector: &mut dyn Injector) {
        for symbol in &self.symbols {
            if let Err(e) = press_symbol(injector, symbol) {
                warn!("repeat failed for {:?}: {}", symbol, e);
            }
        }
    }
}

fn motion_delta(dir: MotionDir, step: i32) -> (i32, i32) {
    match dir {
        MotionDir::Up => (0, -step),
        MotionDir::Down => (0, step),
        MotionDir::Left => (-step, 0),
        MotionDir::Right => (step, 0),
    }
}

fn press_symbol(injector: &mut dyn Injector, symbol: &Symbol) -> Result<(), InjectionError> {
    match symbol {
        Symbol::Key(key) => injector.key_press(key),
        Symbol::Mouse(button) => injector.mouse_press(*button),
        Symbol::Move(dir) => {
            let (dx, dy) = motion_delta(*dir, MOVE_STEP);
            injector.move_rel(dx, dy)
        }
        Symbol::Scroll(dir) => {
            let (dx, dy) = motion_delta(*dir, SCROLL_STEP);
            injector.scroll(dx, dy)
        }
    }
}

fn release_symbol(injector: &mut dyn Injector, symbol: &Symbol) -> Result<(), InjectionError> {
    match symbol {
        Symbol::Key(key) => injector.key_release(key),
        Symbol::Mouse(button) => injector.mouse_release(*button),
        // Pseudo-actions have no pressed state to undo.
        Symbol::Move(_) | Symbol::Scroll(_) => Ok(()),
    }
}
