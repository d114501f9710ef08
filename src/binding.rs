//! Serializable binding profiles.
//!
//! A [`BindingProfile`] is a plain-data description of every keybind on a
//! controller: which input, which slot, which symbols, turbo or not. It is
//! what a configuration UI hands to its persistence layer — this crate
//! serializes the types (serde) but does no file I/O itself.
//!
//! Profiles are layout-shaped: applying a profile captured from one device
//! model to another silently skips entries whose input names don't exist.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::controller::Controller;
use crate::input::BindSlot;
use crate::symbol::Symbol;

/// One keybind's worth of configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Logical input name, as named by the device layout.
    pub input: String,
    pub slot: BindSlot,
    pub symbols: Vec<Symbol>,
    pub turbo: bool,
}

/// Serializable profile of input bindings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    pub description: Option<String>,
    pub bindings: Vec<BindingEntry>,
}

impl BindingProfile {
    /// Snapshot every non-empty keybind of `controller` into a profile.
    pub fn capture(name: impl Into<String>, controller: &Controller) -> Self {
        let mut bindings = Vec::new();
        for (input_name, input) in controller.inputs() {
            for slot in input.slots() {
                let Some(keybind) = input.keybind(*slot) else {
                    continue;
                };
                if keybind.symbols().is_empty() {
                    continue;
                }
                bindings.push(BindingEntry {
                    input: input_name.to_string(),
                    slot: *slot,
                    symbols: keybind.symbols().to_vec(),
                    turbo: keybind.while_pressed(),
                });
            }
        }
        Self {
            name: name.into(),
            description: None,
            bindings,
        }
    }

    /// Apply every entry to `controller`, replacing the addressed keybinds.
    ///
    /// Entries naming inputs or slots the attached device doesn't have are
    /// skipped with a warning.
    pub fn apply(&self, controller: &mut Controller) {
        for entry in &self.bindings {
            let Some(input) = controller.input_mut(&entry.input) else {
                warn!("profile {:?}: no input {:?}", self.name, entry.input);
                continue;
            };
            let Some(keybind) = input.keybind_mut(entry.slot) else {
                warn!(
                    "profile {:?}: input {:?} has no slot {:?}",
                    self.name, entry.input, entry.slot
                );
                continue;
            };
            keybind.clear();
            for symbol in &entry.symbols {
                keybind.bind(symbol.clone());
            }
            keybind.set_while_pressed(entry.turbo);
        }
    }
}
