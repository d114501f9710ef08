//! The controller: layout expansion and the per-tick poll cycle.
//!
//! A [`Controller`] owns the logical inputs of the currently attached device.
//! [`Controller::attach`] expands the device's layout into named inputs;
//! [`Controller::poll`] runs one decode-and-dispatch cycle over all of them
//! and recomputes the `pressed`/`held`/`released` name sets.
//!
//! The embedding program drives `poll` from a fixed-interval tick (on the
//! order of 10 ms). Nothing here blocks or suspends; bind/clear calls and
//! polls just have to be serialized on the same execution context.

use log::{debug, info};

use crate::device::Device;
use crate::error::Error;
use crate::event::InputDelta;
use crate::input::{AxisInput, ButtonInput, LogicalInput, TriggerInput};
use crate::inject::Injector;
use crate::layout::{EntryKind, LayoutRegistry};

/// Owns the active device, its logical inputs, and the per-tick edge sets.
pub struct Controller {
    registry: LayoutRegistry,
    device: Option<Box<dyn Device>>,
    /// `name → input` in layout order.
    inputs: Vec<(String, LogicalInput)>,
    pressed: Vec<String>,
    held: Vec<String>,
    released: Vec<String>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Controller backed by the built-in layout registry.
    pub fn new() -> Self {
        Self::with_registry(LayoutRegistry::default())
    }

    pub fn with_registry(registry: LayoutRegistry) -> Self {
        Self {
            registry,
            device: None,
            inputs: Vec::new(),
            pressed: Vec::new(),
            held: Vec::new(),
            released: Vec::new(),
        }
    }

    /// Registry access, for callers adding device layouts.
    pub fn registry_mut(&mut self) -> &mut LayoutRegistry {
        &mut self.registry
    }

    /// Attach a device, replacing any previous one.
    ///
    /// Expands the device's layout in order, maintaining independent raw
    /// button/axis cursors. Dummy entries advance the cursors without
    /// producing an input. All previous inputs and their bindings are
    /// discarded.
    pub fn attach(&mut self, device: Box<dyn Device>) -> Result<(), Error> {
        let layout = self.registry.lookup(device.name())?;

        let mut inputs = Vec::new();
        let mut button_cursor: u16 = 0;
        let mut axis_cursor: u16 = 0;
        for (name, kind) in layout.entries() {
            match kind {
                EntryKind::Button => {
                    inputs.push((
                        name.clone(),
                        LogicalInput::Button(ButtonInput::new(button_cursor)),
                    ));
                    button_cursor += 1;
                }
                EntryKind::Axis => {
                    inputs.push((
                        name.clone(),
                        LogicalInput::Axis(AxisInput::new(axis_cursor, axis_cursor + 1)),
                    ));
                    axis_cursor += 2;
                }
                EntryKind::Trigger => {
                    inputs.push((
                        name.clone(),
                        LogicalInput::Trigger(TriggerInput::new(axis_cursor)),
                    ));
                    axis_cursor += 1;
                }
                EntryKind::DummyButton => button_cursor += 1,
                EntryKind::DummyAxis => axis_cursor += 2,
                EntryKind::DummyTrigger => axis_cursor += 1,
            }
        }

        info!(
            "attached {:?} ({} inputs, {} raw buttons, {} raw axes)",
            device.name(),
            inputs.len(),
            button_cursor,
            axis_cursor
        );

        self.inputs = inputs;
        self.device = Some(device);
        self.pressed.clear();
        self.held.clear();
        self.released.clear();
        Ok(())
    }

    /// Detach the current device, discarding its inputs and bindings.
    pub fn detach(&mut self) {
        self.device = None;
        self.inputs.clear();
        self.pressed.clear();
        self.held.clear();
        self.released.clear();
    }

    /// Name of the attached device, if any.
    pub fn device_name(&self) -> Option<&str> {
        self.device.as_deref().map(Device::name)
    }

    /// Run one decode-and-dispatch cycle.
    ///
    /// For every input, in layout order: decode its slice of the fresh frame
    /// into deltas, classify boolean edges into the `pressed`/`held`/
    /// `released` sets, and drive its keybind(s) through `injector`. Axis
    /// inputs contribute direction state instead of edge-set entries.
    pub fn poll(&mut self, injector: &mut dyn Injector) -> Result<(), Error> {
        let device = self.device.as_mut().ok_or(Error::NoDevice)?;
        device.refresh();
        let frame: &dyn Device = &**device;

        self.pressed.clear();
        self.held.clear();
        self.released.clear();

        for (name, input) in &mut self.inputs {
            let deltas = input.update(frame);
            for delta in &deltas {
                match delta {
                    InputDelta::Pressed => self.pressed.push(name.clone()),
                    InputDelta::Held => self.held.push(name.clone()),
                    InputDelta::Released => self.released.push(name.clone()),
                    _ => {}
                }
            }
            if !deltas.is_empty() {
                debug!("{}: {:?}", name, deltas);
            }
            input.dispatch(&deltas, injector);
        }
        Ok(())
    }

    /// Inputs that rose this tick, in layout order.
    pub fn pressed(&self) -> &[String] {
        &self.pressed
    }

    /// Inputs pressed on both sides of this tick, in layout order.
    pub fn held(&self) -> &[String] {
        &self.held
    }

    /// Inputs that fell this tick, in layout order.
    pub fn released(&self) -> &[String] {
        &self.released
    }

    pub fn input(&self, name: &str) -> Option<&LogicalInput> {
        self.inputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, input)| input)
    }

    pub fn input_mut(&mut self, name: &str) -> Option<&mut LogicalInput> {
        self.inputs
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, input)| input)
    }

    /// `(name, input)` pairs in layout order, for UI listing.
    pub fn inputs(&self) -> impl Iterator<Item = (&str, &LogicalInput)> {
        self.inputs.iter().map(|(n, i)| (n.as_str(), i))
    }
}
