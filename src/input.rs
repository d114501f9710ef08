//! Logical inputs: decoding raw frame slots into semantic state.
//!
//! A [`LogicalInput`] owns one or more raw slots of the attached device plus
//! the keybind(s) its activity drives:
//!
//! - **Button** — one raw button slot, boolean pressed state, one keybind.
//! - **Axis** — two raw axis slots (X, Y), deadzoned continuous values, a
//!   discretized direction pair, and four keybinds (up/down/left/right).
//! - **Trigger** — one raw axis slot, a press threshold, one keybind.
//!
//! Every poll tick calls [`LogicalInput::update`] (pure decode, returns
//! [`InputDelta`]s) followed by [`LogicalInput::dispatch`] (maps deltas onto
//! keybind start/stop/always calls). The two passes run back to back per
//! input so dispatch order follows layout order.

use crate::device::Device;
use crate::event::{InputDelta, StickPair};
use crate::inject::Injector;
use crate::keybind::Keybind;

use serde::{Deserialize, Serialize};

/// Default stick deadzone: raw magnitudes at or below this read as zero.
pub const DEFAULT_DEADZONE: f32 = 0.1;

/// Default trigger press threshold.
///
/// Assumes the common rest convention where an unpressed trigger reads below
/// zero. Devices resting elsewhere need [`TriggerInput::set_threshold`]; this
/// is a configuration input, not a constant to tune here.
pub const DEFAULT_TRIGGER_THRESHOLD: f32 = 0.0;

/// Addresses one keybind of a logical input.
///
/// Buttons and triggers expose [`Press`](BindSlot::Press); axes expose the
/// four direction slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindSlot {
    Press,
    Up,
    Down,
    Left,
    Right,
}

/// A single raw button.
#[derive(Debug)]
pub struct ButtonInput {
    raw: u16,
    pressed: bool,
    keybind: Keybind,
}

impl ButtonInput {
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            pressed: false,
            keybind: Keybind::new(),
        }
    }

    pub fn raw_index(&self) -> u16 {
        self.raw
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    fn update(&mut self, frame: &dyn Device) -> Option<InputDelta> {
        let prev = self.pressed;
        self.pressed = frame.get_button(self.raw);
        bool_delta(prev, self.pressed)
    }
}

/// A two-axis stick with deadzone and discretized direction.
#[derive(Debug)]
pub struct AxisInput {
    raw_x: u16,
    raw_y: u16,
    deadzone: f32,
    x: f32,
    y: f32,
    /// Discretized `(vertical, horizontal)`, each in {-1, 0, 1}.
    direction: (i8, i8),
    up: Keybind,
    down: Keybind,
    left: Keybind,
    right: Keybind,
}

impl AxisInput {
    pub fn new(raw_x: u16, raw_y: u16) -> Self {
        Self {
            raw_x,
            raw_y,
            deadzone: DEFAULT_DEADZONE,
            x: 0.0,
            y: 0.0,
            direction: (0, 0),
            up: Keybind::new(),
            down: Keybind::new(),
            left: Keybind::new(),
            right: Keybind::new(),
        }
    }

    pub fn raw_indices(&self) -> (u16, u16) {
        (self.raw_x, self.raw_y)
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    pub fn set_deadzone(&mut self, deadzone: f32) {
        self.deadzone = deadzone;
    }

    /// Deadzoned continuous position, each component in `[-1, 1]`.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Discretized `(vertical, horizontal)` direction. `-1` is up / left.
    pub fn direction(&self) -> (i8, i8) {
        self.direction
    }

    fn update(&mut self, frame: &dyn Device) -> Vec<InputDelta> {
        let raw_x = frame.get_axis(self.raw_x);
        let raw_y = frame.get_axis(self.raw_y);

        self.x = if raw_x.abs() > self.deadzone { raw_x } else { 0.0 };
        self.y = if raw_y.abs() > self.deadzone { raw_y } else { 0.0 };

        let prev = self.direction;
        self.direction = (
            discretize(raw_y, self.deadzone),
            discretize(raw_x, self.deadzone),
        );

        let pairs = [
            (StickPair::Vertical, prev.0, self.direction.0),
            (StickPair::Horizontal, prev.1, self.direction.1),
        ];
        let mut deltas = Vec::new();
        for (pair, from, to) in pairs {
            if from != to {
                deltas.push(InputDelta::DirectionChanged { pair, from, to });
            } else if to != 0 {
                deltas.push(InputDelta::DirectionHeld { pair, value: to });
            }
        }
        deltas
    }

    /// The `(negative, positive)` keybinds of a pair: (up, down) or
    /// (left, right).
    fn pair_binds_mut(&mut self, pair: StickPair) -> (&mut Keybind, &mut Keybind) {
        match pair {
            StickPair::Vertical => (&mut self.up, &mut self.down),
            StickPair::Horizontal => (&mut self.left, &mut self.right),
        }
    }

    fn dispatch(&mut self, deltas: &[InputDelta], injector: &mut dyn Injector) {
        for delta in deltas {
            match *delta {
                InputDelta::DirectionHeld { pair, value } => {
                    let (neg, pos) = self.pair_binds_mut(pair);
                    let active = if value < 0 { neg } else { pos };
                    if active.while_pressed() {
                        active.always(injector);
                    }
                }
                InputDelta::DirectionChanged { pair, from, to } => {
                    let (neg, pos) = self.pair_binds_mut(pair);
                    // Start the new direction before stopping the old one so
                    // no dispatch tick sees neither direction active.
                    match to {
                        1 => {
                            pos.start(injector);
                            if from == -1 {
                                neg.stop(injector);
                            }
                        }
                        -1 => {
                            neg.start(injector);
                            if from == 1 {
                                pos.stop(injector);
                            }
                        }
                        _ => {
                            pos.stop(injector);
                            neg.stop(injector);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// A single analog trigger with a press threshold.
#[derive(Debug)]
pub struct TriggerInput {
    raw: u16,
    threshold: f32,
    value: f32,
    pressed: bool,
    keybind: Keybind,
}

impl TriggerInput {
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            threshold: DEFAULT_TRIGGER_THRESHOLD,
            value: 0.0,
            pressed: false,
            keybind: Keybind::new(),
        }
    }

    pub fn raw_index(&self) -> u16 {
        self.raw
    }

    /// Continuous trigger value as last decoded.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Per-device calibration point for triggers whose rest value is not
    /// below [`DEFAULT_TRIGGER_THRESHOLD`].
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    fn update(&mut self, frame: &dyn Device) -> Option<InputDelta> {
        let prev = self.pressed;
        self.value = frame.get_axis(self.raw);
        self.pressed = self.value >= self.threshold;
        bool_delta(prev, self.pressed)
    }
}

/// One named input of the attached device.
#[derive(Debug)]
pub enum LogicalInput {
    Button(ButtonInput),
    Axis(AxisInput),
    Trigger(TriggerInput),
}

impl LogicalInput {
    /// Decode this input's slice of the current frame. Pure with respect to
    /// keybinds and the injection backend.
    pub fn update(&mut self, frame: &dyn Device) -> Vec<InputDelta> {
        match self {
            LogicalInput::Button(b) => b.update(frame).into_iter().collect(),
            LogicalInput::Trigger(t) => t.update(frame).into_iter().collect(),
            LogicalInput::Axis(a) => a.update(frame),
        }
    }

    /// Drive this input's keybind(s) from the deltas of the same tick.
    pub fn dispatch(&mut self, deltas: &[InputDelta], injector: &mut dyn Injector) {
        match self {
            LogicalInput::Button(b) => dispatch_bool(&mut b.keybind, deltas, injector),
            LogicalInput::Trigger(t) => dispatch_bool(&mut t.keybind, deltas, injector),
            LogicalInput::Axis(a) => a.dispatch(deltas, injector),
        }
    }

    /// Boolean pressed state, for inputs that have one (buttons, triggers).
    pub fn pressed(&self) -> Option<bool> {
        match self {
            LogicalInput::Button(b) => Some(b.pressed()),
            LogicalInput::Trigger(t) => Some(t.pressed()),
            LogicalInput::Axis(_) => None,
        }
    }

    /// Slots this input exposes, in a fixed order for UI listing.
    pub fn slots(&self) -> &'static [BindSlot] {
        match self {
            LogicalInput::Button(_) | LogicalInput::Trigger(_) => &[BindSlot::Press],
            LogicalInput::Axis(_) => &[
                BindSlot::Up,
                BindSlot::Down,
                BindSlot::Left,
                BindSlot::Right,
            ],
        }
    }

    pub fn keybind(&self, slot: BindSlot) -> Option<&Keybind> {
        match (self, slot) {
            (LogicalInput::Button(b), BindSlot::Press) => Some(&b.keybind),
            (LogicalInput::Trigger(t), BindSlot::Press) => Some(&t.keybind),
            (LogicalInput::Axis(a), BindSlot::Up) => Some(&a.up),
            (LogicalInput::Axis(a), BindSlot::Down) => Some(&a.down),
            (LogicalInput::Axis(a), BindSlot::Left) => Some(&a.left),
            (LogicalInput::Axis(a), BindSlot::Right) => Some(&a.right),
            _ => None,
        }
    }

    pub fn keybind_mut(&mut self, slot: BindSlot) -> Option<&mut Keybind> {
        match (self, slot) {
            (LogicalInput::Button(b), BindSlot::Press) => Some(&mut b.keybind),
            (LogicalInput::Trigger(t), BindSlot::Press) => Some(&mut t.keybind),
            (LogicalInput::Axis(a), BindSlot::Up) => Some(&mut a.up),
            (LogicalInput::Axis(a), BindSlot::Down) => Some(&mut a.down),
            (LogicalInput::Axis(a), BindSlot::Left) => Some(&mut a.left),
            (LogicalInput::Axis(a), BindSlot::Right) => Some(&mut a.right),
            _ => None,
        }
    }
}

fn bool_delta(prev: bool, now: bool) -> Option<InputDelta> {
    match (prev, now) {
        (false, true) => Some(InputDelta::Pressed),
        (true, false) => Some(InputDelta::Released),
        (true, true) => Some(InputDelta::Held),
        (false, false) => None,
    }
}

/// Turbo suppresses the edge-triggered start outright: while `while_pressed`
/// is set, a pressed tick (rising included) repeats via `always` and only the
/// falling edge still stops.
fn dispatch_bool(keybind: &mut Keybind, deltas: &[InputDelta], injector: &mut dyn Injector) {
    for delta in deltas {
        match delta {
            InputDelta::Pressed => {
                if keybind.while_pressed() {
                    keybind.always(injector);
                } else {
                    keybind.start(injector);
                }
            }
            InputDelta::Held => {
                if keybind.while_pressed() {
                    keybind.always(injector);
                }
            }
            InputDelta::Released => keybind.stop(injector),
            _ => {}
        }
    }
}

fn discretize(value: f32, deadzone: f32) -> i8 {
    if value < -deadzone {
        -1
    } else if value > deadzone {
        1
    } else {
        0
    }
}
