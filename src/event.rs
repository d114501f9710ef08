//! Decode deltas.
//!
//! Each poll tick runs two passes per logical input: a pure decode pass that
//! reads the raw frame and reports what changed as small deltas
//! ([`InputDelta`]), and a dispatch pass that maps those deltas onto keybind
//! calls. Keeping decode free of side effects makes the edge detection and
//! deadzone logic testable without an injection backend.
//!
//! ## Value conventions
//! - **Boolean inputs (buttons, triggers):** edges plus a `Held` delta for
//!   every tick the input stays pressed (the turbo repeat hook).
//! - **Sticks:** each orthogonal pair reports independently. Discretized
//!   values are `-1`, `0`, `1`; for the vertical pair `-1` is up, for the
//!   horizontal pair `-1` is left (raw-axis sign convention).

/// One of a stick's two orthogonal direction pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickPair {
    /// Up/down, discretized from the raw Y axis.
    Vertical,
    /// Left/right, discretized from the raw X axis.
    Horizontal,
}

/// Per-input change (delta) produced by one decode pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDelta {
    /// Boolean input rising edge (false → true this tick).
    Pressed,

    /// Boolean input falling edge (true → false this tick).
    Released,

    /// Boolean input pressed on both sides of the tick (true → true).
    Held,

    /// A stick pair's discretized value changed this tick.
    DirectionChanged { pair: StickPair, from: i8, to: i8 },

    /// A stick pair stayed at the same non-neutral value across the tick.
    DirectionHeld { pair: StickPair, value: i8 },
}
