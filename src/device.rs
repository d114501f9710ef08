//! Device backend contract.
//!
//! A [`Device`] exposes the most recent raw frame of a physical controller as
//! positionally-addressed button and axis slots. The controller core never
//! touches OS handles itself; backends implement this trait (see
//! [`backends`](crate::backends)).
//!
//! ## Contract
//! - `refresh` pumps the backend and must not block; it returns with whatever
//!   the most recent sample is.
//! - `get_button`/`get_axis` sample the refreshed frame. Raw indices are
//!   device-local slot numbers, independent of logical naming; out-of-range
//!   indices read as neutral (`false` / `0.0`).
//! - `name` is used verbatim as the layout-registry key.

/// A raw button/axis frame source.
pub trait Device {
    /// Stable identifier for enumeration and diagnostics.
    fn id(&self) -> &str;

    /// Device name as reported by the backend; the layout-registry key.
    fn name(&self) -> &str;

    /// Pump the backend so the frame reflects the most recent sample.
    /// Non-blocking.
    fn refresh(&mut self);

    /// Current state of the raw button at `index`.
    fn get_button(&self, index: u16) -> bool;

    /// Current value of the raw axis at `index`, in `[-1.0, 1.0]`.
    fn get_axis(&self, index: u16) -> f32;
}
