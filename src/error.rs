//! Error types for the remapping core.
//!
//! There are no fatal error classes here: [`Error`] covers the two
//! caller-visible failures (`attach` with an unknown layout, `poll` with no
//! device), and [`InjectionError`] is the per-symbol failure reported by an
//! [`Injector`](crate::inject::Injector). Injection failures are logged at the
//! point of dispatch and never abort the tick.

use thiserror::Error;

/// Caller-visible failures of the core surface.
#[derive(Debug, Error)]
pub enum Error {
    /// The attached device's name has no registered layout.
    ///
    /// This is surfaced rather than treated as an empty layout: a device the
    /// registry does not know cannot be decoded positionally.
    #[error("no layout registered for device {0:?}")]
    UnknownLayout(String),

    /// `poll` was called with no device attached.
    #[error("no device attached")]
    NoDevice,
}

/// An injection backend rejected a press/release/move/scroll call.
///
/// Produced by concrete [`Injector`](crate::inject::Injector) implementations.
/// Keybinds catch this at single-symbol granularity: the failure is logged and
/// the remaining symbols of the bundle are still attempted.
#[derive(Debug, Error)]
#[error("injection failed: {reason}")]
pub struct InjectionError {
    reason: String,
}

impl InjectionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
