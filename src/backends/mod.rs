//! Concrete backends for `padbind`.
//!
//! The core only talks to the [`Device`](crate::device::Device) and
//! [`Injector`](crate::inject::Injector) traits; this module holds the
//! implementations that ship with the crate.
//!
//! # Feature flags
//! - **`hid`** — HID device backend over `hidapi` (default).
//! - **`inject`** — keyboard/mouse injection over `enigo` (default).
//!
//! The virtual device backend is always available; it feeds frames from
//! memory and drives the demos and tests.

#[cfg(feature = "hid")]
use crate::device::Device;

pub mod virtual_input;

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;

#[cfg(feature = "inject")]
#[cfg_attr(docsrs, doc(cfg(feature = "inject")))]
pub mod enigo;

/// Unified discovery across enabled device backends.
///
/// Currently this returns HID gamepads when `hid` is enabled. All devices
/// share `layout`, the raw report shape to decode.
#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub fn probe_devices(layout: &hid::ReportLayout) -> Vec<Box<dyn Device>> {
    let mut out: Vec<Box<dyn Device>> = Vec::new();
    match hidapi::HidApi::new() {
        Ok(api) => out.extend(hid::probe_devices(&api, layout)),
        Err(e) => log::error!("failed to initialize HID API: {}", e),
    }
    out
}
