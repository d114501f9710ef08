//! HID device backend.
//!
//! [`HidFrameDevice`] wraps a `hidapi::HidDevice` and decodes its input
//! reports into the positional frame the controller core samples. It is
//! responsible for:
//! - opening the HID handle in non-blocking mode
//! - draining a bounded number of reports per `refresh`
//! - decoding the packed `[buttons bitfield][axis bytes]` report described by
//!   a [`ReportLayout`] into button/axis slots
//!
//! It does **not** apply deadzones, thresholds, or edge detection — that is
//! the logical-input layer's job.

use log::{debug, warn};

use crate::device::Device;
use hidapi::{DeviceInfo, HidApi};

/// Safety valve: maximum number of HID reports drained per `refresh` call.
///
/// Prevents a device producing data faster than the host polls from starving
/// the tick.
const MAX_REPORTS_PER_TICK: usize = 32;

/// HID usage page/usages accepted by [`probe_devices`]: Generic Desktop
/// joysticks and gamepads.
const USAGE_PAGE_GENERIC_DESKTOP: u16 = 0x01;
const USAGE_JOYSTICK: u16 = 0x04;
const USAGE_GAMEPAD: u16 = 0x05;

/// Shape of the raw input report.
///
/// Layout after the optional report id byte: `ceil(buttons / 8)` bytes of
/// button bits (LSB-first), then one unsigned byte per axis, `0x80`-centered.
#[derive(Clone, Copy, Debug)]
pub struct ReportLayout {
    /// Report id prefixing each report, if the device uses numbered reports.
    pub report_id: Option<u8>,
    pub buttons: u16,
    pub axes: u16,
}

impl ReportLayout {
    fn button_bytes(&self) -> usize {
        (self.buttons as usize + 7) / 8
    }

    fn payload_len(&self) -> usize {
        self.button_bytes() + self.axes as usize
    }
}

/// Concrete HID-backed [`Device`].
pub struct HidFrameDevice {
    id: String,
    name: String,
    raw: hidapi::HidDevice,
    layout: ReportLayout,
    buttons: Vec<bool>,
    axes: Vec<f32>,
}

impl HidFrameDevice {
    /// Attempt to open and wrap a HID device entry.
    ///
    /// Returns `None` if the OS handle cannot be opened. Reads are
    /// non-blocking; `refresh` returns with the most recent decoded frame.
    pub fn open(info: &DeviceInfo, api: &HidApi, layout: ReportLayout) -> Option<Self> {
        let raw = info.open_device(api).ok()?;
        let _ = raw.set_blocking_mode(false);
        Some(Self {
            id: format!("{:04x}:{:04x}", info.vendor_id(), info.product_id()),
            name: info.product_string().unwrap_or("Unknown").to_string(),
            raw,
            layout,
            buttons: vec![false; layout.buttons as usize],
            axes: vec![0.0; layout.axes as usize],
        })
    }

    fn decode(&mut self, payload: &[u8]) {
        if payload.len() < self.layout.payload_len() {
            debug!("{}: short report ({} bytes)", self.id, payload.len());
            return;
        }
        for bit in 0..self.layout.buttons as usize {
            self.buttons[bit] = payload[bit / 8] & (1 << (bit % 8)) != 0;
        }
        let axis_bytes = &payload[self.layout.button_bytes()..];
        for (slot, byte) in self.axes.iter_mut().zip(axis_bytes) {
            *slot = (f32::from(*byte) - 128.0) / 127.0;
        }
        for slot in self.axes.iter_mut() {
            *slot = slot.clamp(-1.0, 1.0);
        }
    }
}

impl Device for HidFrameDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn refresh(&mut self) {
        let mut buf = [0u8; 64];
        for _ in 0..MAX_REPORTS_PER_TICK {
            match self.raw.read_timeout(&mut buf, 0) {
                Ok(0) => break,
                Ok(len) => {
                    let payload = match self.layout.report_id {
                        // Skip the report id byte, ignoring other report ids.
                        Some(id) => {
                            if buf[0] != id {
                                continue;
                            }
                            &buf[1..len]
                        }
                        None => &buf[..len],
                    };
                    // Keep draining: the last report wins the frame.
                    self.decode(payload);
                }
                Err(e) => {
                    warn!("{}: read error: {}", self.id, e);
                    break;
                }
            }
        }
    }

    fn get_button(&self, index: u16) -> bool {
        self.buttons.get(index as usize).copied().unwrap_or(false)
    }

    fn get_axis(&self, index: u16) -> f32 {
        self.axes.get(index as usize).copied().unwrap_or(0.0)
    }
}

/// Open every joystick/gamepad-usage HID device, decoding with `layout`.
pub fn probe_devices(api: &HidApi, layout: &ReportLayout) -> Vec<Box<dyn Device>> {
    let mut found: Vec<Box<dyn Device>> = Vec::new();
    for info in api.device_list() {
        if info.usage_page() != USAGE_PAGE_GENERIC_DESKTOP {
            continue;
        }
        if info.usage() != USAGE_JOYSTICK && info.usage() != USAGE_GAMEPAD {
            continue;
        }
        if let Some(dev) = HidFrameDevice::open(info, api, *layout) {
            found.push(Box::new(dev));
        }
    }
    found
}
