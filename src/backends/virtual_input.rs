//! In-memory device backend.
//!
//! [`VirtualDevice`] reads its raw frame from memory instead of hardware. A
//! [`VirtualHandle`] keeps feeding the frame after the device itself has been
//! handed to a controller. Backs the demos and the integration tests, where
//! scripted frames stand in for a physical controller.

use std::sync::{Arc, Mutex};

use crate::device::Device;

#[derive(Default)]
struct Frame {
    buttons: Vec<bool>,
    axes: Vec<f32>,
}

/// A device whose frame is fed from memory.
pub struct VirtualDevice {
    id: String,
    name: String,
    frame: Arc<Mutex<Frame>>,
}

/// Feeder for a [`VirtualDevice`]'s frame. Stays usable after the device is
/// attached to a controller.
#[derive(Clone)]
pub struct VirtualHandle {
    frame: Arc<Mutex<Frame>>,
}

impl VirtualDevice {
    /// The `name` decides which layout the controller resolves on attach.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            frame: Arc::new(Mutex::new(Frame::default())),
        }
    }

    pub fn handle(&self) -> VirtualHandle {
        VirtualHandle {
            frame: Arc::clone(&self.frame),
        }
    }
}

impl VirtualHandle {
    /// Set a raw button slot, growing the frame as needed.
    pub fn set_button(&self, index: u16, pressed: bool) {
        let mut frame = self.frame.lock().expect("frame lock");
        let index = index as usize;
        if frame.buttons.len() <= index {
            frame.buttons.resize(index + 1, false);
        }
        frame.buttons[index] = pressed;
    }

    /// Set a raw axis slot, growing the frame as needed.
    pub fn set_axis(&self, index: u16, value: f32) {
        let mut frame = self.frame.lock().expect("frame lock");
        let index = index as usize;
        if frame.axes.len() <= index {
            frame.axes.resize(index + 1, 0.0);
        }
        frame.axes[index] = value;
    }

    /// Reset the whole frame to neutral.
    pub fn reset(&self) {
        let mut frame = self.frame.lock().expect("frame lock");
        frame.buttons.iter_mut().for_each(|b| *b = false);
        frame.axes.iter_mut().for_each(|a| *a = 0.0);
    }
}

impl Device for VirtualDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn refresh(&mut self) {}

    fn get_button(&self, index: u16) -> bool {
        let frame = self.frame.lock().expect("frame lock");
        frame.buttons.get(index as usize).copied().unwrap_or(false)
    }

    fn get_axis(&self, index: u16) -> f32 {
        let frame = self.frame.lock().expect("frame lock");
        frame.axes.get(index as usize).copied().unwrap_or(0.0)
    }
}
