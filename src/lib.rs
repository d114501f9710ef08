//! padbind — remaps game-controller input to synthesized keyboard/mouse
//! events.
//!
//! The core is layout-driven: a [`LayoutRegistry`](layout::LayoutRegistry)
//! describes each device model's positionally-addressed button/axis space, a
//! [`Controller`](controller::Controller) expands that layout into named
//! [`LogicalInput`](input::LogicalInput)s, and every poll tick decodes the
//! raw frame into edge deltas and drives the bound
//! [`Keybind`](keybind::Keybind)s through an injection backend.
//!
//! Device sampling and event injection live behind the [`Device`] and
//! [`Injector`] traits; the backends shipped with the crate are feature-gated
//! under [`backends`].

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backends;
pub mod binding;
pub mod controller;
pub mod device;
pub mod error;
pub mod event;
pub mod inject;
pub mod input;
pub mod keybind;
pub mod layout;
pub mod symbol;

pub use binding::{BindingEntry, BindingProfile};
pub use controller::Controller;
pub use device::Device;
pub use error::{Error, InjectionError};
pub use event::{InputDelta, StickPair};
pub use inject::Injector;
pub use input::{AxisInput, BindSlot, ButtonInput, LogicalInput, TriggerInput};
pub use keybind::Keybind;
pub use layout::{EntryKind, Layout, LayoutRegistry};
pub use symbol::{translate, Key, MotionDir, MouseButton, Symbol};
