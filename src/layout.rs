//! Device layouts and the layout registry.
//!
//! A [`Layout`] is an ordered list of `(name, kind)` entries describing a
//! device's advertised button/axis space, in the order the device reports raw
//! indices. Dummy entries reserve raw slots without producing a logical input;
//! they exist because some devices expose non-contiguous vendor-specific raw
//! indices inside a button or axis group (the Joy-Cons are the usual
//! offenders).
//!
//! [`LayoutRegistry`] resolves a device name to its layout by exact string
//! match. A miss is surfaced as [`Error::UnknownLayout`], never treated as an
//! empty layout.

use crate::error::Error;

/// Kind of one layout entry.
///
/// Raw-slot cost during expansion: `Button`/`DummyButton` consume one button
/// index, `Axis`/`DummyAxis` two axis indices (X then Y), `Trigger`/
/// `DummyTrigger` one axis index. Dummy entries only advance the cursors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Button,
    Axis,
    Trigger,
    DummyButton,
    DummyAxis,
    DummyTrigger,
}

impl EntryKind {
    /// Whether expansion produces a logical input for this entry.
    pub fn is_dummy(self) -> bool {
        matches!(
            self,
            EntryKind::DummyButton | EntryKind::DummyAxis | EntryKind::DummyTrigger
        )
    }
}

/// Ordered layout description for one device model.
#[derive(Clone, Debug)]
pub struct Layout {
    name: String,
    entries: Vec<(String, EntryKind)>,
}

impl Layout {
    /// Build a layout from `(name, kind)` pairs in raw-index order.
    pub fn new(name: impl Into<String>, entries: &[(&str, EntryKind)]) -> Self {
        Self {
            name: name.into(),
            entries: entries
                .iter()
                .map(|(n, k)| (n.to_string(), *k))
                .collect(),
        }
    }

    /// Device name this layout is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in raw-index order, dummies included.
    pub fn entries(&self) -> &[(String, EntryKind)] {
        &self.entries
    }
}

/// Exact-name lookup table from device name to [`Layout`].
pub struct LayoutRegistry {
    layouts: Vec<Layout>,
}

impl Default for LayoutRegistry {
    /// Registry preloaded with the built-in layouts.
    fn default() -> Self {
        Self {
            layouts: builtin_layouts(),
        }
    }
}

impl LayoutRegistry {
    /// Empty registry, for callers that ship their own layout set.
    pub fn empty() -> Self {
        Self {
            layouts: Vec::new(),
        }
    }

    /// Register a layout, replacing any existing layout with the same name.
    pub fn register(&mut self, layout: Layout) {
        self.layouts.retain(|l| l.name != layout.name);
        self.layouts.push(layout);
    }

    /// Look up the layout for a device name. Exact match only.
    pub fn lookup(&self, device_name: &str) -> Result<&Layout, Error> {
        self.layouts
            .iter()
            .find(|l| l.name == device_name)
            .ok_or_else(|| Error::UnknownLayout(device_name.to_string()))
    }
}

use EntryKind::{Axis, Button, DummyButton, Trigger};

fn builtin_layouts() -> Vec<Layout> {
    vec![
        ps4_controller(),
        left_joycon(),
        right_joycon(),
        dual_joycon(),
    ]
}

fn ps4_controller() -> Layout {
    Layout::new(
        "PS4 Controller",
        &[
            ("x", Button),
            ("circle", Button),
            ("square", Button),
            ("triangle", Button),
            ("share", Button),
            ("ps", Button),
            ("options", Button),
            ("l3", Button),
            ("r3", Button),
            ("l1", Button),
            ("r1", Button),
            ("up", Button),
            ("down", Button),
            ("left", Button),
            ("right", Button),
            ("touchpad", Button),
            ("LeftStick", Axis),
            ("RightStick", Axis),
            ("l2", Trigger),
            ("r2", Trigger),
        ],
    )
}

fn left_joycon() -> Layout {
    Layout::new(
        "Nintendo Switch Joy-Con (L)",
        &[
            ("right", Button),
            ("down", Button),
            ("up", Button),
            ("left", Button),
            ("DUMMY1", DummyButton),
            ("capture", Button),
            ("minus", Button),
            ("stick", Button),
            ("DUMMY2", DummyButton),
            ("sl", Button),
            ("sr", Button),
            ("DUMMY3", DummyButton),
            ("DUMMY4", DummyButton),
            ("DUMMY5", DummyButton),
            ("DUMMY6", DummyButton),
            ("DUMMY7", DummyButton),
            ("DUMMY8", DummyButton),
            ("l", Button),
            ("DUMMY9", DummyButton),
            ("zl", Button),
            ("Stick", Axis),
        ],
    )
}

fn right_joycon() -> Layout {
    Layout::new(
        "Nintendo Switch Joy-Con (R)",
        &[
            ("x", Button),
            ("a", Button),
            ("y", Button),
            ("b", Button),
            ("DUMMY1", DummyButton),
            ("home", Button),
            ("plus", Button),
            ("stick", Button),
            ("DUMMY2", DummyButton),
            ("sl", Button),
            ("sr", Button),
            ("DUMMY3", DummyButton),
            ("DUMMY4", DummyButton),
            ("DUMMY5", DummyButton),
            ("DUMMY6", DummyButton),
            ("DUMMY7", DummyButton),
            ("r", Button),
            ("DUMMY9", DummyButton),
            ("zr", Button),
            ("Stick", Axis),
        ],
    )
}

fn dual_joycon() -> Layout {
    Layout::new(
        "Nintendo Switch Joy-Con (L/R)",
        &[
            ("a", Button),
            ("b", Button),
            ("x", Button),
            ("y", Button),
            ("minus", Button),
            ("home", Button),
            ("plus", Button),
            ("stick (L)", Button),
            ("stick (R)", Button),
            ("l", Button),
            ("r", Button),
            ("up", Button),
            ("down", Button),
            ("left", Button),
            ("right", Button),
            ("capture", Button),
            ("sr (R)", Button),
            ("sr (L)", Button),
            ("sl (R)", Button),
            ("sl (L)", Button),
            ("LeftStick", Axis),
            ("RightStick", Axis),
            ("zl", Trigger),
            ("zr", Trigger),
        ],
    )
}
