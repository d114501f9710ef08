//! End-to-end poll-cycle tests over a virtual device and a recording
//! injector: layout expansion, edge classification, the keybind dispatch
//! protocol, and binding profiles.

use padbind::backends::virtual_input::{VirtualDevice, VirtualHandle};
use padbind::{
    translate, BindSlot, BindingProfile, Controller, EntryKind, InjectionError, Injector, Key,
    Layout, LayoutRegistry, LogicalInput, MouseButton, Symbol,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    KeyPress(Key),
    KeyRelease(Key),
    MousePress(MouseButton),
    MouseRelease(MouseButton),
    Move(i32, i32),
    Scroll(i32, i32),
}

/// Records successful calls; rejects keys listed in `fail_keys`.
#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    fail_keys: Vec<Key>,
}

impl Recorder {
    fn check(&self, key: &Key) -> Result<(), InjectionError> {
        if self.fail_keys.contains(key) {
            Err(InjectionError::new("rejected by test"))
        } else {
            Ok(())
        }
    }
}

impl Injector for Recorder {
    fn key_press(&mut self, key: &Key) -> Result<(), InjectionError> {
        self.check(key)?;
        self.calls.push(Call::KeyPress(key.clone()));
        Ok(())
    }

    fn key_release(&mut self, key: &Key) -> Result<(), InjectionError> {
        self.check(key)?;
        self.calls.push(Call::KeyRelease(key.clone()));
        Ok(())
    }

    fn mouse_press(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        self.calls.push(Call::MousePress(button));
        Ok(())
    }

    fn mouse_release(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        self.calls.push(Call::MouseRelease(button));
        Ok(())
    }

    fn move_rel(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        self.calls.push(Call::Move(dx, dy));
        Ok(())
    }

    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        self.calls.push(Call::Scroll(dx, dy));
        Ok(())
    }
}

/// Controller attached to a virtual device with the given layout name.
fn attached(name: &str) -> (Controller, VirtualHandle) {
    let device = VirtualDevice::new("virtual:test", name);
    let handle = device.handle();
    let mut controller = Controller::new();
    controller.attach(Box::new(device)).expect("layout exists");
    (controller, handle)
}

fn button_raw(controller: &Controller, name: &str) -> u16 {
    match controller.input(name).expect("input exists") {
        LogicalInput::Button(b) => b.raw_index(),
        other => panic!("{name} is not a button: {other:?}"),
    }
}

#[test]
fn attach_rejects_unknown_devices() {
    let mut controller = Controller::new();
    let err = controller
        .attach(Box::new(VirtualDevice::new("virtual:test", "Mystery Pad")))
        .unwrap_err();
    assert!(err.to_string().contains("Mystery Pad"));
}

#[test]
fn poll_requires_an_attached_device() {
    let mut controller = Controller::new();
    let mut injector = Recorder::default();
    assert!(controller.poll(&mut injector).is_err());
}

#[test]
fn dummy_entries_reserve_raw_slots() {
    let mut registry = LayoutRegistry::empty();
    registry.register(Layout::new(
        "Gapped Pad",
        &[("x", EntryKind::DummyButton), ("a", EntryKind::Button)],
    ));
    let mut controller = Controller::with_registry(registry);
    controller
        .attach(Box::new(VirtualDevice::new("virtual:test", "Gapped Pad")))
        .unwrap();

    assert!(controller.input("x").is_none());
    assert_eq!(button_raw(&controller, "a"), 1);
}

#[test]
fn raw_button_index_counts_preceding_button_entries() {
    // The left Joy-Con layout has eight dummy buttons scattered before "l".
    let (controller, _) = attached("Nintendo Switch Joy-Con (L)");
    assert_eq!(button_raw(&controller, "right"), 0);
    assert_eq!(button_raw(&controller, "capture"), 5);
    assert_eq!(button_raw(&controller, "l"), 17);
    assert_eq!(button_raw(&controller, "zl"), 19);
    match controller.input("Stick").unwrap() {
        LogicalInput::Axis(a) => assert_eq!(a.raw_indices(), (0, 1)),
        other => panic!("Stick is not an axis: {other:?}"),
    }
}

#[test]
fn triggers_consume_one_axis_slot_after_sticks() {
    let (controller, _) = attached("PS4 Controller");
    match controller.input("l2").unwrap() {
        LogicalInput::Trigger(t) => assert_eq!(t.raw_index(), 4),
        other => panic!("l2 is not a trigger: {other:?}"),
    }
    match controller.input("r2").unwrap() {
        LogicalInput::Trigger(t) => assert_eq!(t.raw_index(), 5),
        other => panic!("r2 is not a trigger: {other:?}"),
    }
}

#[test]
fn button_edges_classify_over_four_ticks() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    let x_raw = button_raw(&controller, "x");

    let sequence = [false, true, true, false];
    let mut seen = Vec::new();
    for state in sequence {
        pad.set_button(x_raw, state);
        controller.poll(&mut injector).unwrap();
        seen.push((
            controller.pressed().contains(&"x".to_string()),
            controller.held().contains(&"x".to_string()),
            controller.released().contains(&"x".to_string()),
        ));
    }
    assert_eq!(
        seen,
        vec![
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (false, false, true),
        ]
    );
}

#[test]
fn edge_sets_never_retain_state_across_ticks() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    pad.set_button(0, true);
    controller.poll(&mut injector).unwrap();
    assert_eq!(controller.pressed(), ["x".to_string()]);
    pad.set_button(0, false);
    controller.poll(&mut injector).unwrap();
    assert!(controller.pressed().is_empty());
    assert_eq!(controller.released(), ["x".to_string()]);
    controller.poll(&mut injector).unwrap();
    assert!(controller.released().is_empty());
}

#[test]
fn axis_direction_discretizes_by_deadzone() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();

    // LeftStick owns raw axes 0 (X) and 1 (Y); deadzone defaults to 0.1.
    pad.set_axis(1, -0.5);
    pad.set_axis(0, 0.05);
    controller.poll(&mut injector).unwrap();

    let stick = match controller.input("LeftStick").unwrap() {
        LogicalInput::Axis(a) => a,
        other => panic!("LeftStick is not an axis: {other:?}"),
    };
    assert_eq!(stick.direction(), (-1, 0));
    let (x, y) = stick.position();
    assert_eq!(x, 0.0);
    assert_eq!(y, -0.5);
}

#[test]
fn trigger_presses_at_threshold() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();

    pad.set_axis(4, -1.0); // l2 at rest
    controller.poll(&mut injector).unwrap();
    assert!(!controller.input("l2").unwrap().pressed().unwrap());

    pad.set_axis(4, 0.3);
    controller.poll(&mut injector).unwrap();
    assert!(controller.input("l2").unwrap().pressed().unwrap());
    assert_eq!(controller.pressed(), ["l2".to_string()]);
}

#[test]
fn plain_keybind_fires_one_start_stop_pair() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    controller
        .input_mut("x")
        .unwrap()
        .keybind_mut(BindSlot::Press)
        .unwrap()
        .bind(translate("space"));

    for state in [true, true, true, false] {
        pad.set_button(0, state);
        controller.poll(&mut injector).unwrap();
    }
    assert_eq!(
        injector.calls,
        vec![Call::KeyPress(Key::Space), Call::KeyRelease(Key::Space)]
    );
}

#[test]
fn turbo_repeats_every_pressed_tick_and_never_starts() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    {
        let keybind = controller
            .input_mut("x")
            .unwrap()
            .keybind_mut(BindSlot::Press)
            .unwrap();
        keybind.bind(translate("space"));
        keybind.set_while_pressed(true);
    }

    for state in [true, true, true, false] {
        pad.set_button(0, state);
        controller.poll(&mut injector).unwrap();
        // `start` is suppressed outright, so the pressed flag never rises.
        if state {
            let keybind = controller
                .input("x")
                .unwrap()
                .keybind(BindSlot::Press)
                .unwrap();
            assert!(!keybind.is_pressed());
        }
    }

    // One repeat per pressed tick (rising tick included), one final stop.
    assert_eq!(
        injector.calls,
        vec![
            Call::KeyPress(Key::Space),
            Call::KeyPress(Key::Space),
            Call::KeyPress(Key::Space),
            Call::KeyRelease(Key::Space),
        ]
    );
}

#[test]
fn direction_switch_starts_new_before_stopping_old() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    {
        let stick = controller.input_mut("LeftStick").unwrap();
        stick.keybind_mut(BindSlot::Up).unwrap().bind(translate("w"));
        stick
            .keybind_mut(BindSlot::Down)
            .unwrap()
            .bind(translate("s"));
    }

    pad.set_axis(1, -1.0); // up
    controller.poll(&mut injector).unwrap();
    pad.set_axis(1, 1.0); // straight to down, single tick
    controller.poll(&mut injector).unwrap();

    assert_eq!(
        injector.calls,
        vec![
            Call::KeyPress(Key::Char('w')),
            Call::KeyPress(Key::Char('s')),
            Call::KeyRelease(Key::Char('w')),
        ]
    );

    // Moving to neutral stops both keybinds of the pair; the redundant "w"
    // release is a harmless repeat.
    pad.set_axis(1, 0.0);
    injector.calls.clear();
    controller.poll(&mut injector).unwrap();
    assert_eq!(
        injector.calls,
        vec![
            Call::KeyRelease(Key::Char('s')),
            Call::KeyRelease(Key::Char('w')),
        ]
    );
}

#[test]
fn axis_pairs_run_independently() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    {
        let stick = controller.input_mut("LeftStick").unwrap();
        stick.keybind_mut(BindSlot::Up).unwrap().bind(translate("w"));
        stick
            .keybind_mut(BindSlot::Right)
            .unwrap()
            .bind(translate("d"));
    }

    // Diagonal: both pairs engage on the same tick.
    pad.set_axis(0, 0.8);
    pad.set_axis(1, -0.8);
    controller.poll(&mut injector).unwrap();
    assert_eq!(
        injector.calls,
        vec![
            Call::KeyPress(Key::Char('w')),
            Call::KeyPress(Key::Char('d')),
        ]
    );

    // Releasing only the horizontal pair leaves the vertical one pressed.
    pad.set_axis(0, 0.0);
    injector.calls.clear();
    controller.poll(&mut injector).unwrap();
    assert_eq!(injector.calls, vec![Call::KeyRelease(Key::Char('d'))]);
    let stick = controller.input("LeftStick").unwrap();
    assert!(stick.keybind(BindSlot::Up).unwrap().is_pressed());
    assert!(!stick.keybind(BindSlot::Right).unwrap().is_pressed());
}

#[test]
fn turbo_on_a_held_direction_repeats_pseudo_actions() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    {
        let keybind = controller
            .input_mut("LeftStick")
            .unwrap()
            .keybind_mut(BindSlot::Right)
            .unwrap();
        keybind.bind(translate("m_move_right"));
        keybind.set_while_pressed(true);
    }

    pad.set_axis(0, 0.9);
    for _ in 0..3 {
        controller.poll(&mut injector).unwrap();
    }
    pad.set_axis(0, 0.0);
    controller.poll(&mut injector).unwrap();

    // Tick 1 is the change (start), ticks 2-3 repeat; recentering releases
    // nothing because pseudo-actions have no pressed state to undo.
    assert_eq!(
        injector.calls,
        vec![Call::Move(10, 0), Call::Move(10, 0), Call::Move(10, 0)]
    );
}

#[test]
fn bind_then_clear_dispatches_nothing() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder::default();
    {
        let keybind = controller
            .input_mut("x")
            .unwrap()
            .keybind_mut(BindSlot::Press)
            .unwrap();
        keybind.bind(translate("space"));
        keybind.clear();
    }

    pad.set_button(0, true);
    controller.poll(&mut injector).unwrap();
    pad.set_button(0, false);
    controller.poll(&mut injector).unwrap();
    assert!(injector.calls.is_empty());
}

#[test]
fn duplicate_symbols_bind_once() {
    let mut keybind = padbind::Keybind::new();
    keybind.bind(translate("space"));
    keybind.bind(translate("SPACE"));
    keybind.bind(translate("m_left"));
    assert_eq!(
        keybind.symbols(),
        [Symbol::Key(Key::Space), Symbol::Mouse(MouseButton::Left)]
    );
}

#[test]
fn one_failing_symbol_does_not_block_the_bundle() {
    let (mut controller, pad) = attached("PS4 Controller");
    let mut injector = Recorder {
        fail_keys: vec![Key::Space],
        ..Default::default()
    };
    {
        let keybind = controller
            .input_mut("x")
            .unwrap()
            .keybind_mut(BindSlot::Press)
            .unwrap();
        keybind.bind(translate("space"));
        keybind.bind(translate("q"));
    }

    pad.set_button(0, true);
    controller.poll(&mut injector).unwrap();
    assert_eq!(injector.calls, vec![Call::KeyPress(Key::Char('q'))]);
}

#[test]
fn attach_discards_previous_bindings() {
    let (mut controller, _) = attached("PS4 Controller");
    controller
        .input_mut("x")
        .unwrap()
        .keybind_mut(BindSlot::Press)
        .unwrap()
        .bind(translate("space"));

    let replacement = VirtualDevice::new("virtual:test2", "Nintendo Switch Joy-Con (R)");
    controller.attach(Box::new(replacement)).unwrap();
    assert_eq!(controller.device_name(), Some("Nintendo Switch Joy-Con (R)"));
    assert!(controller.input("touchpad").is_none());
    let a = controller.input("a").unwrap();
    assert!(a.keybind(BindSlot::Press).unwrap().symbols().is_empty());
}

#[test]
fn profiles_round_trip_through_serde() {
    let (mut controller, _) = attached("PS4 Controller");
    {
        let stick = controller.input_mut("LeftStick").unwrap();
        let up = stick.keybind_mut(BindSlot::Up).unwrap();
        up.bind(translate("w"));
        up.set_while_pressed(true);
        controller
            .input_mut("r1")
            .unwrap()
            .keybind_mut(BindSlot::Press)
            .unwrap()
            .bind(translate("m_left"));
    }

    let profile = BindingProfile::capture("test", &controller);
    assert_eq!(profile.bindings.len(), 2);

    let json = serde_json::to_string(&profile).unwrap();
    let restored: BindingProfile = serde_json::from_str(&json).unwrap();

    let (mut fresh, _) = attached("PS4 Controller");
    restored.apply(&mut fresh);
    let up = fresh
        .input("LeftStick")
        .unwrap()
        .keybind(BindSlot::Up)
        .unwrap();
    assert_eq!(up.symbols(), [Symbol::Key(Key::Char('w'))]);
    assert!(up.while_pressed());
    assert_eq!(
        fresh
            .input("r1")
            .unwrap()
            .keybind(BindSlot::Press)
            .unwrap()
            .symbols(),
        [Symbol::Mouse(MouseButton::Left)]
    );
}

#[test]
fn profiles_skip_inputs_the_device_lacks() {
    let (mut controller, _) = attached("PS4 Controller");
    let profile = BindingProfile {
        name: "mismatched".into(),
        description: None,
        bindings: vec![padbind::BindingEntry {
            input: "zl".into(),
            slot: BindSlot::Press,
            symbols: vec![translate("space")],
            turbo: false,
        }],
    };
    // "zl" only exists on Joy-Con layouts; applying must not panic.
    profile.apply(&mut controller);
}
