use std::time::{Duration, Instant};

use padbind::backends::enigo::EnigoInjector;
use padbind::backends::hid::ReportLayout;
use padbind::backends::probe_devices;
use padbind::{translate, BindSlot, BindingProfile, Controller, Device};

const TICK: Duration = Duration::from_millis(10);

fn main() {
    env_logger::init();

    // PS4-style report: 16 buttons packed in two bytes, six axis bytes.
    let layout = ReportLayout {
        report_id: Some(0x01),
        buttons: 16,
        axes: 6,
    };

    let mut devices = probe_devices(&layout);
    println!("Discovered {} gamepad(s)", devices.len());
    let Some(device) = devices.drain(..).next() else {
        eprintln!("no gamepad found");
        return;
    };
    println!("Using {} ({})", device.name(), device.id());

    let mut controller = Controller::new();
    if let Err(e) = controller.attach(device) {
        eprintln!("attach failed: {e}");
        return;
    }

    // A small WASD profile on the left stick plus face-button taps.
    for (input, slot, capture) in [
        ("LeftStick", BindSlot::Up, "w"),
        ("LeftStick", BindSlot::Down, "s"),
        ("LeftStick", BindSlot::Left, "a"),
        ("LeftStick", BindSlot::Right, "d"),
        ("RightStick", BindSlot::Up, "m_move_up"),
        ("RightStick", BindSlot::Down, "m_move_down"),
        ("RightStick", BindSlot::Left, "m_move_left"),
        ("RightStick", BindSlot::Right, "m_move_right"),
        ("x", BindSlot::Press, "space"),
        ("circle", BindSlot::Press, "escape"),
        ("r1", BindSlot::Press, "m_left"),
        ("l1", BindSlot::Press, "m_right"),
    ] {
        if let Some(keybind) = controller
            .input_mut(input)
            .and_then(|i| i.keybind_mut(slot))
        {
            keybind.bind(translate(capture));
        }
    }
    // Pointer motion is relative-delta; turbo makes it continuous.
    if let Some(stick) = controller.input_mut("RightStick") {
        for slot in [BindSlot::Up, BindSlot::Down, BindSlot::Left, BindSlot::Right] {
            stick.keybind_mut(slot).unwrap().set_while_pressed(true);
        }
    }

    let profile = BindingProfile::capture("wasd", &controller);
    println!(
        "Profile:\n{}",
        serde_json::to_string_pretty(&profile).expect("serializable profile")
    );

    let mut injector = match EnigoInjector::new() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("injector unavailable: {e}");
            return;
        }
    };

    loop {
        let start = Instant::now();
        if let Err(e) = controller.poll(&mut injector) {
            eprintln!("poll failed: {e}");
            break;
        }
        if let Some(remaining) = TICK.checked_sub(start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
