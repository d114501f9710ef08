use padbind::backends::virtual_input::VirtualDevice;
use padbind::{translate, BindSlot, Controller, InjectionError, Injector, Key, MouseButton};

/// Prints every injection call instead of synthesizing events.
struct PrintInjector;

impl Injector for PrintInjector {
    fn key_press(&mut self, key: &Key) -> Result<(), InjectionError> {
        println!("press   {key:?}");
        Ok(())
    }

    fn key_release(&mut self, key: &Key) -> Result<(), InjectionError> {
        println!("release {key:?}");
        Ok(())
    }

    fn mouse_press(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        println!("press   mouse {button:?}");
        Ok(())
    }

    fn mouse_release(&mut self, button: MouseButton) -> Result<(), InjectionError> {
        println!("release mouse {button:?}");
        Ok(())
    }

    fn move_rel(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        println!("move    ({dx}, {dy})");
        Ok(())
    }

    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), InjectionError> {
        println!("scroll  ({dx}, {dy})");
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let device = VirtualDevice::new("virtual:demo", "PS4 Controller");
    let pad = device.handle();

    let mut controller = Controller::new();
    controller.attach(Box::new(device)).expect("built-in layout");

    // x taps space; the left stick's right direction drags the pointer with
    // turbo so motion repeats every tick the stick stays deflected.
    let x = controller.input_mut("x").unwrap();
    x.keybind_mut(BindSlot::Press)
        .unwrap()
        .bind(translate("space"));
    let stick = controller.input_mut("LeftStick").unwrap();
    let right = stick.keybind_mut(BindSlot::Right).unwrap();
    right.bind(translate("m_move_right"));
    right.set_while_pressed(true);

    let mut injector = PrintInjector;

    // Scripted ticks: tap x, then hold the stick right, then recenter.
    for tick in 0..6 {
        match tick {
            0 => pad.set_button(0, true),
            1 => pad.set_button(0, false),
            2 => pad.set_axis(0, 0.9),
            4 => pad.set_axis(0, 0.0),
            _ => {}
        }
        println!("-- tick {tick}");
        controller.poll(&mut injector).expect("device attached");
        println!(
            "   pressed={:?} held={:?} released={:?}",
            controller.pressed(),
            controller.held(),
            controller.released()
        );
    }
}
