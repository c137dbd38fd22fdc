//! E6B Analog entry point
//!
//! On the web the library's `start` hook does the setup and this binary is
//! empty. Natively it replays a short scripted session and prints what a host
//! would paint, which is handy for eyeballing engine changes.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("E6B Analog (native) starting...");
    log::info!("Native mode replays a scripted session; build for wasm32 to interact");

    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => e6b_analog::Settings::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path, e);
                e6b_analog::Settings::default()
            }
        },
        None => e6b_analog::Settings::default(),
    };

    script::run(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod script {
    use e6b_analog::computer::{FlightComputer, Outcome, PointerEvent};
    use e6b_analog::renderer::tessellate;
    use e6b_analog::scene::Role;
    use e6b_analog::{Settings, Side};
    use glam::Vec2;

    /// Press, release and tap at one spot, the way a browser click arrives
    fn click(fc: &mut FlightComputer, pos: Vec2, time_ms: f64) -> Outcome {
        fc.handle(PointerEvent::Down { pos, time_ms });
        fc.handle(PointerEvent::Up { pos });
        fc.handle(PointerEvent::Tap { pos })
    }

    fn drag(fc: &mut FlightComputer, from: Vec2, to: Vec2, time_ms: f64) {
        fc.handle(PointerEvent::Down { pos: from, time_ms });
        // A few intermediate samples, like a real pointer stream
        for step in 1..=4 {
            let t = step as f32 / 4.0;
            fc.handle(PointerEvent::Move {
                pos: from.lerp(to, t),
            });
        }
        fc.handle(PointerEvent::Up { pos: to });
        fc.handle(PointerEvent::Tap { pos: to });
    }

    fn report(fc: &FlightComputer) {
        let scene = fc.scene();
        let status = fc.status_readout();
        let readouts = fc.readouts();
        println!("  side:      {}", fc.view().side.as_str());
        println!("  {}: {}", status.title, status.value);
        println!(
            "  time {} | fuel {} | distance {}",
            readouts.time, readouts.fuel, readouts.distance
        );
        for marker in fc.marker_list() {
            let flag = if marker.selected { "*" } else { " " };
            println!("  {flag}{} at ({}, {})", marker.label, marker.x, marker.y);
        }
        println!(
            "  scene: {} items, {} markers, {} vertices",
            scene.items.len(),
            scene.count(Role::Marker),
            tessellate(&scene).len()
        );
    }

    pub fn run(settings: Settings) {
        let mut fc = FlightComputer::new(settings);

        println!("\nWind side: two points, disc turned to 090, cursor to the top");
        click(&mut fc, Vec2::new(400.0, 200.0), 0.0);
        click(&mut fc, Vec2::new(450.0, 260.0), 500.0);
        drag(&mut fc, Vec2::new(650.0, 200.0), Vec2::new(700.0, 325.0), 1500.0);
        drag(&mut fc, Vec2::new(340.0, 325.0), Vec2::new(340.0, 105.0), 2500.0);
        if let Some(cursor) = fc.scene().texts(Role::CursorReadout).first() {
            println!("  cursor reads {cursor}");
        }
        report(&fc);

        println!("\nDouble tap removes M2");
        let m2 = Vec2::new(450.0, 260.0);
        click(&mut fc, m2, 4000.0);
        let outcome = fc.handle(PointerEvent::Down {
            pos: m2,
            time_ms: 4150.0,
        });
        fc.handle(PointerEvent::Up { pos: m2 });
        fc.handle(PointerEvent::Tap { pos: m2 });
        log::info!("Second down on M2: {:?}", outcome);
        report(&fc);

        println!("\nCalculator side: ruler dragged from 300 to 450, two points");
        fc.select_side(Side::Calculator);
        drag(&mut fc, Vec2::new(300.0, 300.0), Vec2::new(300.0, 450.0), 6000.0);
        click(&mut fc, Vec2::new(400.0, 200.0), 7000.0);
        click(&mut fc, Vec2::new(450.0, 260.0), 7500.0);
        report(&fc);

        println!("\nReset");
        fc.reset_all();
        report(&fc);
    }
}
