//! Robot Trajectory Viz entry point
//!
//! On the web this binds the canvas and buttons and lets the browser drive
//! frames. Natively it runs a headless lap and logs the robot's progress.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use robot_trajectory_viz::consts::*;
    use robot_trajectory_viz::platform::AnimationFrameScheduler;
    use robot_trajectory_viz::renderer::CanvasSurface;
    use robot_trajectory_viz::{Visualization, VizConfig};

    type WebViz = Visualization<CanvasSurface, AnimationFrameScheduler>;

    pub fn run() -> Result<(), JsValue> {
        log::info!("Robot Trajectory Viz starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = VizConfig::load();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let surface =
            CanvasSurface::from_canvas(&canvas, config.canvas.width, config.canvas.height)?;

        let viz: Rc<WebViz> = Rc::new(
            Visualization::new(&config, surface, AnimationFrameScheduler::new(window))
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
        );

        {
            let viz = viz.clone();
            bind_click(&document, START_BUTTON_ID, move || viz.start())?;
        }
        {
            let viz = viz.clone();
            bind_click(&document, RESET_BUTTON_ID, move || viz.reset())?;
        }

        viz.draw();
        log::info!("Robot Trajectory Viz ready");
        Ok(())
    }

    fn bind_click(
        document: &Document,
        id: &str,
        mut on_click: impl FnMut() + 'static,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button, control disabled", id);
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            on_click();
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use robot_trajectory_viz::platform::ManualScheduler;
    use robot_trajectory_viz::renderer::{DrawCommand, RecordingSurface};
    use robot_trajectory_viz::{Visualization, VizConfig};

    env_logger::init();
    log::info!("Robot Trajectory Viz (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the canvas version");

    let config = VizConfig::load();
    let viz = match Visualization::new(
        &config,
        RecordingSurface::new(),
        ManualScheduler::new(1000.0 / 60.0),
    ) {
        Ok(viz) => viz,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    // One lap by default, or the frame count given on the command line
    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(config.trajectory.points);

    // Drained after every frame so a long run does not grow without bound
    let mut drawn = 0usize;
    let mut commands = 0usize;
    let mut drain = || {
        let batch = viz.surface_mut().take_commands();
        drawn += batch
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count();
        commands += batch.len();
    };

    viz.draw();
    viz.start();
    drain();
    let controller = viz.controller();
    for step in 0..frames {
        // The first tick runs inside start()
        if step > 0 {
            controller.scheduler().run_frame();
            drain();
        }
        let pose = controller.pose();
        println!(
            "Step {}: Position (x, y) = ({:.2}, {:.2}), heading = {:.2} rad",
            step, pose.x, pose.y, pose.theta
        );
    }

    viz.reset();
    drain();
    log::info!(
        "Done: {} frames drawn, {} draw commands, {:.0} ms simulated",
        drawn,
        commands,
        controller.scheduler().time()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
