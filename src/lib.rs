#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_SIZE_PX, SHAPE_URLS};
use crate::timer::{Clock, CycleTimer};
use morph_core::{MorphEngine, MorphParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod palette;
mod render;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("logo-morph starting");
    Ok(())
}

/// The animation mounted on one canvas. Unmounting (or freeing the handle)
/// stops the frame loop, removes the pointer listeners and clears the cycle
/// timer.
#[wasm_bindgen]
pub struct LogoMorph {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl LogoMorph {
    /// Mount on the canvas with id `canvas_id` (the default `logo-canvas`
    /// when omitted). Failures are logged and yield an inert handle.
    pub fn mount(canvas_id: Option<String>) -> LogoMorph {
        let id = canvas_id.unwrap_or_else(|| constants::CANVAS_ID.to_string());
        let mounted = match Mounted::new(&id) {
            Ok(m) => Some(m),
            Err(e) => {
                log::error!("[mount] #{}: {:?}", id, e);
                None
            }
        };
        LogoMorph { mounted }
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("[mount] unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

struct Mounted {
    alive: Rc<Cell<bool>>,
    frame_loop: frame::FrameLoop,
    pointer: events::PointerListeners,
    cycle: Rc<RefCell<Option<CycleTimer>>>,
}

impl Mounted {
    fn new(canvas_id: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id)?;
        dom::size_canvas(&canvas, CANVAS_SIZE_PX);
        let ctx = dom::context_2d(&canvas)?;

        let (width, height) = (canvas.width() as f32, canvas.height() as f32);
        let params = MorphParams::default().with_canvas_size(width, height);
        let period_ms = params.cycle_period_ms;
        let engine = Rc::new(RefCell::new(MorphEngine::new(params, rand::random())));
        let clock = Clock::new();

        let pointer = events::wire_pointer(&canvas, engine.clone())?;
        let frame_loop = frame::start_loop(frame::FrameContext {
            engine: engine.clone(),
            ctx,
            width: width as f64,
            height: height as f64,
            clock,
        });

        let alive = Rc::new(Cell::new(true));
        let cycle = Rc::new(RefCell::new(None));
        {
            let alive = alive.clone();
            let cycle = cycle.clone();
            spawn_local(async move {
                let shapes = loader::load_shapes(&SHAPE_URLS).await;
                if !alive.get() {
                    return;
                }
                let shape_count = shapes.len();
                engine.borrow_mut().load_shapes(shapes);
                if shape_count < 2 {
                    return;
                }
                let engine_tick = engine.clone();
                match CycleTimer::start(period_ms, move || {
                    engine_tick.borrow_mut().cycle(clock.now_ms());
                }) {
                    Ok(t) => *cycle.borrow_mut() = Some(t),
                    Err(e) => log::error!("[mount] cycle timer: {:?}", e),
                }
            });
        }

        log::info!("[mount] #{} {}x{}", canvas_id, width, height);
        Ok(Self {
            alive,
            frame_loop,
            pointer,
            cycle,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.alive.set(false);
        self.frame_loop.cancel();
        self.pointer.detach();
        self.cycle.borrow_mut().take();
    }
}
