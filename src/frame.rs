use crate::render;
use crate::timer::Clock;
use morph_core::MorphEngine;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<MorphEngine>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let frame = self.engine.borrow_mut().step(now);
        render::paint(&self.ctx, &frame, self.width, self.height);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle on a running requestAnimationFrame chain. Dropping it cancels the
/// pending frame and releases the callback.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // The callback holds a clone of `tick`; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_id_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_clone.set(None);
        frame_ctx.frame();
        request(&tick_clone, &raf_id_clone);
    }) as Box<dyn FnMut()>));
    request(&tick, &raf_id);

    FrameLoop { raf_id, tick }
}
