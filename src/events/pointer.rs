use crate::input;
use morph_core::MorphEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerHandler = Closure<dyn FnMut(web::PointerEvent)>;

/// Pointer-move / pointer-leave listeners on the canvas, removed on drop.
pub struct PointerListeners {
    canvas: web::HtmlCanvasElement,
    on_move: PointerHandler,
    on_leave: PointerHandler,
}

impl PointerListeners {
    pub fn detach(&self) {
        _ = self
            .canvas
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        _ = self
            .canvas
            .remove_event_listener_with_callback("pointerleave", self.on_leave.as_ref().unchecked_ref());
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<MorphEngine>>,
) -> anyhow::Result<PointerListeners> {
    let canvas_move = canvas.clone();
    let engine_move = engine.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        engine_move.borrow_mut().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        engine.borrow_mut().set_pointer(None);
    }) as Box<dyn FnMut(_)>);

    // Dropping `listeners` on an early return detaches whatever was registered.
    let listeners = PointerListeners {
        canvas: canvas.clone(),
        on_move,
        on_leave,
    };
    canvas
        .add_event_listener_with_callback("pointermove", listeners.on_move.as_ref().unchecked_ref())
        .map_err(crate::dom::js_err)?;
    canvas
        .add_event_listener_with_callback("pointerleave", listeners.on_leave.as_ref().unchecked_ref())
        .map_err(crate::dom::js_err)?;
    Ok(listeners)
}
