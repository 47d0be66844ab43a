use crate::dom;
use crate::render::CanvasSurface;
use glyphfield_core::{FrameScheduler, RenderLoop, Simulation, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. The callback slot is filled by
/// [`start_loop`] once the frame context exists.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub render_loop: RenderLoop<RafScheduler>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.render_loop.tick(&mut self.surface);
    }

    /// Mobile widths hide the canvas and stop the loop; anything else resizes
    /// the backing store and rebuilds the particles.
    pub fn resize(&mut self, viewport: Viewport) {
        let disabled = viewport.is_disabled(self.render_loop.simulation().field.params());
        dom::set_visible(self.canvas.as_ref(), !disabled);
        if !disabled {
            dom::sync_canvas_size(&self.canvas, viewport);
        }
        self.render_loop.resize(viewport);
    }

    pub fn teardown(&mut self) {
        self.render_loop.teardown();
    }
}

pub fn start_loop(
    sim: Simulation,
    surface: CanvasSurface,
    canvas: web::HtmlCanvasElement,
) -> Rc<RefCell<FrameContext>> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        callback: callback.clone(),
    };
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        render_loop: RenderLoop::new(sim, scheduler),
        surface,
        canvas,
    }));

    let frame_ctx_tick = frame_ctx.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));

    if !frame_ctx.borrow_mut().render_loop.start() {
        log::warn!("particle loop did not start");
    }
    frame_ctx
}
