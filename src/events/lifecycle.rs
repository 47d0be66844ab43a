use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let window_for_size = window.clone();
    dom::add_listener(window.as_ref(), "resize", move |_: web::Event| {
        let viewport = dom::viewport(&window_for_size);
        ctx.borrow_mut().resize(viewport);
    });
}

/// Cancel the pending frame when the page goes away.
pub fn wire_unload(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    dom::add_listener(window.as_ref(), "beforeunload", move |_: web::Event| {
        ctx.borrow_mut().teardown();
    });
}
