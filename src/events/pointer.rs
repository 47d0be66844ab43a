use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mouse position and button state feed the field's pointer snapshot. The
/// overlay canvas sits under the page content, so listen on the document.
pub fn wire_pointer_handlers(document: &web::Document, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let target: &web::EventTarget = document.as_ref();

    let ctx = frame_ctx.clone();
    dom::add_listener(target, "mousemove", move |ev: web::MouseEvent| {
        ctx.borrow_mut()
            .render_loop
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    });

    let ctx = frame_ctx.clone();
    dom::add_listener(target, "mousedown", move |_: web::MouseEvent| {
        ctx.borrow_mut().render_loop.pointer_pressed();
    });

    let ctx = frame_ctx.clone();
    dom::add_listener(target, "mouseup", move |_: web::MouseEvent| {
        ctx.borrow_mut().render_loop.pointer_released();
    });
}
