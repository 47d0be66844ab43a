#![cfg(target_arch = "wasm32")]
use crate::constants::PARTICLE_CONTAINER_ID;
use glyphfield_core::{FieldParams, Simulation, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod render;
mod scramble;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyphfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Decorative text and form run at every width; the particle overlay only
    // above the mobile threshold.
    if let Err(e) = scramble::run_heading(&window, &document) {
        log::warn!("heading scramble skipped: {:?}", e);
    }
    scramble::schedule_tagline(&document);
    if let Err(e) = form::wire_waitlist(&document) {
        log::warn!("waitlist form not wired: {:?}", e);
    }

    let params = FieldParams::default();
    params.validate()?;
    let viewport = dom::viewport(&window);
    if viewport.is_disabled(&params) {
        log::info!(
            "viewport width {} is in the mobile class; particle overlay disabled",
            viewport.width
        );
        return Ok(());
    }
    init_particles(&window, &document, params, viewport)
}

fn init_particles(
    window: &web::Window,
    document: &web::Document,
    params: FieldParams,
    viewport: Viewport,
) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let container = document
        .get_element_by_id(PARTICLE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PARTICLE_CONTAINER_ID))?;
    let canvas = dom::create_overlay_canvas(document, &container, viewport)?;
    let surface = render::CanvasSurface::new(&canvas)?;

    let sim = Simulation::with_rng(params, viewport, StdRng::from_entropy());
    log::info!(
        "particle overlay {}x{} with {} glyphs",
        viewport.width,
        viewport.height,
        sim.field.len()
    );
    let frame_ctx = frame::start_loop(sim, surface, canvas);

    events::wire_pointer_handlers(document, &frame_ctx);
    events::wire_resize(window, &frame_ctx);
    events::wire_unload(window, &frame_ctx);
    Ok(())
}
