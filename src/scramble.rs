use crate::constants::*;
use crate::dom;
use glyphfield_core::{reveal_plan, Scramble};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scramble the main heading into its final text.
pub fn run_heading(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let heading = document
        .get_element_by_id(HEADING_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HEADING_ID))?;
    let scramble = Scramble::new(HEADING_TEXT, Duration::from_millis(SCRAMBLE_DURATION_MS));
    let mut rng = StdRng::from_entropy();

    _ = heading.class_list().add_1(SCRAMBLING_CLASS);
    heading.set_text_content(Some(&scramble.frame(Duration::ZERO, &mut rng).text));

    let started = Instant::now();
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let interval_for_tick = interval_id.clone();
    let closure = Closure::wrap(Box::new(move || {
        let frame = scramble.frame(started.elapsed(), &mut rng);
        heading.set_text_content(Some(&frame.text));
        if frame.done {
            if let (Some(w), Some(id)) = (web::window(), interval_for_tick.take()) {
                w.clear_interval_with_handle(id);
            }
            _ = heading.class_list().remove_1(SCRAMBLING_CLASS);
        }
    }) as Box<dyn FnMut()>);

    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SCRAMBLE_INTERVAL_MS,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    interval_id.set(Some(id));
    closure.forget();
    Ok(())
}

/// Once the heading has settled, reveal each tagline word after its own delay.
pub fn schedule_tagline(document: &web::Document) {
    let document = document.clone();
    dom::set_timeout(TAGLINE_START_DELAY_MS, move || {
        let words = match document.query_selector_all(TAGLINE_WORD_SELECTOR) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("tagline lookup failed: {:?}", e);
                return;
            }
        };
        let elements: Vec<web::HtmlElement> = (0..words.length())
            .filter_map(|i| words.item(i))
            .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let raw_delays: Vec<String> = elements
            .iter()
            .map(|el| el.get_attribute(TAGLINE_DELAY_ATTR).unwrap_or_default())
            .collect();
        for (el, delay) in elements.into_iter().zip(reveal_plan(&raw_delays)) {
            dom::set_timeout(delay.as_millis() as i32, move || {
                dom::set_style(&el, "animation-delay", "0s");
                _ = el.class_list().add_1(TAGLINE_ANIMATE_CLASS);
            });
        }
        log::info!("tagline reveal scheduled for {} words", raw_delays.len());
    });
}
