use crate::constants::*;
use crate::dom;
use glyphfield_core::{SubmitOutcome, WaitlistForm, ERROR_CLEAR_AFTER, SUBMITTED_RESET_AFTER};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct FormElements {
    input: web::HtmlInputElement,
    button: web::HtmlElement,
    form: Rc<RefCell<WaitlistForm>>,
}

pub fn wire_waitlist(document: &web::Document) -> anyhow::Result<()> {
    let input = dom::html_element_by_id(document, EMAIL_INPUT_ID)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an input: {:?}", EMAIL_INPUT_ID, e)))?;
    let button = dom::html_element_by_id(document, CTA_BUTTON_ID)?;
    let els = FormElements {
        input,
        button,
        form: Rc::new(RefCell::new(WaitlistForm::default())),
    };

    let on_input = els.clone();
    dom::add_listener(els.input.as_ref(), "input", move |_: web::Event| {
        let visible = on_input.form.borrow_mut().input(&on_input.input.value());
        set_button_visible(&on_input.button, visible);
    });

    let on_click = els.clone();
    dom::add_listener(els.button.as_ref(), "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let outcome = on_click.form.borrow_mut().submit();
        apply_outcome(&on_click, outcome);
    });

    let on_key = els.clone();
    dom::add_listener(els.input.as_ref(), "keypress", move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" {
            let outcome = on_key.form.borrow_mut().enter_pressed();
            apply_outcome(&on_key, outcome);
        }
    });
    Ok(())
}

fn set_button_visible(button: &web::HtmlElement, visible: bool) {
    let classes = button.class_list();
    _ = if visible {
        classes.add_1(CTA_VISIBLE_CLASS)
    } else {
        classes.remove_1(CTA_VISIBLE_CLASS)
    };
}

fn apply_outcome(els: &FormElements, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted { .. } => {
            els.button
                .set_text_content(Some(els.form.borrow().button_label()));
            dom::set_style(&els.button, "background", CTA_SUBMITTED_BACKGROUND);
            dom::set_style(&els.button, "cursor", "default");
            els.input.set_disabled(true);

            let later = els.clone();
            dom::set_timeout(SUBMITTED_RESET_AFTER.as_millis() as i32, move || {
                later.form.borrow_mut().reset_after_submit();
                later
                    .button
                    .set_text_content(Some(later.form.borrow().button_label()));
                dom::set_style(&later.button, "background", CTA_IDLE_BACKGROUND);
                dom::set_style(&later.button, "cursor", "pointer");
                later.input.set_disabled(false);
                later.input.set_value("");
                set_button_visible(&later.button, false);
            });
        }
        SubmitOutcome::Rejected => {
            dom::set_style(&els.input, "border-color", INPUT_ERROR_BORDER);
            dom::set_style(&els.input, "box-shadow", INPUT_ERROR_SHADOW);

            let later = els.clone();
            dom::set_timeout(ERROR_CLEAR_AFTER.as_millis() as i32, move || {
                later.form.borrow_mut().clear_error();
                dom::set_style(&later.input, "border-color", INPUT_IDLE_BORDER);
                dom::set_style(&later.input, "box-shadow", "none");
            });
        }
        SubmitOutcome::Ignored => {}
    }
}
