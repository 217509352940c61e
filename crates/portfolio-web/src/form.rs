use crate::dom;
use portfolio_core::form::ButtonLook;
use portfolio_core::PortfolioState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn paint(button: &web::HtmlElement, look: &ButtonLook) {
    button.set_text_content(Some(look.label.as_str()));
    dom::set_style(button, "background", look.background);
}

/// Fake submission: show a confirmation on the submit button, then restore it
/// and clear the form.
pub fn wire_contact_form(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[form] #contact-form missing");
        return Ok(());
    };

    let st = state.clone();
    let form_cb = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(button) = form_cb
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        let label = button.text_content().unwrap_or_default();
        let Some(look) = st.borrow_mut().submit_form(&label) else {
            return;
        };
        paint(&button, &look);
        log::info!("[form] message sent (simulated)");

        let delay = st.borrow().config.form_reset_delay_ms;
        let st = st.clone();
        let form = form_cb.clone();
        let scheduled = dom::after_ms(delay, move || {
            if let Some(look) = st.borrow_mut().restore_form() {
                paint(&button, &look);
                form.reset();
            }
        });
        if !scheduled {
            log::error!("[form] could not schedule reset");
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}
