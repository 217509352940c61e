use crate::dom;
use portfolio_core::clock::clock_text;
use portfolio_core::CLOCK_REFRESH_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn tick(el: &web::Element, utc_offset_minutes: i32) {
    let text = clock_text(js_sys::Date::now(), utc_offset_minutes);
    el.set_text_content(Some(text.as_str()));
}

pub fn wire_clock(document: &web::Document, utc_offset_minutes: i32) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id("clock") else {
        log::debug!("[clock] #clock missing");
        return Ok(());
    };
    tick(&el, utc_offset_minutes);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(
        Box::new(move || tick(&el, utc_offset_minutes)) as Box<dyn FnMut()>
    );
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            CLOCK_REFRESH_MS,
        )
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}
