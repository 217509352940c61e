#![cfg(target_arch = "wasm32")]
use portfolio_core::{PortfolioState, UiConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clock;
mod cursor;
mod dom;
mod form;
mod frame;
mod nav;
mod progress;
mod reveal;
mod skills;

thread_local! {
    // Keeps the cursor loop alive for the lifetime of the page.
    static CURSOR_LOOP: RefCell<Option<Rc<frame::AnimationLoop>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// A failing feature is logged and skipped; the rest of the page still wires up.
fn report(feature: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] wiring failed: {:?}", feature, e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = UiConfig::default();
    config.validate()?;
    let clock_offset = config.clock_utc_offset_minutes;
    let state = Rc::new(RefCell::new(PortfolioState::new(config)));

    match cursor::wire_cursor(&document, &state) {
        Ok(anim) => CURSOR_LOOP.with(|slot| *slot.borrow_mut() = anim),
        Err(e) => log::error!("[cursor] wiring failed: {:?}", e),
    }

    report("nav", nav::wire_navbar_scroll(&document, &state));
    let menu_button = match nav::wire_mobile_menu(&document, &state) {
        Ok(btn) => btn,
        Err(e) => {
            log::error!("[nav] menu wiring failed: {:?}", e);
            None
        }
    };
    report("nav", nav::wire_anchor_links(&document, &state, menu_button));

    reveal::wire_hero(&document);
    report("reveal", reveal::wire_scroll_reveals(&document, &state));
    report("skills", skills::wire_skill_bars(&document, &state));
    report("form", form::wire_contact_form(&document, &state));
    report("clock", clock::wire_clock(&document, clock_offset));
    report("progress", progress::wire_scroll_progress(&document, &state));

    log::info!("portfolio loaded");
    Ok(())
}
