use crate::dom;
use crate::frame::AnimationLoop;
use portfolio_core::cursor::viewport_is_wide;
use portfolio_core::hover::is_hover_target;
use portfolio_core::{PortfolioState, HOVER_CLASS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Indicators {
    cursor: web::HtmlElement,
    follower: web::HtmlElement,
}

impl Indicators {
    fn set_hover(&self, on: bool) {
        for el in [&self.cursor, &self.follower] {
            _ = el.class_list().toggle_with_force(HOVER_CLASS, on);
        }
    }
}

/// Wire the cursor follower when the viewport is wide and both indicators
/// exist. Returns the running loop, or `None` when the guard fails and no
/// listeners were attached.
pub fn wire_cursor(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<Option<Rc<AnimationLoop>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let query = state.borrow().config.media_query();
    let mql = window.match_media(&query).map_err(dom::js_err)?;
    // Without a MediaQueryList, fall back to the width at load time.
    let media_matches = match &mql {
        Some(m) => m.matches(),
        None => viewport_is_wide(&state.borrow().config, dom::inner_width()),
    };

    let cursor = dom::html_element_by_id(document, "cursor");
    let follower = dom::html_element_by_id(document, "cursor-follower");
    let enabled = state.borrow_mut().activate_cursor(
        media_matches,
        cursor.is_some(),
        follower.is_some(),
    );
    let (true, Some(cursor), Some(follower)) = (enabled, cursor, follower) else {
        return Ok(None);
    };
    let indicators = Indicators { cursor, follower };

    let st = state.clone();
    dom::add_passive_listener(document, "pointermove", move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            st.borrow_mut()
                .pointer_moved(me.client_x() as f32, me.client_y() as f32);
        }
    })?;

    let st = state.clone();
    let ind = indicators.clone();
    let anim = Rc::new(AnimationLoop::new(move || {
        let Some(frame) = st.borrow_mut().cursor_frame() else {
            return;
        };
        dom::set_style(&ind.cursor, "transform", Some(frame.cursor_transform().as_str()));
        dom::set_style(&ind.follower, "transform", Some(frame.follower_transform().as_str()));
    }));
    anim.start();

    wire_hover_delegation(document, state, &indicators)?;

    if let Some(mql) = mql {
        wire_viewport_changes(mql, state, &indicators, &anim)?;
    }

    log::info!("[cursor] follower active");
    Ok(Some(anim))
}

// One over/out pair on <body> serves every interactive element.
fn wire_hover_delegation(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
    indicators: &Indicators,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing <body>"))?;

    let st = state.clone();
    let ind = indicators.clone();
    dom::add_passive_listener(&body, "pointerover", move |ev: web::Event| {
        let on_target = is_hover_target(dom::ancestor_chain(&ev));
        let change = st.borrow_mut().hover.over(on_target);
        if let Some(on) = change {
            ind.set_hover(on);
        }
    })?;

    let st = state.clone();
    let ind = indicators.clone();
    dom::add_passive_listener(&body, "pointerout", move |ev: web::Event| {
        let from_target = is_hover_target(dom::ancestor_chain(&ev));
        let change = st.borrow_mut().hover.out(from_target);
        if let Some(on) = change {
            ind.set_hover(on);
        }
    })?;
    Ok(())
}

// Pause the loop while the layout is narrow; resume when it widens again.
fn wire_viewport_changes(
    mql: web::MediaQueryList,
    state: &Rc<RefCell<PortfolioState>>,
    indicators: &Indicators,
    anim: &Rc<AnimationLoop>,
) -> anyhow::Result<()> {
    let st = state.clone();
    let ind = indicators.clone();
    let anim = anim.clone();
    let mql_cb = mql.clone();
    dom::add_passive_listener(&mql, "change", move |_ev: web::Event| {
        if mql_cb.matches() {
            if anim.is_running() {
                return;
            }
            anim.start();
            log::debug!("[cursor] viewport wide; loop resumed");
        } else {
            anim.stop();
            if st.borrow_mut().hover.out(true).is_some() {
                ind.set_hover(false);
            }
            log::debug!("[cursor] viewport narrow; loop paused");
        }
    })?;
    Ok(())
}
