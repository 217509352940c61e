use crate::dom;
use crate::frame;
use portfolio_core::menu::BarStyle;
use portfolio_core::nav::anchor_target_id;
use portfolio_core::{PortfolioState, MENU_OPEN_CLASS, NAVBAR_SCROLLED_CLASS};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toggle `scrolled` on the navbar, reading the scroll offset at most once
/// per frame.
pub fn wire_navbar_scroll(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<()> {
    let Some(navbar) = document.get_element_by_id("navbar") else {
        log::warn!("[nav] #navbar missing; scroll effect disabled");
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let st = state.clone();
    dom::add_passive_listener(&window, "scroll", move |_ev: web::Event| {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        if !st.borrow_mut().scrolled(y) {
            return;
        }
        let frame_state = st.clone();
        let navbar = navbar.clone();
        let scheduled = frame::next_frame(move || {
            let scrolled = frame_state.borrow_mut().navbar_frame();
            _ = navbar
                .class_list()
                .toggle_with_force(NAVBAR_SCROLLED_CLASS, scrolled);
        });
        // Release the throttle so the next scroll event tries again.
        if !scheduled {
            st.borrow_mut().scroll.take();
        }
    })?;
    Ok(())
}

fn hamburger_bars(button: &web::HtmlElement) -> SmallVec<[web::HtmlElement; 3]> {
    let Ok(list) = button.query_selector_all("span") else {
        return SmallVec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .take(3)
        .collect()
}

fn apply_bars(bars: &[web::HtmlElement], styles: &[BarStyle; 3]) {
    for (bar, style) in bars.iter().zip(styles.iter()) {
        dom::set_style(bar, "transform", style.transform);
        dom::set_style(bar, "opacity", style.opacity);
    }
}

/// Wire the hamburger button. Returns the button so other handlers can
/// close the menu through the same click path.
pub fn wire_mobile_menu(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<Option<web::HtmlElement>> {
    let button = dom::html_element_by_id(document, "mobile-menu-btn");
    let links = document.get_element_by_id("nav-links");
    let (Some(button), Some(links)) = (button, links) else {
        log::warn!("[nav] mobile menu markup missing");
        return Ok(None);
    };

    let st = state.clone();
    let btn = button.clone();
    dom::add_click_listener(&button, move |_ev: web::Event| {
        let (styles, open) = {
            let mut s = st.borrow_mut();
            let styles = s.toggle_menu();
            (styles, s.menu_open())
        };
        _ = links.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        apply_bars(&hamburger_bars(&btn), styles);
        log::debug!("[nav] menu open={}", open);
    })?;
    Ok(Some(button))
}

/// Smooth-scroll every in-page link to its target, clearing the fixed header.
pub fn wire_anchor_links(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
    menu_button: Option<web::HtmlElement>,
) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, "a[href^=\"#\"]");
    for anchor in &anchors {
        let st = state.clone();
        let menu_button = menu_button.clone();
        let link = anchor.clone();
        dom::add_click_listener(anchor, move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target_id(&href) else {
                return;
            };
            let Some(target) = dom::window_document().and_then(|d| d.get_element_by_id(id)) else {
                log::debug!("[nav] no element for {href}");
                return;
            };

            // Clicking the button re-enters the menu handler, so no borrow
            // may be held here.
            let open = st.borrow().menu_open();
            if open {
                if let Some(btn) = &menu_button {
                    btn.click();
                }
            }

            let rect_top = target.get_bounding_client_rect().top();
            let top = st.borrow().anchor_scroll_top(rect_top, dom::page_y_offset());
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        })?;
    }
    log::debug!("[nav] {} in-page links wired", anchors.len());
    Ok(())
}
