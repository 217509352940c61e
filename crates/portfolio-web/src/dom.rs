use anyhow::anyhow;
use portfolio_core::hover::ElementLike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
pub fn add_click_listener(
    element: &web::EventTarget,
    mut handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Attach a page-lifetime passive listener. Passive handlers cannot cancel
/// the event, which lets the browser keep scrolling off the main thread.
pub fn add_passive_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Set an inline style property, or clear it when `value` is `None`.
pub fn set_style(el: &web::HtmlElement, property: &str, value: Option<&str>) {
    let style = el.style();
    match value {
        Some(v) => {
            _ = style.set_property(property, v);
        }
        None => {
            _ = style.remove_property(property);
        }
    }
}

pub fn inner_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_width() -> u32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

/// Run `f` once after `delay_ms`. Returns false when the timer could not be
/// set, in which case `f` never runs.
pub fn after_ms(delay_ms: i32, f: impl FnOnce() + 'static) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    match w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[dom] could not set timer: {:?}", e);
            false
        }
    }
}

pub fn page_y_offset() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// `ElementLike` view used for hover delegation.
pub struct DomNode(pub web::Element);

impl ElementLike for DomNode {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// The event target followed by its ancestors, nearest first.
pub fn ancestor_chain(ev: &web::Event) -> impl Iterator<Item = DomNode> {
    let start = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
    std::iter::successors(start, |el| el.parent_element()).map(DomNode)
}

/// Build a page-lifetime IntersectionObserver. The handler receives the
/// entries of one callback, in delivery order.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(Vec<web::IntersectionObserverEntry>, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .collect();
            handler(entries, &observer);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    closure.forget();
    Ok(observer)
}
