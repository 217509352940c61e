use crate::dom;
use portfolio_core::progress::{progress_transform, scrollable_height};
use portfolio_core::PortfolioState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll_progress(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing <body>"))?;
    let bar = document
        .create_element("div")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    bar.set_class_name("scroll-progress-bar");
    body.append_child(&bar).map_err(dom::js_err)?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let st = state.clone();
    dom::add_passive_listener(&window, "scroll", move |_ev: web::Event| {
        let Some(root) = dom::window_document().and_then(|d| d.document_element()) else {
            return;
        };
        let doc_height = scrollable_height(root.scroll_height() as f64, dom::inner_height());
        let fraction = st.borrow().progress(dom::page_y_offset(), doc_height);
        dom::set_style(&bar, "transform", Some(progress_transform(fraction).as_str()));
    })?;
    Ok(())
}
