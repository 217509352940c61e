use crate::dom;
use portfolio_core::reveal::{
    RevealBatch, RevealEntry, RevealGroup, RevealPreset, RevealStyle, HERO_SEQUENCE,
    SCROLL_BATCHES, SCROLL_GROUPS,
};
use portfolio_core::PortfolioState;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply(el: &web::HtmlElement, style: &RevealStyle) {
    dom::set_style(el, "transition", style.transition.as_deref());
    dom::set_style(el, "opacity", Some(style.opacity));
    dom::set_style(el, "transform", Some(style.transform.as_str()));
}

fn hide_all(document: &web::Document, preset: &RevealPreset) -> Vec<web::HtmlElement> {
    let els = dom::query_all(document, preset.selector);
    let hidden = preset.hidden_style();
    for el in &els {
        apply(el, &hidden);
    }
    els
}

// Element `i` gets stagger index `i`. Once the last one has settled the
// inline transition is removed so stylesheet transitions apply again.
fn show_all(els: Vec<web::HtmlElement>, preset: &RevealPreset) {
    let Some(last) = els.len().checked_sub(1) else {
        return;
    };
    for (i, el) in els.iter().enumerate() {
        apply(el, &preset.shown_style(i));
    }
    let settle = i32::try_from(preset.settle_ms(last)).unwrap_or(i32::MAX);
    let cleared = dom::after_ms(settle, move || {
        for el in &els {
            dom::set_style(el, "transition", None);
        }
    });
    if !cleared {
        log::warn!("[reveal] {} keeps its inline transition", preset.selector);
    }
}

// Translate one observer callback into tracker entries. Targets that
// `id_of` does not know are skipped.
fn to_entries(
    entries: &[web::IntersectionObserverEntry],
    id_of: impl Fn(&web::Element) -> Option<u32>,
) -> SmallVec<[RevealEntry; 8]> {
    entries
        .iter()
        .filter_map(|entry| {
            Some(RevealEntry {
                id: id_of(&entry.target())?,
                is_intersecting: entry.is_intersecting(),
                top: entry.bounding_client_rect().top(),
            })
        })
        .collect()
}

/// Hero elements animate in right away, each with its own delay.
pub fn wire_hero(document: &web::Document) {
    let hidden: Vec<_> = HERO_SEQUENCE
        .iter()
        .map(|preset| (preset, hide_all(document, preset)))
        .collect();
    // Reading layout commits the hidden styles so the transitions below run.
    if let Some(body) = document.body() {
        _ = body.get_bounding_client_rect();
    }
    for (preset, els) in hidden {
        show_all(els, preset);
    }
}

fn wire_batch(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
    batch: &'static RevealBatch,
) -> anyhow::Result<()> {
    let els = hide_all(document, &batch.preset);
    if els.is_empty() {
        return Ok(());
    }
    let ids: Vec<u32> = {
        let mut s = state.borrow_mut();
        els.iter().map(|_| s.reveals.register()).collect()
    };

    let st = state.clone();
    let known = els.clone();
    let observer = dom::intersection_observer(
        0.0,
        Some(batch.start.root_margin().as_str()),
        move |entries, observer| {
            // The first callback for each element also covers elements that
            // are already above the line, e.g. after a restored scroll.
            let report = to_entries(&entries, |target| {
                known.iter().position(|el| **el == *target).map(|pos| ids[pos])
            });
            let shown = st
                .borrow_mut()
                .reveals
                .on_report(batch.start, dom::inner_height(), &report);
            let mut revealed = Vec::with_capacity(shown.len());
            for (id, _) in shown {
                let Some(pos) = ids.iter().position(|i| *i == id) else {
                    continue;
                };
                observer.unobserve(&known[pos]);
                revealed.push(known[pos].clone());
            }
            show_all(revealed, &batch.preset);
        },
    )?;
    for el in &els {
        observer.observe(el);
    }
    Ok(())
}

fn wire_group(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
    group: &'static RevealGroup,
) -> anyhow::Result<()> {
    let Ok(Some(trigger)) = document.query_selector(group.trigger) else {
        log::debug!("[reveal] no {} on page", group.trigger);
        return Ok(());
    };
    let mut members: Vec<(&'static RevealPreset, Vec<web::HtmlElement>)> = group
        .members
        .iter()
        .map(|preset| (preset, hide_all(document, preset)))
        .collect();
    let id = state.borrow_mut().reveals.register();

    let st = state.clone();
    let observer = dom::intersection_observer(
        0.0,
        Some(group.start.root_margin().as_str()),
        move |entries, observer| {
            let report = to_entries(&entries, |_| Some(id));
            let fired = !st
                .borrow_mut()
                .reveals
                .on_report(group.start, dom::inner_height(), &report)
                .is_empty();
            if !fired {
                return;
            }
            observer.disconnect();
            for (preset, els) in members.drain(..) {
                show_all(els, preset);
            }
        },
    )?;
    observer.observe(&trigger);
    Ok(())
}

/// Batched section reveals plus the grouped about/contact reveals.
pub fn wire_scroll_reveals(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<()> {
    for batch in &SCROLL_BATCHES {
        wire_batch(document, state, batch)?;
    }
    for group in &SCROLL_GROUPS {
        wire_group(document, state, group)?;
    }
    Ok(())
}
