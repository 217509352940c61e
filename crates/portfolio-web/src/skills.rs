use crate::dom;
use portfolio_core::PortfolioState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Fill each `.skill-progress` bar to its `data-progress` width the first
/// time it is half visible.
pub fn wire_skill_bars(
    document: &web::Document,
    state: &Rc<RefCell<PortfolioState>>,
) -> anyhow::Result<()> {
    let bars = dom::query_all(document, ".skill-progress");
    if bars.is_empty() {
        return Ok(());
    }
    let ids: Vec<u32> = {
        let mut s = state.borrow_mut();
        bars.iter().map(|_| s.skills.register()).collect()
    };
    let threshold = state.borrow().config.skill_visibility_threshold;

    let st = state.clone();
    let known = bars.clone();
    let observer = dom::intersection_observer(threshold, None, move |entries, observer| {
        for entry in entries {
            let target = entry.target();
            let Some(pos) = known.iter().position(|b| **b == target) else {
                continue;
            };
            let attr = target.get_attribute("data-progress");
            let outcome = st
                .borrow_mut()
                .skills
                .on_intersection(ids[pos], entry.is_intersecting(), attr.as_deref());
            match outcome {
                Some(Ok(width)) => {
                    dom::set_style(&known[pos], "width", Some(width.as_str()));
                    observer.unobserve(&target);
                }
                Some(Err(e)) => {
                    log::warn!("[skills] bar {} left empty: {}", ids[pos], e);
                    observer.unobserve(&target);
                }
                None => {}
            }
        }
    })?;
    for bar in &bars {
        observer.observe(bar);
    }
    log::debug!("[skills] observing {} bars", bars.len());
    Ok(())
}
