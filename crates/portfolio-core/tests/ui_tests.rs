// Host-side tests for the scroll, menu, hover and skill-bar state.

use portfolio_core::hover::{is_hover_target, ElementLike};
use portfolio_core::menu::{CLOSED_BARS, OPEN_BARS};
use portfolio_core::progress::scroll_fraction;
use portfolio_core::{CoreError, PortfolioState};

// Fake DOM node: tag plus class list.
struct Node {
    tag: &'static str,
    classes: &'static [&'static str],
}

impl ElementLike for Node {
    fn tag_name(&self) -> String {
        self.tag.to_ascii_uppercase()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

fn node(tag: &'static str, classes: &'static [&'static str]) -> Node {
    Node { tag, classes }
}

#[test]
fn nested_child_of_card_is_a_hover_target() {
    // <span> inside <h3> inside <div class="project-card">
    let chain = vec![
        node("span", &[]),
        node("h3", &["card-title"]),
        node("div", &["project-card", "featured"]),
        node("section", &["projects"]),
    ];
    assert!(is_hover_target(chain));
}

#[test]
fn links_and_buttons_match_by_tag() {
    assert!(is_hover_target(vec![node("a", &[])]));
    assert!(is_hover_target(vec![node("svg", &[]), node("button", &["cta"])]));
}

#[test]
fn plain_content_is_not_a_hover_target() {
    let chain = vec![
        node("p", &["hero-description"]),
        node("section", &["hero"]),
        node("body", &[]),
    ];
    assert!(!is_hover_target(chain));
}

#[test]
fn hover_enter_then_leave_on_nested_child() {
    let mut state = PortfolioState::default();
    let over = is_hover_target(vec![node("img", &[]), node("div", &["skill-card"])]);
    assert_eq!(state.hover.over(over), Some(true));
    assert!(state.hover.is_active());

    let out = is_hover_target(vec![node("img", &[]), node("div", &["skill-card"])]);
    assert_eq!(state.hover.out(out), Some(false));
    assert!(!state.hover.is_active());
}

#[test]
fn scroll_progress_endpoints() {
    let doc_height = 2400.0 - 800.0;
    assert_eq!(scroll_fraction(0.0, doc_height), 0.0);
    assert_eq!(scroll_fraction(doc_height, doc_height), 1.0);
    assert_eq!(scroll_fraction(400.0, doc_height), 0.25);

    let state = PortfolioState::default();
    assert_eq!(state.progress(800.0, doc_height), 0.5);
}

#[test]
fn skill_bar_fills_exactly_once() {
    let mut state = PortfolioState::default();
    let id = state.skills.register();

    // Not yet half visible.
    assert_eq!(state.skills.on_intersection(id, false, Some("80")), None);

    let first = state.skills.on_intersection(id, true, Some("80"));
    assert_eq!(first, Some(Ok("80%".to_string())));

    // Scrolling away and back again must not refill.
    assert_eq!(state.skills.on_intersection(id, false, Some("80")), None);
    assert_eq!(state.skills.on_intersection(id, true, Some("80")), None);
    assert_eq!(state.skills.filled_count(), 1);
}

#[test]
fn skill_bars_are_independent() {
    let mut state = PortfolioState::default();
    let a = state.skills.register();
    let b = state.skills.register();
    assert_ne!(a, b);
    assert_eq!(state.skills.registered(), 2);

    assert_eq!(
        state.skills.on_intersection(b, true, Some("65")),
        Some(Ok("65%".to_string()))
    );
    assert!(!state.skills.is_filled(a));
    assert_eq!(
        state.skills.on_intersection(a, true, None),
        Some(Err(CoreError::MissingProgress))
    );
    assert!(state.skills.is_filled(a));
}

#[test]
fn menu_toggle_twice_restores_everything() {
    let mut state = PortfolioState::default();
    let initial_open = state.menu_open();

    let bars = state.toggle_menu();
    assert!(state.menu_open());
    assert_eq!(bars, &OPEN_BARS);
    assert_eq!(bars[0].transform, Some("rotate(45deg) translateY(7px)"));
    assert_eq!(bars[2].transform, Some("rotate(-45deg) translateY(-7px)"));

    let bars = state.toggle_menu();
    assert_eq!(state.menu_open(), initial_open);
    assert_eq!(bars, &CLOSED_BARS);
    assert!(bars.iter().all(|b| b.transform.is_none() && b.opacity.is_none()));
}

#[test]
fn scroll_burst_schedules_one_frame() {
    let mut state = PortfolioState::default();
    assert!(state.scrolled(20.0));
    assert!(!state.scrolled(60.0));
    assert!(!state.scrolled(140.0));
    assert!(state.scroll.is_pending());

    // The frame sees the latest offset only.
    assert!(state.navbar_frame());
    assert!(!state.scroll.is_pending());

    assert!(state.scrolled(100.0));
    assert!(!state.navbar_frame(), "exactly 100px is not past the threshold");
}

#[test]
fn unscheduled_frame_releases_the_throttle() {
    let mut state = PortfolioState::default();
    assert!(state.scrolled(300.0));
    // The frame request failed: the handler clears the flag itself.
    state.scroll.take();
    assert!(!state.scroll.is_pending());

    assert!(state.scrolled(320.0), "the next scroll schedules again");
    assert!(state.navbar_frame());
}

#[test]
fn anchor_scroll_uses_header_offset() {
    let state = PortfolioState::default();
    assert_eq!(state.anchor_scroll_top(400.0, 1200.0), 1520.0);
}
