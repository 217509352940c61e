//! Entrance reveal presets.
//!
//! Every revealed element starts transparent and shifted along one axis, then
//! transitions to its resting place. The tables below are the full set of
//! reveals on the page; there is no general tweening here, only CSS
//! transitions with computed delays.

use crate::constants::REVEAL_EASING;
use fnv::FnvHashSet;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPreset {
    pub selector: &'static str,
    pub axis: Axis,
    pub distance_px: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub stagger_sec: f32,
}

/// Inline style values for one element. `transition` is only set on the
/// shown state so the hidden state applies instantly.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl RevealPreset {
    const fn new(
        selector: &'static str,
        axis: Axis,
        distance_px: f32,
        duration_sec: f32,
        delay_sec: f32,
        stagger_sec: f32,
    ) -> Self {
        Self {
            selector,
            axis,
            distance_px,
            duration_sec,
            delay_sec,
            stagger_sec,
        }
    }

    pub fn hidden_style(&self) -> RevealStyle {
        let (x, y) = match self.axis {
            Axis::X => (self.distance_px, 0.0),
            Axis::Y => (0.0, self.distance_px),
        };
        RevealStyle {
            opacity: "0",
            transform: format!("translate3d({}px, {}px, 0)", x, y),
            transition: None,
        }
    }

    /// Resting style for the `index`-th element of a batch.
    pub fn shown_style(&self, index: usize) -> RevealStyle {
        let duration_ms = secs_to_ms(self.duration_sec);
        let delay_ms = self.delay_ms(index);
        RevealStyle {
            opacity: "1",
            transform: "translate3d(0px, 0px, 0)".to_string(),
            transition: Some(format!(
                "opacity {d}ms {e} {t}ms, transform {d}ms {e} {t}ms",
                d = duration_ms,
                e = REVEAL_EASING,
                t = delay_ms
            )),
        }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        secs_to_ms(self.delay_sec + self.stagger_sec * index as f32)
    }

    /// Time from applying the shown style until the `index`-th element has
    /// finished moving, after which the inline transition can be dropped.
    pub fn settle_ms(&self, index: usize) -> u32 {
        secs_to_ms(self.duration_sec) + self.delay_ms(index)
    }
}

#[inline]
fn secs_to_ms(sec: f32) -> u32 {
    (sec * 1000.0).round().max(0.0) as u32
}

/// Trigger line: the element's top crossing `fraction` of the viewport
/// height, measured from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerStart(pub f32);

impl TriggerStart {
    /// Observer root margin that shrinks the viewport bottom to the trigger
    /// line.
    pub fn root_margin(&self) -> String {
        let bottom = ((1.0 - self.0) * 100.0).round() as i32;
        format!("0px 0px -{}% 0px", bottom)
    }

    /// Whether an element whose top edge sits at `top` (viewport pixels) has
    /// reached the line. Elements scrolled past it count as crossed too.
    pub fn crossed(&self, top: f64, viewport_h: f64) -> bool {
        top <= viewport_h * f64::from(self.0)
    }
}

/// One observer report for a tracked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEntry {
    pub id: u32,
    pub is_intersecting: bool,
    /// Top of the element's box relative to the viewport.
    pub top: f64,
}

/// Reveal-once bookkeeping for every observed element on the page.
///
/// Observers hand over each callback's entries as one report. Elements that
/// reach their trigger line for the first time are returned in report order,
/// paired with their stagger index within that report.
#[derive(Debug, Default)]
pub struct RevealTracker {
    registered: u32,
    revealed: FnvHashSet<u32>,
}

impl RevealTracker {
    pub fn register(&mut self) -> u32 {
        let id = self.registered;
        self.registered += 1;
        id
    }

    pub fn on_report(
        &mut self,
        start: TriggerStart,
        viewport_h: f64,
        entries: &[RevealEntry],
    ) -> SmallVec<[(u32, usize); 8]> {
        let mut shown = SmallVec::new();
        for entry in entries {
            if entry.id >= self.registered {
                log::debug!("[reveal] report for unregistered id {}", entry.id);
                continue;
            }
            let reached = entry.is_intersecting || start.crossed(entry.top, viewport_h);
            if reached && self.revealed.insert(entry.id) {
                let index = shown.len();
                shown.push((entry.id, index));
            }
        }
        shown
    }

    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Elements of one selector that reveal independently, staggered by their
/// order within a single observer callback.
#[derive(Clone, Copy, Debug)]
pub struct RevealBatch {
    pub preset: RevealPreset,
    pub start: TriggerStart,
}

/// One trigger element revealing several sibling selectors at once.
#[derive(Clone, Copy, Debug)]
pub struct RevealGroup {
    pub trigger: &'static str,
    pub start: TriggerStart,
    pub members: &'static [RevealPreset],
}

const BATCH_START: TriggerStart = TriggerStart(0.85);
const GROUP_START: TriggerStart = TriggerStart(0.80);

pub static HERO_SEQUENCE: [RevealPreset; 6] = [
    RevealPreset::new(".image-wrapper", Axis::Y, 30.0, 0.8, 0.2, 0.0),
    RevealPreset::new(".hero-greeting", Axis::Y, 30.0, 0.6, 0.4, 0.0),
    RevealPreset::new(".hero-title", Axis::Y, 30.0, 0.6, 0.5, 0.0),
    RevealPreset::new(".hero-subtitle", Axis::Y, 30.0, 0.6, 0.6, 0.0),
    RevealPreset::new(".hero-description", Axis::Y, 30.0, 0.6, 0.7, 0.0),
    RevealPreset::new(".hero-cta", Axis::Y, 30.0, 0.6, 0.8, 0.0),
];

pub static SCROLL_BATCHES: [RevealBatch; 5] = [
    RevealBatch {
        preset: RevealPreset::new(".section-title", Axis::Y, 40.0, 0.6, 0.0, 0.1),
        start: BATCH_START,
    },
    RevealBatch {
        preset: RevealPreset::new(".skill-card", Axis::Y, 40.0, 0.5, 0.0, 0.1),
        start: BATCH_START,
    },
    RevealBatch {
        preset: RevealPreset::new(".project-card", Axis::Y, 40.0, 0.5, 0.0, 0.15),
        start: BATCH_START,
    },
    RevealBatch {
        preset: RevealPreset::new(".timeline-item", Axis::X, -30.0, 0.5, 0.0, 0.2),
        start: BATCH_START,
    },
    RevealBatch {
        preset: RevealPreset::new(".testimonial-card", Axis::Y, 30.0, 0.5, 0.0, 0.1),
        start: BATCH_START,
    },
];

const ABOUT_MEMBERS: [RevealPreset; 3] = [
    RevealPreset::new(".about-content", Axis::X, -40.0, 0.6, 0.0, 0.0),
    RevealPreset::new(".about-image", Axis::X, 40.0, 0.6, 0.1, 0.0),
    RevealPreset::new(".stat", Axis::Y, 20.0, 0.4, 0.2, 0.1),
];

const CONTACT_MEMBERS: [RevealPreset; 2] = [
    RevealPreset::new(".contact-info", Axis::X, -40.0, 0.6, 0.0, 0.0),
    RevealPreset::new(".contact-form", Axis::X, 40.0, 0.6, 0.1, 0.0),
];

pub static SCROLL_GROUPS: [RevealGroup; 2] = [
    RevealGroup {
        trigger: ".about-grid",
        start: GROUP_START,
        members: &ABOUT_MEMBERS,
    },
    RevealGroup {
        trigger: ".contact-grid",
        start: GROUP_START,
        members: &CONTACT_MEMBERS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_for_trigger_lines() {
        assert_eq!(BATCH_START.root_margin(), "0px 0px -15% 0px");
        assert_eq!(GROUP_START.root_margin(), "0px 0px -20% 0px");
    }

    #[test]
    fn crossing_includes_elements_above_the_line() {
        // 1000px viewport: the batch line sits at 850px.
        assert!(!BATCH_START.crossed(851.0, 1000.0));
        assert!(BATCH_START.crossed(850.0, 1000.0));
        assert!(BATCH_START.crossed(-1800.0, 1000.0));
        assert!(!GROUP_START.crossed(820.0, 1000.0));
    }

    #[test]
    fn settle_covers_delay_and_duration() {
        let timeline = SCROLL_BATCHES[3].preset;
        assert_eq!(timeline.settle_ms(0), 500);
        assert_eq!(timeline.settle_ms(4), 1300);
        assert_eq!(HERO_SEQUENCE[0].settle_ms(0), 1000);
    }

    #[test]
    fn timeline_items_slide_from_left() {
        let style = SCROLL_BATCHES[3].preset.hidden_style();
        assert_eq!(style.opacity, "0");
        assert_eq!(style.transform, "translate3d(-30px, 0px, 0)");
        assert_eq!(style.transition, None);
    }
}
