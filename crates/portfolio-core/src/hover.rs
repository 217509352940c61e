//! Hover delegation for the cursor indicators.
//!
//! One listener pair sits on the document body. For every over/out event the
//! originating element and its ancestors are tested against a fixed list of
//! simple selectors (`tag` or `.class`), the same walk `Element::closest`
//! performs.

use crate::constants::HOVER_TARGETS;

/// Minimal view of a DOM element needed to test simple selectors.
pub trait ElementLike {
    fn tag_name(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimpleSelector<'a> {
    Tag(&'a str),
    Class(&'a str),
}

impl<'a> SimpleSelector<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('.') {
            Some(class) => Self::Class(class),
            None => Self::Tag(raw),
        }
    }

    pub fn matches<E: ElementLike + ?Sized>(&self, el: &E) -> bool {
        match self {
            Self::Tag(tag) => el.tag_name().eq_ignore_ascii_case(tag),
            Self::Class(class) => el.has_class(class),
        }
    }
}

/// Returns true when any element in `chain` (target first, then ancestors)
/// matches one of the hover targets.
pub fn is_hover_target<E, I>(chain: I) -> bool
where
    E: ElementLike,
    I: IntoIterator<Item = E>,
{
    chain.into_iter().any(|el| {
        HOVER_TARGETS
            .iter()
            .any(|raw| SimpleSelector::parse(raw).matches(&el))
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    active: bool,
}

impl HoverState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer moved over an element. Returns the new state when the
    /// indicators need their class updated.
    pub fn over(&mut self, on_target: bool) -> Option<bool> {
        if on_target && !self.active {
            self.active = true;
            return Some(true);
        }
        None
    }

    /// Pointer left an element.
    pub fn out(&mut self, from_target: bool) -> Option<bool> {
        if from_target && self.active {
            self.active = false;
            return Some(false);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_selectors() {
        assert_eq!(SimpleSelector::parse("a"), SimpleSelector::Tag("a"));
        assert_eq!(
            SimpleSelector::parse(".skill-card"),
            SimpleSelector::Class("skill-card")
        );
    }

    struct Bare(&'static str);

    impl ElementLike for Bare {
        fn tag_name(&self) -> String {
            self.0.to_ascii_uppercase()
        }
        fn has_class(&self, class: &str) -> bool {
            self.0 == class
        }
    }

    #[test]
    fn each_target_matches_on_its_own() {
        for &raw in HOVER_TARGETS {
            let el = Bare(raw.trim_start_matches('.'));
            assert!(is_hover_target([el]), "{} should match", raw);
        }
        assert!(!is_hover_target([Bare("section")]));
        assert!(!is_hover_target(std::iter::empty::<Bare>()));
    }

    #[test]
    fn over_and_out_only_report_changes() {
        let mut h = HoverState::default();
        assert_eq!(h.over(false), None);
        assert_eq!(h.over(true), Some(true));
        assert_eq!(h.over(true), None);
        assert_eq!(h.out(false), None);
        assert!(h.is_active());
        assert_eq!(h.out(true), Some(false));
        assert_eq!(h.out(true), None);
    }
}
