//! Mobile navigation menu and the hamburger-to-cross morph.

/// Inline style for one hamburger bar. `None` clears the property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

const BAR_RESET: BarStyle = BarStyle {
    transform: None,
    opacity: None,
};

pub const OPEN_BARS: [BarStyle; 3] = [
    BarStyle {
        transform: Some("rotate(45deg) translateY(7px)"),
        opacity: None,
    },
    BarStyle {
        transform: None,
        opacity: Some("0"),
    },
    BarStyle {
        transform: Some("rotate(-45deg) translateY(-7px)"),
        opacity: None,
    },
];

pub const CLOSED_BARS: [BarStyle; 3] = [BAR_RESET; 3];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the bar styles to apply.
    pub fn toggle(&mut self) -> &'static [BarStyle; 3] {
        self.open = !self.open;
        self.bars()
    }

    pub fn bars(&self) -> &'static [BarStyle; 3] {
        if self.open {
            &OPEN_BARS
        } else {
            &CLOSED_BARS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_closes() {
        let mut m = MobileMenu::default();
        assert_eq!(m.toggle(), &OPEN_BARS);
        assert!(m.is_open());
        assert_eq!(m.toggle(), &CLOSED_BARS);
        assert!(!m.is_open());
    }

    #[test]
    fn middle_bar_fades_when_open() {
        assert_eq!(OPEN_BARS[1].opacity, Some("0"));
        assert!(CLOSED_BARS.iter().all(|b| *b == BAR_RESET));
    }
}
