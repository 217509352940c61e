//! Page-wide UI controller.
//!
//! All mutable state shared between event handlers lives here so the web
//! front-end holds exactly one `Rc<RefCell<PortfolioState>>`. Nothing in this
//! type touches platform APIs; handlers translate DOM events into these calls
//! and apply what comes back.

use crate::config::UiConfig;
use crate::cursor::{cursor_enabled, CursorFollower, CursorFrame};
use crate::form::{ButtonLook, FormFeedback};
use crate::hover::HoverState;
use crate::menu::{BarStyle, MobileMenu};
use crate::nav::{navbar_scrolled, scroll_target_top, ScrollThrottle};
use crate::progress::scroll_fraction;
use crate::reveal::RevealTracker;
use crate::skills::SkillBarTracker;

pub struct PortfolioState {
    pub config: UiConfig,
    cursor: Option<CursorFollower>,
    pub hover: HoverState,
    pub menu: MobileMenu,
    pub scroll: ScrollThrottle,
    pub skills: SkillBarTracker,
    pub reveals: RevealTracker,
    pub form: FormFeedback,
}

impl PortfolioState {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            cursor: None,
            hover: HoverState::default(),
            menu: MobileMenu::default(),
            scroll: ScrollThrottle::default(),
            skills: SkillBarTracker::default(),
            reveals: RevealTracker::default(),
            form: FormFeedback::default(),
        }
    }

    /// Evaluate the cursor guard and create the follower when it passes.
    /// Returns whether the follower is active.
    pub fn activate_cursor(
        &mut self,
        media_matches: bool,
        has_cursor: bool,
        has_follower: bool,
    ) -> bool {
        if cursor_enabled(media_matches, has_cursor, has_follower) {
            if self.cursor.is_none() {
                self.cursor = Some(CursorFollower::new(&self.config));
            }
            true
        } else {
            log::debug!("[cursor] guard failed; follower disabled");
            false
        }
    }

    pub fn cursor_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<&CursorFollower> {
        self.cursor.as_ref()
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(c) = self.cursor.as_mut() {
            c.set_pointer(x, y);
        }
    }

    /// One animation frame of the cursor follower.
    pub fn cursor_frame(&mut self) -> Option<CursorFrame> {
        self.cursor.as_mut().map(CursorFollower::step)
    }

    /// Scroll event: returns true when a frame must be scheduled.
    pub fn scrolled(&mut self, scroll_y: f64) -> bool {
        self.scroll.record(scroll_y)
    }

    /// Inside the scheduled frame: whether the navbar shows its scrolled look.
    pub fn navbar_frame(&mut self) -> bool {
        let y = self.scroll.take();
        navbar_scrolled(y, self.config.navbar_scrolled_after_px)
    }

    pub fn toggle_menu(&mut self) -> &'static [BarStyle; 3] {
        self.menu.toggle()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn anchor_scroll_top(&self, rect_top: f64, page_y_offset: f64) -> f64 {
        scroll_target_top(rect_top, page_y_offset, self.config.nav_scroll_offset_px)
    }

    pub fn progress(&self, scroll_top: f64, doc_height: f64) -> f64 {
        scroll_fraction(scroll_top, doc_height)
    }

    pub fn submit_form(&mut self, current_label: &str) -> Option<ButtonLook> {
        self.form.submit(current_label)
    }

    pub fn restore_form(&mut self) -> Option<ButtonLook> {
        self.form.restore()
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
