//! Navbar scroll state, scroll throttling and in-page anchor navigation.

/// Collapses a burst of scroll events into at most one pending frame.
///
/// `record` is called from every scroll event and reports whether a frame
/// must be scheduled. `take` runs inside that frame and returns the latest
/// offset seen, clearing the pending flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollThrottle {
    last_scroll: f64,
    pending: bool,
}

impl ScrollThrottle {
    pub fn record(&mut self, scroll_y: f64) -> bool {
        self.last_scroll = scroll_y;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> f64 {
        self.pending = false;
        self.last_scroll
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Extracts the element id from an in-page link such as `#projects`.
/// A bare `#` or anything not starting with `#` yields `None`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Document-relative offset to scroll to so the target clears the fixed
/// header.
#[inline]
pub fn scroll_target_top(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}
