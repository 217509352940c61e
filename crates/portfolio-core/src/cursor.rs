//! Cursor dot and trailing halo driven by first-order exponential smoothing.
//!
//! Each call to [`CursorFollower::step`] advances one animation frame. The
//! gains are applied per frame, not per second, so the perceived lag scales
//! with the display refresh rate.

use crate::config::UiConfig;
use glam::Vec2;

/// Recursive filter `value += (target - value) * gain`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPoint {
    pub value: Vec2,
    pub gain: f32,
}

impl SmoothedPoint {
    pub fn new(gain: f32) -> Self {
        Self {
            value: Vec2::ZERO,
            gain,
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.value += (target - self.value) * self.gain;
        self.value
    }
}

/// Positions to paint for one frame, already offset to the indicators'
/// top-left corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub cursor: Vec2,
    pub follower: Vec2,
}

impl CursorFrame {
    pub fn cursor_transform(&self) -> String {
        translate3d(self.cursor)
    }

    pub fn follower_transform(&self) -> String {
        translate3d(self.follower)
    }
}

#[inline]
pub fn translate3d(p: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pointer: Vec2,
    cursor: SmoothedPoint,
    follower: SmoothedPoint,
    cursor_half: f32,
    follower_half: f32,
}

impl CursorFollower {
    pub fn new(cfg: &UiConfig) -> Self {
        Self {
            pointer: Vec2::ZERO,
            cursor: SmoothedPoint::new(cfg.cursor_gain),
            follower: SmoothedPoint::new(cfg.follower_gain),
            cursor_half: cfg.cursor_size_px * 0.5,
            follower_half: cfg.follower_size_px * 0.5,
        }
    }

    /// Record the latest raw pointer location. No smoothing happens here.
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn cursor_pos(&self) -> Vec2 {
        self.cursor.value
    }

    pub fn follower_pos(&self) -> Vec2 {
        self.follower.value
    }

    pub fn step(&mut self) -> CursorFrame {
        let c = self.cursor.step(self.pointer);
        let f = self.follower.step(self.pointer);
        CursorFrame {
            cursor: c - Vec2::splat(self.cursor_half),
            follower: f - Vec2::splat(self.follower_half),
        }
    }
}

/// Activation guard for the follower: wide viewport and both indicators
/// present in the document.
#[inline]
pub fn cursor_enabled(media_matches: bool, has_cursor: bool, has_follower: bool) -> bool {
    media_matches && has_cursor && has_follower
}

/// Width check equivalent to the `(min-width: Npx)` media query, for when
/// no `MediaQueryList` is available.
#[inline]
pub fn viewport_is_wide(cfg: &UiConfig, width_px: u32) -> bool {
    width_px >= cfg.cursor_min_viewport_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_covers_gain_fraction() {
        let mut f = CursorFollower::new(&UiConfig::default());
        f.set_pointer(100.0, 50.0);
        let frame = f.step();
        assert!((f.cursor_pos() - Vec2::new(20.0, 10.0)).length() < 1e-4);
        assert!((f.follower_pos() - Vec2::new(10.0, 5.0)).length() < 1e-4);
        assert!((frame.cursor - Vec2::new(14.0, 4.0)).length() < 1e-4);
        assert!((frame.follower - Vec2::new(-10.0, -15.0)).length() < 1e-4);
    }

    #[test]
    fn set_pointer_does_not_move_indicators() {
        let mut f = CursorFollower::new(&UiConfig::default());
        f.set_pointer(300.0, 300.0);
        f.set_pointer(10.0, 20.0);
        assert_eq!(f.cursor_pos(), Vec2::ZERO);
        assert_eq!(f.pointer(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn transform_strings() {
        let frame = CursorFrame {
            cursor: Vec2::new(-6.0, 4.5),
            follower: Vec2::new(0.0, 0.0),
        };
        assert_eq!(frame.cursor_transform(), "translate3d(-6px, 4.5px, 0)");
        assert_eq!(frame.follower_transform(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn guard_requires_everything() {
        assert!(cursor_enabled(true, true, true));
        assert!(!cursor_enabled(false, true, true));
        assert!(!cursor_enabled(true, false, true));
        assert!(!cursor_enabled(true, true, false));
    }
}
