//! Runtime tunables for the page behavior.
//!
//! Defaults mirror `constants.rs`. The web front-end builds the default and
//! validates it once at startup; tests construct variants directly.

use crate::constants::*;
use crate::error::{CoreError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub cursor_gain: f32,
    pub follower_gain: f32,
    pub cursor_size_px: f32,
    pub follower_size_px: f32,
    pub cursor_min_viewport_px: u32,
    pub navbar_scrolled_after_px: f64,
    pub nav_scroll_offset_px: f64,
    pub skill_visibility_threshold: f64,
    pub form_reset_delay_ms: i32,
    pub clock_utc_offset_minutes: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cursor_gain: CURSOR_GAIN,
            follower_gain: FOLLOWER_GAIN,
            cursor_size_px: CURSOR_SIZE_PX,
            follower_size_px: FOLLOWER_SIZE_PX,
            cursor_min_viewport_px: CURSOR_MIN_VIEWPORT_PX,
            navbar_scrolled_after_px: NAVBAR_SCROLLED_AFTER_PX,
            nav_scroll_offset_px: NAV_SCROLL_OFFSET_PX,
            skill_visibility_threshold: SKILL_VISIBILITY_THRESHOLD,
            form_reset_delay_ms: FORM_RESET_DELAY_MS,
            clock_utc_offset_minutes: CLOCK_UTC_OFFSET_MINUTES,
        }
    }
}

impl UiConfig {
    /// Reject values that would make the smoothing diverge or the observers
    /// never fire.
    pub fn validate(&self) -> Result<()> {
        check_gain("cursor_gain", self.cursor_gain)?;
        check_gain("follower_gain", self.follower_gain)?;
        check_positive("cursor_size_px", self.cursor_size_px as f64)?;
        check_positive("follower_size_px", self.follower_size_px as f64)?;
        if !(0.0..=1.0).contains(&self.skill_visibility_threshold) {
            return Err(CoreError::InvalidConfig {
                field: "skill_visibility_threshold",
                value: self.skill_visibility_threshold,
            });
        }
        check_positive("form_reset_delay_ms", self.form_reset_delay_ms as f64)?;
        if self.clock_utc_offset_minutes.abs() > 14 * 60 {
            return Err(CoreError::InvalidConfig {
                field: "clock_utc_offset_minutes",
                value: self.clock_utc_offset_minutes as f64,
            });
        }
        Ok(())
    }

    pub fn media_query(&self) -> String {
        format!("(min-width: {}px)", self.cursor_min_viewport_px)
    }
}

fn check_gain(field: &'static str, gain: f32) -> Result<()> {
    if gain > 0.0 && gain <= 1.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig {
            field,
            value: gain as f64,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
        assert_eq!(UiConfig::default().media_query(), "(min-width: 769px)");
    }

    #[test]
    fn rejects_divergent_gain() {
        let cfg = UiConfig {
            follower_gain: 1.5,
            ..UiConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(CoreError::InvalidConfig {
                field: "follower_gain",
                value: 1.5
            })
        );
    }

    #[test]
    fn rejects_zero_gain_and_bad_threshold() {
        let cfg = UiConfig {
            cursor_gain: 0.0,
            ..UiConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = UiConfig {
            skill_visibility_threshold: 1.2,
            ..UiConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_sizes() {
        let cfg = UiConfig {
            cursor_size_px: 0.0,
            ..UiConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(CoreError::InvalidConfig {
                field: "cursor_size_px",
                value: 0.0
            })
        );

        let cfg = UiConfig {
            follower_size_px: -4.0,
            ..UiConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(CoreError::InvalidConfig {
                field: "follower_size_px",
                value: -4.0
            })
        );
    }

    #[test]
    fn rejects_non_positive_form_delay() {
        let cfg = UiConfig {
            form_reset_delay_ms: -1,
            ..UiConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(CoreError::InvalidConfig {
                field: "form_reset_delay_ms",
                value: -1.0
            })
        );
    }

    #[test]
    fn clock_offset_limited_to_fourteen_hours() {
        let cfg = UiConfig {
            clock_utc_offset_minutes: 14 * 60,
            ..UiConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let cfg = UiConfig {
            clock_utc_offset_minutes: -(14 * 60 + 1),
            ..UiConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(CoreError::InvalidConfig {
                field: "clock_utc_offset_minutes",
                value: -841.0
            })
        );
    }
}
