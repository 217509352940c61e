//! Skill bar fill-on-visible bookkeeping.

use crate::error::{CoreError, Result};
use fnv::FnvHashSet;

/// Parse a `data-progress` attribute into a percentage.
pub fn parse_progress(raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or(CoreError::MissingProgress)?.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| CoreError::InvalidProgress(raw.to_string()))?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::ProgressOutOfRange(value));
    }
    Ok(value)
}

pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}

/// Remembers which bars have been filled so each fills exactly once, even
/// when the observer delivers several intersecting reports before the bar
/// is unobserved.
#[derive(Debug, Default)]
pub struct SkillBarTracker {
    registered: u32,
    filled: FnvHashSet<u32>,
}

impl SkillBarTracker {
    /// Assign the next bar id.
    pub fn register(&mut self) -> u32 {
        let id = self.registered;
        self.registered += 1;
        id
    }

    pub fn registered(&self) -> u32 {
        self.registered
    }

    /// Handle an observer report. Returns the width to apply when this is the
    /// bar's first intersecting report.
    pub fn on_intersection(
        &mut self,
        id: u32,
        is_intersecting: bool,
        progress_attr: Option<&str>,
    ) -> Option<Result<String>> {
        if !is_intersecting || self.filled.contains(&id) {
            return None;
        }
        self.filled.insert(id);
        Some(parse_progress(progress_attr).map(progress_width))
    }

    pub fn is_filled(&self, id: u32) -> bool {
        self.filled.contains(&id)
    }

    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_progress_values() {
        assert_eq!(parse_progress(Some("80")), Ok(80.0));
        assert_eq!(parse_progress(Some(" 42.5 ")), Ok(42.5));
        assert_eq!(parse_progress(None), Err(CoreError::MissingProgress));
        assert_eq!(
            parse_progress(Some("lots")),
            Err(CoreError::InvalidProgress("lots".to_string()))
        );
        assert_eq!(
            parse_progress(Some("120")),
            Err(CoreError::ProgressOutOfRange(120.0))
        );
    }

    #[test]
    fn invalid_bar_is_not_retried() {
        let mut t = SkillBarTracker::default();
        let id = t.register();
        assert!(matches!(t.on_intersection(id, true, Some("x")), Some(Err(_))));
        assert_eq!(t.on_intersection(id, true, Some("50")), None);
    }
}
