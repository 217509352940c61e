//! Fixed-timezone clock text.

use crate::constants::{CLOCK_LABEL, CLOCK_SLEEP_FROM_HOUR, CLOCK_SLEEP_UNTIL_HOUR};

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    /// Wall-clock time at `utc_offset_minutes` for a UTC epoch in ms.
    pub fn from_epoch_ms(epoch_ms: f64, utc_offset_minutes: i32) -> Self {
        let minutes = (epoch_ms / MS_PER_MINUTE as f64).floor() as i64 + utc_offset_minutes as i64;
        let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (of_day / 60) as u32,
            minute: (of_day % 60) as u32,
        }
    }

    /// `hh:mm AM` with a 12-hour clock; midnight and noon read 12.
    pub fn twelve_hour(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let h = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", h, self.minute, suffix)
    }

    pub fn is_sleeping(&self) -> bool {
        self.hour >= CLOCK_SLEEP_FROM_HOUR || self.hour < CLOCK_SLEEP_UNTIL_HOUR
    }
}

pub fn clock_text(epoch_ms: f64, utc_offset_minutes: i32) -> String {
    let t = LocalTime::from_epoch_ms(epoch_ms, utc_offset_minutes);
    let status = if t.is_sleeping() {
        "Sleeping"
    } else {
        "Available"
    };
    format!("{} {} ({})", CLOCK_LABEL, t.twelve_hour(), status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_offsets_wrap_to_previous_day() {
        let t = LocalTime::from_epoch_ms(0.0, -90);
        assert_eq!(t, LocalTime { hour: 22, minute: 30 });
    }

    #[test]
    fn twelve_hour_edges() {
        assert_eq!(LocalTime { hour: 0, minute: 5 }.twelve_hour(), "12:05 AM");
        assert_eq!(LocalTime { hour: 12, minute: 0 }.twelve_hour(), "12:00 PM");
        assert_eq!(LocalTime { hour: 23, minute: 59 }.twelve_hour(), "11:59 PM");
    }
}
