/// Fraction of the page scrolled, in `[0, 1]`.
///
/// `doc_height` is the scrollable distance (`scrollHeight - innerHeight`).
/// Pages that do not scroll report 0.
pub fn scroll_fraction(scroll_top: f64, doc_height: f64) -> f64 {
    if doc_height.is_nan() || doc_height <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / doc_height).clamp(0.0, 1.0)
}

#[inline]
pub fn scrollable_height(scroll_height: f64, inner_height: f64) -> f64 {
    scroll_height - inner_height
}

pub fn progress_transform(fraction: f64) -> String {
    format!("scaleX({})", fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_page_never_divides_by_zero() {
        assert_eq!(scroll_fraction(0.0, 0.0), 0.0);
        assert_eq!(scroll_fraction(10.0, -50.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_fraction(-20.0, 400.0), 0.0);
        assert_eq!(scroll_fraction(450.0, 400.0), 1.0);
    }

    #[test]
    fn transform_text() {
        assert_eq!(progress_transform(0.25), "scaleX(0.25)");
        assert_eq!(progress_transform(1.0), "scaleX(1)");
    }
}
