use crate::model::BadgeSpec;
use serde::Serialize;

/// Average glyph advance of the default 11px font.
pub const CHAR_WIDTH: f64 = 7.8;
/// Horizontal padding added to every segment (both sides combined).
pub const HORIZONTAL_PADDING: u32 = 20;
/// Floor so very short text still renders a legible pill.
pub const MIN_SEGMENT_WIDTH: u32 = 40;
pub const BADGE_HEIGHT: u32 = 20;
/// Text baseline, measured from the top edge.
pub const TEXT_BASELINE_Y: u32 = 14;
pub const FONT_SIZE: u32 = 11;

/// Width of one segment holding `text`.
///
/// `max(40, round(chars * 7.8) + 20)`, where `chars` counts Unicode scalar values of the
/// displayed (unescaped) text. There is no upper cap.
pub fn segment_width(text: &str) -> u32 {
    let chars = text.chars().count() as f64;
    // `as` saturates, so absurdly long input clamps instead of wrapping.
    let advance = (chars * CHAR_WIDTH).round() as u32;
    advance
        .saturating_add(HORIZONTAL_PADDING)
        .max(MIN_SEGMENT_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeLayout {
    pub left_width: u32,
    pub right_width: u32,
    pub height: u32,
}

impl BadgeLayout {
    pub fn compute(spec: &BadgeSpec) -> Self {
        Self::for_text(&spec.label, &spec.message)
    }

    pub fn for_text(label: &str, message: &str) -> Self {
        Self {
            left_width: segment_width(label),
            right_width: segment_width(message),
            height: BADGE_HEIGHT,
        }
    }

    pub fn width(&self) -> u32 {
        self.left_width.saturating_add(self.right_width)
    }

    /// Horizontal center of the label segment.
    pub fn left_text_x(&self) -> f64 {
        f64::from(self.left_width) / 2.0
    }

    /// Horizontal center of the message segment.
    pub fn right_text_x(&self) -> f64 {
        f64::from(self.left_width) + f64::from(self.right_width) / 2.0
    }

    pub fn text_y(&self) -> u32 {
        TEXT_BASELINE_Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_uses_minimum_width() {
        assert_eq!(segment_width(""), 40);
    }

    #[test]
    fn short_text_is_floored() {
        // round(2 * 7.8) + 20 = 36
        assert_eq!(segment_width("ok"), 40);
        // round(3 * 7.8) + 20 = 43
        assert_eq!(segment_width("abc"), 43);
    }

    #[test]
    fn width_follows_formula_for_many_lengths() {
        for n in 0..200usize {
            let text = "x".repeat(n);
            let expected = ((n as f64 * 7.8).round() as u32 + 20).max(40);
            assert_eq!(segment_width(&text), expected, "length {n}");
        }
    }

    #[test]
    fn long_text_is_not_capped() {
        let text = "a".repeat(1000);
        assert_eq!(segment_width(&text), 7820);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 5 scalar values, 10 bytes.
        assert_eq!(segment_width("héllö"), segment_width("hello"));
        assert_eq!(segment_width("✓✓✓✓✓"), 59);
    }

    #[test]
    fn build_passing_geometry() {
        let layout = BadgeLayout::for_text("build", "passing");
        assert_eq!(layout.left_width, 59);
        assert_eq!(layout.right_width, 75);
        assert_eq!(layout.width(), 134);
        assert_eq!(layout.height, 20);
        assert_eq!(layout.left_text_x(), 29.5);
        assert_eq!(layout.right_text_x(), 96.5);
    }

    #[test]
    fn empty_pair_is_eighty_wide() {
        let layout = BadgeLayout::compute(&BadgeSpec::new("", ""));
        assert_eq!(layout.width(), 80);
        assert_eq!(layout.left_text_x(), 20.0);
        assert_eq!(layout.right_text_x(), 60.0);
    }
}
