//! Editor ranges
//!
//! The editor clamps every numeric edit into these ranges. Token sets loaded
//! from the store are not clamped.

use std::ops::RangeInclusive;

pub const BASE_FONT_SIZE: RangeInclusive<i32> = 12..=20;
pub const ELEMENT_FONT_SIZE: RangeInclusive<i32> = 10..=48;
pub const LINE_HEIGHT: RangeInclusive<f64> = 0.8..=2.5;
pub const FONT_WEIGHT: RangeInclusive<i32> = 100..=900;
pub const FONT_WEIGHT_STEP: i32 = 100;
pub const LETTER_SPACING: RangeInclusive<f64> = -2.0..=5.0;
pub const RADIUS_BASE: RangeInclusive<i32> = 0..=20;
pub const SPACING_BASE: RangeInclusive<i32> = 8..=32;
pub const SPACING_BASE_STEP: i32 = 4;

pub fn clamp_int(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

/// Snap to the nearest multiple of `step` (halves round up), then clamp
pub fn clamp_step(value: i32, range: &RangeInclusive<i32>, step: i32) -> i32 {
    let snapped = (value.saturating_add(step / 2)).div_euclid(step) * step;
    clamp_int(snapped, range)
}

pub fn clamp_float(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_weight_snaps_to_hundreds() {
        assert_eq!(clamp_step(449, &FONT_WEIGHT, FONT_WEIGHT_STEP), 400);
        assert_eq!(clamp_step(450, &FONT_WEIGHT, FONT_WEIGHT_STEP), 500);
        assert_eq!(clamp_step(20, &FONT_WEIGHT, FONT_WEIGHT_STEP), 100);
        assert_eq!(clamp_step(1200, &FONT_WEIGHT, FONT_WEIGHT_STEP), 900);
    }

    #[test]
    fn spacing_snaps_to_fours() {
        assert_eq!(clamp_step(13, &SPACING_BASE, SPACING_BASE_STEP), 12);
        assert_eq!(clamp_step(14, &SPACING_BASE, SPACING_BASE_STEP), 16);
        assert_eq!(clamp_step(2, &SPACING_BASE, SPACING_BASE_STEP), 8);
    }

    #[test]
    fn floats_clamp_to_bounds() {
        assert_eq!(clamp_float(-3.5, &LETTER_SPACING), -2.0);
        assert_eq!(clamp_float(3.0, &LINE_HEIGHT), 2.5);
        assert_eq!(clamp_float(1.5, &LINE_HEIGHT), 1.5);
    }
}
