//! The CSS3 HSL algorithm
//!
//! See <https://www.w3.org/TR/2011/REC-css3-color-20110607/#hsl-color>.
//! Hue, saturation and lightness are all expected in `[0.0, 1.0]`; nothing is
//! validated and out-of-range input simply produces out-of-gamut output.
use super::{Hsl, Rgb};

/// Interpolates one channel between `m1` and `m2` for the given hue.
///
/// The hue is wrapped into `[0.0, 1.0]` at most once, so a hue more than a
/// full turn out of range is not normalized and falls through to `m1`.
/// The pieces are chosen with strict comparisons: a hue exactly on `1/6`,
/// `1/2` or `2/3` selects the following piece.
pub fn hue_to_rgb(m1: f32, m2: f32, hue: f32) -> f32 {
  let h = if hue < 0.0 {
    hue + 1.0
  } else if hue > 1.0 {
    hue - 1.0
  } else {
    hue
  };

  if h * 6.0 < 1.0 {
    m1 + (m2 - m1) * h * 6.0
  } else if h * 2.0 < 1.0 {
    m2
  } else if h * 3.0 < 2.0 {
    m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
  } else {
    m1
  }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
  let Hsl { hue, saturation: s, lightness: l } = hsl;

  let m2 = if l < 0.5 {
    l * (s + 1.0)
  } else {
    l + s - l * s
  };

  let m1 = l * 2.0 - m2;

  Rgb {
    red: hue_to_rgb(m1, m2, hue + 1.0 / 3.0),
    green: hue_to_rgb(m1, m2, hue),
    blue: hue_to_rgb(m1, m2, hue - 1.0 / 3.0)
  }
}
