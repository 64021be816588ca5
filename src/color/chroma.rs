//! The chroma/hue-prime HSL algorithm
//!
//! See <https://en.wikipedia.org/wiki/HSL_and_HSV#From_HSL>. Hue is in degrees,
//! saturation and lightness in `[0.0, 1.0]`.
use super::{Hsl, Rgb};

/// Index of the 60 degree sector that `h_prime` (hue in units of 60 degrees)
/// falls into, or `None` if it lies outside `[0.0, 6.0)`.
pub fn sector(h_prime: f32) -> Option<usize> {
  if (0.0..6.0).contains(&h_prime) {
    Some(h_prime as usize)
  } else {
    None
  }
}

/// A hue outside `[0.0, 360.0)` has no sector and degrades to the gray
/// `(m, m, m)` of the same lightness.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
  let Hsl { hue, saturation: s, lightness: l } = hsl;

  let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
  let h_prime = hue / 60.0;
  let x = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());

  let [r1, g1, b1] = match sector(h_prime) {
    Some(0) => [chroma, x, 0.0],
    Some(1) => [x, chroma, 0.0],
    Some(2) => [0.0, chroma, x],
    Some(3) => [0.0, x, chroma],
    Some(4) => [x, 0.0, chroma],
    Some(5) => [chroma, 0.0, x],
    _ => [0.0; 3]
  };

  let m = l - chroma / 2.0;

  Rgb::new(r1 + m, g1 + m, b1 + m)
}
