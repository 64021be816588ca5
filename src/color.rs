//! HSL and RGB value types, and the two HSL to RGB conversions
//!
//! Both conversions are pure functions of their input; they are reentrant and
//! can be called from any number of threads at once.
pub mod chroma;
pub mod piecewise;

use serde::{Serialize, Deserialize};

use std::fmt;

/// A color in the HSL model.
///
/// The unit of `hue` depends on which conversion is used: [`Hsl::to_rgb`]
/// expects a fraction of a turn in `[0.0, 1.0]`, while [`Hsl::to_rgb_chroma`]
/// expects degrees in `[0.0, 360.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
  pub hue: f32,
  /// In `[0.0, 1.0]`
  pub saturation: f32,
  /// In `[0.0, 1.0]`
  pub lightness: f32
}

impl Hsl {
  #[inline]
  pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
    Hsl { hue, saturation, lightness }
  }

  /// Converts with the CSS3 algorithm, `hue` being a fraction of a turn.
  #[inline]
  pub fn to_rgb(self) -> Rgb {
    piecewise::hsl_to_rgb(self)
  }

  /// Converts with the chroma/hue-prime algorithm, `hue` being in degrees.
  #[inline]
  pub fn to_rgb_chroma(self) -> Rgb {
    chroma::hsl_to_rgb(self)
  }
}

impl From<[f32; 3]> for Hsl {
  #[inline]
  fn from([hue, saturation, lightness]: [f32; 3]) -> Self {
    Hsl::new(hue, saturation, lightness)
  }
}

impl From<Hsl> for [f32; 3] {
  #[inline]
  fn from(hsl: Hsl) -> Self {
    [hsl.hue, hsl.saturation, hsl.lightness]
  }
}

/// A color in the RGB model. Channels are not clamped, so out-of-range
/// input to a conversion may leave them outside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
  pub red: f32,
  pub green: f32,
  pub blue: f32
}

impl Rgb {
  #[inline]
  pub const fn new(red: f32, green: f32, blue: f32) -> Self {
    Rgb { red, green, blue }
  }

  /// Scales each channel to `0..=255`, saturating anything out of gamut.
  pub fn to_rgb8(self) -> [u8; 3] {
    <[f32; 3]>::from(self).map(|k| (k * 255.0).round() as u8)
  }

  pub fn to_hex(self) -> String {
    let [r, g, b] = self.to_rgb8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
  }
}

impl From<[f32; 3]> for Rgb {
  #[inline]
  fn from([red, green, blue]: [f32; 3]) -> Self {
    Rgb::new(red, green, blue)
  }
}

impl From<Rgb> for [f32; 3] {
  #[inline]
  fn from(rgb: Rgb) -> Self {
    [rgb.red, rgb.green, rgb.blue]
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:5.3}, {:5.3}, {:5.3})", self.red, self.green, self.blue)
  }
}
