//! Conversion of HSL colors to RGB
//!
//! Two independent algorithms are provided: the CSS3 piecewise interpolation in
//! [`color::piecewise`], which takes the hue as a fraction of a turn, and the
//! chroma/hue-prime construction in [`color::chroma`], which takes the hue in degrees.
#![warn(missing_debug_implementations)]
pub mod cli;
pub mod color;
pub mod error;

pub use crate::color::{Hsl, Rgb};
pub use crate::error::Error;

pub const APPNAME: &str = concat!("hsl2rgb v", env!("CARGO_PKG_VERSION"));
