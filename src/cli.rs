//! Command line front end: `hsl2rgb [--algorithm css|chroma] <hue> <saturation> <lightness>`
use crate::color::{Hsl, Rgb};
use crate::error::Error;

use std::io::prelude::*;
use std::str::FromStr;
use std::fmt;

pub const USAGE: &str = "\
Usage: hsl2rgb [OPTIONS] <HUE> <SATURATION> <LIGHTNESS>

Arguments:
  <HUE>         Hue in degrees, an integer in 0..360
  <SATURATION>  Saturation in 0.0..=1.0
  <LIGHTNESS>   Lightness in 0.0..=1.0

Options:
  -a, --algorithm <css|chroma>  Conversion algorithm [default: css]
  -h, --help                    Print this help
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
  /// CSS3 piecewise interpolation, fed the hue as a fraction of a turn
  #[default]
  Css,
  /// Chroma/hue-prime sectors, fed the hue in degrees
  Chroma
}

impl FromStr for Algorithm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Algorithm, Error> {
    match s {
      "css" | "piecewise" => Ok(Algorithm::Css),
      "chroma" | "wikipedia" => Ok(Algorithm::Chroma),
      _ => Err(Error::invalid_argument(format!("Invalid algorithm '{}', expected one of 'css' or 'chroma'", s)))
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Algorithm::Css => "css",
      Algorithm::Chroma => "chroma"
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Args {
  pub hue: i32,
  pub saturation: f32,
  pub lightness: f32,
  pub algorithm: Algorithm
}

impl Args {
  /// The color handed to the selected algorithm, with the hue in that algorithm's unit
  pub fn to_hsl(&self) -> Hsl {
    let hue = match self.algorithm {
      Algorithm::Css => self.hue as f32 / 360.0,
      Algorithm::Chroma => self.hue as f32
    };

    Hsl::new(hue, self.saturation, self.lightness)
  }

  pub fn convert(&self) -> Rgb {
    let hsl = self.to_hsl();
    log::debug!("converting {:?} with the {} algorithm", hsl, self.algorithm);
    match self.algorithm {
      Algorithm::Css => hsl.to_rgb(),
      Algorithm::Chroma => hsl.to_rgb_chroma()
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
  Help,
  Convert(Args)
}

impl Command {
  /// Parses the program arguments, not including the program name.
  pub fn parse<I, S>(arguments: I) -> Result<Command, Error>
  where I: IntoIterator<Item = S>, S: AsRef<str> {
    let mut arguments = arguments.into_iter();
    let mut algorithm = Algorithm::default();
    let mut positionals = Vec::with_capacity(3);
    while let Some(argument) = arguments.next() {
      match argument.as_ref() {
        "-h" | "--help" => return Ok(Command::Help),
        "-a" | "--algorithm" => match arguments.next() {
          Some(value) => algorithm = value.as_ref().parse()?,
          None => return Err(Error::invalid_argument("Option '--algorithm' takes a value"))
        },
        flag if is_flag(flag) => {
          return Err(Error::invalid_argument(format!("Unknown option '{}'", flag)));
        },
        positional => positionals.push(positional.to_owned())
      };
    };

    let [hue, saturation, lightness] = <[String; 3]>::try_from(positionals)
      .map_err(|positionals| Error::invalid_argument(format!("Expected 3 arguments, found {}", positionals.len())))?;

    let args = Args {
      hue: hue.parse().map_err(|_| invalid_number("hue", &hue, "an integer"))?,
      saturation: parse_real("saturation", &saturation)?,
      lightness: parse_real("lightness", &lightness)?,
      algorithm
    };

    log::debug!("parsed arguments {:?}", args);
    Ok(Command::Convert(args))
  }
}

/// Prints the parsed input and its conversion, returning the converted color.
pub fn run(args: Args, mut out: impl Write) -> Result<Rgb, Error> {
  // Shortest round-trip float formatting, not C's six significant digits
  writeln!(out, "Got hue {}, saturation {}, lightness {}", args.hue, args.saturation, args.lightness)?;
  let rgb = args.convert();
  writeln!(out, "Converted to {}", rgb)?;
  writeln!(out, "Hex {}", rgb.to_hex())?;
  Ok(rgb)
}

// Negative numbers are positionals, not flags
fn is_flag(argument: &str) -> bool {
  argument.starts_with('-') && argument.parse::<f64>().is_err()
}

fn parse_real(name: &str, value: &str) -> Result<f32, Error> {
  match value.parse::<f32>() {
    Ok(real) if real.is_finite() => Ok(real),
    _ => Err(invalid_number(name, value, "a real number"))
  }
}

fn invalid_number(name: &str, value: &str, expected: &str) -> Error {
  Error::invalid_argument(format!("Invalid {} '{}', expected {}", name, value, expected))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(arguments: &[&str]) -> Result<Command, Error> {
    Command::parse(arguments.iter().copied())
  }

  fn invalid_argument_message(result: Result<Command, Error>) -> String {
    match result {
      Err(Error::InvalidArgument(msg)) => msg,
      other => panic!("expected an invalid argument error, got {:?}", other)
    }
  }

  #[test]
  fn parses_positionals() {
    let command = parse(&["120", "0.5", "0.25"]).unwrap();
    assert_eq!(command, Command::Convert(Args {
      hue: 120,
      saturation: 0.5,
      lightness: 0.25,
      algorithm: Algorithm::Css
    }));
  }

  #[test]
  fn parses_algorithm_anywhere() {
    let expected = Command::Convert(Args {
      hue: 240,
      saturation: 1.0,
      lightness: 0.5,
      algorithm: Algorithm::Chroma
    });

    assert_eq!(parse(&["--algorithm", "chroma", "240", "1", "0.5"]).unwrap(), expected);
    assert_eq!(parse(&["240", "1", "-a", "chroma", "0.5"]).unwrap(), expected);
  }

  #[test]
  fn help_wins() {
    assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
    assert_eq!(parse(&["1", "-h"]).unwrap(), Command::Help);
  }

  #[test]
  fn missing_arguments_are_invalid() {
    let msg = invalid_argument_message(parse(&["120", "0.5"]));
    assert_eq!(msg, "Expected 3 arguments, found 2");
    let err = parse(&[]).unwrap_err();
    assert!(err.is_usage_error());
  }

  #[test]
  fn extra_arguments_are_invalid() {
    let msg = invalid_argument_message(parse(&["1", "2", "3", "4"]));
    assert_eq!(msg, "Expected 3 arguments, found 4");
  }

  #[test]
  fn malformed_numbers_are_invalid() {
    let msg = invalid_argument_message(parse(&["12.5", "0.5", "0.5"]));
    assert_eq!(msg, "Invalid hue '12.5', expected an integer");
    let msg = invalid_argument_message(parse(&["12", "half", "0.5"]));
    assert_eq!(msg, "Invalid saturation 'half', expected a real number");
    let msg = invalid_argument_message(parse(&["12", "0.5", "NaN"]));
    assert_eq!(msg, "Invalid lightness 'NaN', expected a real number");
  }

  #[test]
  fn bad_options_are_invalid() {
    let msg = invalid_argument_message(parse(&["--verbose", "1", "2", "3"]));
    assert_eq!(msg, "Unknown option '--verbose'");
    let msg = invalid_argument_message(parse(&["1", "2", "3", "--algorithm"]));
    assert_eq!(msg, "Option '--algorithm' takes a value");
    let msg = invalid_argument_message(parse(&["-a", "hsv", "1", "2", "3"]));
    assert_eq!(msg, "Invalid algorithm 'hsv', expected one of 'css' or 'chroma'");
  }

  #[test]
  fn negative_hue_is_positional() {
    match parse(&["-30", "1", "0.5"]).unwrap() {
      Command::Convert(args) => assert_eq!(args.hue, -30),
      Command::Help => panic!("expected a conversion")
    };
  }

  #[test]
  fn hue_unit_follows_algorithm() {
    let mut args = Args { hue: 180, saturation: 1.0, lightness: 0.5, algorithm: Algorithm::Css };
    assert_eq!(args.to_hsl().hue, 0.5);
    args.algorithm = Algorithm::Chroma;
    assert_eq!(args.to_hsl().hue, 180.0);
  }

  #[test]
  fn run_prints_input_and_result() {
    let args = Args { hue: 0, saturation: 1.0, lightness: 0.5, algorithm: Algorithm::Css };
    let mut out = Vec::new();
    run(args, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\
Got hue 0, saturation 1, lightness 0.5
Converted to (1.000, 0.000, 0.000)
Hex #ff0000
");
  }

  #[test]
  fn run_with_chroma_algorithm() {
    let args = Args { hue: 120, saturation: 1.0, lightness: 0.5, algorithm: Algorithm::Chroma };
    let mut out = Vec::new();
    let rgb = run(args, &mut out).unwrap();
    assert_eq!(rgb, Rgb::new(0.0, 1.0, 0.0));
    assert!(String::from_utf8(out).unwrap().ends_with("Hex #00ff00\n"));
  }
}
