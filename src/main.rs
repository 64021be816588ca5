use hsl2rgb::APPNAME;
use hsl2rgb::cli::{self, Command};
use hsl2rgb::error::Error;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use std::io::prelude::*;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::env;
use std::io;

fn main() -> ExitCode {
  install_handler();
  env_logger::init();

  let result = Command::parse(env::args().skip(1)).and_then(|command| match command {
    Command::Help => print_usage(io::stdout().lock()).map_err(Error::from),
    Command::Convert(args) => cli::run(args, io::stdout().lock()).map(drop)
  });

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      if let Err(print_err) = report_error(&err) {
        eprintln!("Error while printing error: {print_err:?}");
      };

      ExitCode::from(2)
    }
  }
}

fn print_usage(mut out: impl io::Write) -> io::Result<()> {
  writeln!(out, "{}", APPNAME)?;
  write!(out, "{}", cli::USAGE)
}

fn report_error(err: &Error) -> io::Result<()> {
  let mut stderr = StandardStream::stderr(stderr_color_choice());
  stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
  write!(stderr, "error:")?;
  stderr.reset()?;
  writeln!(stderr, " {}", err)?;
  if err.is_usage_error() {
    writeln!(stderr)?;
    write!(stderr, "{}", cli::USAGE)?;
  };

  Ok(())
}

// `ColorChoice::Auto` only consults the environment, not whether stderr is a tty
fn stderr_color_choice() -> ColorChoice {
  if io::stderr().is_terminal() {
    ColorChoice::Auto
  } else {
    ColorChoice::Never
  }
}

/// Header of a crash log: enough to rerun the conversion that panicked
fn write_crash_context(mut out: impl Write) -> io::Result<()> {
  writeln!(out, "{}", APPNAME)?;
  let arguments = env::args().skip(1).collect::<Vec<String>>();
  writeln!(out, "Invocation: hsl2rgb {}", arguments.join(" "))?;
  match env::var("RUST_LOG") {
    Ok(filter) => writeln!(out, "Log filter: {}", filter)?,
    Err(_) => writeln!(out, "Log filter: none")?
  };
  writeln!(out, "Debug assertions: {}, debug-mode feature: {}", cfg!(debug_assertions), cfg!(feature = "debug-mode"))?;
  writeln!(out)
}

/// Panics print a short backtrace to the console; outside of dev builds the
/// full backtrace also goes to `hsl2rgb_crash_<timestamp>.log`.
fn install_handler() {
  use chrono::Local;
  use color_backtrace::{BacktracePrinter, Verbosity};
  use termcolor::NoColor;

  use std::fs::File;
  use std::panic::{set_hook, PanicHookInfo};
  use std::sync::Mutex;

  let console_printer = BacktracePrinter::new()
    .verbosity(Verbosity::Medium);
  let file_printer = BacktracePrinter::new()
    .verbosity(Verbosity::Full)
    .lib_verbosity(Verbosity::Full)
    .clear_frame_filters();
  let console = Mutex::new(color_backtrace::default_output_stream());
  set_hook(Box::new(move |pi: &PanicHookInfo| {
    if let Ok(mut console) = console.lock() {
      if let Err(err) = console_printer.print_panic_info(pi, &mut *console) {
        eprintln!("Error while printing panic: {err:?}");
      };
    };

    if cfg!(any(not(debug_assertions), feature = "debug-mode")) {
      let path = format!("hsl2rgb_crash_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
      let result = File::create(&path).and_then(|out_file| {
        write_crash_context(&out_file)?;
        file_printer.print_panic_info(pi, &mut NoColor::new(&out_file))
      });

      match result {
        Ok(()) => eprintln!("Crash log written to {}", path),
        Err(err) => eprintln!("Error writing crash log {}: {err:?}", path)
      };
    };
  }));
}
