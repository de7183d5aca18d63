/*!
# Rust Terminal Module

The interactive front-end. Every line is parsed, compiled and run on a
fresh compiler and runtime; nothing carries over to the next line.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::{self, Error};
use crate::mach::{self, Event, Runtime, Val};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Instructions executed between checks for Ctrl-C.
pub const CYCLES: usize = 5000;
const PROMPT: &str = ">> ";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("monkey")?;
    interface.set_prompt(PROMPT)?;
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(string.clone());
        interrupted.store(false, Ordering::SeqCst);
        match evaluate(&string, &interrupted) {
            Ok(Some(val)) => interface.write_fmt(format_args!("{}\n", val))?,
            Ok(None) => {}
            Err(error) => {
                warn!(%error, input = string.as_str(), "evaluation failed");
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

/// Parse, compile and run one unit of input.
/// Returns the value left on top of the stack, if any.
/// A set `interrupted` flag is checked and cleared after every
/// slice of `CYCLES` instructions.
pub fn evaluate(s: &str, interrupted: &AtomicBool) -> Result<Option<Val>, Error> {
    let program = lang::parse_str(s)?;
    let bytecode = mach::compile(&program)?;
    let mut runtime = Runtime::new(bytecode)?;
    loop {
        if let Event::Halted = runtime.execute(CYCLES)? {
            return Ok(runtime.stack_top().cloned());
        }
        if interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Interrupted));
        }
    }
}
