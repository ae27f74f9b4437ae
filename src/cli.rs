//! Command-line verbosity parsing for test executables.
//!
//! Test binaries take at most one argument: a short option string scanned
//! byte-by-byte. `q` forces quiet mode, each `v` raises verbosity by one
//! (`vv` is level 2, `vvv` level 3), anything else is silently ignored.
//! More than one argument is a usage error that must abort the process
//! before any test runs.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Too many arguments: use test_name_exec vvv")]
    TooManyArguments,
}

/// Parse program arguments (without the program name) into a verbosity level.
///
/// Returns `Ok(None)` when no argument is given, leaving the caller's default
/// in place. A `q` anywhere in the option string wins over any number of `v`s.
pub fn parse_verbosity<I>(args: I) -> Result<Option<u8>, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let flags = match args.next() {
        Some(flags) => flags,
        None => return Ok(None),
    };
    if args.next().is_some() {
        return Err(UsageError::TooManyArguments);
    }

    let mut quiet = false;
    let mut verbosity: u8 = 0;
    for c in flags.chars() {
        match c {
            'q' => quiet = true,
            'v' => verbosity = verbosity.saturating_add(1),
            _ => {}
        }
    }
    Ok(Some(if quiet { 0 } else { verbosity }))
}
