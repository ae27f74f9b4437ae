//! Assertion evaluation.
//!
//! Every assertion either holds (the test continues) or produces a [`Failure`]
//! carrying the call-site file and line plus a formatted message. Failures
//! propagate with ordinary early return: the macros `return` directly, the
//! comparison functions are called with `?`. The first failing assertion
//! terminates the enclosing test function; there is no recovery and no panic.

use std::fmt;
use std::panic::Location;

use crate::context::truncate_message;

/// Fixed absolute tolerance for [`atassert_eqf`]: 32-bit machine epsilon,
/// regardless of operand precision. Deliberately coarse and not relative to
/// magnitude.
pub const FLOAT_EPSILON: f64 = f32::EPSILON as f64;

/// Result of one test function: `Ok(())` on success, or the first assertion
/// failure.
pub type TestOutcome = Result<(), Failure>;

/// One assertion failure, pinned to the source location of the assertion
/// call site. Renders as `(file:line): message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub file: &'static str,
    pub line: u32,
    pub message: String,
}

impl Failure {
    /// Build a failure at the caller's source location. The message is capped
    /// at [`crate::context::AMSG_MAX_LEN`] bytes.
    #[track_caller]
    pub fn here(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            message: truncate_message(message.into()),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}): {}", self.file, self.line, self.message)
    }
}

/// String equality, null-friendly: both `None` are equal, a lone `None` never
/// equals a present string, two present strings compare byte-wise.
#[track_caller]
pub fn atassert_eqs(actual: Option<&str>, expected: Option<&str>) -> TestOutcome {
    if actual == expected {
        return Ok(());
    }
    Err(Failure::here(format!(
        "'{}' != '{}'",
        actual.unwrap_or("null"),
        expected.unwrap_or("null"),
    )))
}

/// Integer equality; the message reports both decimal values.
#[track_caller]
pub fn atassert_eqi(actual: i64, expected: i64) -> TestOutcome {
    if actual == expected {
        return Ok(());
    }
    Err(Failure::here(format!("{} != {}", actual, expected)))
}

/// Floating-point equality, NaN-aware: exactly one NaN fails, two NaNs pass,
/// otherwise the absolute difference must stay within [`FLOAT_EPSILON`].
#[track_caller]
pub fn atassert_eqf(actual: f64, expected: f64) -> TestOutcome {
    let passed = match (actual.is_nan(), expected.is_nan()) {
        (true, true) => true,
        (true, false) | (false, true) => false,
        (false, false) => (actual - expected).abs() <= FLOAT_EPSILON,
    };
    if passed {
        return Ok(());
    }
    Err(Failure::here(format!(
        "{:.6} != {:.6} (diff: {:.10} epsilon: {:.10})",
        actual,
        expected,
        actual - expected,
        FLOAT_EPSILON,
    )))
}

/// Fails when the condition is false; the message is the literal source text
/// of the condition.
#[macro_export]
macro_rules! atassert {
    ($cond:expr) => {
        if !($cond) {
            return Err($crate::asserts::Failure::here(stringify!($cond)));
        }
    };
}

/// Like [`atassert!`], with a `format!`-style failure message.
#[macro_export]
macro_rules! atassertf {
    ($cond:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if !($cond) {
            return Err($crate::asserts::Failure::here(format!($fmt $(, $arg)*)));
        }
    };
}
