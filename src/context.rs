//! Per-suite run state: counters, verbosity, sink, and color policy.

use crate::output::SharedSink;

/// Capacity applied to formatted failure messages. Messages longer than this
/// are truncated on a char boundary; truncation is accepted, not an error.
pub const AMSG_MAX_LEN: usize = 512;

// ANSI color constants, applied only when `use_colors` is set.
const RESET: &str = "\x1b[0m";
pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const GREEN: &str = "\x1b[32m";

/// Run state for one test suite. Created once at process start, mutated only
/// by the runner, discarded at process end. Invariant: `tests_failed <= tests_run`.
pub struct TestContext {
    pub sink: SharedSink,
    pub tests_run: usize,
    pub tests_failed: usize,
    pub verbosity: u8,
    pub use_colors: bool,
}

impl TestContext {
    /// Context wired to unbuffered stdout, verbosity 0, colors auto-detected.
    pub fn new() -> Self {
        Self {
            sink: SharedSink::stdout(),
            tests_run: 0,
            tests_failed: 0,
            verbosity: 0,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }

    /// Context writing to an explicit sink. Colors are disabled so captured
    /// output stays byte-stable.
    pub fn with_sink(sink: SharedSink) -> Self {
        Self {
            sink,
            tests_run: 0,
            tests_failed: 0,
            verbosity: 0,
            use_colors: false,
        }
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_run - self.tests_failed
    }

    pub(crate) fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Cap a formatted message at [`AMSG_MAX_LEN`] bytes without splitting a
/// character.
pub(crate) fn truncate_message(mut message: String) -> String {
    if message.len() <= AMSG_MAX_LEN {
        return message;
    }
    let mut cut = AMSG_MAX_LEN;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    message.truncate(cut);
    message
}
