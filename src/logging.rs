//! Run-scoped logging for test code.
//!
//! `atlog!` lets test functions and the library under test emit diagnostic
//! lines through the same sink as the run report. Lines carry a
//! `[ LOG] (file:line): ` prefix and are printed only at verbosity 3 and
//! above. The runner wires the target when a run starts; outside a run,
//! `atlog!` is a no-op.
//!
//! The target is thread-local: the execution model is single-threaded and
//! this keeps concurrent suites in one process (test binaries under libtest)
//! from writing into each other's sinks.

use std::cell::RefCell;

use crate::output::SharedSink;

struct LogTarget {
    verbosity: u8,
    sink: SharedSink,
}

thread_local! {
    static LOG_TARGET: RefCell<Option<LogTarget>> = RefCell::new(None);
}

pub(crate) fn set_log_target(verbosity: u8, sink: SharedSink) {
    LOG_TARGET.with(|target| {
        *target.borrow_mut() = Some(LogTarget { verbosity, sink });
    });
}

#[doc(hidden)]
pub fn log_message(file: &str, line: u32, text: &str) {
    LOG_TARGET.with(|target| {
        if let Some(target) = target.borrow().as_ref() {
            if target.verbosity >= 3 {
                target
                    .sink
                    .emit(&format!("[ LOG] ({}:{}): {}\n", file, line, text));
            }
        }
    });
}

/// Log a formatted line through the current run's sink, suppressed below
/// verbosity 3.
#[macro_export]
macro_rules! atlog {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::logging::log_message(file!(), line!(), &format!($fmt $(, $arg)*))
    };
}
