//! Test registration, execution, and reporting.
//!
//! A [`TestSuite`] owns the run state for one test executable: the shared
//! output sink, the optional per-test setup hook, and the registered units.
//! Units run strictly sequentially in registration order, each bracketed by
//! one setup/shutdown cycle; there is no isolation, no timeout, and no
//! parallelism. The suite doubles as the reporter: it prints the header,
//! one line (or character) per test according to verbosity, and the footer,
//! then derives the process exit code.

use crate::asserts::TestOutcome;
use crate::cli::{self, UsageError};
use crate::context::{TestContext, GREEN, RED};
use crate::logging;
use crate::output::SharedSink;

const RULE: &str = "-------------------------------------";

/// Teardown hook returned by setup, invoked exactly once after the unit it
/// was created for, pass or fail.
pub type Shutdown = Box<dyn FnOnce()>;

type SetupFn = Box<dyn FnMut() -> Option<Shutdown>>;
type TestFn = Box<dyn FnMut() -> TestOutcome>;

/// A named, zero-argument check. The name is what reports show; it is
/// captured automatically by the [`atest!`](crate::atest) macro.
pub struct TestUnit {
    name: String,
    func: TestFn,
}

impl TestUnit {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Aggregate counts of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub tests_run: usize,
    pub tests_failed: usize,
}

impl RunReport {
    pub fn tests_passed(&self) -> usize {
        self.tests_run - self.tests_failed
    }

    /// `0` iff at least one test ran and none failed. A run with zero tests
    /// is a failure condition, not a vacuous pass.
    pub fn exit_code(&self) -> i32 {
        if self.tests_run == 0 || self.tests_failed > 0 {
            1
        } else {
            0
        }
    }
}

/// One test executable's worth of tests plus its run state.
pub struct TestSuite {
    context: TestContext,
    file: &'static str,
    setup: Option<SetupFn>,
    units: Vec<TestUnit>,
}

impl TestSuite {
    /// Suite reporting to unbuffered stdout. `file` identifies the suite in
    /// the header and the quiet summary line; pass `file!()`.
    pub fn new(file: &'static str) -> Self {
        Self {
            context: TestContext::new(),
            file,
            setup: None,
            units: Vec::new(),
        }
    }

    /// Suite reporting to an explicit sink, e.g. an
    /// [`OutputBuffer`](crate::output::OutputBuffer) for capture. Must be
    /// chosen before [`run`](Self::run); the header is the first thing
    /// written.
    pub fn with_sink(file: &'static str, sink: SharedSink) -> Self {
        Self {
            context: TestContext::with_sink(sink),
            file,
            setup: None,
            units: Vec::new(),
        }
    }

    pub fn context(&self) -> &TestContext {
        &self.context
    }

    pub fn set_verbosity(&mut self, verbosity: u8) {
        self.context.verbosity = verbosity;
    }

    /// Install the per-test setup hook. At most one per suite; installing
    /// again replaces the previous hook.
    pub fn set_setup(&mut self, setup: impl FnMut() -> Option<Shutdown> + 'static) {
        self.setup = Some(Box::new(setup));
    }

    /// Register a unit under an explicit name. Prefer the
    /// [`atest!`](crate::atest) macro, which names the unit after the
    /// function itself.
    pub fn register(&mut self, name: impl Into<String>, func: impl FnMut() -> TestOutcome + 'static) {
        self.units.push(TestUnit {
            name: name.into(),
            func: Box::new(func),
        });
    }

    /// Apply the CLI verbosity contract to this suite. On a usage error the
    /// message is written to the sink and the error returned; the caller must
    /// exit with status 1 without running any tests.
    pub fn configure_from_args<I>(&mut self, args: I) -> Result<(), UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        match cli::parse_verbosity(args) {
            Ok(Some(verbosity)) => {
                self.context.verbosity = verbosity;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                self.context.sink.emit(&format!("{}\n", err));
                Err(err)
            }
        }
    }

    /// Run every registered unit in registration order and print the report.
    pub fn run(&mut self) -> RunReport {
        logging::set_log_target(self.context.verbosity, self.context.sink.clone());
        self.print_header();
        let mut units = std::mem::take(&mut self.units);
        for unit in &mut units {
            self.run_unit(unit);
        }
        self.print_footer();
        RunReport {
            tests_run: self.context.tests_run,
            tests_failed: self.context.tests_failed,
        }
    }

    /// Exit code derived from the counters so far; see [`RunReport::exit_code`].
    pub fn exit_code(&self) -> i32 {
        RunReport {
            tests_run: self.context.tests_run,
            tests_failed: self.context.tests_failed,
        }
        .exit_code()
    }

    fn run_unit(&mut self, unit: &mut TestUnit) {
        let shutdown = self.setup.as_mut().and_then(|setup| setup());
        let outcome = (unit.func)();
        self.context.tests_run += 1;
        match outcome {
            Ok(()) => {
                if self.context.verbosity == 1 {
                    self.context.sink.emit(".");
                } else if self.context.verbosity >= 2 {
                    let tag = self.context.colorize("PASS", GREEN);
                    self.context.sink.emit(&format!("[{}] {}\n", tag, unit.name));
                }
            }
            Err(failure) => {
                self.context.tests_failed += 1;
                if self.context.verbosity == 1 {
                    self.context.sink.emit("F");
                } else if self.context.verbosity >= 2 {
                    let tag = self.context.colorize("FAIL", RED);
                    self.context
                        .sink
                        .emit(&format!("[{}] {} ({})\n", tag, failure, unit.name));
                }
            }
        }
        // Shutdown always runs once setup handed one back, pass or fail.
        if let Some(shutdown) = shutdown {
            shutdown();
        }
    }

    fn print_header(&self) {
        if self.context.verbosity == 0 {
            return;
        }
        self.context
            .sink
            .emit(&format!("{}\nRunning Tests: {}\n{}\n\n", RULE, self.file, RULE));
    }

    fn print_footer(&self) {
        let ctx = &self.context;
        if ctx.verbosity > 0 {
            ctx.sink.emit(&format!(
                "\n{}\nTotal: {} Passed: {} Failed: {}\n{}\n",
                RULE,
                ctx.tests_run,
                ctx.tests_passed(),
                ctx.tests_failed,
                RULE,
            ));
        } else {
            let tag = if ctx.tests_failed == 0 {
                ctx.colorize("PASS", GREEN)
            } else {
                ctx.colorize("FAIL", RED)
            };
            ctx.sink.emit(&format!(
                "[{}] {:<40} [{:2}/{:2}]\n",
                tag,
                self.file,
                ctx.tests_passed(),
                ctx.tests_run,
            ));
        }
    }
}

/// Register a test function under its own name, for use inside the
/// generated-registration marker region of a test binary:
///
/// ```ignore
/// // <ATEST_RUNS>
/// atest!(suite, assert_add);
/// // ^^^^ this block is automatically generated by 'atest' utility
/// ```
#[macro_export]
macro_rules! atest {
    ($suite:expr, $func:path) => {
        $suite.register(stringify!($func), $func)
    };
}
