//! atest: a minimalist, self-contained unit-testing harness.
//!
//! Each test file is an ordinary binary: declare test functions returning
//! [`TestOutcome`], register them on a [`TestSuite`], and exit with
//! [`RunReport::exit_code`]. No external runner process is involved.
//!
//! ```no_run
//! use atest::{atassert, atest, TestOutcome, TestSuite};
//!
//! fn add(a: i64, b: i64) -> i64 {
//!     a + b
//! }
//!
//! fn assert_add() -> TestOutcome {
//!     atassert!(add(2, 2) == 4);
//!     Ok(())
//! }
//!
//! fn main() {
//!     let mut suite = TestSuite::new(file!());
//!     suite.set_verbosity(3);
//!     if suite.configure_from_args(std::env::args().skip(1)).is_err() {
//!         std::process::exit(1);
//!     }
//!     atest!(suite, assert_add);
//!     std::process::exit(suite.run().exit_code());
//! }
//! ```

pub use crate::asserts::{atassert_eqf, atassert_eqi, atassert_eqs, Failure, TestOutcome, FLOAT_EPSILON};
pub use crate::cli::{parse_verbosity, UsageError};
pub use crate::context::{TestContext, AMSG_MAX_LEN};
pub use crate::output::{BufferHandle, OutputBuffer, OutputSink, SharedSink, StdoutSink};
pub use crate::runner::{RunReport, Shutdown, TestSuite, TestUnit};

pub mod asserts;
pub mod cli;
pub mod context;
pub mod logging;
pub mod output;
pub mod runner;
