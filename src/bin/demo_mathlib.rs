// Self-contained demo test executable for the atest harness.
// Usage: demo_mathlib [vvv|q]

use std::env;
use std::process;

use atest::{atassert, atassert_eqf, atassert_eqi, atassert_eqs, atassertf, atest, atlog};
use atest::{TestOutcome, TestSuite};

// Demo library under test.
fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn mul(a: i64, b: i64) -> i64 {
    a * b
}

fn pow2(x: i64) -> i64 {
    x * x
}

fn assert_add() -> TestOutcome {
    atassertf!(add(2, 2) == 4, "actual: {} != 4", add(2, 2));
    Ok(())
}

fn assert_mul() -> TestOutcome {
    atassert!(mul(2, 2) == 4);
    atassert_eqi(pow2(3), 9)?;
    Ok(())
}

fn assert_float_and_str() -> TestOutcome {
    atlog!("comparing {} against 0.3", 0.1 + 0.2);
    atassert_eqf(0.1 + 0.2, 0.3)?;
    atassert_eqs(Some("abc"), Some("abc"))?;
    Ok(())
}

fn main() {
    let mut suite = TestSuite::new(file!());
    suite.set_verbosity(3);
    suite.set_setup(|| None);

    if suite.configure_from_args(env::args().skip(1)).is_err() {
        process::exit(1);
    }

    // <ATEST_RUNS>
    atest!(suite, assert_add);
    atest!(suite, assert_mul);
    atest!(suite, assert_float_and_str);
    // ^^^^ this block is automatically generated by 'atest' utility

    process::exit(suite.run().exit_code());
}
