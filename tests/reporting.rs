// Reporter output shapes across verbosity levels, plus log-line gating.

use atest::{atlog, Failure, SharedSink, TestOutcome, TestSuite};

const RULE: &str = "-------------------------------------";

fn two_pass_one_fail(sink: SharedSink, file: &'static str, verbosity: u8) -> TestSuite {
    let mut suite = TestSuite::with_sink(file, sink);
    suite.set_verbosity(verbosity);
    suite.register("t_a", || Ok(()));
    suite.register("t_b", || Err(Failure::here("broken")));
    suite.register("t_c", || Ok(()));
    suite
}

#[test]
fn verbosity_zero_prints_exactly_one_summary_line() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = two_pass_one_fail(sink, "summary.rs", 0);
    suite.run();

    let output = handle.contents();
    let expected = format!("[{}] {:<40} [{:2}/{:2}]\n", "FAIL", "summary.rs", 2, 3);
    assert_eq!(output, expected);
}

#[test]
fn verbosity_zero_tags_clean_run_as_pass() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("clean.rs", sink);
    suite.register("t1", || Ok(()));
    suite.run();
    assert!(handle.contents().starts_with("[PASS] clean.rs"));
}

#[test]
fn verbosity_one_emits_dots_and_fs_without_separators() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = two_pass_one_fail(sink, "dots.rs", 1);
    suite.run();

    let output = handle.contents();
    assert!(output.contains(".F."));
    assert!(!output.contains("[PASS]"));
    assert!(!output.contains("[FAIL]"));
    assert!(output.contains("Running Tests: dots.rs"));
    assert!(output.contains("Total: 3 Passed: 2 Failed: 1"));
}

#[test]
fn verbosity_two_emits_full_lines() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = two_pass_one_fail(sink, "full.rs", 2);
    suite.run();

    let output = handle.contents();
    assert!(output.contains("[PASS] t_a\n"));
    assert!(output.contains("broken (t_b)\n"));
    assert!(output.contains("[PASS] t_c\n"));
}

#[test]
fn header_and_footer_are_ruled_blocks() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("ruled.rs", sink);
    suite.set_verbosity(2);
    suite.register("t1", || Ok(()));
    suite.run();

    let output = handle.contents();
    assert!(output.starts_with(&format!("{}\nRunning Tests: ruled.rs\n{}\n\n", RULE, RULE)));
    assert!(output.ends_with(&format!(
        "\n{}\nTotal: 1 Passed: 1 Failed: 0\n{}\n",
        RULE, RULE
    )));
}

#[test]
fn quiet_flag_forces_summary_only_output() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("quiet.rs", sink);
    suite.set_verbosity(3);
    suite
        .configure_from_args(vec!["qvvv".to_string()])
        .unwrap();
    suite.register("t1", || Ok(()));
    suite.run();

    let output = handle.contents();
    assert!(!output.contains("Running Tests"));
    assert!(!output.contains("[PASS] t1"));
    assert_eq!(output.lines().count(), 1);
}

fn unit_that_logs() -> TestOutcome {
    atlog!("intermediate value: {}", 41 + 1);
    Ok(())
}

#[test]
fn log_lines_appear_at_verbosity_three_only() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("logs2.rs", sink);
    suite.set_verbosity(2);
    suite.register("t_log", unit_that_logs);
    suite.run();
    assert!(!handle.contents().contains("[ LOG]"));

    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("logs3.rs", sink);
    suite.set_verbosity(3);
    suite.register("t_log", unit_that_logs);
    suite.run();

    let output = handle.contents();
    assert!(output.contains("[ LOG] ("));
    assert!(output.contains("intermediate value: 42"));
    // Level 3 keeps the full per-test lines too.
    assert!(output.contains("[PASS] t_log"));
}

#[test]
fn log_line_precedes_its_units_result_line() {
    let (sink, handle) = SharedSink::buffer();
    let mut suite = TestSuite::with_sink("logorder.rs", sink);
    suite.set_verbosity(3);
    suite.register("t_log", unit_that_logs);
    suite.run();

    let output = handle.contents();
    assert!(output.find("[ LOG]").unwrap() < output.find("[PASS] t_log").unwrap());
}
