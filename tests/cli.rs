use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;
use expect_test::expect;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut cmd = cargo_bin_cmd!();
    cmd.args(args)
        .write_stdin(stdin)
        .output()
        .expect("failed to execute limits")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_arguments() {
    let output = run(&["x^2", "x", "0"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    expect![[r#"
        decimal: 0
        fraction: 0
    "#]]
    .assert_eq(&stdout(&output));
    expect![[r#"
        lim f(x)/g(x) as x -> 0:
    "#]]
    .assert_eq(&stderr(&output));
}

#[test]
fn test_fraction_output() {
    let output = run(&["2*x^2 - 5*x + 3", "3*x - 3", "1"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = stdout(&output);
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("decimal: -0.333333"));
    assert_eq!(lines.next(), Some("fraction: -1/3"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_stdin_prompts() {
    let output = run(&[], "x^2 - 1\nx - 1\n1\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).ends_with("fraction: 2\n"));
    expect![[r#"
        Enter f(x), using any letter for the variable:
        Enter g(x), using any letter for the variable:
        Enter the value x approaches ("inf" for infinity):
        lim f(x)/g(x) as x -> 1:
    "#]]
    .assert_eq(&stderr(&output));
}

#[test]
fn test_partial_arguments() {
    let output = run(&["x^2"], "x\n0\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "decimal: 0\nfraction: 0\n");
    assert!(!stderr(&output).contains("Enter f(x)"));
}

#[test]
fn test_not_indeterminate() {
    let output = run(&["2*x^2 - 6*x^3 - 4", "3*x - 9", "0"], "");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    expect![[r#"
        error: limit is not an indeterminate form 0/0 or inf/inf (f = -4, g = -9), L'Hopital's rule does not apply
    "#]]
    .assert_eq(&stderr(&output));
}

#[test]
fn test_unexpected_character() {
    let output = run(&["x % 2", "x", "0"], "");
    assert!(!output.status.success());
    expect![[r#"
        error: unexpected character '%' at offset 2
    "#]]
    .assert_eq(&stderr(&output));
}

#[test]
fn test_missing_input() {
    let output = run(&["x"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).ends_with("error: missing input: g(x)\n"));
}

#[test]
fn test_infinity_probe() {
    let output = run(&["x", "x", "inf"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("non-finite value NaN"));

    let output = run(&["3*x + 1", "x", "-inf", "--infinity-probe", "1000"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = stdout(&output);
    let value: f64 = stdout
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("decimal: "))
        .unwrap()
        .parse()
        .unwrap();
    assert!((value - 3.0).abs() < 1e-3);
}

#[test]
fn test_whitespace_inside_literals() {
    let output = run(&["x y ^ 2 - 1 6", "x - 4", "4"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).ends_with("fraction: 8\n"));
}

#[test]
fn test_rejects_unusable_settings() {
    let settings: [&[&str]; 6] = [
        &["--step", "0"],
        &["--step=-1e-6"],
        &["--tolerance", "NaN"],
        &["--max-denominator", "1"],
        &["--max-denominator", "1000000000000"],
        &["--infinity-probe", "inf"],
    ];
    for setting in settings {
        let args = [&["x", "x", "0"][..], setting].concat();
        let output = run(&args, "");
        assert!(!output.status.success(), "{args:?} should be rejected");
        assert_eq!(stdout(&output), "", "{args:?}");
        assert!(stderr(&output).contains("invalid value"), "{args:?}");
    }
}
