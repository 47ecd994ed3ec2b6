//! Integration tests for numviz CLI

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the numviz binary
fn numviz_bin() -> PathBuf {
    let mut path = env::current_exe().expect("Failed to get current executable path");
    path.pop(); // Remove test executable name
    if path.ends_with("deps") {
        path.pop(); // Remove deps directory
    }
    path.push("numviz");
    path
}

/// Create an empty temporary directory
fn temp_dir(tag: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("numviz_{}_{}", tag, rand_string()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

/// Generate a random string for unique filenames
fn rand_string() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("Time went backwards");
    format!("{}{}", duration.as_secs(), duration.subsec_nanos())
}

/// Run numviz with an empty home directory so no user config leaks in
fn numviz(args: &[&str]) -> Output {
    let home = temp_dir("home");
    let output = Command::new(numviz_bin())
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .args(["--no-color"])
        .args(args)
        .output()
        .expect("Failed to execute numviz");
    let _ = fs::remove_dir_all(&home);
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_version() {
    let output = Command::new(numviz_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute numviz");

    assert!(output.status.success());
    assert!(stdout(&output).contains("numviz"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(numviz_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute numviz");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Usage"));
    assert!(text.contains("solve"));
    assert!(text.contains("precision"));
}

#[test]
fn test_solve_real_roots() {
    let output = numviz(&["solve", "--degree", "2", "1", "0", "-1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "x_{1} = 1 \\\\ x_{2} = -1");
}

#[test]
fn test_solve_complex_roots() {
    let output = numviz(&["solve", "--degree", "2", "1", "0", "1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "x_{1} = i \\\\ x_{2} = -i");
}

#[test]
fn test_solve_fraction_root() {
    let output = numviz(&["solve", "--degree", "1", "2", "-1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "x_{1} = \\frac{1}{2}");
}

#[test]
fn test_solve_rejects_non_numeric() {
    let output = numviz(&["solve", "--degree", "1", "abc", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'abc' is not a number"));
}

#[test]
fn test_solve_json() {
    let output = numviz(&["--format", "json", "solve", "--degree", "3", "1", "-6", "11", "-6"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Output is not valid JSON");
    assert_eq!(report["degree"], 3);
    assert_eq!(report["roots"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_precision_sqrt() {
    let output = numviz(&["precision", "sqrt", "--operand", "2", "--digits", "20"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "1.41421356237309504880");
    assert!(stderr(&output).contains("Computing"));
}

#[test]
fn test_precision_rejects_digits() {
    let output = numviz(&["precision", "pi", "--digits", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("digits must be between 10 and 2000"));
    assert!(!stderr(&output).contains("Computing"));
}

#[test]
fn test_precision_rejects_operand() {
    let output = numviz(&["precision", "sqrt", "--operand", "20000", "--digits", "20"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("operand"));
}

#[test]
fn test_precision_unknown_task() {
    let output = numviz(&["precision", "tau"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown task 'tau'"));
}

#[test]
fn test_precision_export() {
    let dir = temp_dir("export");
    let dir_arg = dir.to_string_lossy().to_string();
    let output = numviz(&["-q", "precision", "e", "--digits", "10", "--export", &dir_arg]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "2.7182818284");

    let exported = fs::read_to_string(dir.join("high_precision_result.txt"))
        .expect("Export file missing");
    assert_eq!(exported, "2.7182818284");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_sequence_prediction() {
    let output = numviz(&["sequence", "1", "4", "9", "16"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("a_n = "));
    assert!(text.contains("Next: 25, 36, 49, 64, 81"));
}

#[test]
fn test_sequence_negative_values() {
    let output = numviz(&["sequence", "-1", "-2", "-3"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Next: -4, -5, -6, -7, -8"));
}

#[test]
fn test_sequence_beyond_i64() {
    let output = numviz(&["sequence", "1e19", "2e19"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Next: 30000000000000000000, 40000000000000000000"));
}

#[test]
fn test_solve_large_fraction_root() {
    let output = numviz(&["solve", "--degree", "1", "1", "-1000000000000000.5"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "x_{1} = \\frac{2000000000000001}{2}");
}

#[test]
fn test_sequence_too_long() {
    let output = numviz(&["sequence", "1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_calc() {
    let output = numviz(&["calc", "12+3*2="]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "30");

    let output = numviz(&["calc", "8/0="]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Error");

    let output = numviz(&["calc", "2^3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown calculator key '^'"));
}

#[test]
fn test_plot_derivative() {
    let output = numviz(&[
        "--samples", "5", "plot", "derivative", "square", "--at", "1", "--start", "-2", "--end",
        "2",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Derivative of square"));
    assert!(text.contains("\\text{tangent} (5 points)"));
    assert!(text.contains("\\frac{d}{dx} x^2 = 2x, \\quad f'(1) = 2"));
}

#[test]
fn test_plot_limit_and_integral() {
    let output = numviz(&["plot", "limit", "hole", "--steps", "3"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Approach"));

    let output = numviz(&[
        "--format", "yaml", "plot", "integral", "square", "--from", "0", "--to", "3", "--rule",
        "left",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("integral:"));
    assert!(text.contains("exact: 9"));
}

#[test]
fn test_plot_unknown_function() {
    let output = numviz(&["plot", "taylor", "tan"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown function 'tan'"));
}

#[test]
fn test_config_file_sets_format() {
    let home = temp_dir("config");
    fs::write(home.join(".numvizrc"), "format: json\ndigits: 12\n").expect("write config");

    let output = Command::new(numviz_bin())
        .env("HOME", &home)
        .args(["precision", "pi"])
        .output()
        .expect("Failed to execute numviz");
    assert!(output.status.success(), "{}", stderr(&output));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Output is not valid JSON");
    assert_eq!(result["task"], "pi");
    assert_eq!(result["value"], "3.141592653589");
    let _ = fs::remove_dir_all(&home);
}
