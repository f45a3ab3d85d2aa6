//! End-to-end startup behavior of the compiled binary.

use std::process::{Command, Output};

/// Run the binary with exactly the given variables set, from an empty
/// working directory so no stray `.env` file is picked up.
fn run_binary(vars: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stream-locator"));
    cmd.current_dir(dir.path());
    for key in ["NODE_ENV", "PORT", "LOG_LEVEL"] {
        cmd.env_remove(key);
    }
    for (key, value) in vars {
        cmd.env(key, value);
    }

    cmd.output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stderr.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_startup_with_defaults() {
    let output = run_binary(&[]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("[INFO]"));
    assert!(lines[0].contains("Starting stream locator"));
    assert!(lines[1].contains("[INFO]"));
    assert!(lines[1].contains("Environment: development"));
    assert!(lines[2].contains("[INFO]"));
    assert!(lines[2].contains("Port: 3000"));
    assert!(lines[3].contains("[WARN]"));
    assert!(lines[3].contains("not implemented"));
}

#[test]
fn test_startup_with_overrides() {
    let output = run_binary(&[("NODE_ENV", "production"), ("PORT", "8080")]);

    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines[1].contains("Environment: production"));
    assert!(lines[2].contains("Port: 8080"));
}

#[test]
fn test_startup_with_debug_level() {
    let output = run_binary(&[("LOG_LEVEL", "debug")]);

    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains("[DEBUG]"));
    assert!(lines[3].contains("Resolved configuration"));
    assert!(lines[4].contains("[WARN]"));
}

#[test]
fn test_startup_with_quiet_levels_suppresses_debug_only() {
    // error threshold still emits all three info lines and the warn line
    let output = run_binary(&[("LOG_LEVEL", "error")]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 4);
}

#[test]
fn test_invalid_port_exits_with_code_1() {
    let output = run_binary(&[("PORT", "not-a-port")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[ERROR]"));
    assert!(lines[0].contains("Failed to start application"));
    assert!(lines[0].contains("invalid PORT value"));
}

#[test]
fn test_invalid_log_level_exits_with_code_1() {
    let output = run_binary(&[("LOG_LEVEL", "verbose")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[ERROR]"));
    assert!(lines[0].contains("invalid LOG_LEVEL value"));
}
