// tests/exit_codes.rs
// =============================================================================
// Runs the built binary and checks its exit status.
//
// Every failure exits with 1, whether clap rejects the arguments or the
// repository argument is malformed. --help and --version exit with 0.
// None of these cases reach the network.
// =============================================================================

use std::process::{Command, Output};

fn ghtree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ghtree"))
        .args(args)
        .env_remove("GHTREE_LOG")
        .output()
        .expect("failed to run ghtree")
}

#[test]
fn test_missing_repository_exits_with_1() {
    let out = ghtree(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_bad_flag_value_exits_with_1() {
    let out = ghtree(&["o/r", "--timeout", "abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--timeout"));
}

#[test]
fn test_unknown_flag_exits_with_1() {
    let out = ghtree(&["o/r", "--no-such-flag"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_malformed_repository_exits_with_1() {
    let out = ghtree(&["a/b/c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: invalid input"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_help_and_version_exit_with_0() {
    let help = ghtree(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&help.stdout).contains("owner/repo"));

    let version = ghtree(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&version.stdout).contains(env!("CARGO_PKG_VERSION")));
}
