//! Integration tests for the pavolume CLI surface
//!
//! These exercise the compiled binary's argument handling and exit codes.
//! Everything here fails before the audio-server connection is attempted,
//! so no live server is required.

use std::process::{Command, Output};

fn pavolume(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pavolume"))
        .args(args)
        .env_remove("PAVOLUME_FORMAT")
        .output()
        .expect("should run the pavolume binary")
}

#[test]
fn help_exits_zero_and_prints_usage() {
    let out = pavolume(&["-h"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--volume"));
    assert!(stdout.contains("--mute"));
    assert!(stdout.contains("--monitor"));
    assert!(stdout.contains("--list"));
}

#[test]
fn version_exits_zero() {
    let out = pavolume(&["--version"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn malformed_volume_exits_one() {
    let out = pavolume(&["-v", "loud"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("loud"));
}

#[test]
fn malformed_mute_action_exits_one() {
    let out = pavolume(&["-m", "blah"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}

#[test]
fn missing_volume_value_exits_one() {
    let out = pavolume(&["-v"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unknown_flag_exits_one() {
    let out = pavolume(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn list_conflicts_exit_one() {
    for args in [
        &["-l", "-v", "5"][..],
        &["-l", "-m", "on"][..],
        &["-l", "-s"][..],
    ] {
        let out = pavolume(args);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
    }
}
