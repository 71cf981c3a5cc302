//! Exit status of the `mouse-event-publisher` binary.

#![cfg(feature = "evdev")]

use mouse_reader::{encode, EV_KEY};
use std::path::Path;
use std::process::{Command, Output};

fn publisher(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mouse-event-publisher"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("spawn mouse-event-publisher")
}

fn path_arg(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn missing_node_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let node = tmp.path().join("event9");

    let out = publisher(&[path_arg(&node)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_search_dir_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();

    let out = publisher(&["--search-dir", path_arg(tmp.path())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn list_exits_with_success() {
    let tmp = tempfile::tempdir().unwrap();

    let out = publisher(&["--list", "--search-dir", path_arg(tmp.path())]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn truncated_record_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let node = tmp.path().join("event3");
    std::fs::write(&node, [0u8]).unwrap();

    let out = publisher(&[path_arg(&node)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn record_before_end_of_file_is_published_then_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let node = tmp.path().join("event5");
    std::fs::write(&node, encode(EV_KEY, 0x110, 1)).unwrap();

    let out = publisher(&[path_arg(&node)]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "{\"key_code\":272,\"key_name\":\"BTN_LEFT\",\"key_pressed\":true}\n"
    );
}

#[test]
fn unreadable_config_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("absent.toml");

    let out = publisher(&["--config", path_arg(&config), "--list"]);
    assert_eq!(out.status.code(), Some(1));
}
