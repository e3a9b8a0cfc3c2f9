//! Runs the `todo` binary against a temporary working directory

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn run_todo(dir: &Path, args: &[&str], stdin: &str) -> (bool, String) {
    let binary = env!("CARGO_BIN_EXE_todo");

    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("TASKLIST_FILE")
        .env_remove("TASKLIST_CONFIG")
        .env("XDG_CONFIG_HOME", dir.join("config-home"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start todo");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for todo");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("stdout should be UTF-8"),
    )
}

#[test]
fn test_session_persists_between_runs() {
    let temp = tempfile::TempDir::new().unwrap();

    let (ok, stdout) = run_todo(temp.path(), &[], "add Buy milk\nadd Walk dog\ndone 1\nexit\n");
    assert!(ok);
    assert!(stdout.starts_with("Welcome to ToDo CLI. Type 'help' for commands.\n"));
    assert!(stdout.ends_with("Goodbye!\n"));
    assert_eq!(
        fs::read_to_string(temp.path().join("tasks.txt")).unwrap(),
        "1|Buy milk\n0|Walk dog\n"
    );

    let (ok, stdout) = run_todo(temp.path(), &[], "list\n");
    assert!(ok);
    assert!(stdout.contains("> 1. [x] Buy milk\n2. [ ] Walk dog\n"));
}

#[test]
fn test_file_flag_overrides_default() {
    let temp = tempfile::TempDir::new().unwrap();

    let (ok, _) = run_todo(temp.path(), &["--file", "custom.txt"], "add elsewhere\nexit\n");
    assert!(ok);
    assert!(!temp.path().join("tasks.txt").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("custom.txt")).unwrap(),
        "0|elsewhere\n"
    );
}

#[test]
fn test_save_failure_still_exits_cleanly() {
    let temp = tempfile::TempDir::new().unwrap();

    let (ok, stdout) = run_todo(
        temp.path(),
        &["--file", "missing-dir/tasks.txt"],
        "add lost\nexit\n",
    );
    assert!(ok);
    assert!(stdout.contains("Failed to save tasks:"));
    assert!(stdout.ends_with("Goodbye!\n"));
}

#[test]
fn test_completion_does_not_touch_task_file() {
    let temp = tempfile::TempDir::new().unwrap();

    let (ok, stdout) = run_todo(temp.path(), &["completion", "bash"], "");
    assert!(ok);
    assert!(stdout.contains("todo"));
    assert!(!temp.path().join("tasks.txt").exists());
}
