// tests/cli_tests.rs

use std::fs;
use std::process::Command;

#[test]
fn unusable_log_dir_exits_with_error() {
    // A regular file where the log directory should go.
    let blocker = std::env::temp_dir().join(format!("bikini-quiz-{}", uuid::Uuid::new_v4()));
    fs::write(&blocker, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bikini-quiz"))
        .arg("--log-dir")
        .arg(blocker.join("logs"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open log directory"));
    assert!(!stderr.contains("panicked"));

    fs::remove_file(blocker).unwrap();
}
