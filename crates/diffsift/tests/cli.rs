use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const CRLF_ONLY: &str = "diff --git a/a.txt b/a.txt
--- a/a.txt
+++ b/a.txt
@@ -1,2 +1,2 @@
-one\r
-two\r
+one
+two
";

const TWO_FILES: &str = "diff --git a/a.txt b/a.txt
--- a/a.txt
+++ b/a.txt
@@ -1 +1 @@
-one\r
+one
diff --git a/b.txt b/b.txt
--- a/b.txt
+++ b/b.txt
@@ -1 +1 @@
-before
+after
";

/// Run the binary inside `dir` with an isolated config home
fn run(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_diffsift"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config-home"))
        .env_remove("DIFFSIFT_CONFIG")
        .env_remove("DIFFSIFT_LOG_LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn diffsift");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_clean_line_ending_only_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["clean"], CRLF_ONLY);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_clean_keeps_real_changes() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["clean"], TWO_FILES);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("diff --git a/a.txt b/a.txt"));
    assert!(!text.contains("-one"));
    assert!(text.contains("-before\n+after"));
}

#[test]
fn test_clean_per_file_drops_noise_file() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["clean", "--per-file"], TWO_FILES);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("a.txt"));
    assert!(text.starts_with("diff --git a/b.txt b/b.txt"));
}

#[test]
fn test_clean_per_file_from_repo_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".diffsift.toml"), "[clean]\nper_file = true\n").unwrap();
    let output = run(dir.path(), &["clean"], TWO_FILES);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("a.txt"));
}

#[test]
fn test_clean_json_report() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["clean", "--json"], CRLF_ONLY);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("\"outcome\": \"line_ending_only\""));
}

#[test]
fn test_clean_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("change.diff");
    fs::write(&path, TWO_FILES).unwrap();
    let output = run(dir.path(), &["clean", "--input", path.to_str().unwrap()], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("+after"));
}

#[test]
fn test_check_exit_codes() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["check"], CRLF_ONLY);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "line-ending-only");

    let output = run(dir.path(), &["check"], TWO_FILES);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "has-changes");
}

#[test]
fn test_normalize() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["normalize"], "a\r\nb\rc\nd");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a\nb\nc\nd");
}

#[test]
fn test_compare() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("original.txt");
    let modified = dir.path().join("modified.txt");
    let diff = "@@ -1 +1 @@\n-x\r\n+x\n";

    fs::write(&original, "x\r\n").unwrap();
    fs::write(&modified, "x\n").unwrap();
    let args = [
        "compare",
        "--original",
        original.to_str().unwrap(),
        "--modified",
        modified.to_str().unwrap(),
    ];
    let output = run(dir.path(), &args, diff);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    fs::write(&modified, "y\n").unwrap();
    let output = run(dir.path(), &args, diff);
    assert!(output.status.success());
    assert_eq!(stdout(&output), diff);
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["check", "--input", "does-not-exist.diff"], "");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Failed to read input file"));
}

#[test]
fn test_invalid_log_level_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--log-level", "loud", "check"], "");
    assert_eq!(output.status.code(), Some(2));
}
