use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const MISSING_KEY: &str = "❌ API key not found. Please check your .env file.";

/// Runs the binary from an empty directory with a blank key set.
///
/// `.env` lookup also walks parent directories and never overrides a
/// variable that is already set, so the blank key keeps a stray file
/// from supplying a real one.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keyforge").unwrap();
    cmd.current_dir(dir.path())
        .env("GEMINI_API_KEY", "")
        .env("GEMINI_API_BASE", "")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn gen_defaults_to_twelve_lowercase() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(cmd(&dir).arg("gen"));
    let pwd = out.trim_end();

    assert_eq!(pwd.len(), 12);
    assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn gen_reports_success_on_stderr() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["gen", "--length", "8"])
        .assert()
        .success()
        .stderr(contains("Password generated!"));
}

#[test]
fn gen_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let a = stdout_of(cmd(&dir).args(["gen", "--seed", "42", "-l", "20", "-u", "-n", "-s"]));
    let b = stdout_of(cmd(&dir).args(["gen", "--seed", "42", "-l", "20", "-u", "-n", "-s"]));

    assert_eq!(a, b);
    assert_eq!(a.trim_end_matches('\n').chars().count(), 20);
}

#[test]
fn gen_respects_enabled_classes() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(cmd(&dir).args(["gen", "--length", "32", "--numbers"]));
    let pwd = out.trim_end();

    assert_eq!(pwd.len(), 32);
    assert!(pwd.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn gen_rejects_out_of_range_lengths() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["gen", "--length", "7"]).assert().failure();
    cmd(&dir).args(["gen", "--length", "33"]).assert().failure();
    cmd(&dir).args(["gen", "--length", "32"]).assert().success();
}

#[test]
fn ask_without_key_prints_fixed_message() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["ask", "what", "is", "entropy?"])
        .assert()
        .success()
        .stdout(contains(MISSING_KEY));
}

#[test]
fn ask_reads_key_from_dotenv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "GEMINI_API_KEY=test-key\nGEMINI_API_BASE=http://127.0.0.1:1\n",
    )
    .unwrap();

    cmd(&dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_API_BASE")
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout(contains("AI Error: ").and(contains(MISSING_KEY).not()));
}

#[test]
fn ask_blank_key_counts_as_missing() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .env("GEMINI_API_KEY", "   ")
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout(contains(MISSING_KEY));
}

#[test]
fn ask_network_failure_is_reported_as_text() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", "http://127.0.0.1:1")
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("AI Error: "));
}

#[test]
fn ask_blank_prompt_does_nothing() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["ask", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn ask_reads_prompt_from_stdin() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("ask")
        .write_stdin("why use long passwords?\n")
        .assert()
        .success()
        .stdout(contains("Ask anything: ").and(contains(MISSING_KEY)));
}

#[test]
fn about_lists_resources() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("about")
        .assert()
        .success()
        .stdout(contains("passwordmeter.com").and(contains("nist.gov")));
}
