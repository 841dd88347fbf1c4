//! Integration tests for sniplink CLI.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Isolated config directory for one test.
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Start from a config file with the given contents.
    fn with_config(content: &str) -> Self {
        let env = Self::new();
        fs::write(env.config_path(), content).expect("Failed to write config");
        env
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }

    /// Stand-in home directory, so the default config path stays inside the temp dir.
    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Run sniplink and return (stdout, stderr, exit_code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        self.run_with_stdin(args, "")
    }

    fn run_with_stdin(&self, args: &[&str], stdin_input: &str) -> (String, String, i32) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_sniplink"))
            .env("HOME", self.home())
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn sniplink");

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(stdin_input.as_bytes()).unwrap();
        }

        let output = child.wait_with_output().expect("Failed to read output");
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }

    /// Clean without touching the real clipboard.
    fn clean(&self, url: &str) -> (String, String, i32) {
        self.run(&["clean", "--no-copy", url])
    }
}

fn read_history(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("History file should exist");
    serde_json::from_str(&content).expect("History should be valid JSON")
}

#[test]
fn test_clean_removes_tracking_param() {
    let env = Env::new();
    let (stdout, stderr, exit_code) = env.clean("https://example.com?utm_source=test&page=1");

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "https://example.com/?page=1");
    assert!(stderr.contains("utm_source=test"), "stderr: {}", stderr);
}

#[test]
fn test_clean_creates_default_config() {
    let env = Env::new();
    env.clean("https://example.com/");

    assert!(env.config_path().exists());
}

#[test]
fn test_clean_url_without_params() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = env.clean("https://example.com");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://example.com/");
}

#[test]
fn test_clean_invalid_url_fails() {
    let env = Env::new();
    let (stdout, stderr, exit_code) = env.clean("not-a-url");

    assert_ne!(exit_code, 0, "Invalid URL should fail");
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("Failed to clean URL"),
        "stderr should explain the failure: {}",
        stderr
    );
}

#[test]
fn test_clean_json_output() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = env.run(&[
        "clean",
        "--no-copy",
        "--json",
        "https://example.com/?fbclid=abc&id=1",
    ]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["cleanUrl"], "https://example.com/?id=1");
    assert_eq!(json["removedParams"], serde_json::json!(["fbclid=abc"]));
    assert!(json["error"].is_null());
}

#[test]
fn test_clean_json_reports_error() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = env.run(&["clean", "--no-copy", "--json", "not-a-url"]);

    assert_ne!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["cleanUrl"], "not-a-url");
    assert!(json["error"].is_string());
}

#[test]
fn test_clean_reads_stdin() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = env.run_with_stdin(
        &["clean", "--no-copy"],
        "\n  https://example.com/page?gclid=x&q=rust  \n",
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://example.com/page?q=rust");
}

#[test]
fn test_clean_amazon_permalink() {
    let env = Env::new();
    let (stdout, stderr, exit_code) =
        env.clean("https://www.amazon.com/Some-Product/dp/B08N5WRWNW?th=1&psc=1");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://www.amazon.com/dp/B08N5WRWNW");
    assert!(stderr.contains("th=1"));
    assert!(stderr.contains("psc=1"));
}

#[test]
fn test_amazon_tag_is_appended() {
    let env = Env::new();
    let (_stdout, _stderr, exit_code) = env.run(&["amazon-tag", "set", "myassociate-22"]);
    assert_eq!(exit_code, 0);

    let (stdout, _stderr, _) =
        env.clean("https://www.amazon.com/Some-Product/dp/B08N5WRWNW?th=1&psc=1");
    assert_eq!(
        stdout.trim(),
        "https://www.amazon.com/dp/B08N5WRWNW?tag=myassociate-22"
    );

    let (stdout, _stderr, _) = env.run(&["amazon-tag", "show"]);
    assert_eq!(stdout.trim(), "myassociate-22");

    env.run(&["amazon-tag", "clear"]);
    let (stdout, _stderr, _) = env.run(&["amazon-tag", "show"]);
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_whitelist_keeps_url_verbatim() {
    let env = Env::new();
    let (_stdout, stderr, exit_code) = env.run(&["whitelist", "add", "example.com"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let (stdout, _stderr, exit_code) = env.clean("https://sub.example.com?utm_source=test");
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://sub.example.com?utm_source=test");

    let (stdout, _stderr, _) = env.run(&["whitelist", "list"]);
    assert_eq!(stdout.trim(), "example.com");
}

#[test]
fn test_custom_param_is_removed() {
    let env = Env::new();
    env.run(&["params", "add", "session"]);

    let (stdout, _stderr, _) = env.clean("https://example.com/?session=42&id=7");
    assert_eq!(stdout.trim(), "https://example.com/?id=7");

    let (stdout, _stderr, _) = env.run(&["params", "list"]);
    assert!(stdout.lines().any(|l| l == "session"));
    assert!(stdout.lines().any(|l| l == "utm_source"));
}

#[test]
fn test_disabled_default_is_kept() {
    let env = Env::new();
    let (_stdout, _stderr, exit_code) = env.run(&["params", "disable", "ref"]);
    assert_eq!(exit_code, 0);

    let (stdout, _stderr, _) = env.clean("https://example.com/?ref=home&utm_medium=x");
    assert_eq!(stdout.trim(), "https://example.com/?ref=home");

    let (stdout, _stderr, _) = env.run(&["params", "defaults"]);
    assert!(stdout.lines().any(|l| l == "ref (disabled)"));
}

#[test]
fn test_disable_unknown_default_fails() {
    let env = Env::new();
    let (_stdout, stderr, exit_code) = env.run(&["params", "disable", "page"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("not a default tracking parameter"));
}

#[test]
fn test_domain_rule_applies_to_matching_host() {
    let env = Env::new();
    let (_stdout, stderr, exit_code) = env.run(&[
        "domain-rule",
        "add",
        "--domains",
        "*.youtube.com,youtu.be",
        "--params",
        "si,feature",
    ]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let (stdout, _stderr, _) = env.clean("https://www.youtube.com/watch?v=abc&si=xyz");
    assert_eq!(stdout.trim(), "https://www.youtube.com/watch?v=abc");

    let (stdout, _stderr, _) = env.clean("https://example.com/?si=xyz");
    assert_eq!(stdout.trim(), "https://example.com/?si=xyz");

    let (stdout, _stderr, _) = env.run(&["domain-rule", "list"]);
    assert_eq!(stdout.trim(), "[0] *.youtube.com, youtu.be -> si, feature");

    let (_stdout, _stderr, exit_code) = env.run(&["domain-rule", "remove", "0"]);
    assert_eq!(exit_code, 0);
    let (stdout, _stderr, _) = env.run(&["domain-rule", "list"]);
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_history_records_cleaned_urls() {
    let env = Env::new();
    env.clean("https://example.com/?utm_source=a");
    env.clean("https://example.com/plain");
    env.clean("https://example.org/?fbclid=b");

    let history = read_history(&env.history_path());
    let items = history.as_array().unwrap();
    assert_eq!(items.len(), 2, "URLs without removals are not recorded");
    assert_eq!(items[0]["originalUrl"], "https://example.org/?fbclid=b");
    assert_eq!(items[0]["cleanUrl"], "https://example.org/");
    assert_eq!(items[1]["removedParams"], serde_json::json!(["utm_source=a"]));

    let (stdout, _stderr, exit_code) = env.run(&["history"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[1] Just now"));
    assert!(stdout.contains("Original: https://example.org/?fbclid=b"));
    assert!(stdout.contains("Removed 1 parameter\n"));
}

#[test]
fn test_history_is_capped() {
    let env = Env::new();
    for i in 0..12 {
        env.clean(&format!("https://example{}.com/?utm_source=x", i));
    }

    let history = read_history(&env.history_path());
    let items = history.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["cleanUrl"], "https://example11.com/");
}

#[test]
fn test_no_history_flag() {
    let env = Env::new();
    env.run(&["clean", "--no-copy", "--no-history", "https://example.com/?gclid=1"]);

    let (stdout, _stderr, _) = env.run(&["history", "list"]);
    assert_eq!(stdout.trim(), "No history yet. Start cleaning URLs!");
}

#[test]
fn test_history_clear() {
    let env = Env::new();
    env.clean("https://example.com/?utm_source=a");

    let (_stdout, _stderr, exit_code) = env.run(&["history", "clear"]);
    assert_eq!(exit_code, 0);

    let history = read_history(&env.history_path());
    assert_eq!(history, serde_json::json!([]));
}

#[cfg(unix)]
#[test]
fn test_copy_with_configured_clipboard_command() {
    let env = Env::with_config("clipboard_command = [\"cat\"]\n");
    let (stdout, stderr, exit_code) = env.run(&["clean", "https://example.com/?utm_source=a"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://example.com/");
    assert!(
        stderr.contains("Copied clean URL (removed 1 parameters)"),
        "stderr: {}",
        stderr
    );

    let (stdout, stderr, exit_code) = env.run(&["history", "copy", "1"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "https://example.com/");
}

#[test]
fn test_failing_clipboard_still_prints_url() {
    let env = Env::with_config("clipboard_command = [\"sniplink-no-such-clipboard-helper\"]\n");
    let (stdout, stderr, exit_code) = env.run(&["clean", "https://example.com/?utm_source=a"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://example.com/");
    assert!(stderr.contains("Failed to copy"), "stderr: {}", stderr);
}

#[test]
fn test_quiet_suppresses_status() {
    let env = Env::new();
    let (stdout, stderr, exit_code) =
        env.run(&["-q", "clean", "--no-copy", "https://example.com/?utm_source=a"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "https://example.com/");
    assert!(stderr.is_empty(), "stderr: {}", stderr);
}

#[test]
fn test_check_valid_config() {
    let env = Env::new();
    let (_stdout, stderr, exit_code) = env.run(&["check"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Configuration is valid."));
}

#[test]
fn test_invalid_config_is_rejected() {
    let env = Env::with_config("[[domain_params]]\ndomains = []\nparams = [\"si\"]\n");
    let (_stdout, stderr, exit_code) = env.run(&["check"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("domains cannot be empty"), "stderr: {}", stderr);
}

#[test]
fn test_init_writes_config() {
    let env = Env::new();
    let target = env.dir.path().join("other").join("config.toml");
    let (_stdout, stderr, exit_code) = env.run(&["init", "--path", target.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(target.exists());
    assert!(stderr.contains("Configuration file created at"));
}

#[test]
fn test_init_uses_config_flag() {
    let env = Env::new();
    let (_stdout, stderr, exit_code) = env.run(&["init"]);

    assert_eq!(exit_code, 0);
    assert!(env.config_path().exists());
    assert!(stderr.contains(&env.config_path().display().to_string()));
    assert!(!env.home().join(".config/sniplink/config.toml").exists());
}

#[test]
fn test_init_keeps_edited_config() {
    let env = Env::new();
    let (_stdout, _stderr, exit_code) = env.run(&["whitelist", "add", "keep.me"]);
    assert_eq!(exit_code, 0);

    let (_stdout, stderr, exit_code) = env.run(&["init"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("already exists"));
    let content = fs::read_to_string(env.config_path()).unwrap();
    assert!(content.contains("keep.me"));

    let (_stdout, _stderr, exit_code) = env.run(&["init", "--force"]);
    assert_eq!(exit_code, 0);
    let (stdout, _stderr, _exit_code) = env.run(&["whitelist", "list"]);
    assert!(!stdout.contains("keep.me"));
}

#[test]
fn test_version() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = env.run(&["version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("sniplink "));
}
