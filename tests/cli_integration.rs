use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary, isolated from the developer's own config.
fn piper() -> Command {
    piper_with_config_home(&std::env::temp_dir().join("piper-tests-no-config"))
}

fn piper_with_config_home(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("piper").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("PIPER_CONFIG");
    cmd
}

fn project(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for f in files {
        fs::write(tmp.path().join(f), "").unwrap();
    }
    tmp
}

#[test]
fn shows_help() {
    piper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap its dependencies"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn shows_version() {
    piper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    piper()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn scan_subcommand_help() {
    piper()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--report"));
}

#[test]
fn install_subcommand_help() {
    piper()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install its dependencies"));
}

#[test]
fn invalid_config_path_fails() {
    let tmp = project(&[]);
    piper()
        .current_dir(tmp.path())
        .args(["--config", "/nonexistent/path.toml", "scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn config_path_from_environment() {
    let tmp = project(&[]);
    piper()
        .current_dir(tmp.path())
        .env("PIPER_CONFIG", "/nonexistent/from-env.toml")
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-env.toml"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_sets_report_path() {
    let config_home = TempDir::new().unwrap();
    fs::create_dir_all(config_home.path().join("piper")).unwrap();
    fs::write(
        config_home.path().join("piper/config.toml"),
        "[scan]\nreport_path = \"out/custom.json\"\n",
    )
    .unwrap();
    let tmp = project(&["go.mod"]);

    piper_with_config_home(config_home.path())
        .current_dir(tmp.path())
        .arg("scan")
        .assert()
        .success();

    assert!(tmp.path().join("out/custom.json").is_file());
    assert!(!tmp.path().join(".pipeline").exists());
}

#[test]
fn scan_prints_table_and_writes_default_report() {
    let tmp = project(&["package.json", "next.config.js", "vercel.json"]);

    piper()
        .current_dir(tmp.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Piper Detection Report"))
        .stdout(predicate::str::contains("node"))
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("vercel"));

    let report = fs::read_to_string(tmp.path().join(".pipeline/detection.json")).unwrap();
    assert!(report.contains("\"types\": [\n    \"node\"\n  ]"));
}

#[test]
fn scan_with_custom_root_and_report() {
    let root = project(&["Cargo.toml"]);
    let out = TempDir::new().unwrap();
    let report = out.path().join("reports/nested/detection.json");

    piper()
        .args(["-vv", "scan", "--root"])
        .arg(root.path())
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("rust"));

    assert!(report.is_file());
    assert!(!root.path().join(".pipeline").exists());
}

#[test]
fn scan_missing_root_reports_nothing() {
    let out = TempDir::new().unwrap();

    piper()
        .current_dir(out.path())
        .args(["scan", "--root", "does/not/exist"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Types\s+-").unwrap())
        .stdout(predicate::str::is_match(r"Framework\s+-").unwrap())
        .stdout(predicate::str::is_match(r"Deploy\s+-").unwrap());
}

#[test]
fn scan_with_json_output() {
    let tmp = project(&["go.mod"]);

    piper()
        .current_dir(tmp.path())
        .args(["scan", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"go\""));
}

#[test]
fn scan_report_write_failure_is_fatal() {
    let tmp = project(&["go.mod"]);
    // A regular file where a parent directory is needed.
    fs::write(tmp.path().join("blocker"), "").unwrap();

    piper()
        .current_dir(tmp.path())
        .args(["scan", "--report", "blocker/detection.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("writing report"));
}

#[test]
fn install_dry_run_lists_commands() {
    let tmp = project(&["package.json", "pnpm-lock.yaml", "go.mod"]);

    piper()
        .args(["install", "--dry-run", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm install --frozen-lockfile"))
        .stdout(predicate::str::contains("go mod download"));
}

#[test]
fn install_dry_run_nothing_to_do() {
    let tmp = project(&["Dockerfile"]);

    piper()
        .args(["install", "-n", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to install."));
}

#[test]
fn install_with_missing_package_manager_fails() {
    let tmp = project(&["go.mod"]);
    let empty_path = TempDir::new().unwrap();

    piper()
        .env("PATH", empty_path.path())
        .args(["install", "--root"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command not found: go"));
}

#[test]
fn install_without_ecosystems_succeeds() {
    let tmp = project(&["railway.toml"]);

    piper()
        .args(["install", "--root"])
        .arg(tmp.path())
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    piper()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piper"));
}
