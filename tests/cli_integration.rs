//! Testes de integração para a CLI do Memorec.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memorec_bin() -> Command {
    let mut cmd = Command::cargo_bin("memorec").expect("binary exists");
    // Nunca usa um memorec.toml do diretório atual
    cmd.arg("--config").arg("does-not-exist.toml");
    cmd
}

#[test]
fn test_version_command() {
    memorec_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memorec"));
}

#[test]
fn test_help_command() {
    memorec_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("factorial")
                .and(predicate::str::contains("fibonacci"))
                .and(predicate::str::contains("search"))
                .and(predicate::str::contains("batch")),
        );
}

#[test]
fn test_factorial() {
    memorec_bin()
        .args(["factorial", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial(5) = 120"));
}

#[test]
fn test_fibonacci() {
    memorec_bin()
        .args(["fibonacci", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 55"));
}

#[test]
fn test_search_found() {
    memorec_bin()
        .args(["search", "7", "1", "3", "5", "7", "9", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found at index 3"));
}

#[test]
fn test_search_not_found_exits_zero() {
    memorec_bin()
        .args(["search", "4", "1", "3", "5", "7", "9", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_negative_input_exit_code() {
    memorec_bin()
        .args(["factorial", "-1"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("-1"));
}

#[test]
fn test_depth_exceeded_exit_code() {
    memorec_bin()
        .args(["factorial", "100000", "--max-depth", "1000"])
        .assert()
        .code(4);
}

#[test]
fn test_overflow_exit_code() {
    memorec_bin().args(["factorial", "40"]).assert().code(5);
}

#[test]
fn test_json_output() {
    let output = memorec_bin()
        .args(["--json", "fibonacci", "10"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["value"], 55);
    assert_eq!(report["problem"]["kind"], "fibonacci");
}

#[test]
fn test_config_max_depth_is_used() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memorec.toml");
    std::fs::write(&config_path, "[evaluator]\nmax_depth = 3\n").unwrap();

    let mut cmd = Command::cargo_bin("memorec").unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["factorial", "10"])
        .assert()
        .code(4);

    // --max-depth tem precedência
    let mut cmd = Command::cargo_bin("memorec").unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["factorial", "10", "--max-depth", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3628800"));
}

#[test]
fn test_batch_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("problems.json");
    std::fs::write(
        &input,
        r#"[
            {"problem": {"kind": "factorial", "n": 5}},
            {"problem": {"kind": "fibonacci", "n": 10}},
            {"problem": {"kind": "binary_search", "sequence": [1, 3, 5, 7, 9, 11], "target": 4}}
        ]"#,
    )
    .unwrap();

    memorec_bin()
        .arg("batch")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("factorial(5) = 120")
                .and(predicate::str::contains("fibonacci(10) = 55"))
                .and(predicate::str::contains("not found")),
        );
}

#[test]
fn test_batch_with_failure_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("problems.json");
    std::fs::write(
        &input,
        r#"[
            {"problem": {"kind": "factorial", "n": 5}},
            {"problem": {"kind": "fibonacci", "n": -2}}
        ]"#,
    )
    .unwrap();

    memorec_bin().arg("batch").arg(&input).assert().code(3);
}

#[test]
fn test_batch_missing_file() {
    memorec_bin()
        .args(["batch", "no-such-file.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Erro"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memorec.toml");

    memorec_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(config_path.exists(), "Config file was not created");

    let content = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert!(content.contains("[evaluator]"));
}

#[test]
fn test_invalid_command() {
    memorec_bin()
        .arg("invalid-command-that-does-not-exist")
        .assert()
        .failure();
}

#[test]
fn test_quiet_and_verbose_flags() {
    memorec_bin().args(["-q", "version"]).assert().success();
    memorec_bin().args(["-v", "version"]).assert().success();
}

#[test]
fn test_malformed_config_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memorec.toml");
    std::fs::write(&config_path, "[evaluator\nmax_depth = ").unwrap();

    let mut cmd = Command::cargo_bin("memorec").unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["factorial", "5"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Erro"));
}

#[test]
fn test_unknown_log_format_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memorec.toml");
    std::fs::write(&config_path, "[general]\nlog_format = \"xml\"\n").unwrap();

    let mut cmd = Command::cargo_bin("memorec").unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["factorial", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("log_format"));
}

#[test]
fn test_json_log_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memorec.toml");
    std::fs::write(
        &config_path,
        "[general]\nlog_level = \"info\"\nlog_format = \"json\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("memorec").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["factorial", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120"))
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}

#[test]
fn test_huge_factorial_reports_overflow() {
    memorec_bin()
        .args([
            "factorial",
            "100000000",
            "--max-depth",
            "18446744073709551615",
        ])
        .assert()
        .code(5);
}
