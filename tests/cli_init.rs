mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

fn init_command(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(TestProject::bin());
    cmd.env_remove("KEYWORD_SEARCH_CONFIG")
        .arg("--config")
        .arg(config)
        .arg("init");
    cmd
}

#[test]
fn init_writes_default_config() {
    let project = TestProject::new();
    let config = project.path().join("fresh/config.toml");

    init_command(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("keyword-search-server"));
    assert!(content.contains("normalize_line_endings = false"));
}

#[test]
fn init_twice_fails_without_force() {
    let project = TestProject::new();
    let config = project.path().join("fresh/config.toml");

    init_command(&config).assert().success();

    init_command(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let project = TestProject::new();
    project.write_config("[server]\nname = \"custom\"\n");

    init_command(&project.config_path())
        .arg("--force")
        .assert()
        .success();

    let content = std::fs::read_to_string(project.config_path()).unwrap();
    assert!(content.contains("keyword-search-server"));
    assert!(!content.contains("custom"));
}

#[test]
fn init_json_reports_existing_config() {
    let project = TestProject::new();

    Command::new(TestProject::bin())
        .env_remove("KEYWORD_SEARCH_CONFIG")
        .arg("--json")
        .arg("--config")
        .arg(project.config_path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"already_exists\""));
}
