use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::{fs, path::Path};
use tempfile::TempDir;

fn optresolve() -> Command {
    let mut cmd = Command::cargo_bin("optresolve").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn project_with(file: &str, content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(file), content).unwrap();
    temp_dir
}

/// `options` run that searches no higher than `root`
fn options_in(root: &Path) -> Command {
    let mut cmd = optresolve();
    cmd.arg("options").arg("--dir").arg(root).arg("--stop-dir").arg(root);
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_help_lists_declared_flags() {
    optresolve()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("output extra debugging"))
        .stdout(predicate::str::contains("small pizza size"))
        .stdout(predicate::str::contains("--pizza-type <type>"))
        .stdout(predicate::str::contains("display help for command"));
}

#[test]
fn test_flags_without_command() {
    let value = stdout_json(optresolve().args(["-p", "margherita"]));
    assert_eq!(
        value,
        json!({"debug": false, "small": false, "pizzaType": "margherita"})
    );
}

#[test]
fn test_env_extracts_template_keys_only() {
    let value = stdout_json(
        optresolve()
            .args(["env", "OPTRESOLVE_FOO", "OPTRESOLVE_BAZ"])
            .env("OPTRESOLVE_FOO", "bar")
            .env("OPTRESOLVE_OTHER", "ignored")
            .env_remove("OPTRESOLVE_BAZ"),
    );
    assert_eq!(value, json!({"OPTRESOLVE_BAZ": null, "OPTRESOLVE_FOO": "bar"}));
}

#[test]
fn test_env_as_shell() {
    optresolve()
        .args(["env", "OPTRESOLVE_PORT", "OPTRESOLVE_NAME", "--shell"])
        .env("OPTRESOLVE_PORT", "8080")
        .env("OPTRESOLVE_NAME", "pizza night")
        .assert()
        .success()
        .stdout("export OPTRESOLVE_NAME='pizza night'\nexport OPTRESOLVE_PORT=8080\n");
}

#[test]
fn test_options_defaults_without_configuration() {
    let temp_dir = TempDir::new().unwrap();

    let value = stdout_json(&mut options_in(temp_dir.path()));
    assert_eq!(
        value,
        json!({
            "parser": "json",
            "printWidth": 120,
            "tabWidth": 2,
            "singleQuote": true,
            "trailingComma": "all",
            "bracketSpacing": true,
            "semi": false
        })
    );
}

#[test]
fn test_options_merge_discovered_configuration() {
    let temp_dir = project_with(
        ".prettierrc.yaml",
        "printWidth: 80\nplugins:\n  - prettier-plugin-sh\n",
    );

    let value = stdout_json(&mut options_in(temp_dir.path()));
    assert_eq!(value["printWidth"], json!(80));
    assert_eq!(value["tabWidth"], json!(2));
    assert_eq!(value["plugins"], json!(["prettier-plugin-sh"]));
}

#[test]
fn test_options_from_working_directory() {
    let temp_dir = project_with(".prettierrc", r#"{"semi": true}"#);

    let value = stdout_json(
        optresolve()
            .arg("options")
            .arg("--stop-dir")
            .arg(temp_dir.path())
            .current_dir(temp_dir.path()),
    );
    assert_eq!(value["semi"], json!(true));
}

#[test]
fn test_options_degrade_silently_on_bad_configuration() {
    let temp_dir = project_with("prettier.config.js", "module.exports = {}");

    let value = stdout_json(&mut options_in(temp_dir.path()));
    assert_eq!(value["printWidth"], json!(120));
}

#[test]
fn test_options_found_above_nested_repository() {
    let temp_dir = project_with(".prettierrc.json", r#"{"printWidth": 80}"#);
    let nested = temp_dir.path().join("packages").join("app");
    fs::create_dir_all(nested.join(".git")).unwrap();

    let value = stdout_json(
        optresolve()
            .arg("options")
            .arg("--dir")
            .arg(&nested)
            .arg("--stop-dir")
            .arg(temp_dir.path()),
    );
    assert_eq!(value["printWidth"], json!(80));
}

#[test]
fn test_env_as_annotated_shell() {
    optresolve()
        .args(["env", "OPTRESOLVE_PORT", "--shell", "--annotate"])
        .env("OPTRESOLVE_PORT", "8080")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# ----"))
        .stdout(predicate::str::contains("# Generated by optresolve"))
        .stdout(predicate::str::contains("\nexport OPTRESOLVE_PORT=8080\n"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    optresolve()
        .arg("--large")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--large"));
}
