mod helpers;

use helpers::{run_cli, run_cli_with_env};
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn help_lists_expected_commands() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["eval", "rank", "compare", "cfg"] {
        assert!(
            res.stdout.contains(cmd),
            "help should list subcommand `{}`",
            cmd
        );
    }
}

#[test]
#[serial]
fn version_goes_to_stdout() {
    let res = run_cli(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("handrank "));
}

#[test]
#[serial]
fn missing_subcommand_prints_usage() {
    let res = run_cli(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Commands:"));
    assert!(res.stderr.contains("For full help, run: handrank --help"));
}

#[test]
#[serial]
fn cfg_shows_default_settings() {
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["format"]["value"], "text");
    assert_eq!(v["show_all"]["source"], "default");
    assert_eq!(v["unicode"]["value"], false);
}

#[test]
#[serial]
fn cfg_reports_file_and_env_sources() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\nunicode = true").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let res = run_cli_with_env(
        &["cfg"],
        &[("HANDRANK_CONFIG", &path), ("HANDRANK_UNICODE", "off")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["format"]["value"], "json");
    assert_eq!(v["format"]["source"], "file");
    assert_eq!(v["unicode"]["value"], false);
    assert_eq!(v["unicode"]["source"], "env");
}

#[test]
#[serial]
fn config_file_format_applies_to_eval() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let res = run_cli_with_env(
        &["eval", "4H", "6D", "KH", "KC", "5C"],
        &[("HANDRANK_CONFIG", &path)],
    );
    assert_eq!(res.exit_code, 0);
    let v: serde_json::Value = serde_json::from_str(res.stdout.trim()).unwrap();
    assert_eq!(v["category"], "One Pair");
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    let res = run_cli_with_env(&["cfg"], &[("HANDRANK_CONFIG", "no/such/handrank.toml")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));
}
