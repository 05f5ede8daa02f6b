//! Configuration layering: defaults, then `HILO_CONFIG` file values,
//! then environment overrides, then command-line flags.
//!
//! These tests mutate process environment variables, so they run
//! serially.

use serial_test::serial;
use std::io::Write as _;

use hilo_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.to_vec(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
    for (k, v) in vars {
        unsafe { std::env::set_var(k, v) };
    }
    f();
    for (k, _) in vars {
        unsafe { std::env::remove_var(k) };
    }
}

fn write_config(contents: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hilo.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    (dir, path.to_string_lossy().to_string())
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let (_dir, path) = write_config(
        r#"
decks = 2
hands = 25
play_strategy = "basic"
seed = 9
"#,
    );
    with_env(&[("HILO_CONFIG", &path)], || {
        let (code, out, _) = run_cli(&["hilo", "cfg"]);
        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["decks"]["value"], 2);
        assert_eq!(json["decks"]["source"], "file");
        assert_eq!(json["play_strategy"]["value"], "basic");
        assert_eq!(json["seed"]["value"], 9);
        assert_eq!(json["seed"]["source"], "file");
        // Untouched fields keep their defaults.
        assert_eq!(json["min_bet"]["value"], 5.0);
        assert_eq!(json["min_bet"]["source"], "default");
    });
}

#[test]
#[serial]
fn env_seed_overrides_the_file_seed() {
    let (_dir, path) = write_config("seed = 9\n");
    with_env(&[("HILO_CONFIG", &path), ("HILO_SEED", "77")], || {
        let (code, out, _) = run_cli(&["hilo", "cfg"]);
        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["seed"]["value"], 77);
        assert_eq!(json["seed"]["source"], "env");
    });
}

#[test]
#[serial]
fn flag_seed_overrides_the_environment() {
    with_env(&[("HILO_SEED", "1")], || {
        let args = [
            "hilo", "sim", "--hands", "50", "--seed", "5", "--json",
        ];
        let (_, with_env_out, _) = run_cli(&args);
        // Same flag seed without the env var must give the same run.
        unsafe { std::env::remove_var("HILO_SEED") };
        let (_, without_env_out, _) = run_cli(&args);
        assert_eq!(with_env_out, without_env_out);
    });
}

#[test]
#[serial]
fn invalid_env_seed_is_a_config_error() {
    with_env(&[("HILO_SEED", "not-a-number")], || {
        let (code, _, err) = run_cli(&["hilo", "cfg"]);
        assert_eq!(code, 2);
        assert!(err.contains("Invalid configuration"));
    });
}

#[test]
#[serial]
fn invalid_file_values_fail_validation() {
    let (_dir, path) = write_config("min_bet = 50.0\nmax_bet = 10.0\n");
    with_env(&[("HILO_CONFIG", &path)], || {
        let (code, _, err) = run_cli(&["hilo", "cfg"]);
        assert_eq!(code, 2);
        assert!(err.contains("max_bet"));
    });
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    with_env(&[("HILO_CONFIG", "/nonexistent/hilo.toml")], || {
        let (code, _, err) = run_cli(&["hilo", "cfg"]);
        assert_eq!(code, 2);
        assert!(err.contains("Invalid configuration"));
    });
}
