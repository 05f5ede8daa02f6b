//! End-to-end tests driving the CLI through `hilo_cli::run` with
//! captured output streams.

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

#[test]
fn help_and_version_exit_zero_on_stdout() {
    let (code, out, _) = run_cli(&["hilo", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("sim"));
    assert!(out.contains("advise"));

    let (code, out, _) = run_cli(&["hilo", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("hilo"));
}

#[test]
fn unknown_subcommand_exits_two_with_command_list() {
    let (code, out, err) = run_cli(&["hilo", "banana"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Commands:"));
    assert!(err.contains("cfg"));
}

#[test]
fn missing_required_flag_exits_two() {
    let (code, _, err) = run_cli(&["hilo", "advise", "--dealer", "6"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn cfg_emits_json_defaults() {
    let (code, out, _) = run_cli(&["hilo", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["decks"]["value"], 6);
    assert_eq!(json["play_strategy"]["value"], "ai");
}

#[test]
fn advise_respects_the_basic_strategy_flag() {
    // 16 vs 10 at a high count: deviation says stand, pure basic says hit.
    let counting = [
        "hilo", "advise", "--player", "10,6", "--dealer", "10", "--decks", "1", "--running", "8",
    ];
    let (code, out, _) = run_cli(&counting);
    assert_eq!(code, 0);
    assert!(out.contains("STAND"));

    let mut basic = counting.to_vec();
    basic.extend(["--play", "basic"]);
    let (code, out, _) = run_cli(&basic);
    assert_eq!(code, 0);
    assert!(out.contains("HIT"));
}

#[test]
fn advise_json_has_all_fields() {
    let (code, out, _) = run_cli(&[
        "hilo", "advise", "--player", "A,7", "--dealer", "9", "--json",
    ]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    // Soft 18 vs 9 hits under basic strategy.
    assert_eq!(json["action"], "HIT");
    assert!(json["win_probability"].is_number());
    assert!(json["bet"].is_number());
    assert!(json["true_count"].is_number());
}

#[test]
fn sim_error_messages_go_to_stderr() {
    let (code, out, err) = run_cli(&["hilo", "sim", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("hands must be >= 1"));
}
