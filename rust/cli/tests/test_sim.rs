mod helpers;

use flipseven_cli::logging::TestLogSubscriber;
use helpers::{clear_env, run_cli, use_config_file};
use serde_json::Value;
use serial_test::serial;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[test]
#[serial]
fn sim_plays_every_game_and_summarises() {
    clear_env();
    let res = run_cli(&["sim", "--games", "3", "--seed", "3", "--target", "60"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);

    for g in 1..=3 {
        assert!(
            res.stdout.contains(&format!("Game {}: ", g)),
            "missing game {}: {}",
            g,
            res.stdout
        );
    }
    assert!(res
        .stdout
        .contains("Simulated: 3 games (3 players, ai baseline, target 60, seed 3)"));
    assert!(res.stdout.contains("Wins: P1="));
    assert!(res.stdout.contains("ended by Flip 7"));
}

#[test]
#[serial]
fn same_seed_same_output() {
    clear_env();
    let a = run_cli(&["sim", "--games", "2", "--seed", "77", "--target", "80"]);
    let b = run_cli(&["sim", "--games", "2", "--seed", "77", "--target", "80"]);
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn json_summary_is_machine_readable() {
    clear_env();
    let res = run_cli(&[
        "sim", "--games", "2", "--seed", "5", "--players", "4", "--ai", "reckless", "--target",
        "50", "--json",
    ]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["games"].as_u64(), Some(2));
    assert_eq!(json["players"].as_u64(), Some(4));
    assert_eq!(json["ai"].as_str(), Some("reckless"));
    assert_eq!(json["seed"].as_u64(), Some(5));
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["seed"].as_u64(), Some(6), "game N uses seed + N");
    assert_eq!(results[0]["scores"].as_array().unwrap().len(), 4);

    let wins: u64 = json["wins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["wins"].as_u64().unwrap())
        .sum();
    let aborted = json["aborted"].as_u64().unwrap();
    assert!(wins + aborted >= 2);
}

#[test]
#[serial]
fn config_supplies_defaults_and_flags_win() {
    clear_env();
    let _cfg = use_config_file("players = 5\ntarget_score = 40\nseed = 10\n");

    let res = run_cli(&["sim", "--games", "1"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("(5 players, ai baseline, target 40, seed 10)"));

    std::env::set_var("FLIPSEVEN_PLAYERS", "4");
    let res = run_cli(&["sim", "--games", "1", "--players", "2", "--seed", "11"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("(2 players, ai baseline, target 40, seed 11)"));
    clear_env();
}

#[test]
#[serial]
fn bad_arguments_exit_with_error() {
    clear_env();
    let cases: [(&[&str], &str); 4] = [
        (&["sim", "--games", "0"], "games must be >= 1"),
        (&["sim", "--games", "1", "--ai", "oracle"], "Unknown AI type: oracle"),
        (&["sim", "--games", "1", "--players", "19"], "players must be between 1 and 18"),
        (&["sim", "--games", "1", "--target", "0"], "target_score must be >0"),
    ];
    for (args, needle) in cases {
        let res = run_cli(args);
        assert_eq!(res.code, 2, "{:?}", args);
        assert!(res.stderr.contains(needle), "{:?}: {}", args, res.stderr);
    }
}

#[test]
#[serial]
fn engine_events_reach_the_subscriber() {
    clear_env();
    let capture = TestLogSubscriber::new();
    let registry = Registry::default().with(capture.clone().into_layer::<Registry>());

    let res = tracing::subscriber::with_default(registry, || {
        run_cli(&["sim", "--games", "1", "--seed", "8", "--target", "40"])
    });
    assert_eq!(res.code, 0);

    let ended = capture.matching("round ended");
    assert!(!ended.is_empty());
    assert!(ended
        .iter()
        .all(|e| e.target == "flipseven_engine::round"));
    let finished = capture.matching("simulation finished");
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].field("seed"), Some("8"));
}
