//! Integration tests for script runs

use std::io::Write;

use orchard_runtime::{RuntimeError, ScriptSummary, Session, script};

fn run(session: &mut Session, text: &str) -> (ScriptSummary, String) {
    let mut out = Vec::new();
    let summary = script::run(session, "scenario", text.as_bytes(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

const SCENARIO: &str = "\
# 3x3 orchard, one tree
Init 3
PlantTree 0 0
AddFruit 0 0 5 10
AddFruit 0 0 3 10
GetAllFruitsByRate 0 0
RateFruit 5 2
GetAllFruitsByRate 0 0
UpdateRottenFruits 5 10
GetAllFruitsByRate 0 0
GetBestFruit 0 0
Quit
";

#[test]
fn scenario_output() {
    let mut session = Session::new();
    let (summary, out) = run(&mut session, SCENARIO);

    assert_eq!(
        out,
        "\
Init: SUCCESS
PlantTree: SUCCESS
AddFruit: SUCCESS
AddFruit: SUCCESS
GetAllFruitsByRate: SUCCESS [3, 5]
RateFruit: SUCCESS
GetAllFruitsByRate: SUCCESS [5, 3]
UpdateRottenFruits: SUCCESS
GetAllFruitsByRate: SUCCESS [3, 5]
GetBestFruit: SUCCESS 3
Quit: SUCCESS
"
    );
    assert_eq!(
        summary,
        ScriptSummary {
            commands: 11,
            failures: 0
        }
    );
    assert!(!session.is_open());
}

#[test]
fn failures_are_counted_not_fatal() {
    let mut session = Session::new();
    let (summary, out) = run(
        &mut session,
        "PlantTree 0 0\nInit 2\nAddFruit 0 0 1 1\nPlantTree 0 0\nPickFruit 1\n",
    );

    assert_eq!(summary.commands, 5);
    assert_eq!(summary.failures, 3);
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "PlantTree: INVALID_INPUT",
            "Init: SUCCESS",
            "AddFruit: FAILURE",
            "PlantTree: SUCCESS",
            "PickFruit: FAILURE",
        ]
    );
}

#[test]
fn parse_error_reports_source_and_line() {
    let mut session = Session::new();
    let mut out = Vec::new();
    let err = script::run(
        &mut session,
        "broken.txt",
        "Init 2\n\n# note\nGetBestFruit 0\n".as_bytes(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, RuntimeError::Parse { .. }));
    assert_eq!(
        err.to_string(),
        "at broken.txt:4: GetBestFruit takes 2 argument(s), got 1"
    );
}

#[test]
fn files_share_one_session() {
    let dir = std::env::temp_dir().join(format!("orchard-scripts-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let first = dir.join("first.txt");
    let second = dir.join("second.txt");
    std::fs::File::create(&first)
        .unwrap()
        .write_all(b"Init 2\nPlantTree 1 1\n")
        .unwrap();
    std::fs::File::create(&second)
        .unwrap()
        .write_all(b"AddFruit 1 1 3 3\nGetBestFruit 1 1\n")
        .unwrap();

    let mut session = Session::new();
    let mut out = Vec::new();
    script::run_file(&mut session, &first, &mut out).unwrap();
    let summary = script::run_file(&mut session, &second, &mut out).unwrap();

    assert_eq!(summary.failures, 0);
    assert!(String::from_utf8(out).unwrap().ends_with("GetBestFruit: SUCCESS 3\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn demo_scenario_runs_clean() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/scenario.txt");
    let mut session = Session::new();
    let mut out = Vec::new();
    let summary = script::run_file(&mut session, &path, &mut out).unwrap();

    assert_eq!(summary.failures, 0);
    let out = String::from_utf8(out).unwrap();
    let tail: Vec<_> = out.lines().rev().take(3).collect();
    assert_eq!(
        tail,
        vec!["Quit: SUCCESS", "GetBestFruit: SUCCESS 5", "PickFruit: SUCCESS"]
    );
}
