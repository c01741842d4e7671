//! Integration tests for the `flatssu` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixtures present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flatssu");
    cmd.env_remove("FLATSSU_NODES_PATH")
        .env_remove("FLATSSU_EDGES_PATH")
        .env("RUST_LOG", "error");
    cmd
}

fn fixture_cli() -> Command {
    let dir = fixtures_dir();
    let mut cmd = cli();
    cmd.arg("--nodes")
        .arg(dir.join("campus_nodes.json"))
        .arg("--edges")
        .arg(dir.join("campus_edges.csv"));
    cmd
}

#[test]
fn route_by_index_prints_convenient_path() {
    fixture_cli()
        .args(["route", "--from", "0", "--to", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route (convenient): Main Gate -> Student Union -> Engineering Hall -> Dormitory",
        ))
        .stdout(predicate::str::contains("Cost: 1310"));
}

#[test]
fn route_by_name_in_shortest_mode() {
    fixture_cli()
        .args([
            "route",
            "--from",
            "Main Gate",
            "--to",
            "Engineering Hall",
            "--mode",
            "shortest",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route (shortest): Main Gate -> Library -> Engineering Hall",
        ))
        .stdout(predicate::str::contains("Cost: 200"));
}

#[test]
fn route_json_output_is_parseable() {
    let output = fixture_cli()
        .args(["route", "--from", "0", "--to", "3", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["mode"], "convenient");
    assert_eq!(value["steps"], serde_json::json!([0, 2, 3]));
    assert_eq!(value["cost"], 250);
}

#[test]
fn unreachable_route_is_reported_but_succeeds() {
    fixture_cli()
        .args(["route", "--from", "0", "--to", "Observatory"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No convenient route between Main Gate and Observatory.",
        ));
}

#[test]
fn unknown_name_suggests_alternatives() {
    fixture_cli()
        .args(["route", "--from", "Libary", "--to", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("Library"));
}

#[test]
fn out_of_range_index_fails() {
    fixture_cli()
        .args(["route", "--from", "0", "--to", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn stats_report_counts() {
    fixture_cli()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 7"))
        .stdout(predicate::str::contains("edges: 8"))
        .stdout(predicate::str::contains("rejected rows: 3"));
}

#[test]
fn data_dir_resolves_default_file_names() {
    let temp = tempdir().expect("temp dir");
    fs::copy(
        fixtures_dir().join("campus_nodes.json"),
        temp.path().join("flatssu_nodes.json"),
    )
    .expect("copy nodes");
    fs::copy(
        fixtures_dir().join("campus_edges.csv"),
        temp.path().join("node_connect.csv"),
    )
    .expect("copy edges");

    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .args(["stats", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"edges\": 8"));
}

#[test]
fn env_variables_select_sources() {
    let temp = tempdir().expect("temp dir");

    cli()
        .current_dir(temp.path())
        .env("FLATSSU_NODES_PATH", fixtures_dir().join("campus_nodes.json"))
        .env("FLATSSU_EDGES_PATH", fixtures_dir().join("campus_edges.csv"))
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("edges: 8"));
}

#[test]
fn flags_override_env_variables() {
    cli()
        .env("FLATSSU_NODES_PATH", "/nonexistent/nodes.json")
        .env("FLATSSU_EDGES_PATH", "/nonexistent/edges.csv")
        .arg("--nodes")
        .arg(fixtures_dir().join("campus_nodes.json"))
        .arg("--edges")
        .arg(fixtures_dir().join("campus_edges.csv"))
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 7"));
}

#[test]
fn interactive_is_the_default_command() {
    fixture_cli()
        .write_stdin("0\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Main Gate -> Student Union -> Engineering Hall -> Dormitory\n",
        ));
}

#[test]
fn interactive_prints_nothing_for_unreachable_pair() {
    fixture_cli()
        .arg("interactive")
        .write_stdin("0 6\n")
        .assert()
        .success()
        .stdout("start idx : end idx : ");
}

#[test]
fn interactive_fails_without_sources() {
    let temp = tempdir().expect("temp dir");
    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .write_stdin("0\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph is empty"));
}

#[test]
fn serve_answers_host_requests() {
    let requests = concat!(
        "{\"op\":\"findShortest\",\"start\":0,\"end\":3}\n",
        "{\"op\":\"initGraph\"}\n",
        "{\"op\":\"findShortest\",\"start\":0,\"end\":3}\n",
        "{\"op\":\"findConvenient\",\"start\":0,\"end\":3}\n",
        "{\"op\":\"findConvenient\",\"start\":0,\"end\":6}\n",
    );

    let output = fixture_cli()
        .arg("serve")
        .write_stdin(requests)
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"ok":true,"path":[]}"#,
            r#"{"ok":true,"stats":{"nodes":7,"edges":8,"rejected_rows":3,"duplicate_names":0}}"#,
            r#"{"ok":true,"path":[0,1,3]}"#,
            r#"{"ok":true,"path":[0,2,3]}"#,
            r#"{"ok":true,"path":[]}"#,
        ]
    );
}
