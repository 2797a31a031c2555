//! E2E tests for the non-interactive CLI surfaces.
//!
//! Each test runs `qv` as a subprocess against a scaffolded workspace in an
//! isolated temp directory. The interactive views are covered by the core
//! state-machine tests; here we exercise `envs`, `ops --print`, and the
//! workspace precondition errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the qv binary, rooted in `dir`.
fn qv_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("qv"));
    cmd.current_dir(dir);
    // Suppress tracing output that goes to stderr
    cmd.env("QUIVER_LOG", "error");
    cmd
}

/// Scaffold a workspace with two environments and a small operation catalog.
fn scaffold_workspace() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let envs = dir.path().join("environments");
    fs::create_dir(&envs).expect("environments dir");
    fs::write(envs.join("dev.yaml"), "endpoint: http://localhost:4000\n").expect("dev env");
    fs::write(
        envs.join("staging.yaml"),
        "endpoint: https://staging.example.com/graphql\n",
    )
    .expect("staging env");

    let requests = dir.path().join("requests").join("dev");
    fs::create_dir_all(&requests).expect("requests dir");
    fs::write(requests.join("users.graphql"), "query { users { id } }\n").expect("request file");

    fs::write(
        dir.path().join("operations.json"),
        r#"[
            {"name": "getUser", "kind": "query", "endpoint": "https://api.example.com/graphql"},
            {"name": "getOrders", "kind": "query", "endpoint": "https://orders.example.com/graphql"},
            {"name": "createOrder", "kind": "mutation", "endpoint": "https://orders.example.com/graphql"},
            {"name": "onOrderShipped", "kind": "subscription", "endpoint": "https://orders.example.com/graphql"}
        ]"#,
    )
    .expect("operations document");
    dir
}

// ---------------------------------------------------------------------------
// envs
// ---------------------------------------------------------------------------

#[test]
fn envs_lists_environments_sorted() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["envs"])
        .assert()
        .success()
        .stdout("dev\nstaging\n");
}

#[test]
fn envs_fails_without_environments() {
    let dir = TempDir::new().expect("temp dir");
    qv_cmd(dir.path())
        .args(["envs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no environments"));
}

#[test]
fn workspace_flag_overrides_cwd() {
    let workspace = scaffold_workspace();
    let elsewhere = TempDir::new().expect("temp dir");
    qv_cmd(elsewhere.path())
        .args(["envs", "--workspace"])
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));
}

// ---------------------------------------------------------------------------
// ops --print
// ---------------------------------------------------------------------------

#[test]
fn ops_print_lists_all_operations_grouped_by_kind() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["ops", "--print"])
        .assert()
        .success()
        .stdout(
            "query\tgetUser\thttps://api.example.com/graphql\n\
             query\tgetOrders\thttps://orders.example.com/graphql\n\
             mutation\tcreateOrder\thttps://orders.example.com/graphql\n\
             subscription\tonOrderShipped\thttps://orders.example.com/graphql\n",
        );
}

#[test]
fn ops_print_applies_kind_prefix_filter() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["ops", "--print", "--filter", "m:"])
        .assert()
        .success()
        .stdout("mutation\tcreateOrder\thttps://orders.example.com/graphql\n");
}

#[test]
fn ops_print_combines_prefix_and_term() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["ops", "--print", "--filter", "q:orders"])
        .assert()
        .success()
        .stdout("query\tgetOrders\thttps://orders.example.com/graphql\n");
}

#[test]
fn ops_print_with_no_match_prints_nothing() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["ops", "--print", "--filter", "zzz"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn ops_fails_without_operations_document() {
    let dir = scaffold_workspace();
    fs::remove_file(dir.path().join("operations.json")).expect("remove catalog");
    qv_cmd(dir.path())
        .args(["ops", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("operations document not found"));
}

#[test]
fn ops_fails_on_malformed_catalog() {
    let dir = scaffold_workspace();
    fs::write(
        dir.path().join("operations.json"),
        r#"[{"name": "x", "kind": "fragment", "endpoint": "e"}]"#,
    )
    .expect("write catalog");
    qv_cmd(dir.path())
        .args(["ops", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

// ---------------------------------------------------------------------------
// pick preconditions
// ---------------------------------------------------------------------------

#[test]
fn pick_rejects_unknown_environment() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["pick", "--env", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment 'nope'"));
}

#[test]
fn pick_rejects_environment_without_request_files() {
    let dir = scaffold_workspace();
    qv_cmd(dir.path())
        .args(["pick", "--env", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no request files"));
}

#[test]
fn config_can_relocate_the_catalog() {
    let dir = scaffold_workspace();
    fs::rename(
        dir.path().join("operations.json"),
        dir.path().join("catalog.json"),
    )
    .expect("rename catalog");
    fs::write(
        dir.path().join("quiver.toml"),
        "[workspace]\noperations = \"catalog.json\"\n",
    )
    .expect("write config");
    qv_cmd(dir.path())
        .args(["ops", "--print", "--filter", "s:"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onOrderShipped"));
}
