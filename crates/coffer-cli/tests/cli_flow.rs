//! End-to-end flows through the compiled binary.
//!
//! Each test gets its own temp home so config and dataset paths never
//! leak between tests or touch the real user environment.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

struct TestHome {
    _dir: TempDir,
    config: PathBuf,
    data: PathBuf,
}

fn test_home() -> TestHome {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("config");
    let data = dir.path().join("data");
    std::fs::create_dir_all(&config).expect("create config dir");
    std::fs::create_dir_all(&data).expect("create data dir");
    TestHome {
        _dir: dir,
        config,
        data,
    }
}

fn coffer(home: &TestHome) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coffer"));
    cmd.env("XDG_CONFIG_HOME", &home.config)
        .env("XDG_DATA_HOME", &home.data)
        .env_remove("COFFER_CONFIG")
        .env_remove("COFFER_DATA")
        .env_remove("COFFER_ENTITY");
    cmd
}

fn run_init(home: &TestHome) {
    let output = coffer(home)
        .args(["init", "--no-input"])
        .output()
        .expect("run init");
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "expected JSON on stdout ({}): {}",
            err,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_init_writes_dataset_and_config() {
    let home = test_home();
    run_init(&home);

    assert!(home.data.join("coffer").join("coffer.json").exists());
    let config_path = home.config.join("coffer").join("config.toml");
    assert!(config_path.exists());

    let config = std::fs::read_to_string(&config_path).expect("read config");
    assert!(config.contains("coffer.json"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["init", "--no-input"])
        .output()
        .expect("run init again");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"), "stderr: {}", stderr);

    let output = coffer(&home)
        .args(["init", "--no-input", "--force"])
        .output()
        .expect("run init with force");
    assert!(output.status.success());
}

#[test]
fn test_missing_dataset_points_at_init() {
    let home = test_home();

    let output = coffer(&home)
        .args(["donors", "list"])
        .output()
        .expect("run donors list");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("coffer init"), "stderr: {}", stderr);
}

#[test]
fn test_orgs_list_json() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["orgs", "list", "--json"])
        .output()
        .expect("run orgs list");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    let orgs = payload.as_array().expect("array of orgs");
    assert_eq!(orgs.len(), 3);

    let ids: Vec<&str> = orgs.iter().filter_map(|o| o["id"].as_str()).collect();
    assert!(ids.contains(&"awakenings"));
    assert!(ids.contains(&"bonfire"));
    assert!(ids.contains(&"tidewater"));
    assert!(orgs[0]["counts"]["donors"].as_u64().is_some());
}

#[test]
fn test_donor_list_scoped_to_entity() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donors", "list", "--json", "--entity", "awakenings"])
        .output()
        .expect("run donors list");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    assert_eq!(payload["entity"], "awakenings");

    let rows = payload["rows"].as_array().expect("rows array");
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row["entity"] == "awakenings"));
    assert_eq!(payload["totals"]["count"].as_u64(), Some(rows.len() as u64));
}

#[test]
fn test_unassigned_donation_filter() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donations", "list", "--json", "--assignment", "unassigned"])
        .output()
        .expect("run donations list");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    let rows = payload["rows"].as_array().expect("rows array");
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row["donor"].is_null()));
    assert_eq!(
        payload["totals"]["unassigned"].as_u64(),
        Some(rows.len() as u64)
    );
}

#[test]
fn test_donation_sort_and_limit() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args([
            "donations", "list", "--json", "--sort", "amount", "--direction", "desc", "--limit",
            "3",
        ])
        .output()
        .expect("run donations list");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    let rows = payload["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 3);

    let amounts: Vec<i64> = rows
        .iter()
        .filter_map(|row| row["amount_minor"].as_i64())
        .collect();
    assert!(amounts.windows(2).all(|pair| pair[0] >= pair[1]));

    // Totals still cover the full filtered set, not the truncated page.
    assert!(payload["totals"]["count"].as_u64().unwrap() > 3);
}

#[test]
fn test_donor_show_profile_figures() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args([
            "donors",
            "show",
            "Sarah Johnson",
            "--json",
            "--entity",
            "awakenings",
        ])
        .output()
        .expect("run donors show");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    assert_eq!(payload["gift_count"].as_u64(), Some(5));
    assert_eq!(payload["lifetime_total_minor"].as_i64(), Some(250_000));
    assert_eq!(payload["first_gift_on"], "2025-03-01");
    assert_eq!(payload["last_gift_on"], "2025-07-01");

    // History is newest-first.
    let history = payload["history"].as_array().expect("history array");
    assert_eq!(history.len(), 5);
    assert_eq!(history[0]["date"], "2025-07-01");
}

#[test]
fn test_donor_show_respects_entity_scope() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donors", "show", "Sarah Johnson", "--entity", "bonfire"])
        .output()
        .expect("run donors show");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sarah Johnson"), "stderr: {}", stderr);
}

#[test]
fn test_donor_show_with_adjustment() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args([
            "donors",
            "show",
            "Sarah Johnson",
            "--json",
            "--entity",
            "awakenings",
            "--adjust",
            "2025-08-01:-250.00:refund issued",
        ])
        .output()
        .expect("run donors show");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    assert_eq!(payload["lifetime_total_minor"].as_i64(), Some(250_000));
    assert_eq!(payload["adjusted_total_minor"].as_i64(), Some(225_000));

    let history = payload["history"].as_array().expect("history array");
    assert_eq!(history.len(), 6);
    assert_eq!(history[0]["adjustment"], true);
}

#[test]
fn test_statement_written_to_file() {
    let home = test_home();
    run_init(&home);

    let out_path = home._dir.path().join("statement.html");
    let output = coffer(&home)
        .args([
            "statement",
            "Marcus Lee",
            "--entity",
            "awakenings",
            "--out",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("run statement");
    assert!(
        output.status.success(),
        "statement failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = std::fs::read_to_string(&out_path).expect("read statement");
    assert!(html.contains("Contribution Statement"));
    assert!(html.contains("Awakenings Foundation"));
    assert!(html.contains("Marcus Lee"));
    // Two funds in his history, one summary row each.
    assert_eq!(html.matches("class=\"fund-row\"").count(), 2);
    assert!(html.contains("Youth Programs"));
}

#[test]
fn test_statement_year_filter_on_stdout() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args([
            "statement",
            "Marcus Lee",
            "--entity",
            "awakenings",
            "--year",
            "2024",
        ])
        .output()
        .expect("run statement");
    assert!(output.status.success());

    let html = String::from_utf8_lossy(&output.stdout);
    // Only the 2024 check remains in the detail.
    assert_eq!(html.matches("class=\"detail-row\"").count(), 1);
    assert!(html.contains("Oct 05, 2024"));
    assert!(!html.contains("Jan 15, 2025"));
}

#[test]
fn test_check_passes_on_seed_data() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["check", "--json"])
        .output()
        .expect("run check");
    assert!(output.status.success());

    let payload = json_stdout(&output);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["errors"].as_u64(), Some(0));
}

#[test]
fn test_check_fails_on_broken_dataset() {
    let home = test_home();
    run_init(&home);

    // Point a donation at an organization that does not exist.
    let data_path = home.data.join("coffer").join("coffer.json");
    let raw = std::fs::read_to_string(&data_path).expect("read dataset");
    let broken = raw.replacen("\"entity\": \"bonfire\"", "\"entity\": \"ghosts\"", 1);
    assert_ne!(raw, broken);
    std::fs::write(&data_path, broken).expect("write dataset");

    let output = coffer(&home).arg("check").output().expect("run check");
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_add_is_acknowledged_not_persisted() {
    let home = test_home();
    run_init(&home);

    let before = coffer(&home)
        .args(["donors", "list", "--json", "--entity", "awakenings"])
        .output()
        .expect("run donors list");
    let before_count = json_stdout(&before)["totals"]["count"].as_u64().unwrap();

    let output = coffer(&home)
        .args([
            "donors",
            "add",
            "--entity",
            "awakenings",
            "--name",
            "Quinn Marsh",
            "--email",
            "quinn.marsh@example.org",
            "--no-input",
        ])
        .output()
        .expect("run donors add");
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not persisted"), "stdout: {}", stdout);

    let after = coffer(&home)
        .args(["donors", "list", "--json", "--entity", "awakenings"])
        .output()
        .expect("run donors list");
    let after_count = json_stdout(&after)["totals"]["count"].as_u64().unwrap();
    assert_eq!(before_count, after_count);
}

#[test]
fn test_add_requires_concrete_entity() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args([
            "donors",
            "add",
            "--name",
            "Quinn Marsh",
            "--email",
            "quinn.marsh@example.org",
            "--no-input",
        ])
        .output()
        .expect("run donors add");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--entity"), "stderr: {}", stderr);
}

#[test]
fn test_assign_unassigned_donation() {
    let home = test_home();
    run_init(&home);

    // gift-0108 is seeded without a donor.
    let output = coffer(&home)
        .args(["donations", "assign", "gift-0108", "Sarah Johnson"])
        .output()
        .expect("run donations assign");
    assert!(
        output.status.success(),
        "assign failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not persisted"), "stdout: {}", stdout);
}

#[test]
fn test_assign_rejects_already_assigned() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donations", "assign", "gift-0101", "Marcus Lee"])
        .output()
        .expect("run donations assign");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already assigned"), "stderr: {}", stderr);
}

#[test]
fn test_assign_unknown_donation_exits_not_found() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donations", "assign", "gift-9999", "Sarah Johnson"])
        .output()
        .expect("run donations assign");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_invalid_filter_reports_error() {
    let home = test_home();
    run_init(&home);

    let output = coffer(&home)
        .args(["donors", "list", "--status", "bogus"])
        .output()
        .expect("run donors list");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus"), "stderr: {}", stderr);
}

#[test]
fn test_no_command_prints_quickstart() {
    let home = test_home();

    let output = coffer(&home).output().expect("run bare coffer");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quickstart"));
    assert!(stdout.contains("coffer init"));
}

#[test]
fn test_data_flag_overrides_config() {
    let home = test_home();
    run_init(&home);

    let other = test_home();
    run_init(&other);
    let other_data = other.data.join("coffer").join("coffer.json");

    let output = coffer(&home)
        .args([
            "orgs",
            "list",
            "--json",
            "--data",
            other_data.to_str().unwrap(),
        ])
        .output()
        .expect("run orgs list");
    assert!(output.status.success());
    let payload = json_stdout(&output);
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
}
