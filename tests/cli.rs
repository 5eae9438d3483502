mod common;

use common::{TestEnv, NOW};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn empty_list_in_text_mode() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--now", NOW, "report", "list"])
        .assert()
        .success()
        .stdout(contains("no reports"));
}

#[test]
fn danger_warning_in_text_mode() {
    let env = TestEnv::seeded();
    env.cmd()
        .args(["--now", NOW, "location", "set", "10.885", "106.781"])
        .assert()
        .success()
        .stdout(contains("WARNING: danger zone 0.0 km away (report demo-1, High risk)"))
        .stdout(contains("siren triggered"));
}

#[test]
fn unknown_report_prints_error_to_stderr() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--now", NOW, "report", "show", "ghost"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("error: report not found: ghost"));
}

#[test]
fn no_safe_zone_message() {
    let env = TestEnv::seeded();
    env.cmd()
        .args(["--now", NOW, "safe-point", "demo-3", "--radius", "0.1"])
        .assert()
        .success()
        .stdout(contains("no nearby safe zone within 0.1 km"));
}

#[test]
fn stats_line() {
    let env = TestEnv::seeded();
    env.cmd()
        .args(["--now", NOW, "stats", "--mode", "day"])
        .assert()
        .success()
        .stdout(contains("Last 12h: total=4 high_risk=2 vulnerable=2 sos=0"))
        .stdout(contains("priority: demo-1, demo-3"));
}
