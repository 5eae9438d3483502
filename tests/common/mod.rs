#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Instant every test evaluates time windows at.
pub const NOW: &str = "2024-10-12T08:00:00Z";

/// One minute before [`NOW`].
pub const NOW_MINUS_1M: &str = "2024-10-12T07:59:00Z";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config/floodguard")
    }

    pub fn write_config(&self, raw: &str) {
        fs::create_dir_all(self.config_dir()).expect("create config dir");
        fs::write(self.config_dir().join("config.toml"), raw).expect("write config");
    }

    pub fn write_file(&self, name: &str, raw: &str) -> PathBuf {
        let path = self.home.join(name);
        fs::write(&path, raw).expect("write fixture file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("floodguard");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .arg("--quiet-alarm");
        cmd
    }

    pub fn run_json_at(&self, now: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(["--json", "--now", now])
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        self.run_json_at(NOW, args)
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(["--json", "--now", NOW])
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn seeded() -> Self {
        let env = Self::new();
        let seed = env.run_json(&["demo", "seed"]);
        assert_eq!(seed["data"], 6);
        env
    }
}

pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|r| r["id"].as_str().expect("id").to_string())
        .collect()
}
