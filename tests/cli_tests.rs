//! Integration tests for the credline binary
//!
//! Every test runs against a throwaway data directory and reads step
//! contents from the fixtures, so nothing touches the network or the
//! user's configuration.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn credline(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("credline").unwrap();
    cmd.env("CREDLINE_DATA_DIR", data_dir.path())
        .env_remove("CREDLINE_ITEMS_URL")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_items_prints_every_step() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .arg("items")
        .arg("--items-file")
        .arg(fixture("items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Received 3 item(s)"))
        .stdout(predicate::str::contains("Step 1: Amount"))
        .stdout(predicate::str::contains("₹100000 - ₹487891"))
        .stdout(predicate::str::contains("2. ₹5,580 /mo 9 months [recommended]"))
        .stdout(predicate::str::contains("Footer:    Create your own plan"))
        .stdout(predicate::str::contains("2. ICICI BANK 003901234567"));
}

#[test]
fn test_items_reports_short_payload() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .args(["items", "--items-file"])
        .arg(fixture("items_short.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3: Account (missing)"))
        .stdout(predicate::str::contains("Not enough data to run the wizard."));
}

#[test]
fn test_items_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .args(["items", "--items-file"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch step contents"));
}

#[test]
fn test_simulate_commits_all_steps() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .args(["simulate", "--amount", "200000", "--plan", "2", "--account", "2"])
        .arg("--items-file")
        .arg(fixture("items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Credit amount  ₹200000"))
        .stdout(predicate::str::contains("EMI            ₹5,580 /mo 9 months"))
        .stdout(predicate::str::contains("Bank           ICICI BANK"))
        .stdout(predicate::str::contains("State: AllCommitted"));
}

#[test]
fn test_simulate_defaults_to_first_options() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .arg("simulate")
        .arg("--items-file")
        .arg(fixture("items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("₹150000"))
        .stdout(predicate::str::contains("₹4,247 /mo 12 months"))
        .stdout(predicate::str::contains("HDFC BANK"));
}

#[test]
fn test_simulate_with_two_items_fails() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .arg("simulate")
        .arg("--items-file")
        .arg(fixture("items_short.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Simulation failed"));
}

#[test]
fn test_simulate_rejects_amount_out_of_range() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .args(["simulate", "--amount", "900000"])
        .arg("--items-file")
        .arg(fixture("items.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();
    credline(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized credline"));
    assert!(dir.path().join("config.json").exists());

    credline(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("\"amount_preset\": 150000.0"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ \"min_overlay_height\": 0 }").unwrap();

    credline(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_overlay_height"));
}
