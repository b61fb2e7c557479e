// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const DEPLOYER: &str = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

/// `netcfg` running in an empty directory with an empty environment.
fn netcfg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("netcfg").unwrap();
    cmd.current_dir(dir).env_clear();
    cmd
}

fn with_accounts(cmd: &mut Command) -> &mut Command {
    cmd.env("ACCOUNT_1_PRIVATE_KEY", DEV_KEY);
    for i in 2..=10 {
        cmd.env(format!("ACCOUNT_{i}_PRIVATE_KEY"), format!("0x{i:064x}"));
    }
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn stderr(cmd: &mut Command) -> String {
    let output = cmd.assert().failure().get_output().stderr.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn check_names_every_missing_goerli_variable() {
    let dir = TempDir::new().unwrap();
    let err = stderr(netcfg(dir.path()).args(["check", "-n", "goerli", "--verify"]));
    assert!(err.contains("ALCHEMY_GOERLI_API_KEY"));
    assert!(err.contains("DEPLOYER_PRIVATE_KEY"));
    assert!(err.contains("ETHERSCAN_API_KEY"));
}

#[test]
fn check_localhost_needs_nothing() {
    let dir = TempDir::new().unwrap();
    netcfg(dir.path())
        .args(["check", "-n", "localhost"])
        .assert()
        .success();
}

#[test]
fn check_local_and_simulated_need_nothing() {
    let dir = TempDir::new().unwrap();
    netcfg(dir.path()).arg("check").assert().success();
    netcfg(dir.path())
        .args(["check", "-n", "localhost", "-n", "hardhat"])
        .assert()
        .success();
}

#[test]
fn accounts_lists_tenth_missing_key() {
    let dir = TempDir::new().unwrap();
    let mut cmd = netcfg(dir.path());
    with_accounts(&mut cmd).env_remove("ACCOUNT_10_PRIVATE_KEY");
    let err = stderr(cmd.args(["accounts", "-n", "hardhat"]));
    assert!(err.contains("missing configuration: ACCOUNT_10_PRIVATE_KEY"));
}

#[test]
fn manifest_relaxes_check() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("NetCfg.toml"), "[requirements]\ngoerli = []\n").unwrap();
    netcfg(dir.path())
        .args(["check", "-n", "goerli"])
        .assert()
        .success();
}

#[test]
fn manifest_tightens_check() {
    let dir = TempDir::new().unwrap();
    let keys: Vec<_> = (1..=10)
        .map(|i| format!("\"ACCOUNT_{i}_PRIVATE_KEY\""))
        .collect();
    fs::write(
        dir.path().join("NetCfg.toml"),
        format!("[requirements]\nhardhat = [{}]\n", keys.join(", ")),
    )
    .unwrap();
    let mut cmd = netcfg(dir.path());
    with_accounts(&mut cmd).env_remove("ACCOUNT_10_PRIVATE_KEY");
    let err = stderr(cmd.args(["check", "-n", "hardhat"]));
    assert!(err.contains("missing configuration: ACCOUNT_10_PRIVATE_KEY"));
}

#[test]
fn unknown_network_fails() {
    let dir = TempDir::new().unwrap();
    let err = stderr(netcfg(dir.path()).args(["check", "-n", "mainnet"]));
    assert!(err.contains("unknown network: mainnet"));
}

#[test]
fn show_prints_host_config() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(netcfg(dir.path()).args(["show", "-n", "localhost"]));
    assert_eq!(json["networks"]["localhost"]["url"], "http://127.0.0.1:8545");
    assert_eq!(json["solidity"]["version"], "0.8.18");
    assert_eq!(json["typechain"]["target"], "ethers-v6");
    assert!(json["networks"]["goerli"]["url"].is_null());
}

#[test]
fn show_masks_secrets_unless_revealed() {
    let dir = TempDir::new().unwrap();
    let mut masked = netcfg(dir.path());
    masked
        .env("ALCHEMY_GOERLI_API_KEY", "abc123")
        .env("DEPLOYER_PRIVATE_KEY", DEPLOYER)
        .args(["show", "-n", "goerli"]);
    let json = stdout_json(&mut masked);
    assert_eq!(
        json["networks"]["goerli"]["url"],
        "https://eth-goerli.g.alchemy.com/v2/<redacted>"
    );

    let mut revealed = netcfg(dir.path());
    revealed
        .env("ALCHEMY_GOERLI_API_KEY", "abc123")
        .env("DEPLOYER_PRIVATE_KEY", DEPLOYER)
        .args(["show", "-n", "goerli", "--reveal"]);
    let json = stdout_json(&mut revealed);
    assert_eq!(
        json["networks"]["goerli"]["url"],
        "https://eth-goerli.g.alchemy.com/v2/abc123"
    );
    assert_eq!(json["networks"]["goerli"]["accounts"][0], DEPLOYER);
}

#[test]
fn env_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join("deploy.env");
    fs::write(
        &env_file,
        format!("ALCHEMY_GOERLI_API_KEY=abc123\nDEPLOYER_PRIVATE_KEY={DEPLOYER}\n"),
    )
    .unwrap();
    netcfg(dir.path())
        .args(["check", "-n", "goerli", "--env-file"])
        .arg(&env_file)
        .assert()
        .success();
}

#[test]
fn default_dotenv_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "ETHERSCAN_API_KEY=scan\n").unwrap();
    netcfg(dir.path())
        .args(["check", "-n", "localhost", "--verify"])
        .assert()
        .success();
}

#[test]
fn manifest_sets_default_network() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("NetCfg.toml"),
        "default_network = \"localhost\"\n",
    )
    .unwrap();
    netcfg(dir.path()).arg("check").assert().success();
}

#[test]
fn explicit_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let err = stderr(netcfg(dir.path()).args(["--manifest", "nope.toml", "networks"]));
    assert!(err.contains("missing manifest"));
}

#[test]
fn accounts_lists_simulated_signers() {
    let dir = TempDir::new().unwrap();
    let mut cmd = netcfg(dir.path());
    with_accounts(&mut cmd).args(["accounts", "-n", "hardhat"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains(DEV_ADDRESS));
    assert!(stdout.contains("ACCOUNT_10_PRIVATE_KEY"));
    assert!(stdout.contains("10000.000000000000000000 ETH"));
}

#[test]
fn networks_lists_every_profile() {
    let dir = TempDir::new().unwrap();
    let output = netcfg(dir.path())
        .arg("networks")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    for name in ["goerli", "localhost", "hardhat", "etherscan"] {
        assert!(stdout.contains(name), "{name} not listed");
    }
    assert!(stdout.contains("ALCHEMY_GOERLI_API_KEY"));
}
