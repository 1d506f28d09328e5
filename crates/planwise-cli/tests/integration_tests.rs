//! Integration tests for planwise-cli.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A `planwise` command isolated from the user's config and environment.
fn planwise(home: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("planwise");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("PLANWISE_LOG")
        .env_remove("PLANWISE_CONFIG")
        .env_remove("PLANWISE__OUTPUT__FORMAT")
        .env_remove("PLANWISE__EXPORT__DIRECTORY")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn shell_completions() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("planwise"));
}

// ── analyze ───────────────────────────────────────────────────────────────────

#[test]
fn analyze_human_report() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("analyze")
        .arg(fixture("storefront.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis: Corner Bakery"))
        .stdout(predicate::str::contains("Complexity"))
        .stdout(predicate::str::contains("commerce"));
}

#[test]
fn analyze_json_report() {
    let home = TempDir::new().unwrap();
    let output = planwise(&home)
        .arg("analyze")
        .arg(fixture("storefront.json"))
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = stdout_json(&output);
    let score = report["complexityScore"].as_u64().unwrap();
    assert!((1..=10).contains(&score));
    assert_eq!(report["scopeEstimate"]["domainFlags"]["commerce"], true);
}

#[test]
fn analyze_reads_toml() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("analyze")
        .arg(fixture("docs-site.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis: Handbook"));
}

#[test]
fn fail_on_error_exits_with_user_error() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("analyze")
        .arg(fixture("insecure-shop.json"))
        .arg("--fail-on-error")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[error]"))
        .stderr(predicate::str::contains("blocking finding"));
}

#[test]
fn error_findings_do_not_fail_by_default() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("analyze")
        .arg(fixture("insecure-shop.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("security.ssl"));
}

#[test]
fn quiet_analyze_prints_nothing_for_clean_config() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("-q")
        .arg("analyze")
        .arg(fixture("storefront.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn env_selects_json_format() {
    let home = TempDir::new().unwrap();
    let output = planwise(&home)
        .env("PLANWISE__OUTPUT__FORMAT", "json")
        .arg("analyze")
        .arg(fixture("storefront.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_json(&output)["complexityLabel"].is_string());
}

// ── recommend ─────────────────────────────────────────────────────────────────

#[test]
fn recommend_named_fields() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("recommend")
        .arg(fixture("storefront.json"))
        .args(["framework", "payment-providers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("framework:"))
        .stdout(predicate::str::contains("paymentProviders:"));
}

#[test]
fn recommend_all_as_json() {
    let home = TempDir::new().unwrap();
    let output = planwise(&home)
        .arg("recommend")
        .arg(fixture("storefront.json"))
        .args(["--all", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let sets = stdout_json(&output);
    let sets = sets.as_array().unwrap();
    assert_eq!(sets.len(), 10);

    let payments = sets
        .iter()
        .find(|s| s["field"] == "paymentProviders")
        .unwrap();
    let chosen_again = payments["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["value"] == "stripe");
    assert!(!chosen_again);
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_prints_both_documents() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("generate")
        .arg(fixture("storefront.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("# Init Prompt: Corner Bakery"))
        .stdout(predicate::str::contains("# Development Concept: Corner Bakery"));
}

#[test]
fn generate_single_document() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("generate")
        .arg(fixture("docs-site.toml"))
        .args(["--document", "concept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Development Concept: Handbook"))
        .stdout(predicate::str::contains("Init Prompt").not());
}

#[test]
fn generate_exports_and_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("docs");

    planwise(&home)
        .arg("generate")
        .arg(fixture("storefront.json"))
        .arg("--out")
        .arg(&out)
        .arg("--with-analysis")
        .assert()
        .success()
        .stdout(predicate::str::contains("INIT_PROMPT.md"));

    assert!(out.join("INIT_PROMPT.md").is_file());
    assert!(out.join("DEVELOPMENT_CONCEPT.md").is_file());
    let analysis = fs::read_to_string(out.join("analysis.json")).unwrap();
    assert!(analysis.contains("complexityScore"));

    planwise(&home)
        .arg("generate")
        .arg(fixture("storefront.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    planwise(&home)
        .arg("generate")
        .arg(fixture("storefront.json"))
        .arg("--out")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn generate_uses_export_directory_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("planwise.toml");
    fs::write(&config, "[export]\ndirectory = \"plans\"\n").unwrap();

    planwise(&home)
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg(fixture("storefront.json"))
        .args(["-d", "init-prompt"])
        .assert()
        .success();

    assert!(home.path().join("plans").join("INIT_PROMPT.md").is_file());
    assert!(!home.path().join("plans").join("DEVELOPMENT_CONCEPT.md").exists());
}

// ── profile / catalog ─────────────────────────────────────────────────────────

#[test]
fn profile_for_target_and_framework() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["profile", "--target", "vercel", "--framework", "nextjs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next.js on Vercel"))
        .stdout(predicate::str::contains("Best practices"));
}

#[test]
fn profile_falls_back_to_generic() {
    let home = TempDir::new().unwrap();
    let output = planwise(&home)
        .args(["profile", "--framework", "qwik", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["displayName"],
        "Generic Web Application"
    );
}

#[test]
fn catalog_lists_groups_and_entries() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("payment-provider"));

    planwise(&home)
        .args(["catalog", "--group", "framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next.js"));
}

#[test]
fn catalog_dir_overlays_labels() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("catalog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("frameworks.toml"),
        "group = \"framework\"\n\n[[options]]\nid = \"qwik\"\nlabel = \"Qwik City\"\n",
    )
    .unwrap();

    planwise(&home)
        .args(["catalog", "--group", "framework", "--catalog-dir"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Qwik City"));
}

// ── init / config ─────────────────────────────────────────────────────────────

#[test]
fn init_local_then_read_back() {
    let home = TempDir::new().unwrap();

    planwise(&home)
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(home.path().join(".planwise.toml").is_file());

    planwise(&home)
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    planwise(&home)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("human"));
}

#[test]
fn config_get_reads_explicit_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    planwise(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn settings_file_from_environment() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("ci.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    planwise(&home)
        .env("PLANWISE_CONFIG", &config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn planwise_log_overrides_verbosity() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .env("PLANWISE_LOG", "planwise=info")
        .env("RUST_LOG", "off")
        .args(["catalog"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Planwise completed successfully"));
}
