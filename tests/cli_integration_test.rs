use assert_cmd::Command;
use frontdesk_roi::{FrontdeskConfig, RoiReport, DEFAULT_CONFIG_FILE};

fn frontdesk_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("frontdesk-roi").unwrap();
    // Run in an empty directory so no stray .frontdesk.toml is picked up
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_estimate_json_matches_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let output = frontdesk_cmd(dir.path())
        .args([
            "estimate",
            "--industry",
            "plumbing",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: RoiReport = serde_json::from_slice(&output.stdout).unwrap();

    // Defaults plus the plumbing preset: the worked example scenario
    assert_eq!(report.metrics.total_monthly_calls, 140.0);
    assert_eq!(report.metrics.total_missed_calls, 96.0);
    assert!((report.metrics.net_benefit - 2322.6).abs() < 1e-9);
    assert!((report.metrics.roi_percent - 223.7).abs() < 0.1);
}

#[test]
fn test_estimate_flag_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let output = frontdesk_cmd(dir.path())
        .args([
            "estimate",
            "--days-open",
            "alldays",
            "--business-hour-calls",
            "10",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: RoiReport = serde_json::from_slice(&output.stdout).unwrap();
    // 10*30 business-hour + 1*30 after-hour
    assert_eq!(report.metrics.total_monthly_calls, 330.0);
}

#[test]
fn test_estimate_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("report.md");

    frontdesk_cmd(dir.path())
        .args(["estimate", "--format", "markdown", "--output"])
        .arg(&out_path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out_path).unwrap();
    assert!(text.starts_with("# Frontdesk ROI Estimate"));
}

#[test]
fn test_presets_lists_all_industries() {
    let dir = tempfile::tempdir().unwrap();
    let output = frontdesk_cmd(dir.path()).arg("presets").output().unwrap();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("plumbing"));
    assert!(text.contains("pest_control"));
    assert!(text.contains("$1200"));
}

#[test]
fn test_init_creates_loadable_config() {
    let dir = tempfile::tempdir().unwrap();

    frontdesk_cmd(dir.path()).arg("init").assert().success();

    let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
    assert!(config_path.exists());

    // The generated file must parse under the config schema
    let config = FrontdeskConfig::load(&config_path).unwrap();
    assert_eq!(config.calls.business_hour_calls, Some(5.0));
    assert_eq!(config.output.default_format, Some("terminal".to_string()));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();

    frontdesk_cmd(dir.path()).arg("init").assert().success();
    frontdesk_cmd(dir.path()).arg("init").assert().failure();
    frontdesk_cmd(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_file_feeds_estimate() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        r#"
industry = "roofing"

[costs]
total_human_cost = 4000.0
"#,
    )
    .unwrap();

    let output = frontdesk_cmd(dir.path())
        .args(["estimate", "--format", "json", "--config"])
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: RoiReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.inputs.avg_lead_value, 1200.0);
    assert_eq!(report.inputs.total_human_cost, 4000.0);
}
