#![allow(clippy::expect_used)]

use std::io::Write;

use msacheck::application::config::AppConfig;
use msacheck::domain::value_objects::subcommand::Subcommand;
use msacheck::infrastructure::sources::snapshot::SnapshotSource;
use msacheck::presentation::cli::commands::check::{check, open_snapshot, CheckOutcome};

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> SnapshotSource {
    SnapshotSource::open(&fixture_path(name)).expect("Failed to load fixture")
}

fn config_from(toml_str: &str) -> AppConfig {
    let mut tmpfile = tempfile::NamedTempFile::new().expect("create tempfile");
    tmpfile
        .write_all(toml_str.as_bytes())
        .expect("write tmpfile");
    AppConfig::load_from(tmpfile.path()).expect("load config")
}

fn dump_line(name: &str, value: &str) -> String {
    format!("{name:<40}{value}\n")
}

#[test]
fn pools_output_matches_plugin_layout() {
    colored::control::set_override(false);
    let source = load_fixture("msa_healthy.json");
    let config = config_from(
        r#"
[thresholds]
pool_size_warning = 85
pool_size_critical = 95
"#,
    );
    let CheckOutcome { output, exit_code } = check(&source, Subcommand::Pools, &config, false);
    assert_eq!(exit_code, 0);

    let mut expected = String::new();
    expected.push_str("|A GB=800.0;850.0;950.0;0;1000.0\n");
    expected.push_str("|B GB=100.0;425.0;475.0;0;500.0\n");
    expected.push_str("\n\n");
    expected.push_str("OK - A is OK.\nOK - B is OK.\n");
    expected.push_str("\n\n");
    for (name, serial, size, avail) in [
        ("A", "00c0ffA000", "1000.0GB", "200.0GB"),
        ("B", "00c0ffB000", "500.0GB", "400.0GB"),
    ] {
        expected.push_str(&dump_line("pool name", name));
        expected.push_str(&dump_line("pool health", "OK"));
        expected.push_str(&dump_line("pool serial", serial));
        expected.push_str(&dump_line("pool owner controller", name));
        expected.push_str(&dump_line("pool type", "Virtual"));
        expected.push_str(&dump_line("pool size", size));
        expected.push_str(&dump_line("pool available", avail));
        expected.push_str(&dump_line("pool health reason", ""));
        expected.push_str(&dump_line("pool health recommendation", ""));
        expected.push_str("\n\n");
    }
    assert_eq!(output, expected);
}

#[test]
fn critical_rollup_prints_warning_devices_after_critical() {
    colored::control::set_override(false);
    let source = load_fixture("msa_degraded.json");
    let config = config_from(
        r"
[thresholds]
disk_life_left_limit = 20
disk_temp_warning = 40
disk_temp_critical = 50
",
    );
    let outcome = check(&source, Subcommand::Disks, &config, false);
    assert_eq!(outcome.exit_code, 2);
    assert!(outcome.output.contains(
        "\n\n\nCRITICAL - disk_01.03 temperature 55 C.\nWARNING - disk_01.02 life left is 12 %.\n\n\n"
    ));
    assert!(!outcome.output.contains("disk_01.01 is OK."));
}

#[test]
fn excluded_device_appears_only_in_dump() {
    colored::control::set_override(false);
    let source = load_fixture("msa_degraded.json");
    let config = config_from(
        r#"
[ignore]
fc_ports = ["b2"]
"#,
    );
    let outcome = check(&source, Subcommand::Ports, &config, false);
    assert_eq!(outcome.exit_code, 0);
    assert!(!outcome.output.contains("B2 FC port"));
    assert!(outcome.output.contains(&dump_line("FC port name", "B2")));
    assert!(outcome.output.contains(&dump_line("FC port status", "Disconnected")));
}

#[test]
fn misconfigured_thresholds_abort_with_warning() {
    colored::control::set_override(false);
    let source = load_fixture("msa_healthy.json");
    let config = config_from(
        r"
[thresholds]
sensor_temp_warning = 90
sensor_temp_critical = 80
",
    );
    let outcome = check(&source, Subcommand::SensorStatus, &config, false);
    assert_eq!(outcome.exit_code, 1);
    assert_eq!(
        outcome.output,
        "WARNING - sensor temperature warning threshold must be lower than critical threshold (90 > 80)\n"
    );
}

#[test]
fn capture_missing_a_property_aborts_with_warning() {
    colored::control::set_override(false);
    let source = SnapshotSource::from_json(r#"{"pools": [{"name": "A", "health": "OK"}]}"#)
        .expect("parse capture");
    let outcome = check(&source, Subcommand::Pools, &AppConfig::default(), false);
    assert_eq!(outcome.exit_code, 1);
    assert_eq!(
        outcome.output,
        "WARNING - pool serial error. Please check output!\n"
    );
}

#[test]
fn unparseable_metric_aborts_with_warning() {
    colored::control::set_override(false);
    let source = SnapshotSource::from_json(
        r#"{"fan": [{"name": "Fan 1", "health": "OK", "status": "Up", "status-ses": "OK",
                     "speed": "fast", "location": "", "position": "", "health-reason": "",
                     "health-recommendation": ""}]}"#,
    )
    .expect("parse capture");
    let config = config_from("[thresholds]\nfan_speed_low_limit = 500\n");
    let outcome = check(&source, Subcommand::Fans, &config, false);
    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.output.starts_with("WARNING - Fan 1 fan speed: "));
}

#[test]
fn snapshot_path_from_config_is_opened() {
    let config = config_from(&format!(
        "[source]\nsnapshot = {:?}\n",
        fixture_path("msa_healthy.json").display().to_string()
    ));
    let source = open_snapshot(config.source.snapshot.as_deref()).expect("open snapshot");
    let outcome = check(&source, Subcommand::System, &config, false);
    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.output.contains("OK - MSA 2050 SAN is OK."));
}
