#![allow(clippy::expect_used)]

use msacheck::application::services::probe::ProbeService;
use msacheck::application::services::report::Report;
use msacheck::domain::value_objects::exclusion::IgnoreLists;
use msacheck::domain::value_objects::severity::Severity;
use msacheck::domain::value_objects::subcommand::Subcommand;
use msacheck::domain::value_objects::thresholds::ThresholdSet;
use msacheck::infrastructure::sources::snapshot::SnapshotSource;

fn load_fixture(name: &str) -> SnapshotSource {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    SnapshotSource::open(&path).expect("Failed to load fixture")
}

fn all_thresholds() -> ThresholdSet {
    ThresholdSet {
        disk_life_left_limit: Some(20),
        disk_poh_limit: Some(40000),
        disk_temp_warning: Some(40),
        disk_temp_critical: Some(50),
        sensor_temp_warning: Some(70),
        sensor_temp_critical: Some(80),
        fan_speed_low_limit: Some(500),
        pool_size_warning: Some(85),
        pool_size_critical: Some(95),
        volume_size_warning: Some(85),
        volume_size_critical: Some(95),
        media_errors_1_limit: Some(1),
        media_errors_2_limit: Some(1),
        nonmedia_errors_1_limit: Some(1),
        nonmedia_errors_2_limit: Some(1),
        block_reassigns_1_limit: Some(1),
        block_reassigns_2_limit: Some(1),
        bad_blocks_1_limit: Some(1),
        bad_blocks_2_limit: Some(1),
    }
}

fn run(fixture: &str, subcommand: Subcommand, ignore: &IgnoreLists) -> Report {
    let source = load_fixture(fixture);
    let thresholds = all_thresholds();
    ProbeService::new(&source, &thresholds, ignore)
        .run(subcommand)
        .expect("probe run")
}

fn lines(findings: &[impl ToString]) -> Vec<String> {
    findings.iter().map(ToString::to_string).collect()
}

#[test]
fn healthy_array_is_ok_for_every_family() {
    for subcommand in Subcommand::ALL {
        let report = run("msa_healthy.json", subcommand, &IgnoreLists::default());
        assert_eq!(report.severity(), Severity::Ok, "{subcommand}");
        assert_eq!(report.exit_code(), 0, "{subcommand}");
        assert!(!report.records().is_empty(), "{subcommand}");
    }
}

#[test]
fn degraded_controller_warns_flat_and_rolls_up_ok() {
    let report = run("msa_degraded.json", Subcommand::Controllers, &IgnoreLists::default());
    assert_eq!(
        lines(report.flat()),
        [
            "WARNING - B controller health is Degraded!",
            "WARNING - B controller redundancy status is Operational but not redundant!",
        ]
    );
    assert_eq!(lines(report.rollup()), ["OK - A is OK.", "OK - B is OK."]);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn degraded_disks_roll_up_worst_per_device() {
    let report = run("msa_degraded.json", Subcommand::Disks, &IgnoreLists::default());
    assert!(report.flat().is_empty());
    assert_eq!(
        lines(report.rollup()),
        [
            "OK - disk_01.01 is OK.",
            "WARNING - disk_01.02 life left is 12 %.",
            "CRITICAL - disk_01.03 temperature 55 C.",
            "WARNING - disk_01.04 has 'Media Errors Port 1' 4 errors. (limit: 1).",
        ]
    );
    let visible: Vec<String> = report.visible_rollup().iter().map(ToString::to_string).collect();
    assert_eq!(
        visible,
        [
            "CRITICAL - disk_01.03 temperature 55 C.",
            "WARNING - disk_01.02 life left is 12 %.",
            "WARNING - disk_01.04 has 'Media Errors Port 1' 4 errors. (limit: 1).",
        ]
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn disk_perf_lines_follow_device_then_rule_order() {
    let report = run("msa_healthy.json", Subcommand::Disks, &IgnoreLists::default());
    let perf = lines(report.perf_lines());
    // life left, power on hours, temperature and eight error counters per disk
    assert_eq!(perf.len(), 4 * 11);
    assert_eq!(perf[0], "|disk_01.01 life left=100%;20;;0;100");
    assert_eq!(perf[1], "|disk_01.01 power on hours=12001;40000;;0;");
    assert_eq!(perf[2], "|disk_01.01 temperature=32;40;50;0;");
    assert_eq!(perf[3], "|disk_01.01 Media Errors Port 1=0;1;;0;100");
    assert_eq!(perf[11], "|disk_01.02 life left=100%;20;;0;100");
}

#[test]
fn disk_group_status_carries_description() {
    let report = run("msa_healthy.json", Subcommand::DiskGroups, &IgnoreLists::default());
    assert_eq!(
        lines(report.flat()),
        ["OK - dgA01 disk-group status is FTOL. Fault tolerant and online."]
    );
    assert_eq!(lines(report.rollup()), ["OK - dgA01 is OK."]);

    let report = run("msa_degraded.json", Subcommand::DiskGroups, &IgnoreLists::default());
    assert_eq!(
        lines(report.flat()),
        ["WARNING - dgA01 disk-group status is FTDN. Fault tolerant with a down disk. \
          The disk group is online and fault tolerant, but some of its disks are down.!"]
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn slow_fan_warns() {
    let report = run("msa_degraded.json", Subcommand::Fans, &IgnoreLists::default());
    assert_eq!(
        lines(report.rollup()),
        [
            "OK - Fan 1 is OK.",
            "WARNING - Fan 2 speed 300 rpm.",
            "OK - Fan 3 is OK.",
            "OK - Fan 4 is OK.",
        ]
    );
    assert!(lines(report.perf_lines()).contains(&"|Fan 2 speed=300;500;;0;".to_string()));
    assert_eq!(report.exit_code(), 1);

    let ignore = IgnoreLists {
        fans: vec!["Fan 2".to_string()],
        ..IgnoreLists::default()
    };
    let report = run("msa_degraded.json", Subcommand::Fans, &ignore);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.records().len(), 4);
}

#[test]
fn full_pool_is_critical() {
    let report = run("msa_degraded.json", Subcommand::Pools, &IgnoreLists::default());
    assert_eq!(
        lines(report.perf_lines()),
        [
            "|A GB=800.0;850.0;950.0;0;1000.0",
            "|B GB=480.0;425.0;475.0;0;500.0",
        ]
    );
    assert_eq!(
        lines(report.rollup()),
        [
            "OK - A is OK.",
            "CRITICAL - B usage is 96.0% (480.0 GB/500.0 GB).",
        ]
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn ignored_pool_uses_pool_list_upper_cased() {
    let ignore = IgnoreLists {
        pools: vec!["b".to_string()],
        controllers: vec!["a".to_string()],
        ..IgnoreLists::default()
    };
    let report = run("msa_degraded.json", Subcommand::Pools, &ignore);
    assert_eq!(lines(report.rollup()), ["OK - A is OK."]);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn unexpected_psu_status_is_unknown() {
    let report = run("msa_degraded.json", Subcommand::PowerSupplies, &IgnoreLists::default());
    assert_eq!(
        lines(report.flat()),
        ["UNKNOWN - PSU 2, Right psu status is Rebooting."]
    );
    assert_eq!(report.exit_code(), 3);
}

#[test]
fn hot_cpu_sensor_is_critical() {
    let report = run("msa_degraded.json", Subcommand::SensorStatus, &IgnoreLists::default());
    assert_eq!(
        lines(report.perf_lines()),
        [
            "|CPU Temperature-Ctlr A temperature=85;70;80;0;",
            "|Disk Controller Temperature-Ctlr A temperature=52;70;80;0;",
        ]
    );
    assert_eq!(
        lines(report.rollup()),
        [
            "CRITICAL - CPU Temperature-Ctlr A temperature 85 C.",
            "OK - Disk Controller Temperature-Ctlr A is OK.",
            "OK - Capacitor Pack Voltage-Ctlr A is OK.",
        ]
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn disconnected_port_warns_unless_ignored() {
    let report = run("msa_degraded.json", Subcommand::Ports, &IgnoreLists::default());
    assert_eq!(
        lines(report.flat()),
        [
            "WARNING - B2 FC port status is Disconnected!",
            "WARNING - B2 FC port health is Degraded!",
        ]
    );
    assert_eq!(report.exit_code(), 1);

    let ignore = IgnoreLists {
        fc_ports: vec!["b2".to_string()],
        ..IgnoreLists::default()
    };
    let report = run("msa_degraded.json", Subcommand::Ports, &ignore);
    assert!(report.flat().is_empty());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn volume_statistics_are_perf_only() {
    let report = run("msa_healthy.json", Subcommand::VolumeStatistics, &IgnoreLists::default());
    assert_eq!(
        lines(report.perf_lines()),
        [
            "|vol1 iops=120;;;0; vol1 transfer speed=5.12MB;;;0;",
            "|vol2 iops=0;;;0; vol2 transfer speed=0.0MB;;;0;",
        ]
    );
    assert!(report.flat().is_empty());
    assert!(report.rollup().is_empty());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn volume_usage_is_measured_against_allocation() {
    let report = run("msa_healthy.json", Subcommand::Volumes, &IgnoreLists::default());
    assert_eq!(
        lines(report.perf_lines()),
        [
            "|vol1 GB=1500.0;1700.0;1900.0;0;2000.0",
            "|vol2 GB=10.0;85.0;95.0;0;100.0",
        ]
    );
}

#[test]
fn management_port_ignore_is_lower_cased() {
    let ignore = IgnoreLists {
        mgmt_ports: vec!["MGMTPORT_B".to_string()],
        ..IgnoreLists::default()
    };
    let report = run("msa_healthy.json", Subcommand::NetworkParameters, &ignore);
    assert_eq!(lines(report.rollup()), ["OK - mgmtport_a is OK."]);
    assert_eq!(report.records().len(), 2);
}
