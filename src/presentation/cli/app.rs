use clap::{Args, Parser};
use std::path::PathBuf;

use crate::domain::value_objects::exclusion::IgnoreLists;
use crate::domain::value_objects::subcommand::Subcommand;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// check_msa: storage array health check for Icinga-style schedulers
///
/// Evaluates one device family of the array and exits with the plugin
/// status code (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
#[derive(Parser, Debug)]
#[command(name = "check_msa")]
#[command(version, about, long_about)]
#[command(after_help = "Examples:
  check_msa --snapshot array.json --subcommand system
  check_msa --snapshot array.json --subcommand disks --disk-life-left-limit 85 --disk-poh-limit 40000 --disk-temp-warning 40 --disk-temp-critical 50 --media-errors-1-limit 1
  check_msa --snapshot array.json --subcommand ports --ignore-fc-port a3 --ignore-fc-port a4
  check_msa --snapshot array.json --subcommand sensor-status --sensor-temp-warning 50 --sensor-temp-critical 60")]
pub struct Cli {
    /// Device family to check
    #[arg(long, value_name = "FAMILY")]
    pub subcommand: Subcommand,

    /// JSON capture of the array's listings (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Color severity prefixes
    #[arg(long)]
    pub color: bool,

    #[command(flatten)]
    pub ignore: IgnoreArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Devices left out of evaluation, per family. Repeatable.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Ignore lists")]
pub struct IgnoreArgs {
    /// Ignore a controller in "controllers", e.g. --ignore-controller B
    #[arg(long = "ignore-controller", value_name = "NAME")]
    pub controllers: Vec<String>,

    /// Ignore a disk in "disks", e.g. --ignore-disk disk_01.11
    #[arg(long = "ignore-disk", value_name = "NAME")]
    pub disks: Vec<String>,

    /// Ignore a fan in "fans", e.g. --ignore-fan "Fan 2"
    #[arg(long = "ignore-fan", value_name = "NAME")]
    pub fans: Vec<String>,

    /// Ignore a FRU in "frus", e.g. --ignore-fru "MEMORY CARD"
    #[arg(long = "ignore-fru", value_name = "NAME")]
    pub frus: Vec<String>,

    /// Ignore an FC port in "ports", e.g. --ignore-fc-port a1
    #[arg(long = "ignore-fc-port", value_name = "NAME")]
    pub fc_ports: Vec<String>,

    /// Ignore a management port in "network-parameters", e.g. --ignore-mgmt-port mgmtport_b
    #[arg(long = "ignore-mgmt-port", value_name = "NAME")]
    pub mgmt_ports: Vec<String>,

    /// Ignore a pool in "pools", e.g. --ignore-pool B
    #[arg(long = "ignore-pool", value_name = "NAME")]
    pub pools: Vec<String>,

    /// Ignore a power supply in "power-supplies" (exact name), e.g. --ignore-psu "PSU 2, Right"
    #[arg(long = "ignore-psu", value_name = "NAME")]
    pub psus: Vec<String>,

    /// Ignore a sensor in "sensor-status" (exact name)
    #[arg(long = "ignore-sensor", value_name = "NAME")]
    pub sensors: Vec<String>,

    /// Ignore a volume in "volumes" and "volume-statistics", e.g. --ignore-volume myvol2
    #[arg(long = "ignore-volume", value_name = "NAME")]
    pub volumes: Vec<String>,
}

/// Numeric limits. A metric without its limit is not evaluated.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Thresholds")]
pub struct ThresholdArgs {
    /// Disk life left (percent) at or below which a disk warns
    #[arg(long)]
    pub disk_life_left_limit: Option<i64>,
    /// Disk power-on hours at or above which a disk warns
    #[arg(long)]
    pub disk_poh_limit: Option<i64>,
    /// Disk temperature warning (C)
    #[arg(long)]
    pub disk_temp_warning: Option<i64>,
    /// Disk temperature critical (C)
    #[arg(long)]
    pub disk_temp_critical: Option<i64>,
    /// Controller/CPU temperature warning in "sensor-status" (C)
    #[arg(long)]
    pub sensor_temp_warning: Option<i64>,
    /// Controller/CPU temperature critical in "sensor-status" (C)
    #[arg(long)]
    pub sensor_temp_critical: Option<i64>,
    /// Fan speed (rpm) at or below which a fan warns
    #[arg(long)]
    pub fan_speed_low_limit: Option<i64>,
    /// Pool usage warning in percent
    #[arg(long)]
    pub pool_size_warning: Option<i64>,
    /// Pool usage critical in percent
    #[arg(long)]
    pub pool_size_critical: Option<i64>,
    /// Volume usage warning in percent
    #[arg(long)]
    pub volume_size_warning: Option<i64>,
    /// Volume usage critical in percent
    #[arg(long)]
    pub volume_size_critical: Option<i64>,
    #[arg(long)]
    pub media_errors_1_limit: Option<i64>,
    #[arg(long)]
    pub media_errors_2_limit: Option<i64>,
    #[arg(long)]
    pub nonmedia_errors_1_limit: Option<i64>,
    #[arg(long)]
    pub nonmedia_errors_2_limit: Option<i64>,
    #[arg(long)]
    pub block_reassigns_1_limit: Option<i64>,
    #[arg(long)]
    pub block_reassigns_2_limit: Option<i64>,
    #[arg(long)]
    pub bad_blocks_1_limit: Option<i64>,
    #[arg(long)]
    pub bad_blocks_2_limit: Option<i64>,
}

impl From<IgnoreArgs> for IgnoreLists {
    fn from(args: IgnoreArgs) -> Self {
        Self {
            controllers: args.controllers,
            disks: args.disks,
            fans: args.fans,
            frus: args.frus,
            fc_ports: args.fc_ports,
            mgmt_ports: args.mgmt_ports,
            pools: args.pools,
            psus: args.psus,
            sensors: args.sensors,
            volumes: args.volumes,
        }
    }
}

impl From<ThresholdArgs> for ThresholdSet {
    fn from(args: ThresholdArgs) -> Self {
        Self {
            disk_life_left_limit: args.disk_life_left_limit,
            disk_poh_limit: args.disk_poh_limit,
            disk_temp_warning: args.disk_temp_warning,
            disk_temp_critical: args.disk_temp_critical,
            sensor_temp_warning: args.sensor_temp_warning,
            sensor_temp_critical: args.sensor_temp_critical,
            fan_speed_low_limit: args.fan_speed_low_limit,
            pool_size_warning: args.pool_size_warning,
            pool_size_critical: args.pool_size_critical,
            volume_size_warning: args.volume_size_warning,
            volume_size_critical: args.volume_size_critical,
            media_errors_1_limit: args.media_errors_1_limit,
            media_errors_2_limit: args.media_errors_2_limit,
            nonmedia_errors_1_limit: args.nonmedia_errors_1_limit,
            nonmedia_errors_2_limit: args.nonmedia_errors_2_limit,
            block_reassigns_1_limit: args.block_reassigns_1_limit,
            block_reassigns_2_limit: args.block_reassigns_2_limit,
            bad_blocks_1_limit: args.bad_blocks_1_limit,
            bad_blocks_2_limit: args.bad_blocks_2_limit,
        }
    }
}
