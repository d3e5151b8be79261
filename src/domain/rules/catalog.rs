//! Per-family rule tables.
//!
//! Everything a family needs is declared here as data: which listings to
//! read, which property names the device, how its ignore list is
//! normalized, and which status and performance rules apply.

use crate::domain::ports::source::{prop, PropertySpec, SourceQuery};
use crate::domain::value_objects::exclusion::{CaseRule, ExclusionSet, IgnoreLists};
use crate::domain::value_objects::subcommand::Subcommand;
use crate::domain::value_objects::thresholds::{Levels, ThresholdSet};

use super::parameter::{ParameterRule, StatusDescriptions};
use super::performance::{MetricKind, PerformanceRule};

const SYSTEM: &[PropertySpec] = &[
    prop("product id", "product-id"),
    prop("system name", "system-name"),
    prop("midplane serial number", "midplane-serial-number"),
    prop("system health", "health"),
    prop("system health reason", "health-reason"),
    prop("other MC status", "other-MC-status"),
];

const CONTROLLERS: &[PropertySpec] = &[
    prop("controller id", "controller-id"),
    prop("controller model", "model"),
    prop("controller status", "status"),
    prop("controller health", "health"),
    prop("controller redundancy status", "redundancy-status"),
    prop("controller redundancy mode", "redundancy-mode"),
    prop("controller failed", "failed-over"),
    prop("controller failed reason", "fail-over-reason"),
    prop("controller serial", "serial-number"),
    prop("disk number", "disks"),
    prop("ip address", "ip-address"),
    prop("mac address", "mac-address"),
    prop("controller health reason", "health-reason"),
    prop("controller health recommendation", "health-recommendation"),
];

const DISK_GROUPS: &[PropertySpec] = &[
    prop("disk-group name", "name"),
    prop("disk-group health", "health"),
    prop("disk-group status", "status"),
    prop("disk-group raid type", "raidtype"),
    prop("disk-group related pool", "pool"),
    prop("disk-group disk count", "diskcount"),
    prop("disk-group size", "size"),
    prop("disk-group available", "freespace"),
    prop("disk-group current job", "current-job"),
    prop("disk-group health reason", "health-reason"),
    prop("disk-group health recomm.", "health-recommendation"),
];

const DRIVES: &[PropertySpec] = &[
    prop("disk id", "durable-id"),
    prop("disk slot", "slot"),
    prop("disk status", "status"),
    prop("disk health", "health"),
    prop("disk life left", "ssd-life-left"),
    prop("disk power on hours", "power-on-hours"),
    prop("disk model", "model"),
    prop("disk serial", "serial-number"),
    prop("disk architecture", "architecture"),
    prop("disk interface", "interface"),
    prop("disk transfer rate", "transfer-rate"),
    prop("disk size", "size"),
    prop("disk temperature", "temperature"),
    prop("disk owner controller", "owner"),
    prop("disk pool usage", "usage"),
    prop("disk pool", "storage-pool-name"),
    prop("disk disk-group usage", "disk-group"),
];

const DISK_STATISTICS: &[PropertySpec] = &[
    prop("disk id", "durable-id"),
    prop(MEDIA_ERRORS_1, "number-of-media-errors-1"),
    prop(MEDIA_ERRORS_2, "number-of-media-errors-2"),
    prop(NONMEDIA_ERRORS_1, "number-of-nonmedia-errors-1"),
    prop(NONMEDIA_ERRORS_2, "number-of-nonmedia-errors-2"),
    prop(BLOCK_REASSIGNS_1, "number-of-block-reassigns-1"),
    prop(BLOCK_REASSIGNS_2, "number-of-block-reassigns-2"),
    prop(BAD_BLOCKS_1, "number-of-bad-blocks-1"),
    prop(BAD_BLOCKS_2, "number-of-bad-blocks-2"),
];

const MEDIA_ERRORS_1: &str = "Media Errors Port 1";
const MEDIA_ERRORS_2: &str = "Media Errors Port 2";
const NONMEDIA_ERRORS_1: &str = "Non-media Errors Port 1";
const NONMEDIA_ERRORS_2: &str = "Non-media Errors Port 2";
const BLOCK_REASSIGNS_1: &str = "Block Reassignments Port 1";
const BLOCK_REASSIGNS_2: &str = "Block Reassignments Port 2";
const BAD_BLOCKS_1: &str = "Bad Blocks Port 1";
const BAD_BLOCKS_2: &str = "Bad Blocks Port 2";

const FANS: &[PropertySpec] = &[
    prop("fan name", "name"),
    prop("fan health", "health"),
    prop("fan status 1", "status"),
    prop("fan status 2", "status-ses"),
    prop("fan speed", "speed"),
    prop("fan location", "location"),
    prop("fan position", "position"),
    prop("fan health reason", "health-reason"),
    prop("fan health recomm.", "health-recommendation"),
];

const FRUS: &[PropertySpec] = &[
    prop("fru name", "name"),
    prop("fru description", "description"),
    prop("fru part number", "part-number"),
    prop("fru serial number", "serial-number"),
    prop("fru manufacturing date", "mfg-date"),
    prop("fru location", "fru-location"),
    prop("fru status", "fru-status"),
];

const MGMT_PORTS: &[PropertySpec] = &[
    prop("management port", "durable-id"),
    prop("management port ip address", "ip-address"),
    prop("management port health", "health"),
];

const POOLS: &[PropertySpec] = &[
    prop("pool name", "name"),
    prop("pool health", "health"),
    prop("pool serial", "serial-number"),
    prop("pool owner controller", "owner"),
    prop("pool type", "storage-type"),
    prop("pool size", "total-size"),
    prop("pool available", "total-avail"),
    prop("pool health reason", "health-reason"),
    prop("pool health recommendation", "health-recommendation"),
];

const FC_PORTS: &[PropertySpec] = &[
    prop("FC port name", "port"),
    prop("FC port type", "port-type"),
    prop("FC port status", "status"),
    prop("FC port health", "health"),
    prop("FC port actual speed", "actual-speed"),
];

const PSUS: &[PropertySpec] = &[
    prop("psu name", "name"),
    prop("psu description", "description"),
    prop("psu part number", "part-number"),
    prop("psu serial number", "serial-number"),
    prop("psu manufacturing date", "mfg-date"),
    prop("psu location", "location"),
    prop("psu status", "status"),
    prop("psu health", "health"),
    prop("psu health reason", "health-reason"),
    prop("psu health recommendation", "health-recommendation"),
];

const SENSORS: &[PropertySpec] = &[
    prop("sensor name", "sensor-name"),
    prop("sensor value", "value"),
    prop("sensor status", "status"),
];

const VOLUMES: &[PropertySpec] = &[
    prop("volume name", "volume-name"),
    prop("volume health", "health"),
    prop("volume size", "total-size"),
    prop("volume allocated size", "allocated-size"),
    prop("virtual disk name", "virtual-disk-name"),
    prop("storage pool name", "storage-pool-name"),
    prop("raid type", "raidtype"),
    prop("volume health reason", "health-reason"),
    prop("volume health recommendation", "health-recommendation"),
];

const VOLUME_STATISTICS: &[PropertySpec] = &[
    prop("volume name", "volume-name"),
    prop("bytes-per-second", "bytes-per-second"),
    prop("iops", "iops"),
];

/// Sensors whose value is a temperature in `"NN C"` form.
const TEMPERATURE_SENSORS: &[&str] = &["CPU Temperature", "Disk Controller Temperature"];

const DISK_GROUP_STATUS_CODES: &[(&str, &str)] = &[
    ("CRIT", "Critical. The disk group is online but isn't fault tolerant because some of its disks are down."),
    ("DMGD", "Damaged. The disk group is online and fault tolerant, but some of its disks are damaged."),
    ("FTDN", "Fault tolerant with a down disk. The disk group is online and fault tolerant, but some of its disks are down."),
    ("FTOL", "Fault tolerant and online."),
    ("MSNG", "Missing. The disk group is online and fault tolerant, but some of its disks are missing."),
    ("OFFL", "Offline. Either the disk group is using offline initialization, or its disks are down and data may be lost."),
    ("QTCR", "Quarantined critical. The disk group is critical with at least one inaccessible disk. For example, two disks are inaccessible in a RAID-6 disk group or one disk is inaccessible for other fault-tolerant RAID levels. If the inaccessible disks come online or if after 60 seconds from being quarantined the disk group is QTCR or QTDN, the disk group is automatically dequarantined."),
    ("QTDN", "Quarantined with a down disk. The RAID-6 disk group has one inaccessible disk. The disk group is fault tolerant but degraded. If the inaccessible disks come online or if after 60 seconds from being quarantined the disk group is QTCR or QTDN, the disk group is automatically dequarantined."),
    ("QTOF", "Quarantined offline. The disk group is offline with multiple inaccessible disks causing user data to be incomplete, or is an NRAID or RAID-0 disk group."),
    ("QTUN", "Quarantined unsupported. The disk group contains data in a format that is not supported by this system. For example, this system does not support linear disk groups."),
    ("STOP", "The disk group is stopped."),
    ("UNKN", "Unknown."),
    ("UP", "Up. The disk group is online and does not have fault-tolerant attributes"),
];

/// Everything needed to evaluate one device family.
#[derive(Debug, Clone)]
pub struct DeviceFamily {
    pub subcommand: Subcommand,
    /// Listings to read; records of later queries are merged into the
    /// records of the first one by position.
    pub queries: &'static [SourceQuery],
    /// Ignore-list normalization, `None` when the family has no ignore list.
    pub case_rule: Option<CaseRule>,
    pub parameters: Vec<ParameterRule>,
    pub performances: Vec<PerformanceRule>,
    pub descriptions: Option<StatusDescriptions>,
}

impl DeviceFamily {
    fn new(subcommand: Subcommand, queries: &'static [SourceQuery]) -> Self {
        Self {
            subcommand,
            queries,
            case_rule: None,
            parameters: Vec::new(),
            performances: Vec::new(),
            descriptions: None,
        }
    }

    fn ignoring(mut self, rule: CaseRule) -> Self {
        self.case_rule = Some(rule);
        self
    }

    fn status(mut self, rule: ParameterRule) -> Self {
        self.parameters.push(rule);
        self
    }

    fn metric(mut self, rule: PerformanceRule) -> Self {
        self.performances.push(rule);
        self
    }

    fn described_by(mut self, codes: &[(&'static str, &'static str)]) -> Self {
        self.descriptions = Some(codes.iter().copied().collect());
        self
    }

    /// Property whose value names each device.
    #[must_use]
    pub fn name_property(&self) -> &'static str {
        self.queries
            .first()
            .and_then(|q| q.properties.first())
            .map_or("", |p| p.name)
    }

    /// Builds this family's exclusion set from the per-family ignore lists.
    #[must_use]
    pub fn exclusions(&self, lists: &IgnoreLists) -> ExclusionSet {
        let Some(rule) = self.case_rule else {
            return ExclusionSet::empty();
        };
        let names = match self.subcommand {
            Subcommand::Controllers => &lists.controllers,
            Subcommand::Disks => &lists.disks,
            Subcommand::Fans => &lists.fans,
            Subcommand::Frus => &lists.frus,
            Subcommand::NetworkParameters => &lists.mgmt_ports,
            Subcommand::Pools => &lists.pools,
            Subcommand::Ports => &lists.fc_ports,
            Subcommand::PowerSupplies => &lists.psus,
            Subcommand::SensorStatus => &lists.sensors,
            Subcommand::Volumes | Subcommand::VolumeStatistics => &lists.volumes,
            Subcommand::System | Subcommand::DiskGroups => return ExclusionSet::empty(),
        };
        ExclusionSet::new(names, rule)
    }
}

fn health(property: &'static str) -> ParameterRule {
    ParameterRule::new(property, "OK", "Degraded", "Fault")
}

fn limit(value: Option<i64>) -> Option<Levels> {
    value.map(Levels::single)
}

/// Declares the rule table of `subcommand`, with levels taken from `thresholds`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn family(subcommand: Subcommand, thresholds: &ThresholdSet) -> DeviceFamily {
    match subcommand {
        Subcommand::System => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("system", SYSTEM)];
            DeviceFamily::new(subcommand, Q)
                .status(health("system health"))
                .status(ParameterRule::new(
                    "other MC status",
                    "Operational",
                    "Not Communicating",
                    "Not Operational",
                ))
        }
        Subcommand::Controllers => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("controllers", CONTROLLERS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Upper)
                .status(health("controller health"))
                .status(ParameterRule::new(
                    "controller status",
                    "Operational",
                    "Not Installed",
                    "Down",
                ))
                .status(ParameterRule::new(
                    "controller redundancy status",
                    "Redundant",
                    "Operational but not redundant",
                    "Down",
                ))
                .status(ParameterRule::new(
                    "controller redundancy mode",
                    "Active-Active ULP",
                    ["Failed Over", "Single Controller"],
                    "Down",
                ))
                .status(ParameterRule::new("controller failed", "No", "", "Yes"))
        }
        Subcommand::DiskGroups => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("disk-groups", DISK_GROUPS)];
            DeviceFamily::new(subcommand, Q)
                .status(health("disk-group health"))
                .status(ParameterRule::new(
                    "disk-group status",
                    "FTOL",
                    ["UP", "FTDN", "STOP", "MSNG"],
                    ["CRIT", "DMGD", "OFFL", "QTCR", "QTDN", "QTOF", "QTUN"],
                ))
                .described_by(DISK_GROUP_STATUS_CODES)
        }
        Subcommand::Disks => {
            const Q: &[SourceQuery] = &[
                SourceQuery::new("disks", "drives", DRIVES),
                SourceQuery::listing("disk-statistics", DISK_STATISTICS),
            ];
            let t = thresholds;
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Lower)
                .status(ParameterRule::new(
                    "disk status",
                    "Up",
                    ["Warning", "Disconnected"],
                    "Error",
                ))
                .status(health("disk health"))
                .metric(PerformanceRule::single(
                    "disk life left",
                    MetricKind::LifeLeft,
                    limit(t.disk_life_left_limit),
                ))
                .metric(PerformanceRule::single(
                    "disk power on hours",
                    MetricKind::PowerOnHours,
                    limit(t.disk_poh_limit),
                ))
                .metric(PerformanceRule::single(
                    "disk temperature",
                    MetricKind::Temperature,
                    Levels::pair(t.disk_temp_warning, t.disk_temp_critical),
                ))
                .metric(error_counter(MEDIA_ERRORS_1, t.media_errors_1_limit))
                .metric(error_counter(MEDIA_ERRORS_2, t.media_errors_2_limit))
                .metric(error_counter(NONMEDIA_ERRORS_1, t.nonmedia_errors_1_limit))
                .metric(error_counter(NONMEDIA_ERRORS_2, t.nonmedia_errors_2_limit))
                .metric(error_counter(BLOCK_REASSIGNS_1, t.block_reassigns_1_limit))
                .metric(error_counter(BLOCK_REASSIGNS_2, t.block_reassigns_2_limit))
                .metric(error_counter(BAD_BLOCKS_1, t.bad_blocks_1_limit))
                .metric(error_counter(BAD_BLOCKS_2, t.bad_blocks_2_limit))
        }
        Subcommand::Fans => {
            const Q: &[SourceQuery] = &[SourceQuery::new("fans", "fan", FANS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Exact)
                .status(health("fan health"))
                .status(ParameterRule::new("fan status 1", "Up", ["Off", "Missing"], "Error"))
                .status(ParameterRule::new(
                    "fan status 2",
                    "OK",
                    ["Warning", "Unrecoverable"],
                    "Critical",
                ))
                .metric(PerformanceRule::single(
                    "fan speed",
                    MetricKind::FanSpeed,
                    limit(thresholds.fan_speed_low_limit),
                ))
        }
        Subcommand::Frus => {
            const Q: &[SourceQuery] = &[SourceQuery::new("frus", "enclosure-fru", FRUS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Exact)
                .status(ParameterRule::new(
                    "fru status",
                    "OK",
                    ["Invalid Data", "Absent"],
                    "Fault",
                ))
        }
        Subcommand::NetworkParameters => {
            const Q: &[SourceQuery] =
                &[SourceQuery::listing("network-parameters", MGMT_PORTS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Lower)
                .status(health("management port health"))
        }
        Subcommand::Pools => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("pools", POOLS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Upper)
                .status(health("pool health"))
                .metric(PerformanceRule::difference(
                    "pool usage",
                    "pool size",
                    "pool available",
                    MetricKind::PoolUsage,
                    Levels::pair(thresholds.pool_size_warning, thresholds.pool_size_critical),
                ))
        }
        Subcommand::Ports => {
            const Q: &[SourceQuery] = &[SourceQuery::new("ports", "port", FC_PORTS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Upper)
                .status(ParameterRule::new(
                    "FC port status",
                    "Up",
                    ["Warning", "Disconnected"],
                    ["Error"],
                ))
                .status(health("FC port health"))
        }
        Subcommand::PowerSupplies => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("power-supplies", PSUS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Exact)
                .status(health("psu health"))
                .status(ParameterRule::new("psu status", "Up", ["Off", "Missing"], "Error"))
        }
        Subcommand::SensorStatus => {
            const Q: &[SourceQuery] = &[SourceQuery::new("sensor-status", "sensors", SENSORS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Exact)
                .status(ParameterRule::new(
                    "sensor status",
                    "OK",
                    ["Warning", "Unrecoverable"],
                    "Critical",
                ))
                .metric(
                    PerformanceRule::single(
                        "sensor temperature",
                        MetricKind::Temperature,
                        Levels::pair(
                            thresholds.sensor_temp_warning,
                            thresholds.sensor_temp_critical,
                        ),
                    )
                    .reading("sensor value")
                    .only_for(TEMPERATURE_SENSORS),
                )
        }
        Subcommand::Volumes => {
            const Q: &[SourceQuery] = &[SourceQuery::listing("volumes", VOLUMES)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Lower)
                .status(health("volume health"))
                .metric(PerformanceRule::difference(
                    "volume usage",
                    "volume size",
                    "volume allocated size",
                    MetricKind::VolumeUsage,
                    Levels::pair(
                        thresholds.volume_size_warning,
                        thresholds.volume_size_critical,
                    ),
                ))
        }
        Subcommand::VolumeStatistics => {
            const Q: &[SourceQuery] =
                &[SourceQuery::listing("volume-statistics", VOLUME_STATISTICS)];
            DeviceFamily::new(subcommand, Q)
                .ignoring(CaseRule::Lower)
                .metric(PerformanceRule::difference(
                    "iops usage",
                    "iops",
                    "bytes-per-second",
                    MetricKind::Iops,
                    None,
                ))
        }
    }
}

fn error_counter(name: &'static str, value: Option<i64>) -> PerformanceRule {
    PerformanceRule::single(name, MetricKind::ErrorCount, limit(value))
}
