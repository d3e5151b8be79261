use std::str::FromStr;

use thiserror::Error;

/// Device family checked by one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    Controllers,
    DiskGroups,
    Disks,
    Fans,
    Frus,
    NetworkParameters,
    Pools,
    Ports,
    PowerSupplies,
    SensorStatus,
    System,
    Volumes,
    VolumeStatistics,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown subcommand '{0}', expected one of: {list}", list = Subcommand::names().join(", "))]
pub struct UnknownSubcommand(pub String);

impl Subcommand {
    pub const ALL: [Self; 13] = [
        Self::Controllers,
        Self::DiskGroups,
        Self::Disks,
        Self::Fans,
        Self::Frus,
        Self::NetworkParameters,
        Self::Pools,
        Self::Ports,
        Self::PowerSupplies,
        Self::SensorStatus,
        Self::System,
        Self::Volumes,
        Self::VolumeStatistics,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controllers => "controllers",
            Self::DiskGroups => "disk-groups",
            Self::Disks => "disks",
            Self::Fans => "fans",
            Self::Frus => "frus",
            Self::NetworkParameters => "network-parameters",
            Self::Pools => "pools",
            Self::Ports => "ports",
            Self::PowerSupplies => "power-supplies",
            Self::SensorStatus => "sensor-status",
            Self::System => "system",
            Self::Volumes => "volumes",
            Self::VolumeStatistics => "volume-statistics",
        }
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcommand {
    type Err = UnknownSubcommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| UnknownSubcommand(s.to_string()))
    }
}
