use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("{metric} warning threshold must be lower than critical threshold ({warning} > {critical})")]
    WarningAboveCritical {
        metric: &'static str,
        warning: i64,
        critical: i64,
    },
}

/// Warning/critical pair attached to one performance rule.
///
/// Single-limit metrics carry the same value in both slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levels {
    pub warning: i64,
    pub critical: i64,
}

impl Levels {
    #[must_use]
    pub const fn new(warning: i64, critical: i64) -> Self {
        Self { warning, critical }
    }

    #[must_use]
    pub const fn single(limit: i64) -> Self {
        Self::new(limit, limit)
    }

    /// Both halves configured, or nothing to evaluate.
    #[must_use]
    pub fn pair(warning: Option<i64>, critical: Option<i64>) -> Option<Self> {
        Some(Self::new(warning?, critical?))
    }
}

/// Caller-supplied limits for one run. Every limit is optional; a metric
/// whose limit is absent is not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSet {
    /// Disk SSD life left (percent) at or below which a disk warns
    pub disk_life_left_limit: Option<i64>,
    /// Disk power-on hours at or above which a disk warns
    pub disk_poh_limit: Option<i64>,
    pub disk_temp_warning: Option<i64>,
    pub disk_temp_critical: Option<i64>,
    /// Controller/CPU sensor temperatures in `sensor-status`
    pub sensor_temp_warning: Option<i64>,
    pub sensor_temp_critical: Option<i64>,
    /// Fan speed (rpm) at or below which a fan warns
    pub fan_speed_low_limit: Option<i64>,
    /// Pool usage in percent of pool size
    pub pool_size_warning: Option<i64>,
    pub pool_size_critical: Option<i64>,
    /// Volume usage in percent of volume size
    pub volume_size_warning: Option<i64>,
    pub volume_size_critical: Option<i64>,
    pub media_errors_1_limit: Option<i64>,
    pub media_errors_2_limit: Option<i64>,
    pub nonmedia_errors_1_limit: Option<i64>,
    pub nonmedia_errors_2_limit: Option<i64>,
    pub block_reassigns_1_limit: Option<i64>,
    pub block_reassigns_2_limit: Option<i64>,
    pub bad_blocks_1_limit: Option<i64>,
    pub bad_blocks_2_limit: Option<i64>,
}

impl ThresholdSet {
    /// Checks every warning/critical pair where both halves are set.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError::WarningAboveCritical` for the first pair whose
    /// warning exceeds its critical value.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let pairs = [
            ("disk temperature", self.disk_temp_warning, self.disk_temp_critical),
            ("pool size", self.pool_size_warning, self.pool_size_critical),
            ("sensor temperature", self.sensor_temp_warning, self.sensor_temp_critical),
            ("volume size", self.volume_size_warning, self.volume_size_critical),
        ];
        for (metric, warning, critical) in pairs {
            if let Some(levels) = Levels::pair(warning, critical) {
                if levels.warning > levels.critical {
                    return Err(ThresholdError::WarningAboveCritical {
                        metric,
                        warning: levels.warning,
                        critical: levels.critical,
                    });
                }
            }
        }
        Ok(())
    }

    /// Fills every unset limit from `fallback`.
    #[must_use]
    pub fn or(self, fallback: &Self) -> Self {
        Self {
            disk_life_left_limit: self.disk_life_left_limit.or(fallback.disk_life_left_limit),
            disk_poh_limit: self.disk_poh_limit.or(fallback.disk_poh_limit),
            disk_temp_warning: self.disk_temp_warning.or(fallback.disk_temp_warning),
            disk_temp_critical: self.disk_temp_critical.or(fallback.disk_temp_critical),
            sensor_temp_warning: self.sensor_temp_warning.or(fallback.sensor_temp_warning),
            sensor_temp_critical: self.sensor_temp_critical.or(fallback.sensor_temp_critical),
            fan_speed_low_limit: self.fan_speed_low_limit.or(fallback.fan_speed_low_limit),
            pool_size_warning: self.pool_size_warning.or(fallback.pool_size_warning),
            pool_size_critical: self.pool_size_critical.or(fallback.pool_size_critical),
            volume_size_warning: self.volume_size_warning.or(fallback.volume_size_warning),
            volume_size_critical: self.volume_size_critical.or(fallback.volume_size_critical),
            media_errors_1_limit: self.media_errors_1_limit.or(fallback.media_errors_1_limit),
            media_errors_2_limit: self.media_errors_2_limit.or(fallback.media_errors_2_limit),
            nonmedia_errors_1_limit: self
                .nonmedia_errors_1_limit
                .or(fallback.nonmedia_errors_1_limit),
            nonmedia_errors_2_limit: self
                .nonmedia_errors_2_limit
                .or(fallback.nonmedia_errors_2_limit),
            block_reassigns_1_limit: self
                .block_reassigns_1_limit
                .or(fallback.block_reassigns_1_limit),
            block_reassigns_2_limit: self
                .block_reassigns_2_limit
                .or(fallback.block_reassigns_2_limit),
            bad_blocks_1_limit: self.bad_blocks_1_limit.or(fallback.bad_blocks_1_limit),
            bad_blocks_2_limit: self.bad_blocks_2_limit.or(fallback.bad_blocks_2_limit),
        }
    }
}
