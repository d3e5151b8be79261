//! Number-plus-unit parsing for the strings the array reports
//! (`"72.3GB"`, `"41 C"`, `"55%"`, `"5242.8KB"`).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*([A-Za-z%]*)\s*$").expect("quantity pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("cannot parse '{raw}' as a number with unit")]
    Malformed { raw: String },
    #[error("'{raw}' has unit '{found}', expected '{expected}'")]
    UnexpectedUnit {
        raw: String,
        found: String,
        expected: String,
    },
    #[error("'{raw}' is not a whole number")]
    NotInteger { raw: String },
}

/// A parsed value together with the unit suffix it carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    /// Splits `raw` into its numeric part and its (possibly empty) unit.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::Malformed` if `raw` is not a number followed by an
    /// optional alphabetic or `%` unit.
    pub fn parse(raw: &str) -> Result<Self, UnitError> {
        let malformed = || UnitError::Malformed {
            raw: raw.to_string(),
        };
        let caps = QUANTITY.captures(raw).ok_or_else(malformed)?;
        let value = caps[1].parse::<f64>().map_err(|_| malformed())?;
        Ok(Self {
            value,
            unit: caps[2].to_string(),
        })
    }

    fn expect_unit(self, raw: &str, expected: &str) -> Result<f64, UnitError> {
        if self.unit == expected {
            Ok(self.value)
        } else {
            Err(UnitError::UnexpectedUnit {
                raw: raw.to_string(),
                found: self.unit,
                expected: expected.to_string(),
            })
        }
    }
}

/// Parses a whole number that must carry exactly `unit` (empty for none).
///
/// # Errors
///
/// Returns `UnitError` if the string is malformed, carries a different unit,
/// or has a fractional part.
pub fn parse_integer(raw: &str, unit: &str) -> Result<i64, UnitError> {
    let value = Quantity::parse(raw)?.expect_unit(raw, unit)?;
    #[allow(clippy::cast_precision_loss)]
    let out_of_range = value.abs() >= i64::MAX as f64;
    if value.fract() != 0.0 || !value.is_finite() || out_of_range {
        return Err(UnitError::NotInteger {
            raw: raw.to_string(),
        });
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(value as i64)
}

/// Parses a capacity and normalizes it to decimal gigabytes.
///
/// A bare number is taken as gigabytes already.
///
/// # Errors
///
/// Returns `UnitError` if the string is malformed or its unit is not a
/// byte multiple.
pub fn parse_size_gb(raw: &str) -> Result<f64, UnitError> {
    let quantity = Quantity::parse(raw)?;
    let factor = match quantity.unit.as_str() {
        "" | "GB" => 1.0,
        "B" => 1e-9,
        "KB" => 1e-6,
        "MB" => 1e-3,
        "TB" => 1e3,
        "PB" => 1e6,
        other => {
            return Err(UnitError::UnexpectedUnit {
                raw: raw.to_string(),
                found: other.to_string(),
                expected: "GB".to_string(),
            })
        }
    };
    Ok(quantity.value * factor)
}

/// Parses a transfer rate such as `"5242.8KB"` and normalizes it to MB.
///
/// # Errors
///
/// Returns `UnitError` if the string is malformed or its unit is not a
/// byte multiple.
pub fn parse_rate_mb(raw: &str) -> Result<f64, UnitError> {
    let quantity = Quantity::parse(raw)?;
    let divisor = match quantity.unit.as_str() {
        "B" => 1024.0 * 1024.0,
        "KB" => 1024.0,
        "" | "MB" => 1.0,
        "GB" => 1.0 / 1024.0,
        other => {
            return Err(UnitError::UnexpectedUnit {
                raw: raw.to_string(),
                found: other.to_string(),
                expected: "MB".to_string(),
            })
        }
    };
    Ok(quantity.value / divisor)
}

/// Rounds to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Renders a rounded decimal with at least one fractional digit (`80.0`, `80.5`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
