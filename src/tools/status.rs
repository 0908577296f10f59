//! Flowrate Status Tool
//!
//! Build information, the unit table, usage tips and sanity checks.

use serde::Serialize;
use std::time::Instant;

use crate::build_info::BuildInfo;
use crate::flow::{convert, FlowUnit};

/// Usage tips shown alongside conversion results
pub const USAGE_TIPS: &str = r#"
# Flowrate Unit Converter Tips

## Sanity checks

- 1 L/min = 1,000 mL/min = 1,000,000 µL/min = 1,000,000,000 nL/min
- 1 L/min = 60 L/h = 60,000 mL/h = 60,000,000 µL/h

## Input

- Type `uL` if you prefer: `uL/min` and `uL/h` are accepted as aliases for
  `µL/min` and `µL/h`.
- Batch input takes one value per line. Thousands separators are allowed
  (`1,000`). Blank lines are ignored and lines that are not numbers are
  skipped with a warning.

## Output

- The internal base unit is **L/min**. Every conversion goes source -> L/min
  -> target.
- Control rounding with `--decimals` (0-8).
- Values above 10^t or below 10^-t switch to scientific notation, where t is
  `--threshold` (1-12). Turn this off with `--no-sci`. Zero always prints in
  fixed-point.
"#;

/// One row of the unit table
#[derive(Debug, Clone, Serialize)]
pub struct UnitInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub aliases: Vec<&'static str>,
    /// L/min represented by one of this unit
    pub factor_to_base: f64,
    pub per_hour: bool,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub base_unit: &'static str,
    pub units: Vec<UnitInfo>,
    pub input_symbols: Vec<&'static str>,
}

/// List the display units in display order
pub fn list_units() -> ListUnitsResponse {
    let units = FlowUnit::DISPLAY_ORDER
        .iter()
        .map(|unit| UnitInfo {
            symbol: unit.symbol(),
            name: unit.display_name(),
            aliases: unit.aliases().to_vec(),
            factor_to_base: unit.factor_to_base(),
            per_hour: unit.is_per_hour(),
        })
        .collect();

    ListUnitsResponse {
        base_unit: FlowUnit::BASE.symbol(),
        units,
        input_symbols: FlowUnit::INPUT_SYMBOLS.to_vec(),
    }
}

/// A single identity check
#[derive(Debug, Clone, Serialize)]
pub struct SanityCheck {
    pub input: f64,
    pub from: FlowUnit,
    pub to: FlowUnit,
    pub expected: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Response for sanity_check
#[derive(Debug, Serialize)]
pub struct SanityReport {
    pub checks: Vec<SanityCheck>,
    pub all_passed: bool,
}

/// Expected value of 1 L/min in each display unit
pub const ONE_LITER_PER_MINUTE: [(FlowUnit, f64); 7] = [
    (FlowUnit::LitersPerMinute, 1.0),
    (FlowUnit::MillilitersPerMinute, 1_000.0),
    (FlowUnit::MicrolitersPerMinute, 1_000_000.0),
    (FlowUnit::NanolitersPerMinute, 1_000_000_000.0),
    (FlowUnit::LitersPerHour, 60.0),
    (FlowUnit::MillilitersPerHour, 60_000.0),
    (FlowUnit::MicrolitersPerHour, 60_000_000.0),
];

/// Verify that 1 L/min converts to the documented value in every unit,
/// and that each of those values converts back to 1 L/min
pub fn sanity_check() -> SanityReport {
    let mut checks = Vec::new();

    for (unit, expected) in ONE_LITER_PER_MINUTE {
        let actual = convert(1.0, FlowUnit::BASE, unit);
        checks.push(SanityCheck {
            input: 1.0,
            from: FlowUnit::BASE,
            to: unit,
            expected,
            actual,
            passed: actual == expected,
        });

        let back = convert(expected, unit, FlowUnit::BASE);
        checks.push(SanityCheck {
            input: expected,
            from: unit,
            to: FlowUnit::BASE,
            expected: 1.0,
            actual: back,
            passed: (back - 1.0).abs() <= 1e-9,
        });
    }

    let all_passed = checks.iter().all(|c| c.passed);
    if !all_passed {
        tracing::warn!("Sanity check failed");
    }

    SanityReport { checks, all_passed }
}

/// Flowrate runtime status
#[derive(Debug, Serialize)]
pub struct FlowrateStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
    pub build_timestamp: &'static str,
    pub base_unit: &'static str,
    pub unit_count: usize,
    pub uptime_seconds: u64,
}

/// Status tracker for the running process
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FlowrateStatus {
        let build_info = BuildInfo::current();

        FlowrateStatus {
            name: build_info.name,
            version: build_info.version,
            profile: build_info.profile,
            target: build_info.target,
            build_timestamp: build_info.build_timestamp,
            base_unit: FlowUnit::BASE.symbol(),
            unit_count: FlowUnit::DISPLAY_ORDER.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
