//! Flow unit registry
//!
//! The fixed set of volumetric flow units, their aliases, and the factors that
//! relate each of them to the base unit (L/min).

use serde::{Deserialize, Serialize};

use super::error::{FlowError, FlowResult};

/// A volumetric flow-rate unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowUnit {
    /// Liters per minute (base unit)
    #[serde(rename = "L/min")]
    LitersPerMinute,
    #[serde(rename = "mL/min")]
    MillilitersPerMinute,
    #[serde(rename = "µL/min", alias = "uL/min")]
    MicrolitersPerMinute,
    #[serde(rename = "nL/min")]
    NanolitersPerMinute,
    #[serde(rename = "L/h")]
    LitersPerHour,
    #[serde(rename = "mL/h")]
    MillilitersPerHour,
    #[serde(rename = "µL/h", alias = "uL/h")]
    MicrolitersPerHour,
}

// ============================================================================
// Conversion Constants (volume prefixes per liter)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_L: f64 = 1e3;
/// Microliters per liter
pub const UL_PER_L: f64 = 1e6;
/// Nanoliters per liter
pub const NL_PER_L: f64 = 1e9;
/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// ASCII alias spellings accepted on input, with their canonical symbols
pub const ALIASES: [(&str, &str); 2] = [("uL/min", "µL/min"), ("uL/h", "µL/h")];

/// Greek small letter mu, sometimes pasted instead of the micro sign
const GREEK_MU: char = '\u{03BC}';
const MICRO_SIGN: char = '\u{00B5}';

impl FlowUnit {
    /// The base unit every conversion is routed through
    pub const BASE: FlowUnit = FlowUnit::LitersPerMinute;

    /// Display order used for result tables and export columns
    pub const DISPLAY_ORDER: [FlowUnit; 7] = [
        FlowUnit::LitersPerMinute,
        FlowUnit::MillilitersPerMinute,
        FlowUnit::MicrolitersPerMinute,
        FlowUnit::NanolitersPerMinute,
        FlowUnit::LitersPerHour,
        FlowUnit::MillilitersPerHour,
        FlowUnit::MicrolitersPerHour,
    ];

    /// Every symbol a caller may select as an input unit
    pub const INPUT_SYMBOLS: [&'static str; 9] = [
        "L/min", "mL/min", "µL/min", "nL/min", "L/h", "mL/h", "µL/h", "uL/min", "uL/h",
    ];

    /// Canonical display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::LitersPerMinute => "L/min",
            FlowUnit::MillilitersPerMinute => "mL/min",
            FlowUnit::MicrolitersPerMinute => "µL/min",
            FlowUnit::NanolitersPerMinute => "nL/min",
            FlowUnit::LitersPerHour => "L/h",
            FlowUnit::MillilitersPerHour => "mL/h",
            FlowUnit::MicrolitersPerHour => "µL/h",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FlowUnit::LitersPerMinute => "liters per minute",
            FlowUnit::MillilitersPerMinute => "milliliters per minute",
            FlowUnit::MicrolitersPerMinute => "microliters per minute",
            FlowUnit::NanolitersPerMinute => "nanoliters per minute",
            FlowUnit::LitersPerHour => "liters per hour",
            FlowUnit::MillilitersPerHour => "milliliters per hour",
            FlowUnit::MicrolitersPerHour => "microliters per hour",
        }
    }

    /// Alternate input spellings that resolve to this unit
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            FlowUnit::MicrolitersPerMinute => &["uL/min"],
            FlowUnit::MicrolitersPerHour => &["uL/h"],
            _ => &[],
        }
    }

    /// Resolve a symbol or alias to a unit
    ///
    /// Surrounding whitespace is ignored and the Greek mu is treated as the
    /// micro sign. Anything else must match exactly.
    pub fn from_symbol(s: &str) -> FlowResult<Self> {
        let normalized = s.trim().replace(GREEK_MU, &MICRO_SIGN.to_string());

        match normalized.as_str() {
            "L/min" => Ok(FlowUnit::LitersPerMinute),
            "mL/min" => Ok(FlowUnit::MillilitersPerMinute),
            "µL/min" | "uL/min" => Ok(FlowUnit::MicrolitersPerMinute),
            "nL/min" => Ok(FlowUnit::NanolitersPerMinute),
            "L/h" => Ok(FlowUnit::LitersPerHour),
            "mL/h" => Ok(FlowUnit::MillilitersPerHour),
            "µL/h" | "uL/h" => Ok(FlowUnit::MicrolitersPerHour),
            _ => Err(FlowError::UnknownUnit(s.to_string())),
        }
    }

    /// Liters per minute represented by one of this unit
    pub fn factor_to_base(&self) -> f64 {
        match self {
            FlowUnit::LitersPerMinute => 1.0,
            FlowUnit::MillilitersPerMinute => 1.0 / ML_PER_L,
            FlowUnit::MicrolitersPerMinute => 1.0 / UL_PER_L,
            FlowUnit::NanolitersPerMinute => 1.0 / NL_PER_L,
            FlowUnit::LitersPerHour => 1.0 / MINUTES_PER_HOUR,
            FlowUnit::MillilitersPerHour => 1.0 / (ML_PER_L * MINUTES_PER_HOUR),
            FlowUnit::MicrolitersPerHour => 1.0 / (UL_PER_L * MINUTES_PER_HOUR),
        }
    }

    /// Convert a value in this unit to L/min
    pub fn to_base(&self, x: f64) -> f64 {
        match self {
            FlowUnit::LitersPerMinute => x,
            FlowUnit::MillilitersPerMinute => x / ML_PER_L,
            FlowUnit::MicrolitersPerMinute => x / UL_PER_L,
            FlowUnit::NanolitersPerMinute => x / NL_PER_L,
            FlowUnit::LitersPerHour => x / MINUTES_PER_HOUR,
            FlowUnit::MillilitersPerHour => x / ML_PER_L / MINUTES_PER_HOUR,
            FlowUnit::MicrolitersPerHour => x / UL_PER_L / MINUTES_PER_HOUR,
        }
    }

    /// Convert a value in L/min to this unit
    ///
    /// Prefixes are exact integers, so 1 L/min lands on exactly 1e9 nL/min.
    pub fn from_base(&self, x: f64) -> f64 {
        match self {
            FlowUnit::LitersPerMinute => x,
            FlowUnit::MillilitersPerMinute => x * ML_PER_L,
            FlowUnit::MicrolitersPerMinute => x * UL_PER_L,
            FlowUnit::NanolitersPerMinute => x * NL_PER_L,
            FlowUnit::LitersPerHour => x * MINUTES_PER_HOUR,
            FlowUnit::MillilitersPerHour => x * MINUTES_PER_HOUR * ML_PER_L,
            FlowUnit::MicrolitersPerHour => x * MINUTES_PER_HOUR * UL_PER_L,
        }
    }

    /// Whether this is a per-hour unit
    pub fn is_per_hour(&self) -> bool {
        matches!(
            self,
            FlowUnit::LitersPerHour | FlowUnit::MillilitersPerHour | FlowUnit::MicrolitersPerHour
        )
    }
}

impl std::fmt::Display for FlowUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for FlowUnit {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowUnit::from_symbol(s)
    }
}

/// Resolve an alias to its canonical display symbol
///
/// Canonical symbols map to themselves, so resolving twice is the same as
/// resolving once.
pub fn canonical_symbol(s: &str) -> FlowResult<&'static str> {
    FlowUnit::from_symbol(s).map(|unit| unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_display_units() {
        for unit in FlowUnit::DISPLAY_ORDER {
            assert_eq!(FlowUnit::from_symbol(unit.symbol()).unwrap(), unit);
        }
    }

    #[test]
    fn test_from_symbol_aliases() {
        assert_eq!(
            FlowUnit::from_symbol("uL/min").unwrap(),
            FlowUnit::MicrolitersPerMinute
        );
        assert_eq!(
            FlowUnit::from_symbol("uL/h").unwrap(),
            FlowUnit::MicrolitersPerHour
        );
        // Greek mu instead of the micro sign
        assert_eq!(
            FlowUnit::from_symbol("\u{03BC}L/min").unwrap(),
            FlowUnit::MicrolitersPerMinute
        );
        assert_eq!(
            FlowUnit::from_symbol("  mL/h ").unwrap(),
            FlowUnit::MillilitersPerHour
        );
    }

    #[test]
    fn test_from_symbol_unknown() {
        let err = FlowUnit::from_symbol("gal/min").unwrap_err();
        assert!(matches!(err, FlowError::UnknownUnit(ref s) if s == "gal/min"));
        assert!(FlowUnit::from_symbol("ml/min").is_err());
        assert!(FlowUnit::from_symbol("").is_err());
    }

    #[test]
    fn test_canonical_symbol_idempotent() {
        for symbol in FlowUnit::INPUT_SYMBOLS {
            let once = canonical_symbol(symbol).unwrap();
            let twice = canonical_symbol(once).unwrap();
            assert_eq!(once, twice);
        }
        assert_eq!(canonical_symbol("uL/min").unwrap(), "µL/min");
        assert_eq!(canonical_symbol("uL/h").unwrap(), "µL/h");
    }

    #[test]
    fn test_aliases_table_matches_units() {
        for (alias, canonical) in ALIASES {
            let unit = FlowUnit::from_symbol(alias).unwrap();
            assert_eq!(unit.symbol(), canonical);
            assert!(unit.aliases().contains(&alias));
        }
    }

    #[test]
    fn test_round_trip_all_units() {
        let samples = [0.0, 1e-12, 0.5, 1.0, 12.0, 2500.75, 1e9, 123456.789];
        for unit in FlowUnit::DISPLAY_ORDER {
            for x in samples {
                let back = unit.from_base(unit.to_base(x));
                let tol = 1e-9 * x.abs().max(f64::MIN_POSITIVE);
                assert!(
                    (back - x).abs() <= tol,
                    "{} round trip of {} gave {}",
                    unit,
                    x,
                    back
                );
            }
        }
    }

    #[test]
    fn test_to_base_matches_factor() {
        for unit in FlowUnit::DISPLAY_ORDER {
            let via_fn = unit.to_base(7.0);
            let via_factor = 7.0 * unit.factor_to_base();
            assert!((via_fn - via_factor).abs() <= 1e-12 * via_fn.abs());
        }
    }

    #[test]
    fn test_per_hour() {
        assert!(FlowUnit::LitersPerHour.is_per_hour());
        assert!(FlowUnit::MicrolitersPerHour.is_per_hour());
        assert!(!FlowUnit::NanolitersPerMinute.is_per_hour());
    }

    #[test]
    fn test_serde_symbols() {
        let json = serde_json::to_string(&FlowUnit::MicrolitersPerHour).unwrap();
        assert_eq!(json, "\"µL/h\"");
        let parsed: FlowUnit = serde_json::from_str("\"uL/min\"").unwrap();
        assert_eq!(parsed, FlowUnit::MicrolitersPerMinute);
    }
}
