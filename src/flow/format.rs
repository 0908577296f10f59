//! Numeric formatting for conversion results
//!
//! Renders values in fixed-point or scientific notation according to a
//! `FormatConfig` supplied with each request.

use serde::{Deserialize, Serialize};

use super::error::{FlowError, FlowResult};

/// Largest number of decimal places a caller may request
pub const MAX_DECIMALS: u32 = 8;
/// Smallest allowed sci-notation threshold power
pub const MIN_THRESHOLD_POWER: i32 = 1;
/// Largest allowed sci-notation threshold power
pub const MAX_THRESHOLD_POWER: i32 = 12;

/// Formatting options for converted values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Digits after the decimal point (mantissa digits in scientific notation)
    pub decimals: u32,
    /// Switch to scientific notation for very large or very small magnitudes
    pub use_scientific: bool,
    /// Values above 10^threshold_power or below 10^-threshold_power go scientific
    pub threshold_power: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimals: 3,
            use_scientific: true,
            threshold_power: 6,
        }
    }
}

impl FormatConfig {
    /// Build a validated config
    pub fn new(decimals: u32, use_scientific: bool, threshold_power: i32) -> FlowResult<Self> {
        let config = Self {
            decimals,
            use_scientific,
            threshold_power,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both numeric options are inside their allowed ranges
    pub fn validate(&self) -> FlowResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(FlowError::InvalidDecimals(self.decimals));
        }
        if !(MIN_THRESHOLD_POWER..=MAX_THRESHOLD_POWER).contains(&self.threshold_power) {
            return Err(FlowError::InvalidThreshold(self.threshold_power));
        }
        Ok(())
    }

    /// Whether `x` should be rendered in scientific notation
    ///
    /// Zero is never "small".
    pub fn wants_scientific(&self, x: f64) -> bool {
        if !self.use_scientific {
            return false;
        }
        let magnitude = x.abs();
        let upper = 10f64.powi(self.threshold_power);
        let lower = 1.0 / upper;
        magnitude > upper || (x != 0.0 && magnitude < lower)
    }

    /// Format a value with this config
    pub fn format(&self, x: f64) -> String {
        format_value(x, self.decimals, self.use_scientific, self.threshold_power)
    }
}

/// Format a converted value for display
///
/// NaN renders as an empty string. Rounding is Rust's `format!` precision
/// rounding, which is half-to-even on the exact binary value.
pub fn format_value(x: f64, decimals: u32, use_scientific: bool, threshold_power: i32) -> String {
    if x.is_nan() {
        return String::new();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let config = FormatConfig {
        decimals,
        use_scientific,
        threshold_power,
    };
    let precision = decimals as usize;

    if config.wants_scientific(x) {
        to_scientific(x, precision)
    } else {
        format!("{:.*}", precision, x)
    }
}

/// Scientific notation with a signed, two-digit minimum exponent: `1.500e+06`
fn to_scientific(x: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, x);

    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(x: f64) -> String {
        format_value(x, 3, true, 6)
    }

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.decimals, 3);
        assert!(config.use_scientific);
        assert_eq!(config.threshold_power, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(FormatConfig::new(0, true, 1).is_ok());
        assert!(FormatConfig::new(8, false, 12).is_ok());
        assert!(matches!(
            FormatConfig::new(9, true, 6),
            Err(FlowError::InvalidDecimals(9))
        ));
        assert!(matches!(
            FormatConfig::new(3, true, 0),
            Err(FlowError::InvalidThreshold(0))
        ));
        assert!(matches!(
            FormatConfig::new(3, true, 13),
            Err(FlowError::InvalidThreshold(13))
        ));
    }

    #[test]
    fn test_fixed_below_threshold() {
        assert_eq!(fmt(999999.9), "999999.900");
        assert_eq!(fmt(1.0), "1.000");
        assert_eq!(fmt(1000000.0), "1000000.000");
    }

    #[test]
    fn test_scientific_above_threshold() {
        assert_eq!(fmt(1000001.0), "1.000e+06");
        assert_eq!(fmt(6e7), "6.000e+07");
        assert_eq!(fmt(1e9), "1.000e+09");
    }

    #[test]
    fn test_scientific_below_threshold() {
        assert_eq!(fmt(2.5e-9), "2.500e-09");
        assert_eq!(fmt(-2.5e-9), "-2.500e-09");
        // 1e-6 is not strictly below the lower bound
        assert_eq!(fmt(1e-6), "0.000");
    }

    #[test]
    fn test_zero_is_never_small() {
        assert_eq!(fmt(0.0), "0.000");
        assert_eq!(format_value(0.0, 0, true, 1), "0");
    }

    #[test]
    fn test_scientific_disabled() {
        assert_eq!(format_value(1e9, 2, false, 6), "1000000000.00");
        assert_eq!(format_value(1e-9, 2, false, 6), "0.00");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(format_value(12.0, 0, true, 6), "12");
        assert_eq!(format_value(2.4e8, 0, true, 6), "2e+08");
    }

    #[test]
    fn test_large_exponent_keeps_all_digits() {
        assert_eq!(format_value(1.5e300, 1, true, 6), "1.5e+300");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(fmt(-12.5), "-12.500");
        assert_eq!(fmt(-3e7), "-3.000e+07");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::NAN), "");
        assert_eq!(fmt(f64::INFINITY), "inf");
        assert_eq!(fmt(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_config_format_matches_free_function() {
        let config = FormatConfig::new(5, true, 3).unwrap();
        for x in [0.0, 0.5, 1234.5, 0.00001, 42.0] {
            assert_eq!(config.format(x), format_value(x, 5, true, 3));
        }
    }
}
