//! Flow conversion functions
//!
//! Converts values through the base unit (L/min) and fans them out to every
//! display unit.

use serde::Serialize;

use super::format::FormatConfig;
use super::units::FlowUnit;

/// One converted value, with its rendered form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitConversion {
    pub unit: FlowUnit,
    pub value: f64,
    pub formatted: String,
}

/// A value converted to every display unit, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSet {
    pub conversions: Vec<UnitConversion>,
}

impl ConversionSet {
    /// Look up the conversion for a single unit
    pub fn get(&self, unit: FlowUnit) -> Option<&UnitConversion> {
        self.conversions.iter().find(|c| c.unit == unit)
    }

    /// Raw converted value for a unit
    pub fn value(&self, unit: FlowUnit) -> Option<f64> {
        self.get(unit).map(|c| c.value)
    }

    /// Formatted value for a unit
    pub fn formatted(&self, unit: FlowUnit) -> Option<&str> {
        self.get(unit).map(|c| c.formatted.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitConversion> {
        self.conversions.iter()
    }
}

/// Convert a value from one unit to another through the base unit
pub fn convert(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    to.from_base(from.to_base(value))
}

/// Convert a value to every display unit
///
/// Defined for every f64: negative, zero and non-finite inputs go through the
/// same arithmetic and are left to the formatter.
pub fn convert_all(value: f64, from: FlowUnit, format: &FormatConfig) -> ConversionSet {
    let base = from.to_base(value);

    tracing::debug!("Converting {} {} ({} L/min)", value, from, base);

    let conversions = FlowUnit::DISPLAY_ORDER
        .iter()
        .map(|&unit| {
            let converted = unit.from_base(base);
            UnitConversion {
                unit,
                value: converted,
                formatted: format.format(converted),
            }
        })
        .collect();

    ConversionSet { conversions }
}

/// Parse one line of pasted numeric input
///
/// Trims whitespace and strips thousands-separator commas ("1,000" -> 1000).
/// Underscores are accepted between two digits ("1_000" -> 1000).
/// Returns `None` for blank lines and for text that is not a number.
pub fn parse_value(line: &str) -> Option<f64> {
    let cleaned = line.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    strip_digit_separators(&cleaned)?.parse::<f64>().ok()
}

/// Remove `_` digit separators, rejecting any `_` not flanked by digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).and_then(|p| chars.get(p));
        let next = chars.get(i + 1);
        match (prev, next) {
            (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(out)
}
