//! Single-value conversion tools
//!
//! Entry points that take unit symbols as text, as a caller's unit picker
//! would supply them.

use serde::Serialize;

use crate::flow::{convert, convert_all, FlowResult, FlowUnit, FormatConfig, UnitConversion};

/// Response for convert_single
#[derive(Debug, Serialize)]
pub struct SingleConversionResponse {
    pub input: f64,
    /// Canonical symbol of the source unit (aliases resolved)
    pub input_unit: FlowUnit,
    /// e.g. "Input: 1.000 L/min"
    pub input_summary: String,
    pub format: FormatConfig,
    /// One entry per display unit, in display order
    pub conversions: Vec<UnitConversion>,
}

/// Response for convert_between
#[derive(Debug, Serialize)]
pub struct DirectConversionResponse {
    pub input: f64,
    pub from_unit: FlowUnit,
    pub to_unit: FlowUnit,
    pub value: f64,
    pub formatted: String,
}

/// Convert one value to every display unit
pub fn convert_single(
    value: f64,
    unit_symbol: &str,
    format: &FormatConfig,
) -> FlowResult<SingleConversionResponse> {
    format.validate()?;
    let unit = FlowUnit::from_symbol(unit_symbol)?;

    let set = convert_all(value, unit, format);

    Ok(SingleConversionResponse {
        input: value,
        input_unit: unit,
        input_summary: format!("Input: {} {}", format.format(value), unit.symbol()),
        format: *format,
        conversions: set.conversions,
    })
}

/// Convert one value between two specific units
pub fn convert_between(
    value: f64,
    from_symbol: &str,
    to_symbol: &str,
    format: &FormatConfig,
) -> FlowResult<DirectConversionResponse> {
    format.validate()?;
    let from_unit = FlowUnit::from_symbol(from_symbol)?;
    let to_unit = FlowUnit::from_symbol(to_symbol)?;

    let converted = convert(value, from_unit, to_unit);

    Ok(DirectConversionResponse {
        input: value,
        from_unit,
        to_unit,
        value: converted,
        formatted: format.format(converted),
    })
}
