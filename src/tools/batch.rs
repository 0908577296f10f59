//! Batch conversion tools
//!
//! Converts pasted multi-line input and exports the result as CSV.

use serde::Serialize;

use crate::flow::{
    convert_lines, convert_text, to_csv, BatchResult, BatchStatus, CsvLayout, FlowResult, FlowUnit,
    FormatConfig, EMPTY_BATCH_MESSAGE,
};

/// Response for convert_batch
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub status: BatchStatus,
    /// Informational message when nothing converted
    pub message: Option<String>,
    pub input_unit: FlowUnit,
    pub format: FormatConfig,
    #[serde(flatten)]
    pub result: BatchResult,
    pub generated_at: String,
}

impl BatchResponse {
    /// Human-readable warning lines, in input order
    pub fn warning_messages(&self) -> Vec<String> {
        self.result.warnings.iter().map(|w| w.message()).collect()
    }
}

/// Convert a batch of raw lines from one source unit
///
/// Only the unit symbol and format options can fail the call. Bad lines are
/// reported in `warnings`; a batch with no valid lines has status `empty`.
pub fn convert_batch<S: AsRef<str>>(
    raw_lines: &[S],
    unit_symbol: &str,
    format: &FormatConfig,
) -> FlowResult<BatchResponse> {
    format.validate()?;
    let unit = FlowUnit::from_symbol(unit_symbol)?;

    let result = convert_lines(raw_lines, unit, format);
    Ok(build_response(result, unit, format))
}

/// Convert pasted text, splitting it into lines first
///
/// Lines break on LF, CR, CRLF and the other Unicode line separators.
pub fn convert_batch_text(
    text: &str,
    unit_symbol: &str,
    format: &FormatConfig,
) -> FlowResult<BatchResponse> {
    format.validate()?;
    let unit = FlowUnit::from_symbol(unit_symbol)?;

    let result = convert_text(text, unit, format);
    Ok(build_response(result, unit, format))
}

fn build_response(result: BatchResult, unit: FlowUnit, format: &FormatConfig) -> BatchResponse {
    let status = result.status();
    let message = match status {
        BatchStatus::Empty => Some(EMPTY_BATCH_MESSAGE.to_string()),
        BatchStatus::Converted => None,
    };

    BatchResponse {
        status,
        message,
        input_unit: unit,
        format: *format,
        result,
        generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }
}

/// CSV export of a batch response
pub fn export_batch_csv(response: &BatchResponse, layout: CsvLayout) -> String {
    to_csv(&response.result, layout)
}
