//! CSV export of batch results

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::batch::BatchResult;
use super::error::FlowResult;
use super::units::FlowUnit;

/// Default file name for exported conversions
pub const DEFAULT_EXPORT_FILE: &str = "flowrate_conversions.csv";

const DELIMITER: char = ',';

/// Which columns the export contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvLayout {
    /// Input, Input Unit, then one formatted column per display unit
    #[default]
    Formatted,
    /// Input, Input Unit, then a raw and a formatted column per display unit
    Full,
}

/// Quote a field if it contains the delimiter, a quote, or a line break
pub fn escape_field(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == '"' || c == '\n' || c == '\r');

    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_record(out: &mut String, fields: &[String]) {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&line.join(&DELIMITER.to_string()));
    out.push('\n');
}

/// Header row for a layout
pub fn header(layout: CsvLayout) -> Vec<String> {
    let mut fields = vec!["Input".to_string(), "Input Unit".to_string()];
    for unit in FlowUnit::DISPLAY_ORDER {
        if layout == CsvLayout::Full {
            fields.push(unit.symbol().to_string());
        }
        fields.push(format!("{} (fmt)", unit.symbol()));
    }
    fields
}

/// Raw numeric field; NaN is written as an empty field
fn raw_field(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Render a batch result as CSV text, one record per converted row
pub fn to_csv(result: &BatchResult, layout: CsvLayout) -> String {
    let mut out = String::new();
    push_record(&mut out, &header(layout));

    for row in &result.rows {
        let mut fields = vec![raw_field(row.input), row.input_unit.symbol().to_string()];
        for unit in FlowUnit::DISPLAY_ORDER {
            let conversion = row.conversions.get(unit);
            if layout == CsvLayout::Full {
                fields.push(conversion.map(|c| raw_field(c.value)).unwrap_or_default());
            }
            fields.push(conversion.map(|c| c.formatted.clone()).unwrap_or_default());
        }
        push_record(&mut out, &fields);
    }

    out
}

/// Write a batch result as CSV to any writer
pub fn write_csv<W: Write>(result: &BatchResult, layout: CsvLayout, mut writer: W) -> FlowResult<()> {
    writer.write_all(to_csv(result, layout).as_bytes())?;
    writer.flush()?;
    Ok(())
}
