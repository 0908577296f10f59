//! Batch conversion
//!
//! Converts pasted multi-line input, skipping blank lines and collecting a
//! warning for every line that is not a number.

use serde::Serialize;

use super::converter::{convert_all, parse_value, ConversionSet};
use super::format::FormatConfig;
use super::units::FlowUnit;

/// Message reported when no line of a batch parsed as a number
pub const EMPTY_BATCH_MESSAGE: &str = "No valid numeric lines found.";

/// A line that could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchWarning {
    /// 1-based line number in the submitted input
    pub line_number: usize,
    /// The line exactly as submitted
    pub raw_text: String,
}

impl BatchWarning {
    pub fn message(&self) -> String {
        format!(
            "Line {} is not a number: {:?} - skipping it.",
            self.line_number, self.raw_text
        )
    }
}

/// One successfully converted input value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub input: f64,
    /// Canonical symbol of the input unit (aliases resolved)
    pub input_unit: FlowUnit,
    pub conversions: ConversionSet,
}

/// Whether a batch produced any rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Converted,
    Empty,
}

/// Result of a batch conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Converted rows, in input order
    pub rows: Vec<BatchRow>,
    /// Skipped lines, in input order
    pub warnings: Vec<BatchWarning>,
}

impl BatchResult {
    pub fn status(&self) -> BatchStatus {
        if self.rows.is_empty() {
            BatchStatus::Empty
        } else {
            BatchStatus::Converted
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw input values of the converted rows
    pub fn inputs(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.input).collect()
    }
}

/// Convert a batch of raw text lines from a single source unit
///
/// Never fails: bad lines become warnings and whatever parsed is returned.
pub fn convert_lines<S: AsRef<str>>(
    lines: &[S],
    from: FlowUnit,
    format: &FormatConfig,
) -> BatchResult {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let raw = line.as_ref();
        if raw.trim().is_empty() {
            continue;
        }

        match parse_value(raw) {
            Some(value) => rows.push(BatchRow {
                input: value,
                input_unit: from,
                conversions: convert_all(value, from, format),
            }),
            None => {
                let warning = BatchWarning {
                    line_number: index + 1,
                    raw_text: raw.to_string(),
                };
                tracing::warn!("{}", warning.message());
                warnings.push(warning);
            }
        }
    }

    tracing::info!(
        "Batch from {}: {} converted, {} skipped",
        from,
        rows.len(),
        warnings.len()
    );

    BatchResult { rows, warnings }
}

/// Characters that end a line of pasted input
///
/// LF, VT, FF, CR, the file/group/record separators, NEL and the Unicode line
/// and paragraph separators. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\r' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split pasted text into lines
///
/// A trailing break does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Split pasted text into lines and convert them
pub fn convert_text(text: &str, from: FlowUnit, format: &FormatConfig) -> BatchResult {
    convert_lines(&split_lines(text), from, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved_and_warning_collected() {
        let result = convert_lines(
            &["1", "abc", "2"],
            FlowUnit::LitersPerMinute,
            &FormatConfig::default(),
        );
        assert_eq!(result.inputs(), vec![1.0, 2.0]);
        assert_eq!(
            result.warnings,
            vec![BatchWarning {
                line_number: 2,
                raw_text: "abc".to_string(),
            }]
        );
        assert_eq!(result.status(), BatchStatus::Converted);
    }

    #[test]
    fn test_blank_lines_skipped_silently_but_counted() {
        let result = convert_text(
            "0.5\n\n   \n12\nfoo\n2,500.75",
            FlowUnit::MicrolitersPerMinute,
            &FormatConfig::default(),
        );
        assert_eq!(result.inputs(), vec![0.5, 12.0, 2500.75]);
        assert_eq!(result.warnings.len(), 1);
        // Blank lines still advance the line counter
        assert_eq!(result.warnings[0].line_number, 5);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("1\n2\n"), vec!["1", "2"]);
        assert_eq!(split_lines("1\r\n2\r\n3"), vec!["1", "2", "3"]);
        assert_eq!(split_lines("1\r2\r3"), vec!["1", "2", "3"]);
        assert_eq!(split_lines("1\u{2028}2\x0c3\u{85}4"), vec!["1", "2", "3", "4"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\r\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_carriage_return_only_input() {
        let result = convert_text("1\r2\r3", FlowUnit::LitersPerMinute, &FormatConfig::default());
        assert_eq!(result.inputs(), vec![1.0, 2.0, 3.0]);
        assert!(result.warnings.is_empty());

        let result = convert_text("1\u{2028}x\u{2028}2", FlowUnit::LitersPerMinute, &FormatConfig::default());
        assert_eq!(result.inputs(), vec![1.0, 2.0]);
        assert_eq!(result.warnings[0].line_number, 2);
    }

    #[test]
    fn test_empty_batch() {
        let result = convert_text("", FlowUnit::LitersPerMinute, &FormatConfig::default());
        assert_eq!(result.status(), BatchStatus::Empty);
        assert!(result.rows.is_empty());
        assert!(result.warnings.is_empty());

        let result = convert_text("  \n\t\n", FlowUnit::LitersPerMinute, &FormatConfig::default());
        assert_eq!(result.status(), BatchStatus::Empty);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_all_lines_invalid() {
        let result = convert_lines(&["x", "y"], FlowUnit::LitersPerHour, &FormatConfig::default());
        assert!(result.is_empty());
        assert_eq!(result.status(), BatchStatus::Empty);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_raw_text_kept_untrimmed() {
        let result = convert_lines(&["  oops "], FlowUnit::LitersPerMinute, &FormatConfig::default());
        assert_eq!(result.warnings[0].raw_text, "  oops ");
        assert_eq!(
            result.warnings[0].message(),
            "Line 1 is not a number: \"  oops \" - skipping it."
        );
    }

    #[test]
    fn test_rows_carry_conversions() {
        let result = convert_lines(&["1000"], FlowUnit::MicrolitersPerMinute, &FormatConfig::default());
        let row = &result.rows[0];
        assert_eq!(row.input_unit, FlowUnit::MicrolitersPerMinute);
        let ml_per_min = row.conversions.value(FlowUnit::MillilitersPerMinute).unwrap();
        assert!((ml_per_min - 1.0).abs() < 1e-12);
    }
}
