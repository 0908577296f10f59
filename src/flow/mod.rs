//! Flow-rate conversion module
//!
//! Unit registry, conversion through the base unit, formatting, batch
//! processing and CSV export.

pub mod batch;
pub mod converter;
pub mod error;
pub mod export;
pub mod format;
pub mod units;

pub use batch::{
    convert_lines, convert_text, split_lines, BatchResult, BatchRow, BatchStatus, BatchWarning,
    EMPTY_BATCH_MESSAGE,
};
pub use converter::{convert, convert_all, parse_value, ConversionSet, UnitConversion};
pub use error::{FlowError, FlowResult};
pub use export::{to_csv, write_csv, CsvLayout, DEFAULT_EXPORT_FILE};
pub use format::{format_value, FormatConfig};
pub use units::{canonical_symbol, FlowUnit};
