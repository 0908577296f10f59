//! Flowrate Tools module
//!
//! Caller-facing entry points: unit symbols in, serializable responses out.

pub mod batch;
pub mod convert;
pub mod status;
