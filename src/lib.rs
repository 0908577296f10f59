//! Flowrate Unit Converter Library
//!
//! Converts volumetric flow rates between L/min, mL/min, µL/min, nL/min, L/h,
//! mL/h and µL/h, one value at a time or in batches with CSV export.

pub mod build_info;
pub mod flow;
pub mod tools;
