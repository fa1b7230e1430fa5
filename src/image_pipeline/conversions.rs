//! Pipeline conversions module
//!
//! This module contains orchestration logic for converting RAW dumps into
//! TIFF files, per file and per directory.

mod raw_to_tiff;
mod batch;

#[cfg(test)]
mod tests;

pub use raw_to_tiff::RawToTiffPipeline;
pub use batch::{BatchReport, FileFailure, process_path};
