//! Image processing pipeline module
//!
//! This module converts RAW sensor dumps (a 10-byte parameter header followed
//! by uncounted pixel samples) into grayscale TIFF images, with separate
//! modules for header/buffer decoding, TIFF writing, preview rendering, and
//! conversion orchestration.

pub mod raw;
pub mod tiff;
pub mod preview;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raw::{
    HeaderParameters,
    HeaderOverrides,
    HeaderReader,
    BufferReconstructor,
    PixelBuffer,
    PixelType,
    SampleData,
    RawDumpReader,
    RawImageReader,
};

pub use tiff::{
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
};

pub use preview::{
    PreviewImage,
    PreviewRenderer,
    FilePreviewRenderer,
};

pub use conversions::{
    BatchReport,
    FileFailure,
    RawToTiffPipeline,
    process_path,
};
