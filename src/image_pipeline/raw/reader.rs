use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::header::HeaderReader;
use crate::image_pipeline::raw::reconstructor::BufferReconstructor;
use crate::image_pipeline::raw::types::{HeaderOverrides, PixelBuffer};

pub trait RawImageReader {
    fn read_raw(&self, data: &[u8]) -> Result<PixelBuffer>;
}

/// Reads RAW dumps per the 10-byte-header layout, honoring the configured
/// parameter overrides.
pub struct RawDumpReader {
    overrides: HeaderOverrides,
}

impl RawDumpReader {
    pub fn new(overrides: HeaderOverrides) -> Self {
        Self { overrides }
    }
}

impl RawImageReader for RawDumpReader {
    fn read_raw(&self, data: &[u8]) -> Result<PixelBuffer> {
        let header = HeaderReader.decode(data, &self.overrides)?;
        BufferReconstructor.reconstruct(data, &header)
    }
}
