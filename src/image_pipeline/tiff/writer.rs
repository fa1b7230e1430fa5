use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::PixelBuffer;
use crate::image_pipeline::tiff::types::ConversionConfig;

pub trait TiffWriter {
    fn write_tiff(&self, image: &PixelBuffer, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
