//! Preview rendering module
//!
//! Scales pixel buffers for 8-bit-oriented display. This affects previews
//! only; TIFF output always keeps the original bit depth and sample values.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::{PixelBuffer, SampleData};
use crate::image_pipeline::tiff::{ConversionConfig, StandardTiffWriter, TiffWriter};

/// An 8-bit grayscale rendition of a pixel buffer, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl PreviewImage {
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: scale_for_display(buffer),
        }
    }
}

/// Scales a buffer to the 8-bit display range.
///
/// 16-bit samples are min-max normalized: `(v - min) / (max - min) * 255`,
/// clamped to `[0, 255]`. A constant buffer (`max == min`) maps every sample
/// to 0. 8-bit samples pass through unscaled.
pub fn scale_for_display(buffer: &PixelBuffer) -> Vec<u8> {
    match &buffer.samples {
        SampleData::Gray8(data) => data.clone(),
        SampleData::Gray16(data) => {
            let (min, max) = match (data.iter().copied().min(), data.iter().copied().max()) {
                (Some(min), Some(max)) => (min, max),
                _ => return Vec::new(),
            };
            if max == min {
                return vec![0u8; data.len()];
            }
            let range = (max - min) as f32;
            data.iter()
                .map(|&v| (((v - min) as f32 / range) * 255.0).clamp(0.0, 255.0) as u8)
                .collect()
        }
    }
}

/// Boundary for on-screen display of previews. The pipeline hands every
/// preview through this trait so the rendering backend stays swappable.
pub trait PreviewRenderer {
    fn render(&self, image: &PreviewImage, source: &Path) -> Result<()>;
}

/// Renders previews as 8-bit grayscale TIFF files next to the source,
/// named `<stem>_preview.tiff`.
pub struct FilePreviewRenderer;

impl FilePreviewRenderer {
    fn preview_path(source: &Path) -> std::path::PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("preview");
        source.with_file_name(format!("{stem}_preview.tiff"))
    }
}

impl PreviewRenderer for FilePreviewRenderer {
    fn render(&self, image: &PreviewImage, source: &Path) -> Result<()> {
        let buffer = PixelBuffer {
            width: image.width,
            height: image.height,
            samples: SampleData::Gray8(image.pixels.clone()),
        };

        let path = Self::preview_path(source);
        let mut output = File::create(&path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        StandardTiffWriter.write_tiff(&buffer, &mut output, &ConversionConfig::default())?;

        info!(preview = %path.display(), "Preview written");
        Ok(())
    }
}
