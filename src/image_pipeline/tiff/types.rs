//! Conversion configuration types

use std::path::PathBuf;

use crate::image_pipeline::raw::types::HeaderOverrides;

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced (default)
    DeflateBalanced,
}

/// Configuration for RAW dump to TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    /// Note: Predictor adds processing time, set to None for maximum speed
    pub predictor: Option<u16>,
    /// Header parameters supplied by the caller instead of read from the file
    pub overrides: HeaderOverrides,
    /// Whether to write a TIFF per input file
    pub save_tiff: bool,
    /// Whether to render a normalized 8-bit preview per input file
    pub display: bool,
    /// Directory for TIFF outputs; when unset each TIFF lands next to its source
    pub output_dir: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            overrides: HeaderOverrides::default(),
            save_tiff: true,
            display: false,
            output_dir: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    overrides: Option<HeaderOverrides>,
    save_tiff: Option<bool>,
    display: Option<bool>,
    output_dir: Option<Option<PathBuf>>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn overrides(mut self, overrides: HeaderOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn save_tiff(mut self, save: bool) -> Self {
        self.save_tiff = Some(save);
        self
    }

    pub fn display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            overrides: self.overrides.unwrap_or(default.overrides),
            save_tiff: self.save_tiff.unwrap_or(default.save_tiff),
            display: self.display.unwrap_or(default.display),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}
