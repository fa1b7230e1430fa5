use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::raw_to_tiff::RawToTiffPipeline;
use crate::image_pipeline::preview::{PreviewImage, PreviewRenderer};
use crate::image_pipeline::raw::types::{PixelBuffer, SampleData};
use crate::image_pipeline::raw::RawImageReader;
use crate::image_pipeline::tiff::{ConversionConfig, TiffCompression, TiffWriter};

struct MockReader {
    should_fail: bool,
    mock_data: Option<PixelBuffer>,
}

impl RawImageReader for MockReader {
    fn read_raw(&self, _data: &[u8]) -> Result<PixelBuffer> {
        if self.should_fail {
            return Err(ConversionError::TruncatedDataError {
                expected: 100,
                available: 0,
            });
        }
        Ok(self.mock_data.clone().unwrap_or(PixelBuffer {
            width: 100,
            height: 100,
            samples: SampleData::Gray16(vec![0u16; 100 * 100]),
        }))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<PixelBuffer>>>,
}

impl TiffWriter for MockWriter {
    fn write_tiff(
        &self,
        image: &PixelBuffer,
        _output: &mut dyn Write,
        _config: &ConversionConfig,
    ) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

struct MockPreview;

impl PreviewRenderer for MockPreview {
    fn render(&self, _image: &PreviewImage, _source: &Path) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .compression(TiffCompression::Lzw)
        .predictor(Some(2))
        .save_tiff(false)
        .display(true)
        .output_dir(Some(PathBuf::from("/tmp/out")))
        .build();

    assert!(matches!(config.compression, TiffCompression::Lzw));
    assert_eq!(config.predictor, Some(2));
    assert!(!config.save_tiff);
    assert!(config.display);
    assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline =
        RawToTiffPipeline::with_custom(reader, writer, MockPreview, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake raw data", &mut output);

    assert!(result.is_ok());
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: true,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline =
        RawToTiffPipeline::with_custom(reader, writer, MockPreview, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake raw data", &mut output);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ConversionError::TruncatedDataError { .. }
    ));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: true,
        written_data: written,
    };

    let pipeline =
        RawToTiffPipeline::with_custom(reader, writer, MockPreview, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake raw data", &mut output);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ConversionError::EncodeError(_)
    ));
}

#[test]
fn test_output_path_next_to_input() {
    let pipeline = RawToTiffPipeline::new(ConversionConfig::default());
    assert_eq!(
        pipeline.output_path(Path::new("/data/frame_07.raw")),
        PathBuf::from("/data/frame_07.tiff")
    );
}

#[test]
fn test_output_path_in_output_dir() {
    let config = ConversionConfig::builder()
        .output_dir(Some(PathBuf::from("/converted")))
        .build();
    let pipeline = RawToTiffPipeline::new(config);
    assert_eq!(
        pipeline.output_path(Path::new("/data/frame_07.raw")),
        PathBuf::from("/converted/frame_07.tiff")
    );
}
