use tracing::{info, instrument};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    preview::{FilePreviewRenderer, PreviewImage, PreviewRenderer},
    raw::{RawDumpReader, RawImageReader},
    tiff::{ConversionConfig, StandardTiffWriter, TiffWriter},
};

pub struct RawToTiffPipeline<R: RawImageReader, W: TiffWriter, P: PreviewRenderer> {
    reader: R,
    writer: W,
    preview: P,
    config: ConversionConfig,
}

impl RawToTiffPipeline<RawDumpReader, StandardTiffWriter, FilePreviewRenderer> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: RawDumpReader::new(config.overrides),
            writer: StandardTiffWriter,
            preview: FilePreviewRenderer,
            config,
        }
    }
}

impl<R: RawImageReader, W: TiffWriter, P: PreviewRenderer> RawToTiffPipeline<R, W, P> {
    pub fn with_custom(reader: R, writer: W, preview: P, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            preview,
            config,
        }
    }

    /// Decodes a RAW dump and encodes it as a TIFF into `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting RAW to TIFF conversion");

        let image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Runs the configured per-file behavior: decode, then write the TIFF
    /// and/or render the preview. The input is read fully into memory; the
    /// file handle is released before any output is produced.
    #[instrument(skip(self, input))]
    pub fn process_file<Q: AsRef<Path>>(&self, input: Q) -> Result<()> {
        let input = input.as_ref();

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input).map_err(|e| {
                ConversionError::FileAccessError(format!("{}: {}", input.display(), e))
            })?
        };

        let image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(&input_data)?
        };

        if self.config.save_tiff {
            let output_path = self.output_path(input);
            let mut output_file = File::create(&output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;

            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&image, &mut output_file, &self.config)?;
            info!(
                input = %input.display(),
                output = %output_path.display(),
                "TIFF written"
            );
        }

        if self.config.display {
            let _span = tracing::info_span!("render_preview").entered();
            self.preview.render(&PreviewImage::from_buffer(&image), input)?;
        }

        Ok(())
    }

    /// Where the TIFF for `input` goes: the configured output directory when
    /// set, otherwise alongside the input, always `<stem>.tiff`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => dir
                .join(input.file_name().unwrap_or_default())
                .with_extension("tiff"),
            None => input.with_extension("tiff"),
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
