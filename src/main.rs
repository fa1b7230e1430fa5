use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use tracing::info;

use rawcast_rs::image_pipeline::{
    ConversionConfig, HeaderOverrides, PixelType, TiffCompression, process_path,
};
use rawcast_rs::logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PixelDepth {
    #[value(name = "8")]
    Gray8,
    #[value(name = "16")]
    Gray16,
}

impl From<PixelDepth> for PixelType {
    fn from(depth: PixelDepth) -> Self {
        match depth {
            PixelDepth::Gray8 => PixelType::Gray8,
            PixelDepth::Gray16 => PixelType::Gray16,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "rawcast",
    version,
    about = "Convert RAW sensor dumps into grayscale TIFF images"
)]
struct Args {
    /// A RAW file, or a directory whose .raw files are all converted
    path: PathBuf,

    /// Skip writing TIFF outputs
    #[arg(long, default_value_t = false)]
    no_tiff: bool,

    /// Write a normalized 8-bit preview next to each input
    #[arg(long, default_value_t = false)]
    display: bool,

    /// Image width in pixels, overriding the file header
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels, overriding the file header
    #[arg(long)]
    height: Option<u32>,

    /// Bits per sample, overriding the file header
    #[arg(long, value_enum)]
    pixel_type: Option<PixelDepth>,

    /// Byte offset of the pixel data, overriding the file header
    #[arg(long)]
    header_size: Option<u64>,

    /// Directory for TIFF outputs (default: alongside each input)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TIFF compression method
    #[arg(long, value_enum, default_value = "none")]
    compression: CompressionArg,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    let overrides = HeaderOverrides {
        width: args.width,
        height: args.height,
        pixel_type: args.pixel_type.map(PixelType::from),
        reserved: None,
        header_size: args.header_size,
    };

    let config = ConversionConfig::builder()
        .compression(args.compression.into())
        .overrides(overrides)
        .save_tiff(!args.no_tiff)
        .display(args.display)
        .output_dir(args.output)
        .build();

    let report = process_path(&args.path, config)?;

    info!(
        converted = report.succeeded.len(),
        failed = report.failed.len(),
        "Run complete"
    );

    if !report.failed.is_empty() {
        bail!("{} file(s) failed to convert", report.failed.len());
    }

    Ok(())
}
