use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    FileAccessError(String),

    #[error("File too short for a RAW header: {available} bytes available, 10 required")]
    HeaderTooShortError { available: usize },

    #[error("Invalid header field `{field}`: {message}")]
    InvalidHeaderError { field: &'static str, message: String },

    #[error("Pixel data truncated: expected {expected} bytes, {available} available")]
    TruncatedDataError { expected: usize, available: usize },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
