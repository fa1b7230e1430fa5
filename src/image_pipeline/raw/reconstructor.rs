use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::{HeaderParameters, PixelBuffer, PixelType, SampleData};

/// Upper bound on width and height. Values above this are taken as a
/// corrupted or misread header rather than a plausible sensor size.
pub const MAX_DIMENSION: u32 = 1_000_000;

/// Rebuilds the 2-D pixel buffer described by a decoded header from the
/// file's remaining bytes.
pub struct BufferReconstructor;

impl BufferReconstructor {
    /// Interprets the payload starting at `header.header_size` as row-major
    /// unsigned samples of the declared bit depth.
    ///
    /// Exactly `width * height * bytes_per_sample` bytes are consumed;
    /// trailing bytes are ignored. A payload shorter than that fails with
    /// [`ConversionError::TruncatedDataError`] rather than silently
    /// truncating, and absurd header values are rejected with
    /// [`ConversionError::InvalidHeaderError`] before any allocation.
    pub fn reconstruct(&self, data: &[u8], header: &HeaderParameters) -> Result<PixelBuffer> {
        if header.width > MAX_DIMENSION {
            return Err(ConversionError::InvalidHeaderError {
                field: "width",
                message: format!("{} exceeds the maximum of {}", header.width, MAX_DIMENSION),
            });
        }
        if header.height > MAX_DIMENSION {
            return Err(ConversionError::InvalidHeaderError {
                field: "height",
                message: format!("{} exceeds the maximum of {}", header.height, MAX_DIMENSION),
            });
        }

        let bytes_per_sample = header.pixel_type.bytes_per_sample();
        let expected = (header.width as usize)
            .checked_mul(header.height as usize)
            .and_then(|pixels| pixels.checked_mul(bytes_per_sample))
            .ok_or_else(|| ConversionError::InvalidHeaderError {
                field: "width",
                message: format!(
                    "{}x{} at {} bytes per sample overflows the payload size",
                    header.width, header.height, bytes_per_sample
                ),
            })?;

        let offset = usize::try_from(header.header_size).unwrap_or(usize::MAX);
        let available = data.len().saturating_sub(offset);
        let payload = offset
            .checked_add(expected)
            .and_then(|end| data.get(offset..end))
            .ok_or(ConversionError::TruncatedDataError {
                expected,
                available,
            })?;
        let samples = match header.pixel_type {
            PixelType::Gray8 => SampleData::Gray8(payload.to_vec()),
            PixelType::Gray16 => SampleData::Gray16(
                payload
                    .chunks_exact(2)
                    .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
                    .collect(),
            ),
        };

        debug!(
            width = header.width,
            height = header.height,
            bytes = expected,
            "Reconstructed pixel buffer"
        );

        Ok(PixelBuffer {
            width: header.width as usize,
            height: header.height as usize,
            samples,
        })
    }
}
