use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::{HeaderOverrides, HeaderParameters, PixelType};

/// Length of the parameter header: five little-endian `u16` values.
pub const HEADER_LEN: usize = 10;

/// Decodes the 10-byte parameter header of a RAW dump, resolving each field
/// against caller-supplied overrides.
pub struct HeaderReader;

impl HeaderReader {
    /// Decodes header parameters from the start of `data`.
    ///
    /// Each field resolves to its override when one is supplied, otherwise to
    /// the value read from the header. If the overrides are complete the
    /// header bytes are not read at all, so a headerless dump with explicit
    /// parameters decodes fine.
    ///
    /// Fails with [`ConversionError::HeaderTooShortError`] when the header
    /// must be read but fewer than [`HEADER_LEN`] bytes are available, and
    /// with [`ConversionError::InvalidHeaderError`] when a resolved field is
    /// out of range. Validation happens before any pixel data is touched.
    pub fn decode(&self, data: &[u8], overrides: &HeaderOverrides) -> Result<HeaderParameters> {
        let params = if let (Some(width), Some(height), Some(pixel_type), Some(header_size)) = (
            overrides.width,
            overrides.height,
            overrides.pixel_type,
            overrides.header_size,
        ) {
            HeaderParameters {
                width,
                height,
                pixel_type,
                reserved: overrides.reserved.unwrap_or(0),
                header_size,
            }
        } else {
            if data.len() < HEADER_LEN {
                return Err(ConversionError::HeaderTooShortError {
                    available: data.len(),
                });
            }

            let mut fields = [0u16; 5];
            for (field, chunk) in fields.iter_mut().zip(data[..HEADER_LEN].chunks_exact(2)) {
                *field = u16::from_le_bytes([chunk[0], chunk[1]]);
            }

            let pixel_type = match overrides.pixel_type {
                Some(pixel_type) => pixel_type,
                None => PixelType::from_bits(fields[2]).ok_or_else(|| {
                    ConversionError::InvalidHeaderError {
                        field: "pixel_type",
                        message: format!("unsupported bit depth {} (expected 8 or 16)", fields[2]),
                    }
                })?,
            };

            HeaderParameters {
                width: overrides.width.unwrap_or(fields[0] as u32),
                height: overrides.height.unwrap_or(fields[1] as u32),
                pixel_type,
                reserved: overrides.reserved.unwrap_or(fields[3]),
                header_size: overrides.header_size.unwrap_or(fields[4] as u64),
            }
        };

        if params.width == 0 {
            return Err(ConversionError::InvalidHeaderError {
                field: "width",
                message: "width must be at least 1".to_string(),
            });
        }
        if params.height == 0 {
            return Err(ConversionError::InvalidHeaderError {
                field: "height",
                message: "height must be at least 1".to_string(),
            });
        }

        debug!(
            width = params.width,
            height = params.height,
            bits = params.pixel_type.bits(),
            header_size = params.header_size,
            "Decoded RAW header"
        );

        Ok(params)
    }
}
