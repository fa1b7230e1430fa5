//! RAW dump reading module
//!
//! A RAW dump is a 10-byte parameter header followed by unstructured pixel
//! samples:
//!
//! ```text
//! Offset 0:  u16  width
//! Offset 2:  u16  height
//! Offset 4:  u16  pixel type   (8 or 16 bits per sample)
//! Offset 6:  u16  reserved     (decoded, never interpreted)
//! Offset 8:  u16  header size  (byte offset of pixel data start)
//! ```
//!
//! All multi-byte values, header fields and 16-bit samples alike, are
//! little-endian. Samples are stored row-major, top row first.

mod header;
mod reconstructor;
mod reader;
pub mod types;


pub use header::{HEADER_LEN, HeaderReader};
pub use reconstructor::{BufferReconstructor, MAX_DIMENSION};
pub use reader::{RawDumpReader, RawImageReader};
pub use types::{HeaderOverrides, HeaderParameters, PixelBuffer, PixelType, SampleData};
