//! Movie metadata module
//!
//! Parses the `.rawm` XML document that describes frame geometry, pixel
//! encoding, byte order and per-frame timestamps.

mod parser;
mod xml;
pub mod types;

pub use parser::{parse_metadata, read_metadata};
pub use types::{
    CameraInfo, ElementDescriptor, Endianness, FrameRecord, MovieHeader, MovieMetadata,
    PixelFormat,
};
