//! Frame export module
//!
//! Writes a single decoded frame as a grayscale TIFF image.

mod writer;
mod tiff_frame_writer;
pub mod types;

pub use writer::FrameWriter;
pub use tiff_frame_writer::TiffFrameWriter;
pub use types::{ExportConfig, TiffCompression, TiffPredictor};
