//! Payload decoding module
//!
//! Turns the headerless `.raw` byte stream into typed samples and reshapes
//! them into a frame buffer.

mod decoder;
mod byteorder_decoder;
pub mod types;

pub use decoder::PayloadDecoder;
pub use byteorder_decoder::ByteOrderDecoder;
pub use types::{FrameBuffer, Samples};
