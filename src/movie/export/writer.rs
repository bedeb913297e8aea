use std::io::Write;
use crate::movie::common::error::Result;
use crate::movie::export::types::ExportConfig;
use crate::movie::payload::FrameBuffer;

pub trait FrameWriter {
    fn write_frame(&self, frames: &FrameBuffer, index: usize, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
