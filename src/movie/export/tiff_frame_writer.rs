use std::io::{Cursor, Seek, Write};

use ndarray::Axis;
use tiff::encoder::{colortype, TiffEncoder};
use tracing::debug;

use crate::movie::common::error::{MovieError, Result};
use crate::movie::export::types::ExportConfig;
use crate::movie::export::writer::FrameWriter;
use crate::movie::payload::FrameBuffer;

/// Writes Mono8 frames as Gray8 and two-byte frames as Gray16 TIFF.
pub struct TiffFrameWriter;

fn build_encoder<W: Write + Seek>(output: W, config: &ExportConfig) -> Result<TiffEncoder<W>> {
    Ok(TiffEncoder::new(output)
        .map_err(|e| MovieError::Encode(e.to_string()))?
        .with_compression(config.compression.into())
        .with_predictor(config.predictor.into()))
}

/// TIFF stores dimensions as 32-bit values.
fn tiff_dimension(value: usize, name: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| MovieError::Encode(format!("{name} {value} does not fit in a TIFF image")))
}

impl FrameWriter for TiffFrameWriter {
    fn write_frame(&self, frames: &FrameBuffer, index: usize, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        let (n_frames, height, width) = frames.shape();
        if index >= n_frames {
            return Err(MovieError::FrameIndexOutOfRange { index, n_frames });
        }
        let tiff_width = tiff_dimension(width, "width")?;
        let tiff_height = tiff_dimension(height, "height")?;
        debug!("Encoding frame {} as TIFF: {}x{}", index, width, height);

        let mut buffer = Vec::new();
        {
            let mut encoder = build_encoder(Cursor::new(&mut buffer), config)?;
            let result = match frames {
                FrameBuffer::Mono8(a) => {
                    let samples: Vec<u8> = a.index_axis(Axis(0), index).iter().copied().collect();
                    encoder.write_image::<colortype::Gray8>(tiff_width, tiff_height, &samples)
                }
                FrameBuffer::Mono16(a) => {
                    let samples: Vec<u16> = a.index_axis(Axis(0), index).iter().copied().collect();
                    encoder.write_image::<colortype::Gray16>(tiff_width, tiff_height, &samples)
                }
            };
            result.map_err(|e| MovieError::Encode(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}
