//! Frame export settings

use tiff::encoder::{compression::DeflateLevel, Compression};
use tiff::tags::Predictor;

/// Compression applied to an exported frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffCompression {
    #[default]
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<TiffCompression> for Compression {
    fn from(compression: TiffCompression) -> Self {
        match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        }
    }
}

/// Sample transform applied before compression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffPredictor {
    #[default]
    None,
    /// Horizontal differencing (TIFF predictor 2)
    Horizontal,
}

impl From<TiffPredictor> for Predictor {
    fn from(predictor: TiffPredictor) -> Self {
        match predictor {
            TiffPredictor::None => Predictor::None,
            TiffPredictor::Horizontal => Predictor::Horizontal,
        }
    }
}

/// How a frame is encoded; uncompressed with no predictor by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportConfig {
    pub compression: TiffCompression,
    pub predictor: TiffPredictor,
}

impl ExportConfig {
    pub fn with_compression(mut self, compression: TiffCompression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_predictor(mut self, predictor: TiffPredictor) -> Self {
        self.predictor = predictor;
        self
    }
}
