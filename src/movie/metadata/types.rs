//! Metadata types

use std::fmt;
use std::str::FromStr;

use crate::movie::common::error::MovieError;

/// Pixel encoding declared by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Mono8,
    Mono10,
    Mono12,
    Mono14,
    Mono16,
}

impl PixelFormat {
    /// Bytes used by one sample in the payload.
    ///
    /// Sub-16-bit formats are stored unpacked in two bytes and are read as is.
    pub fn sample_bytes(self) -> usize {
        match self {
            PixelFormat::Mono8 => 1,
            PixelFormat::Mono10 | PixelFormat::Mono12 | PixelFormat::Mono14 | PixelFormat::Mono16 => 2,
        }
    }

    /// Nominal sensor bit depth, informational only.
    pub fn bit_depth(self) -> u32 {
        match self {
            PixelFormat::Mono8 => 8,
            PixelFormat::Mono10 => 10,
            PixelFormat::Mono12 => 12,
            PixelFormat::Mono14 => 14,
            PixelFormat::Mono16 => 16,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PixelFormat::Mono8 => "Mono8",
            PixelFormat::Mono10 => "Mono10",
            PixelFormat::Mono12 => "Mono12",
            PixelFormat::Mono14 => "Mono14",
            PixelFormat::Mono16 => "Mono16",
        }
    }
}

impl FromStr for PixelFormat {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mono8" => Ok(PixelFormat::Mono8),
            "Mono10" => Ok(PixelFormat::Mono10),
            "Mono12" => Ok(PixelFormat::Mono12),
            "Mono14" => Ok(PixelFormat::Mono14),
            "Mono16" => Ok(PixelFormat::Mono16),
            other => Err(MovieError::invalid("pixel_format", other)),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte order of multi-byte samples in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl FromStr for Endianness {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" => Ok(Endianness::Little),
            "big" => Ok(Endianness::Big),
            other => Err(MovieError::invalid("endianness", other)),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => f.write_str("little"),
            Endianness::Big => f.write_str("big"),
        }
    }
}

/// How a single payload sample is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub byte_order: Endianness,
    pub sample_bytes: usize,
}

impl ElementDescriptor {
    pub fn new(byte_order: Endianness, pixel_format: PixelFormat) -> Self {
        Self {
            byte_order,
            sample_bytes: pixel_format.sample_bytes(),
        }
    }
}

/// Camera identification block written by the recorder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraInfo {
    pub device_name: Option<String>,
    pub model_id: Option<String>,
    pub device_sn: Option<String>,
    pub mcu1_firmware_version: Option<String>,
    pub fpga1_firmware_version: Option<String>,
    pub hardware_revision: Option<String>,
}

/// Header block of a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieHeader {
    /// Frame width in pixels
    pub width: usize,
    /// Frame height in pixels
    pub height: usize,
    pub pixel_format: PixelFormat,
    pub endianness: Endianness,

    pub app_name: Option<String>,
    pub version: Option<String>,
    pub target_version: Option<String>,
    pub camera: Option<CameraInfo>,
    pub api_version: Option<String>,
    pub driver_version: Option<String>,
    pub offset_x: Option<i64>,
    pub offset_y: Option<i64>,
    /// Acquisition frame rate in Hz
    pub framerate: Option<f64>,
    /// Exposure time in microseconds
    pub exposure: Option<i64>,
    pub gain: Option<f64>,
}

impl MovieHeader {
    pub fn element_descriptor(&self) -> ElementDescriptor {
        ElementDescriptor::new(self.endianness, self.pixel_format)
    }
}

/// One entry of the frame index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    pub timestamp: u64,
    /// Camera frame counter, when recorded
    pub frame_number: Option<u64>,
}

/// Parsed `.rawm` document.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    pub header: MovieHeader,
    pub frames: Vec<FrameRecord>,
}

impl MovieMetadata {
    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn timestamps(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.timestamp).collect()
    }

    /// Expected `(n_frames, height, width)` shape of the payload.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_frames(), self.header.height, self.header.width)
    }

    /// Expected sample count, `None` on overflow.
    pub fn expected_samples(&self) -> Option<usize> {
        self.n_frames()
            .checked_mul(self.header.height)?
            .checked_mul(self.header.width)
    }
}
