//! Decoded payload types

use ndarray::{Array3, ArrayView2, Axis};

use crate::movie::common::error::{MovieError, Result};

/// Flat sample sequence in payload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reshapes the samples into `(n_frames, height, width)`, row-major.
    pub fn into_frames(self, shape: (usize, usize, usize)) -> Result<FrameBuffer> {
        let (n_frames, height, width) = shape;
        let actual = self.len();
        let expected = n_frames
            .checked_mul(height)
            .and_then(|n| n.checked_mul(width))
            .unwrap_or(usize::MAX);
        if actual != expected {
            return Err(MovieError::PayloadShape { expected, actual });
        }
        let shape_error = |_: ndarray::ShapeError| MovieError::PayloadShape { expected, actual };

        match self {
            Samples::U8(v) => Array3::from_shape_vec(shape, v)
                .map(FrameBuffer::Mono8)
                .map_err(shape_error),
            Samples::U16(v) => Array3::from_shape_vec(shape, v)
                .map(FrameBuffer::Mono16)
                .map_err(shape_error),
        }
    }
}

/// Decoded movie frames, shape `(n_frames, height, width)`.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBuffer {
    /// One byte per sample
    Mono8(Array3<u8>),
    /// Two bytes per sample (Mono10 to Mono16, unscaled)
    Mono16(Array3<u16>),
}

impl FrameBuffer {
    pub fn shape(&self) -> (usize, usize, usize) {
        match self {
            FrameBuffer::Mono8(a) => a.dim(),
            FrameBuffer::Mono16(a) => a.dim(),
        }
    }

    pub fn n_frames(&self) -> usize {
        self.shape().0
    }

    pub fn height(&self) -> usize {
        self.shape().1
    }

    pub fn width(&self) -> usize {
        self.shape().2
    }

    pub fn sample_bytes(&self) -> usize {
        match self {
            FrameBuffer::Mono8(_) => 1,
            FrameBuffer::Mono16(_) => 2,
        }
    }

    pub fn as_mono8(&self) -> Option<&Array3<u8>> {
        match self {
            FrameBuffer::Mono8(a) => Some(a),
            FrameBuffer::Mono16(_) => None,
        }
    }

    pub fn as_mono16(&self) -> Option<&Array3<u16>> {
        match self {
            FrameBuffer::Mono16(a) => Some(a),
            FrameBuffer::Mono8(_) => None,
        }
    }

    /// View of frame `index` for 8-bit movies.
    pub fn frame_mono8(&self, index: usize) -> Option<ArrayView2<'_, u8>> {
        self.as_mono8()
            .filter(|a| index < a.len_of(Axis(0)))
            .map(|a| a.index_axis(Axis(0), index))
    }

    /// View of frame `index` for 16-bit movies.
    pub fn frame_mono16(&self, index: usize) -> Option<ArrayView2<'_, u16>> {
        self.as_mono16()
            .filter(|a| index < a.len_of(Axis(0)))
            .map(|a| a.index_axis(Axis(0), index))
    }
}
