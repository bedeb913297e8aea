use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Malformed metadata document: {0}")]
    MalformedDocument(String),

    #[error("No \"{0}\" element found in the metadata")]
    MissingElement(String),

    #[error("No \"{attribute}\" attribute found in the \"{element}\" element")]
    MissingAttribute { attribute: String, element: String },

    #[error("Invalid \"{field}\" value: {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("Payload holds {actual} samples, expected {expected}")]
    PayloadShape { expected: usize, actual: usize },

    #[error("Frame index {index} out of range ({n_frames} frames)")]
    FrameIndexOutOfRange { index: usize, n_frames: usize },

    #[error("Failed to encode TIFF image: {0}")]
    Encode(String),

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MovieError {
    pub(crate) fn input_read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::InputRead { path, source }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::OutputWrite { path, source }
    }

    pub(crate) fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieError>;
