//! Reader configuration and result types

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::movie::common::error::{MovieError, Result};
use crate::movie::export::{ExportConfig, FrameWriter};
use crate::movie::metadata::MovieMetadata;
use crate::movie::payload::FrameBuffer;

/// Extension of the payload file written next to the `.rawm` document.
pub const PAYLOAD_EXTENSION: &str = "raw";

/// Configuration for loading a movie
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Compare the payload size with the declared geometry before reading it.
    /// When disabled a mismatch is still reported, after the payload is decoded.
    pub validate_payload_size: bool,
    /// Extension substituted for the metadata file's own to locate the payload
    pub payload_extension: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            validate_payload_size: true,
            payload_extension: PAYLOAD_EXTENSION.to_string(),
        }
    }
}

impl ReaderConfig {
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for ReaderConfig
#[derive(Default)]
pub struct ReaderConfigBuilder {
    validate_payload_size: Option<bool>,
    payload_extension: Option<String>,
}

impl ReaderConfigBuilder {
    pub fn validate_payload_size(mut self, validate: bool) -> Self {
        self.validate_payload_size = Some(validate);
        self
    }

    pub fn payload_extension(mut self, extension: impl Into<String>) -> Self {
        self.payload_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> ReaderConfig {
        let default = ReaderConfig::default();
        ReaderConfig {
            validate_payload_size: self.validate_payload_size.unwrap_or(default.validate_payload_size),
            payload_extension: self.payload_extension.unwrap_or(default.payload_extension),
        }
    }
}

/// A loaded monochrome movie.
///
/// `timestamps[i]` belongs to frame `i` of `frames`.
#[derive(Debug, Clone)]
pub struct MonoMovie {
    pub frames: FrameBuffer,
    pub timestamps: Vec<u64>,
    pub metadata: MovieMetadata,
}

impl MonoMovie {
    pub fn into_parts(self) -> (FrameBuffer, Vec<u64>) {
        (self.frames, self.timestamps)
    }

    /// Writes frame `index` to a newly created file at `output_path`.
    pub fn write_frame<W: FrameWriter>(
        &self,
        index: usize,
        output_path: impl AsRef<Path>,
        writer: &W,
        config: &ExportConfig,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let n_frames = self.frames.n_frames();
        if index >= n_frames {
            return Err(MovieError::FrameIndexOutOfRange { index, n_frames });
        }

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(MovieError::output_write(output_path))?
        };

        writer.write_frame(&self.frames, index, &mut output_file, config)?;

        info!(
            index,
            timestamp = self.timestamps[index],
            output = %output_path.display(),
            "Frame exported"
        );
        Ok(())
    }
}
