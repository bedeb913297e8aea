use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::movie::{
    common::error::{MovieError, Result},
    export::{ExportConfig, FrameWriter},
    metadata::{ElementDescriptor, MovieMetadata, read_metadata},
    payload::{ByteOrderDecoder, FrameBuffer, PayloadDecoder},
    reader::types::{MonoMovie, ReaderConfig},
};

/// Loads `.rawm`/`.raw` movie pairs.
pub struct MovieReader<D: PayloadDecoder = ByteOrderDecoder> {
    decoder: D,
    config: ReaderConfig,
}

impl MovieReader<ByteOrderDecoder> {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            decoder: ByteOrderDecoder,
            config,
        }
    }
}

impl Default for MovieReader<ByteOrderDecoder> {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

/// Loads the movie described by `metadata_path` with the default configuration.
///
/// Returns the `(n_frames, height, width)` frame buffer and the per-frame
/// timestamps in the same order.
pub fn load_mono<P: AsRef<Path>>(metadata_path: P) -> Result<(FrameBuffer, Vec<u64>)> {
    MovieReader::new(ReaderConfig::default()).load_mono(metadata_path)
}

/// Payload path for a metadata file: same directory and stem, `extension` swapped in.
pub fn payload_path(metadata_path: &Path, extension: &str) -> PathBuf {
    metadata_path.with_extension(extension)
}

impl<D: PayloadDecoder> MovieReader<D> {
    pub fn with_custom(decoder: D, config: ReaderConfig) -> Self {
        Self { decoder, config }
    }

    pub fn load_mono<P: AsRef<Path>>(&self, metadata_path: P) -> Result<(FrameBuffer, Vec<u64>)> {
        self.load(metadata_path).map(MonoMovie::into_parts)
    }

    /// Loads frames, timestamps and the parsed metadata.
    #[instrument(skip(self, metadata_path), fields(path = %metadata_path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, metadata_path: P) -> Result<MonoMovie> {
        let metadata_path = metadata_path.as_ref();
        info!("Loading movie");

        let metadata = {
            let _span = tracing::info_span!("read_metadata").entered();
            read_metadata(metadata_path)?
        };
        let descriptor = metadata.header.element_descriptor();
        let raw_path = payload_path(metadata_path, &self.config.payload_extension);

        let data = {
            let _span = tracing::info_span!("read_payload",
                payload = %raw_path.display()
            ).entered();
            self.read_payload(&raw_path, &metadata, descriptor)?
        };

        let samples = {
            let _span = tracing::info_span!("decode_payload").entered();
            self.decoder.decode(data, descriptor)?
        };

        let frames = {
            let _span = tracing::info_span!("reshape").entered();
            samples.into_frames(metadata.shape())?
        };

        info!(
            n_frames = metadata.n_frames(),
            height = metadata.header.height,
            width = metadata.header.width,
            pixel_format = %metadata.header.pixel_format,
            "Movie loaded"
        );

        Ok(MonoMovie {
            frames,
            timestamps: metadata.timestamps(),
            metadata,
        })
    }

    fn read_payload(
        &self,
        path: &Path,
        metadata: &MovieMetadata,
        descriptor: ElementDescriptor,
    ) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(MovieError::input_read(path))?;
        let len = file.metadata().map_err(MovieError::input_read(path))?.len();
        debug!(bytes = len, "Opened payload");

        if self.config.validate_payload_size {
            self.validate_payload_size(len, metadata, descriptor)?;
        }

        let mut data = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
        file.read_to_end(&mut data).map_err(MovieError::input_read(path))?;
        Ok(data)
    }

    fn validate_payload_size(
        &self,
        len: u64,
        metadata: &MovieMetadata,
        descriptor: ElementDescriptor,
    ) -> Result<()> {
        let sample_bytes = descriptor.sample_bytes as u64;
        let actual = usize::try_from(len / sample_bytes).unwrap_or(usize::MAX);
        let expected = metadata.expected_samples().unwrap_or(usize::MAX);

        if expected.checked_mul(descriptor.sample_bytes).map(|n| n as u64) != Some(len) {
            return Err(MovieError::PayloadShape { expected, actual });
        }
        Ok(())
    }

    /// Loads a movie and writes frame `index` to `output_path`.
    #[instrument(skip(self, metadata_path, output_path, writer, export_config))]
    pub fn export_frame<P, Q, W>(
        &self,
        metadata_path: P,
        index: usize,
        output_path: Q,
        writer: &W,
        export_config: &ExportConfig,
    ) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        W: FrameWriter,
    {
        self.load(metadata_path)?
            .write_frame(index, output_path, writer, export_config)
    }
}
