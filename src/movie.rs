//! Raw movie reading module
//!
//! Reads movies stored as a `.rawm` XML metadata document next to a
//! headerless `.raw` pixel payload, with separate modules for metadata
//! parsing, payload decoding, loading orchestration and frame export.

pub mod common;
pub mod metadata;
pub mod payload;
pub mod reader;
pub mod timing;
pub mod export;

pub use common::{
    MovieError,
    Result,
};

pub use metadata::{
    Endianness,
    FrameRecord,
    MovieHeader,
    MovieMetadata,
    PixelFormat,
    parse_metadata,
    read_metadata,
};

pub use payload::{
    ByteOrderDecoder,
    FrameBuffer,
    PayloadDecoder,
};

pub use reader::{
    MonoMovie,
    MovieReader,
    ReaderConfig,
    load_mono,
};

pub use timing::TimestampStats;

pub use export::{
    ExportConfig,
    FrameWriter,
    TiffCompression,
    TiffFrameWriter,
    TiffPredictor,
};
