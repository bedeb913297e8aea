//! Movie reading module
//!
//! Orchestrates metadata parsing, payload decoding and reshaping into a
//! frame buffer.

mod movie_reader;
pub mod types;


pub use movie_reader::{MovieReader, load_mono, payload_path};
pub use types::{MonoMovie, ReaderConfig, ReaderConfigBuilder, PAYLOAD_EXTENSION};
