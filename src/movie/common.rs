//! Common utilities module
//!
//! This module contains the error type shared by the metadata parser,
//! the payload decoder and the frame exporter.

pub mod error;

pub use error::{MovieError, Result};
