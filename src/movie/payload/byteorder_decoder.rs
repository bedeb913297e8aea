//! Payload decoder backed by the byteorder crate.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

use crate::movie::common::error::{MovieError, Result};
use crate::movie::metadata::{ElementDescriptor, Endianness};
use crate::movie::payload::decoder::PayloadDecoder;
use crate::movie::payload::types::Samples;

/// Decodes one- and two-byte unsigned samples in either byte order.
///
/// Only complete samples are decoded: a trailing odd byte of a two-byte
/// payload is dropped and left for the shape check to report.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteOrderDecoder;

impl PayloadDecoder for ByteOrderDecoder {
    fn decode(&self, data: Vec<u8>, descriptor: ElementDescriptor) -> Result<Samples> {
        debug!(
            bytes = data.len(),
            sample_bytes = descriptor.sample_bytes,
            byte_order = %descriptor.byte_order,
            "Decoding payload"
        );

        match descriptor.sample_bytes {
            1 => Ok(Samples::U8(data)),
            2 => {
                let complete = data.len() / 2;
                let mut samples = vec![0u16; complete];
                let src = &data[..complete * 2];
                match descriptor.byte_order {
                    Endianness::Little => LittleEndian::read_u16_into(src, &mut samples),
                    Endianness::Big => BigEndian::read_u16_into(src, &mut samples),
                }
                Ok(Samples::U16(samples))
            }
            other => Err(MovieError::invalid("sample_bytes", other.to_string())),
        }
    }
}
