use crate::movie::common::error::Result;
use crate::movie::metadata::ElementDescriptor;
use crate::movie::payload::types::Samples;

pub trait PayloadDecoder {
    fn decode(&self, data: Vec<u8>, descriptor: ElementDescriptor) -> Result<Samples>;
}
