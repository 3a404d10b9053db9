//! The codec of the sequencer batches appended to the OVM canonical transaction chain.

pub mod compression;

pub use decoder::{from_hex_string, parse_event, BatchDecoder, BatchDecoderConfig};
mod decoder;

pub mod decoding;

pub use error::{
    BatchDecodingError, CodecError, DecodingError, DecompressionError, EncodingError,
    MalformedReason,
};
mod error;

pub use metrics::BatchDecoderMetrics;
mod metrics;
