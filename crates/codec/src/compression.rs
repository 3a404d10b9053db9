//! Zlib helpers.

use crate::error::DecompressionError;

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};

/// The deflate compression method in the zlib header.
const ZLIB_DEFLATE_METHOD: u8 = 8;

/// The preset dictionary flag in the zlib header.
const ZLIB_PRESET_DICTIONARY_FLAG: u8 = 0x20;

/// The minimum amount of bytes reserved in the output buffer on each inflate round.
const MIN_OUTPUT_RESERVE: usize = 1024;

/// The default maximum size of an inflated buffer.
pub const DEFAULT_MAX_INFLATED_SIZE: usize = 32 * 1024 * 1024;

/// Compresses the provided data into a zlib stream.
pub fn compress(raw: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::default());
    encoder.write_all(raw)?;
    encoder.finish()
}

/// Returns true if the buffer starts with a valid zlib header for a deflate stream without
/// preset dictionary.
pub fn is_likely_compressed(buf: &[u8]) -> bool {
    let &[cmf, flg, ..] = buf else { return false };
    let method = cmf & 0x0f;
    let window = cmf >> 4;
    let check = (u16::from(cmf) << 8) | u16::from(flg);

    method == ZLIB_DEFLATE_METHOD &&
        window <= 7 &&
        check % 31 == 0 &&
        flg & ZLIB_PRESET_DICTIONARY_FLAG == 0
}

/// Inflates the provided zlib stream. The buffer must contain exactly one complete stream which
/// inflates to at most `max_size` bytes.
pub fn decompress(buf: &[u8], max_size: usize) -> Result<Vec<u8>, DecompressionError> {
    // the batch data compresses well, start with an estimation of the inflated size.
    let mut output = Vec::with_capacity(
        buf.len().saturating_mul(4).max(MIN_OUTPUT_RESERVE).min(max_size.saturating_add(1)),
    );
    let mut ctx = Decompress::new(true);

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity().max(MIN_OUTPUT_RESERVE));
        }

        let (read, written) = (ctx.total_in(), ctx.total_out());
        let input = &buf[read as usize..];

        let status = ctx
            .decompress_vec(input, &mut output, FlushDecompress::None)
            .map_err(|err| DecompressionError::InvalidStream(err.to_string()))?;

        if output.len() > max_size {
            return Err(DecompressionError::TooLarge(max_size))
        }

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                // the output buffer has room left, no progress means the input is exhausted.
                if ctx.total_in() == read && ctx.total_out() == written {
                    return Err(DecompressionError::Truncated(ctx.total_in()))
                }
            }
        }
    }

    let consumed = ctx.total_in() as usize;
    if consumed != buf.len() {
        return Err(DecompressionError::TrailingBytes(buf.len() - consumed))
    }

    Ok(output)
}
