//! Convenience encoding helpers.

use std::io::{self, Write};

use minipack_buffers::IoSink;

use crate::{EncodeError, EncoderOptions, MsgPackEncoder, Value};

/// Encode with default options.
pub fn pack(value: &Value) -> Result<Vec<u8>, EncodeError> {
    MsgPackEncoder::new().encode(value)
}

/// Encode with the given options.
pub fn pack_with(value: &Value, options: EncoderOptions) -> Result<Vec<u8>, EncodeError> {
    MsgPackEncoder::with_options(options).encode(value)
}

/// Encode straight into `writer`.
///
/// Output is staged in an [`io::BufWriter`] and flushed once the value is
/// written. A failed call may still leave a truncated document behind.
pub fn pack_into<W: io::Write>(
    writer: W,
    value: &Value,
    options: EncoderOptions,
) -> Result<(), EncodeError> {
    let sink = IoSink::new(io::BufWriter::new(writer));
    let mut encoder = MsgPackEncoder::with_sink(sink, options);
    encoder.write_any(value)?;
    encoder.into_sink().into_inner().flush()?;
    tracing::trace!(kind = value.kind(), "packed msgpack value into writer");
    Ok(())
}
