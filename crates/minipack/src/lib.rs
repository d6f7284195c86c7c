//! Minimal-width MessagePack encoder.
//!
//! Values are described by the closed [`Value`] enum and written by
//! [`MsgPackEncoder`] into any [`Sink`]. Integers, lengths and counts always
//! take the smallest tier the format allows.
//!
//! ```
//! use minipack::{pack, Value};
//!
//! let bytes = pack(&Value::Array(vec![Value::Int(128), Value::str("a")])).unwrap();
//! assert_eq!(bytes, [0x92, 0xcc, 0x80, 0xa1, b'a']);
//! ```

pub mod cli;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod options;
pub mod util;
pub mod value;

pub use encoder::MsgPackEncoder;
pub use error::{EncodeError, ErrorCategory, OptionsError};
pub use minipack_buffers::{IoSink, Sink, Writer};
pub use options::{EncoderOptions, FloatPrecision, TextErrorPolicy};
pub use util::{pack, pack_into, pack_with};
pub use value::Value;
