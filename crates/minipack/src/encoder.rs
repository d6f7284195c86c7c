//! `MsgPackEncoder` — minimal-width MessagePack encoder.
//!
//! Every item is written as the smallest tier that holds its value or
//! length. Inputs are checked before anything is emitted for an item, so
//! a failing item leaves no bytes of its own in the sink; bytes already
//! written for enclosing or preceding items stay where they are.

use minipack_buffers::{Sink, Writer};

use crate::constants::*;
use crate::error::EncodeError;
use crate::options::{EncoderOptions, FloatPrecision};
use crate::Value;

/// Tag family used for `Value::Bin`, chosen once from `use_bin_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinFamily {
    Bin,
    RawStr,
}

pub struct MsgPackEncoder<S = Writer> {
    sink: S,
    options: EncoderOptions,
    bin_family: BinFamily,
}

impl Default for MsgPackEncoder<Writer> {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder<Writer> {
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default())
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self::with_sink(Writer::new(), options)
    }

    /// Encodes `value` into a fresh byte vector.
    ///
    /// On failure nothing is returned and the partial output is dropped.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.sink.reset();
        if let Err(err) = self.write_any(value) {
            self.sink.reset();
            return Err(err);
        }
        let out = self.sink.flush();
        tracing::trace!(kind = value.kind(), bytes = out.len(), "encoded msgpack value");
        Ok(out)
    }
}

impl<S: Sink> MsgPackEncoder<S> {
    pub fn with_sink(sink: S, options: EncoderOptions) -> Self {
        let bin_family = if options.use_bin_type {
            BinFamily::Bin
        } else {
            BinFamily::RawStr
        };
        Self {
            sink,
            options,
            bin_family,
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_bool(*b),
            Value::Int(int) => self.write_int(*int),
            Value::Float(float) => self.write_float(*float),
            Value::Bin(buf) => self.write_bin(buf),
            Value::Str(text) => self.write_str(text),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(pairs) => self.write_map(pairs),
            Value::Undefined | Value::Ext { .. } => {
                Err(EncodeError::UnsupportedType(value.kind()))
            }
        }
    }

    pub fn write_nil(&mut self) -> Result<(), EncodeError> {
        Ok(self.sink.u8(NIL)?)
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), EncodeError> {
        Ok(self.sink.u8(if b { TRUE } else { FALSE })?)
    }

    /// Writes an integer from `-2^63 ..= 2^64 - 1`.
    pub fn write_int(&mut self, int: i128) -> Result<(), EncodeError> {
        if int >= 0 {
            let uint = u64::try_from(int).map_err(|_| EncodeError::IntegerOutOfRange(int))?;
            self.write_uint(uint)
        } else {
            let nint = i64::try_from(int).map_err(|_| EncodeError::IntegerOutOfRange(int))?;
            self.write_nint(nint)
        }
    }

    /// Writes a non-negative integer using the unsigned tiers.
    pub fn write_uint(&mut self, uint: u64) -> Result<(), EncodeError> {
        let sink = &mut self.sink;
        if uint <= POSITIVE_FIXINT_MAX {
            sink.u8(uint as u8)?;
        } else if uint <= 0xff {
            sink.u8u8(UINT8, uint as u8)?;
        } else if uint <= 0xffff {
            sink.u8u16(UINT16, uint as u16)?;
        } else if uint <= 0xffff_ffff {
            sink.u8u32(UINT32, uint as u32)?;
        } else {
            sink.u8u64(UINT64, uint)?;
        }
        Ok(())
    }

    /// Writes a negative integer using the signed tiers.
    fn write_nint(&mut self, int: i64) -> Result<(), EncodeError> {
        debug_assert!(int < 0);
        let sink = &mut self.sink;
        if int >= NEGATIVE_FIXINT_MIN {
            // negative fixint: 0xe0..0xff
            sink.u8(int as i8 as u8)?;
        } else if int >= i8::MIN as i64 {
            sink.u8u8(INT8, int as i8 as u8)?;
        } else if int >= i16::MIN as i64 {
            sink.u8u16(INT16, int as i16 as u16)?;
        } else if int >= i32::MIN as i64 {
            sink.u8u32(INT32, int as i32 as u32)?;
        } else {
            sink.u8u64(INT64, int as u64)?;
        }
        Ok(())
    }

    /// Writes a float at the configured precision.
    ///
    /// In single precision a finite value beyond the `f32` range is an
    /// error. NaN and infinities pass through.
    pub fn write_float(&mut self, float: f64) -> Result<(), EncodeError> {
        match self.options.float_precision {
            FloatPrecision::Single => {
                let single = float as f32;
                if float.is_finite() && single.is_infinite() {
                    return Err(EncodeError::FloatOutOfRange(float));
                }
                self.sink.u8f32(FLOAT32, single)?
            }
            FloatPrecision::Double => self.sink.u8f64(FLOAT64, float)?,
        }
        Ok(())
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= FIXSTR_MAX {
            self.sink.u8(FIXSTR | length as u8)?;
        } else if length <= 0xff {
            self.sink.u8u8(STR8, length as u8)?;
        } else if length <= 0xffff {
            self.sink.u8u16(STR16, length as u16)?;
        } else {
            let length = u32_len("str", length)?;
            self.sink.u8u32(STR32, length)?;
        }
        Ok(())
    }

    /// Writes text after passing it through the text error policy.
    pub fn write_str(&mut self, text: &[u8]) -> Result<(), EncodeError> {
        let bytes = self.options.text_errors.apply(text)?;
        self.write_str_hdr(bytes.len())?;
        Ok(self.sink.append(&bytes)?)
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= 0xff {
            self.sink.u8u8(BIN8, length as u8)?;
        } else if length <= 0xffff {
            self.sink.u8u16(BIN16, length as u16)?;
        } else {
            let length = u32_len("bin", length)?;
            self.sink.u8u32(BIN32, length)?;
        }
        Ok(())
    }

    /// Writes binary data. Without bin types the bytes go out as a raw
    /// str, unvalidated.
    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        match self.bin_family {
            BinFamily::Bin => self.write_bin_hdr(buf.len())?,
            BinFamily::RawStr => self.write_str_hdr(buf.len())?,
        }
        Ok(self.sink.append(buf)?)
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= FIXARRAY_MAX {
            self.sink.u8(FIXARRAY | length as u8)?;
        } else if length <= 0xffff {
            self.sink.u8u16(ARRAY16, length as u16)?;
        } else {
            let length = u32_len("array", length)?;
            self.sink.u8u32(ARRAY32, length)?;
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.write_arr_hdr(arr.len())?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= FIXMAP_MAX {
            self.sink.u8(FIXMAP | length as u8)?;
        } else if length <= 0xffff {
            self.sink.u8u16(MAP16, length as u16)?;
        } else {
            let length = u32_len("map", length)?;
            self.sink.u8u32(MAP32, length)?;
        }
        Ok(())
    }

    /// Writes pairs in the given order; keys are not checked for uniqueness.
    pub fn write_map(&mut self, pairs: &[(Value, Value)]) -> Result<(), EncodeError> {
        self.write_map_hdr(pairs.len())?;
        for (key, val) in pairs {
            self.write_any(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}

fn u32_len(kind: &'static str, len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::LengthOutOfRange { kind, len })
}
