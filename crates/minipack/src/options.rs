//! Encoder configuration, fixed at construction.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{EncodeError, OptionsError};

/// Width used for every `Value::Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatPrecision {
    /// 4-byte IEEE-754 (`0xca`).
    Single,
    /// 8-byte IEEE-754 (`0xcb`).
    #[default]
    Double,
}

impl FromStr for FloatPrecision {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "f32" => Ok(FloatPrecision::Single),
            "double" | "f64" => Ok(FloatPrecision::Double),
            other => Err(OptionsError::UnknownFloatPrecision(other.to_owned())),
        }
    }
}

impl fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloatPrecision::Single => "single",
            FloatPrecision::Double => "double",
        })
    }
}

/// What to do with text bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextErrorPolicy {
    /// Fail with [`EncodeError::InvalidUtf8`].
    #[default]
    Strict,
    /// Drop every invalid sequence and encode what remains.
    Ignore,
}

impl TextErrorPolicy {
    /// Returns the bytes to put on the wire for `text`.
    ///
    /// Valid input is borrowed unchanged.
    pub fn apply<'a>(&self, text: &'a [u8]) -> Result<Cow<'a, [u8]>, EncodeError> {
        let err = match std::str::from_utf8(text) {
            Ok(_) => return Ok(Cow::Borrowed(text)),
            Err(err) => err,
        };
        match self {
            TextErrorPolicy::Strict => Err(EncodeError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }),
            TextErrorPolicy::Ignore => Ok(Cow::Owned(
                text.utf8_chunks()
                    .flat_map(|chunk| chunk.valid().as_bytes())
                    .copied()
                    .collect(),
            )),
        }
    }
}

impl FromStr for TextErrorPolicy {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(TextErrorPolicy::Strict),
            "ignore" => Ok(TextErrorPolicy::Ignore),
            other => Err(OptionsError::UnknownTextErrorPolicy(other.to_owned())),
        }
    }
}

impl fmt::Display for TextErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextErrorPolicy::Strict => "strict",
            TextErrorPolicy::Ignore => "ignore",
        })
    }
}

/// Options for [`MsgPackEncoder`](crate::MsgPackEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Encode `Value::Bin` with the bin family. When off, binary data is
    /// written with the raw str family and is indistinguishable from text.
    pub use_bin_type: bool,
    pub float_precision: FloatPrecision,
    pub text_errors: TextErrorPolicy,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            use_bin_type: true,
            float_precision: FloatPrecision::Double,
            text_errors: TextErrorPolicy::Strict,
        }
    }
}

impl EncoderOptions {
    pub fn with_bin_type(mut self, use_bin_type: bool) -> Self {
        self.use_bin_type = use_bin_type;
        self
    }

    pub fn with_float_precision(mut self, precision: FloatPrecision) -> Self {
        self.float_precision = precision;
        self
    }

    pub fn with_text_errors(mut self, policy: TextErrorPolicy) -> Self {
        self.text_errors = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = EncoderOptions::default();
        assert!(options.use_bin_type);
        assert_eq!(options.float_precision, FloatPrecision::Double);
        assert_eq!(options.text_errors, TextErrorPolicy::Strict);
    }

    #[test]
    fn builder() {
        let options = EncoderOptions::default()
            .with_bin_type(false)
            .with_float_precision(FloatPrecision::Single)
            .with_text_errors(TextErrorPolicy::Ignore);
        assert!(!options.use_bin_type);
        assert_eq!(options.float_precision, FloatPrecision::Single);
        assert_eq!(options.text_errors, TextErrorPolicy::Ignore);
    }

    #[test]
    fn parse_names() {
        assert_eq!("f32".parse::<FloatPrecision>(), Ok(FloatPrecision::Single));
        assert_eq!("Double".parse::<FloatPrecision>(), Ok(FloatPrecision::Double));
        assert_eq!("ignore".parse::<TextErrorPolicy>(), Ok(TextErrorPolicy::Ignore));
        assert_eq!(
            "replace".parse::<TextErrorPolicy>(),
            Err(OptionsError::UnknownTextErrorPolicy("replace".into()))
        );
        assert!("half".parse::<FloatPrecision>().is_err());
        assert_eq!(FloatPrecision::Single.to_string(), "single");
        assert_eq!(TextErrorPolicy::Strict.to_string(), "strict");
    }

    #[test]
    fn valid_text_is_borrowed() {
        let text = "Русский текст".as_bytes();
        let out = TextErrorPolicy::Strict.apply(text).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, text);
    }

    #[test]
    fn strict_reports_first_invalid_offset() {
        let err = TextErrorPolicy::Strict.apply(b"abc\xeddef").unwrap_err();
        assert!(matches!(err, EncodeError::InvalidUtf8 { valid_up_to: 3 }));
    }

    #[test]
    fn ignore_drops_invalid_sequences() {
        let out = TextErrorPolicy::Ignore.apply(b"abc\xeddef").unwrap();
        assert_eq!(&*out, b"abcdef");

        // Lone surrogates written as three-byte sequences.
        let out = TextErrorPolicy::Ignore
            .apply(b"abc\xed\xb2\x80\xed\xb3\xbfdef")
            .unwrap();
        assert_eq!(&*out, b"abcdef");

        let out = TextErrorPolicy::Ignore.apply(b"\xff\xfe").unwrap();
        assert!(out.is_empty());
    }
}
