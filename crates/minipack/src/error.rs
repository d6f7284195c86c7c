use std::io;

use thiserror::Error;

/// Failure while encoding a value. Any error aborts the whole encode call.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("integer {0} outside the encodable range -2^63..2^64")]
    IntegerOutOfRange(i128),
    #[error("float {0} does not fit in single precision")]
    FloatOutOfRange(f64),
    #[error("{kind} length {len} does not fit in 32 bits")]
    LengthOutOfRange { kind: &'static str, len: usize },
    #[error("invalid UTF-8 in text after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("cannot encode value of kind {0}")]
    UnsupportedType(&'static str),
    #[error("sink error: {0}")]
    Sink(#[from] io::Error),
}

/// Coarse classification of [`EncodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Range,
    Encoding,
    UnsupportedType,
    Sink,
}

impl EncodeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EncodeError::IntegerOutOfRange(_)
            | EncodeError::FloatOutOfRange(_)
            | EncodeError::LengthOutOfRange { .. } => ErrorCategory::Range,
            EncodeError::InvalidUtf8 { .. } => ErrorCategory::Encoding,
            EncodeError::UnsupportedType(_) => ErrorCategory::UnsupportedType,
            EncodeError::Sink(_) => ErrorCategory::Sink,
        }
    }
}

/// Unrecognised option name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown float precision: {0}")]
    UnknownFloatPrecision(String),
    #[error("unknown text error policy: {0}")]
    UnknownTextErrorPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(
            EncodeError::IntegerOutOfRange(1 << 64).category(),
            ErrorCategory::Range
        );
        assert_eq!(
            EncodeError::FloatOutOfRange(1e300).category(),
            ErrorCategory::Range
        );
        assert_eq!(
            EncodeError::LengthOutOfRange {
                kind: "array",
                len: usize::MAX
            }
            .category(),
            ErrorCategory::Range
        );
        assert_eq!(
            EncodeError::InvalidUtf8 { valid_up_to: 0 }.category(),
            ErrorCategory::Encoding
        );
        assert_eq!(
            EncodeError::UnsupportedType("ext").category(),
            ErrorCategory::UnsupportedType
        );
        let io_err = io::Error::new(io::ErrorKind::WriteZero, "full");
        assert_eq!(EncodeError::from(io_err).category(), ErrorCategory::Sink);
    }

    #[test]
    fn messages() {
        assert_eq!(
            EncodeError::IntegerOutOfRange(1 << 64).to_string(),
            "integer 18446744073709551616 outside the encodable range -2^63..2^64"
        );
        assert_eq!(
            EncodeError::FloatOutOfRange(-3.5e38).to_string(),
            "float -350000000000000000000000000000000000000 does not fit in single precision"
        );
        assert_eq!(
            EncodeError::UnsupportedType("undefined").to_string(),
            "cannot encode value of kind undefined"
        );
    }
}
