//! Logic behind the `minipack` binary: JSON on stdin, MessagePack on stdout.

use thiserror::Error;

use crate::{EncodeError, EncoderOptions, MsgPackEncoder, OptionsError, Value};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Encode(#[from] EncodeError),
    #[error("{0}")]
    Options(#[from] OptionsError),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Parsed command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub options: EncoderOptions,
    /// Print lowercase hex instead of raw bytes.
    pub hex: bool,
}

/// Parses flags (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-bin-type" => parsed.options.use_bin_type = false,
            "--f32" => parsed.options.float_precision = crate::FloatPrecision::Single,
            "--float" => {
                let v = args.next().ok_or(CliError::MissingValue("--float"))?;
                parsed.options.float_precision = v.parse()?;
            }
            "--text-errors" => {
                let v = args.next().ok_or(CliError::MissingValue("--text-errors"))?;
                parsed.options.text_errors = v.parse()?;
            }
            "--hex" => parsed.hex = true,
            _ => return Err(CliError::UnknownFlag(arg)),
        }
    }
    Ok(parsed)
}

/// Encode a JSON document to MessagePack bytes.
pub fn pack_json(json: &str, options: EncoderOptions) -> Result<Vec<u8>, CliError> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    let value = Value::from(doc);
    let mut encoder = MsgPackEncoder::with_options(options);
    Ok(encoder.encode(&value)?)
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatPrecision, TextErrorPolicy};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn parse_all_flags() {
        let parsed = parse_args(args(&[
            "--no-bin-type",
            "--float",
            "single",
            "--text-errors",
            "ignore",
            "--hex",
        ]))
        .unwrap();
        assert!(!parsed.options.use_bin_type);
        assert_eq!(parsed.options.float_precision, FloatPrecision::Single);
        assert_eq!(parsed.options.text_errors, TextErrorPolicy::Ignore);
        assert!(parsed.hex);
        assert_eq!(
            parse_args(args(&["--f32"])).unwrap().options.float_precision,
            FloatPrecision::Single
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse_args(args(&["--cbor"])),
            Err(CliError::UnknownFlag(f)) if f == "--cbor"
        ));
        assert!(matches!(
            parse_args(args(&["--text-errors"])),
            Err(CliError::MissingValue("--text-errors"))
        ));
        assert!(matches!(
            parse_args(args(&["--float", "half"])),
            Err(CliError::Options(OptionsError::UnknownFloatPrecision(_)))
        ));
    }

    #[test]
    fn hex_output() {
        assert_eq!(to_hex(&[0x00, 0xcc, 0x80, 0xff]), "00cc80ff");
        assert_eq!(to_hex(&[]), "");
    }
}
