//! `minipack` — encode JSON (stdin) to MessagePack (stdout).
//!
//! Usage:
//!   minipack [--no-bin-type] [--f32 | --float single|double]
//!            [--text-errors strict|ignore] [--hex]
//!
//! Diagnostics go to stderr; set `RUST_LOG=minipack=trace` to see them.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use minipack::cli::{pack_json, parse_args, to_hex, CliError};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    tracing::debug!(?args, "parsed arguments");

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let bytes = pack_json(buf.trim(), args.options)?;
    let mut stdout = io::stdout().lock();
    if args.hex {
        writeln!(stdout, "{}", to_hex(&bytes))?;
    } else {
        stdout.write_all(&bytes)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
