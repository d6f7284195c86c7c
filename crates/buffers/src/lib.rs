//! Byte buffers for binary encoders.
//!
//! [`Writer`] is an auto-growing big-endian byte buffer; [`Sink`] is the
//! append-only destination encoders write into.

pub mod sink;
pub mod writer;

pub use sink::{IoSink, Sink};
pub use writer::Writer;
