//! Append-only byte sinks.
//!
//! A [`Sink`] is the destination an encoder writes into. The only required
//! operation is [`Sink::append`]; the marker helpers build one contiguous
//! header slice and append it in a single call, so an item's tag and its
//! length/payload never reach the sink separately.

use std::io;

use crate::Writer;

/// Append-only byte destination.
pub trait Sink {
    /// Appends `data` to the sink.
    fn append(&mut self, data: &[u8]) -> io::Result<()>;

    /// Appends a single byte.
    fn u8(&mut self, val: u8) -> io::Result<()> {
        self.append(&[val])
    }

    /// Appends a marker byte followed by a u8.
    fn u8u8(&mut self, marker: u8, val: u8) -> io::Result<()> {
        self.append(&[marker, val])
    }

    /// Appends a marker byte followed by a big-endian u16.
    fn u8u16(&mut self, marker: u8, val: u16) -> io::Result<()> {
        let [a, b] = val.to_be_bytes();
        self.append(&[marker, a, b])
    }

    /// Appends a marker byte followed by a big-endian u32.
    fn u8u32(&mut self, marker: u8, val: u32) -> io::Result<()> {
        let mut hdr = [marker; 5];
        hdr[1..].copy_from_slice(&val.to_be_bytes());
        self.append(&hdr)
    }

    /// Appends a marker byte followed by a big-endian u64.
    fn u8u64(&mut self, marker: u8, val: u64) -> io::Result<()> {
        let mut hdr = [marker; 9];
        hdr[1..].copy_from_slice(&val.to_be_bytes());
        self.append(&hdr)
    }

    /// Appends a marker byte followed by a big-endian IEEE-754 single.
    fn u8f32(&mut self, marker: u8, val: f32) -> io::Result<()> {
        self.u8u32(marker, val.to_bits())
    }

    /// Appends a marker byte followed by a big-endian IEEE-754 double.
    fn u8f64(&mut self, marker: u8, val: f64) -> io::Result<()> {
        self.u8u64(marker, val.to_bits())
    }
}

impl Sink for Writer {
    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.buf(data);
        Ok(())
    }

    fn u8(&mut self, val: u8) -> io::Result<()> {
        Writer::u8(self, val);
        Ok(())
    }

    fn u8u8(&mut self, marker: u8, val: u8) -> io::Result<()> {
        Writer::u8u8(self, marker, val);
        Ok(())
    }

    fn u8u16(&mut self, marker: u8, val: u16) -> io::Result<()> {
        Writer::u8u16(self, marker, val);
        Ok(())
    }

    fn u8u32(&mut self, marker: u8, val: u32) -> io::Result<()> {
        Writer::u8u32(self, marker, val);
        Ok(())
    }

    fn u8u64(&mut self, marker: u8, val: u64) -> io::Result<()> {
        Writer::u8u64(self, marker, val);
        Ok(())
    }

    fn u8f32(&mut self, marker: u8, val: f32) -> io::Result<()> {
        Writer::u8f32(self, marker, val);
        Ok(())
    }

    fn u8f64(&mut self, marker: u8, val: f64) -> io::Result<()> {
        Writer::u8f64(self, marker, val);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).append(data)
    }

    fn u8(&mut self, val: u8) -> io::Result<()> {
        (**self).u8(val)
    }

    fn u8u8(&mut self, marker: u8, val: u8) -> io::Result<()> {
        (**self).u8u8(marker, val)
    }

    fn u8u16(&mut self, marker: u8, val: u16) -> io::Result<()> {
        (**self).u8u16(marker, val)
    }

    fn u8u32(&mut self, marker: u8, val: u32) -> io::Result<()> {
        (**self).u8u32(marker, val)
    }

    fn u8u64(&mut self, marker: u8, val: u64) -> io::Result<()> {
        (**self).u8u64(marker, val)
    }

    fn u8f32(&mut self, marker: u8, val: f32) -> io::Result<()> {
        (**self).u8f32(marker, val)
    }

    fn u8f64(&mut self, marker: u8, val: f64) -> io::Result<()> {
        (**self).u8f64(marker, val)
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
///
/// Every append is a `write_all`; errors from the inner writer are
/// returned unchanged. Wrap unbuffered writers such as `File` or
/// `TcpStream` in an [`io::BufWriter`] first.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.inner.write_all(data)
    }
}
