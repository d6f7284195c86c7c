//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// Bytes are written at the cursor `x`; everything between the flush
/// position `x0` and `x` is returned by the next [`Writer::flush`].
///
/// # Example
///
/// ```
/// use minipack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xc0);
/// writer.u8u16(0xcd, 0x0102);
/// assert_eq!(writer.flush(), [0xc0, 0xcd, 0x01, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (16KB).
    pub fn new() -> Self {
        Self::with_alloc_size(16 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Number of bytes written since the last flush.
    pub fn pending(&self) -> usize {
        self.x - self.x0
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total_required = self.pending() + capacity;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    // Only the unflushed region survives a grow.
    fn grow(&mut self, new_size: usize) {
        let pending = self.pending();
        let mut new_buf = vec![0u8; new_size];
        new_buf[..pending].copy_from_slice(&self.uint8[self.x0..self.x]);
        self.uint8 = new_buf;
        self.x = pending;
        self.x0 = 0;
    }

    /// Rewinds the cursor to the last flush position, dropping unflushed bytes.
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    #[inline]
    fn marker(&mut self, marker: u8, payload: &[u8]) {
        let size = payload.len() + 1;
        self.ensure_capacity(size);
        self.uint8[self.x] = marker;
        self.uint8[self.x + 1..self.x + size].copy_from_slice(payload);
        self.x += size;
    }

    /// Writes a u8 marker followed by a u8.
    pub fn u8u8(&mut self, marker: u8, val: u8) {
        self.marker(marker, &[val]);
    }

    /// Writes a u8 marker followed by a u16 (big-endian).
    pub fn u8u16(&mut self, marker: u8, val: u16) {
        self.marker(marker, &val.to_be_bytes());
    }

    /// Writes a u8 marker followed by a u32 (big-endian).
    pub fn u8u32(&mut self, marker: u8, val: u32) {
        self.marker(marker, &val.to_be_bytes());
    }

    /// Writes a u8 marker followed by a u64 (big-endian).
    pub fn u8u64(&mut self, marker: u8, val: u64) {
        self.marker(marker, &val.to_be_bytes());
    }

    /// Writes a u8 marker followed by a f32 (big-endian).
    pub fn u8f32(&mut self, marker: u8, val: f32) {
        self.marker(marker, &val.to_be_bytes());
    }

    /// Writes a u8 marker followed by a f64 (big-endian).
    pub fn u8f64(&mut self, marker: u8, val: f64) {
        self.marker(marker, &val.to_be_bytes());
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }
}
