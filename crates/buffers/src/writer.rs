//! Auto-growing binary buffer writer.

const DEFAULT_CAPACITY: usize = 64;

/// A binary buffer writer that appends big-endian data to a growable buffer.
///
/// Bytes are written at cursor `x`. [`Writer::flush`] hands out everything
/// written since the previous flush (or reset) and starts a new segment at
/// the current cursor, so one writer can produce many independent outputs.
///
/// # Example
///
/// ```
/// use cbor_fixture_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8u16(0x19, 0x0100);
/// assert_eq!(writer.flush(), vec![0x19, 0x01, 0x00]);
/// ```
pub struct Writer {
    /// The underlying storage. Only `uint8[x0..x]` holds pending output.
    pub uint8: Vec<u8>,
    /// Start of the current segment.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a writer whose buffer starts at `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity.max(1)],
            x0: 0,
            x: 0,
        }
    }

    /// Number of bytes written in the current segment.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    /// Whether the current segment has no bytes yet.
    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Makes sure at least `capacity` more bytes fit after the cursor.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let required = self.x + capacity;
        if required <= self.uint8.len() {
            return;
        }
        let mut size = self.uint8.len().max(1);
        while size < required {
            size *= 2;
        }
        self.uint8.resize(size, 0);
    }

    /// Drops any pending output and rewinds to the start of the buffer.
    pub fn reset(&mut self) {
        self.x0 = 0;
        self.x = 0;
    }

    /// Returns the bytes of the current segment and starts a new one.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        out
    }

    /// Returns the bytes of the current segment without consuming them.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8[self.x0..self.x]
    }

    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = byte;
        self.x += 1;
    }

    #[inline]
    pub fn u16(&mut self, word: u16) {
        self.raw(&word.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, word: u32) {
        self.raw(&word.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, word: u64) {
        self.raw(&word.to_be_bytes());
    }

    /// Writes a header byte followed by a big-endian `u16`.
    pub fn u8u16(&mut self, byte: u8, word: u16) {
        self.ensure_capacity(3);
        self.uint8[self.x] = byte;
        self.x += 1;
        self.raw(&word.to_be_bytes());
    }

    /// Writes a header byte followed by a big-endian `u32`.
    pub fn u8u32(&mut self, byte: u8, word: u32) {
        self.ensure_capacity(5);
        self.uint8[self.x] = byte;
        self.x += 1;
        self.raw(&word.to_be_bytes());
    }

    /// Writes a header byte followed by a big-endian `u64`.
    pub fn u8u64(&mut self, byte: u8, word: u64) {
        self.ensure_capacity(9);
        self.uint8[self.x] = byte;
        self.x += 1;
        self.raw(&word.to_be_bytes());
    }

    /// Appends a byte slice verbatim.
    pub fn buf(&mut self, buf: &[u8]) {
        self.raw(buf);
    }

    fn raw(&mut self, bytes: &[u8]) {
        let length = bytes.len();
        self.ensure_capacity(length);
        let x = self.x;
        self.uint8[x..x + length].copy_from_slice(bytes);
        self.x = x + length;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_past_initial_capacity() {
        let mut w = Writer::with_capacity(2);
        for byte in 0..10u8 {
            w.u8(byte);
        }
        assert_eq!(w.len(), 10);
        assert_eq!(w.flush(), (0..10u8).collect::<Vec<_>>());
    }

    #[test]
    fn flush_starts_new_segment() {
        let mut w = Writer::new();
        w.u8(0x01);
        assert_eq!(w.flush(), vec![0x01]);
        assert!(w.is_empty());
        w.u8(0x02);
        assert_eq!(w.flush(), vec![0x02]);
    }

    #[test]
    fn reset_discards_pending_bytes() {
        let mut w = Writer::new();
        w.u32(0xdead_beef);
        w.reset();
        w.u8(0xf6);
        assert_eq!(w.flush(), vec![0xf6]);
    }
}
