//! Sliding window and lookahead buffers for LZSS coding.
//!
//! The sliding window is a circular buffer holding the most recent
//! `capacity` bytes of the uncompressed stream; wire offsets address it by
//! absolute position, so it exposes position-indexed `get`/`set` rather
//! than distance-based reads. The lookahead buffer holds the next
//! not-yet-encoded input bytes and is used only by the encoder.
//!
//! Both sides of a stream must start from an identical window (every slot
//! filled with the space byte) or they desynchronize on the first match
//! that references untouched history.

use std::io::{self, Read};

/// Byte used to initialize every window slot.
///
/// A common character raises the chance of early matches into untouched
/// history.
pub const WINDOW_FILL: u8 = b' ';

/// A circular buffer of the most recently coded bytes.
///
/// Logical position `p` maps to physical index `p & (capacity - 1)`, so no
/// access can ever be out of bounds.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl SlidingWindow {
    /// Create a new window with every slot filled with the space byte.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );

        Self {
            buffer: vec![WINDOW_FILL; capacity],
            mask: capacity - 1,
        }
    }

    /// Get the capacity of the window.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Wrap a logical position into a physical index.
    pub fn wrap(&self, pos: usize) -> usize {
        pos & self.mask
    }

    /// Read the byte at a logical position.
    pub fn get(&self, pos: usize) -> u8 {
        self.buffer[pos & self.mask]
    }

    /// Write a byte at a logical position.
    pub fn set(&mut self, pos: usize, byte: u8) {
        self.buffer[pos & self.mask] = byte;
    }

    /// Refill every slot with the space byte.
    pub fn reset(&mut self) {
        self.buffer.fill(WINDOW_FILL);
    }
}

/// A fixed-capacity buffer of not-yet-encoded input bytes.
///
/// The valid count starts at whatever [`fill`](LookaheadBuffer::fill) read
/// and shrinks via [`shorten`](LookaheadBuffer::shorten) once the input is
/// exhausted mid-stream. Capacity is generally not a power of two, so
/// wrapping divides rather than masks.
#[derive(Debug, Clone)]
pub struct LookaheadBuffer {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Number of slots holding valid, not-yet-encoded input.
    len: usize,
}

impl LookaheadBuffer {
    /// Create an empty lookahead buffer.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            buffer: vec![0; capacity],
            len: 0,
        }
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get the number of valid bytes currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether no valid bytes remain.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wrap a logical position into a physical index.
    pub fn wrap(&self, pos: usize) -> usize {
        pos % self.buffer.len()
    }

    /// Read the byte at a logical position.
    pub fn get(&self, pos: usize) -> u8 {
        let idx = pos % self.buffer.len();
        self.buffer[idx]
    }

    /// Write a byte at a logical position.
    pub fn set(&mut self, pos: usize, byte: u8) {
        let idx = pos % self.buffer.len();
        self.buffer[idx] = byte;
    }

    /// Drop one valid byte from the count.
    ///
    /// Used on the encoder's EOF path, where a window slot is still advanced
    /// but no replacement input byte exists.
    pub fn shorten(&mut self) {
        debug_assert!(self.len > 0, "shorten on an empty lookahead");
        self.len -= 1;
    }

    /// Fill the buffer from the start with up to `capacity` bytes.
    ///
    /// Short reads are retried until the buffer is full or the source is
    /// exhausted, so the returned count is less than the capacity only at
    /// end of input.
    pub fn fill<R: Read>(&mut self, source: &mut R) -> io::Result<usize> {
        let mut filled = 0;
        while filled < self.buffer.len() {
            match source.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.len = filled;
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_window_starts_as_spaces() {
        let window = SlidingWindow::new(16);
        for pos in 0..16 {
            assert_eq!(window.get(pos), b' ');
        }
    }

    #[test]
    fn test_window_wraps() {
        let mut window = SlidingWindow::new(8);
        window.set(9, b'X'); // physical index 1
        assert_eq!(window.get(1), b'X');
        assert_eq!(window.get(17), b'X');
        assert_eq!(window.wrap(17), 1);
    }

    #[test]
    fn test_window_reset() {
        let mut window = SlidingWindow::new(8);
        window.set(3, b'Q');
        window.reset();
        assert_eq!(window.get(3), b' ');
    }

    #[test]
    #[should_panic(expected = "power of 2")]
    fn test_window_non_power_of_two_panics() {
        let _ = SlidingWindow::new(100);
    }

    #[test]
    fn test_lookahead_fill_short_input() {
        let mut lookahead = LookaheadBuffer::new(18);
        let n = lookahead.fill(&mut Cursor::new(b"hello")).unwrap();
        assert_eq!(n, 5);
        assert_eq!(lookahead.len(), 5);
        assert_eq!(lookahead.get(0), b'h');
        assert_eq!(lookahead.get(4), b'o');
    }

    #[test]
    fn test_lookahead_fill_caps_at_capacity() {
        let mut lookahead = LookaheadBuffer::new(4);
        let n = lookahead.fill(&mut Cursor::new(b"abcdef")).unwrap();
        assert_eq!(n, 4);
        assert_eq!(lookahead.len(), 4);
    }

    #[test]
    fn test_lookahead_fill_empty_input() {
        let mut lookahead = LookaheadBuffer::new(18);
        let n = lookahead.fill(&mut Cursor::new(b"")).unwrap();
        assert_eq!(n, 0);
        assert!(lookahead.is_empty());
    }

    #[test]
    fn test_lookahead_wraps_at_capacity() {
        let mut lookahead = LookaheadBuffer::new(18);
        lookahead.set(0, b'A');
        assert_eq!(lookahead.get(18), b'A');
        assert_eq!(lookahead.wrap(19), 1);
    }

    #[test]
    fn test_lookahead_shorten() {
        let mut lookahead = LookaheadBuffer::new(18);
        lookahead.fill(&mut Cursor::new(b"xy")).unwrap();
        lookahead.shorten();
        assert_eq!(lookahead.len(), 1);
    }
}
