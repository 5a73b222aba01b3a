//! SLDC history buffer
//!
//! A 1024-byte circular window of decoded output. Back-references address
//! it by absolute slot (the 10-bit displacement field), and a copy reads
//! slot `displacement + j` while it is still appending, so a copy that
//! starts just behind the write cursor replays the bytes it has only just
//! produced.
//!
//! After a reset, writing restarts at slot 0 and only slots below the fill
//! level hold real data. Reading anything else returns `None`.

/// Number of slots in the SLDC history buffer (10-bit displacement).
pub const HISTORY_SIZE: usize = 1024;

/// Circular record of recently decoded bytes.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    buffer: Box<[u8; HISTORY_SIZE]>,
    /// Next slot to write.
    pos: usize,
    /// Slots written since the last reset, saturating at `HISTORY_SIZE`.
    filled: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            buffer: Box::new([0; HISTORY_SIZE]),
            pos: 0,
            filled: 0,
        }
    }

    /// Append one byte, overwriting the oldest slot once the window is full.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.buffer[self.pos] = byte;
        self.pos = (self.pos + 1) % HISTORY_SIZE;
        if self.filled < HISTORY_SIZE {
            self.filled += 1;
        }
    }

    /// Byte at slot `displacement`, wrapping past the end of the window.
    ///
    /// Returns `None` for a slot that has not been written since the last reset.
    #[inline]
    pub fn get(&self, displacement: usize) -> Option<u8> {
        let slot = displacement % HISTORY_SIZE;
        (slot < self.filled).then_some(self.buffer[slot])
    }

    /// Forget all history, as if nothing had been written.
    pub fn reset(&mut self) {
        self.buffer.fill(0);
        self.pos = 0;
        self.filled = 0;
    }

    /// Number of slots holding valid data.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let history = HistoryBuffer::new();
        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
    }

    #[test]
    fn test_add_then_get() {
        let mut history = HistoryBuffer::new();
        for b in b"abc" {
            history.add(*b);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), Some(b'a'));
        assert_eq!(history.get(2), Some(b'c'));
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn test_overlapping_copy_sees_own_output() {
        let mut history = HistoryBuffer::new();
        history.add(b'x');
        let mut out = Vec::new();
        for j in 0..5 {
            let byte = history.get(j).unwrap();
            history.add(byte);
            out.push(byte);
        }
        assert_eq!(out, b"xxxxx");
    }

    #[test]
    fn test_wraps_and_evicts_oldest() {
        let mut history = HistoryBuffer::new();
        for i in 0..HISTORY_SIZE + 2 {
            history.add((i % 251) as u8);
        }
        assert_eq!(history.len(), HISTORY_SIZE);
        // Slots 0 and 1 were overwritten by the last two writes
        assert_eq!(history.get(0), Some((HISTORY_SIZE % 251) as u8));
        assert_eq!(history.get(1), Some(((HISTORY_SIZE + 1) % 251) as u8));
        assert_eq!(history.get(2), Some(2));
        assert_eq!(history.get(HISTORY_SIZE + 2), Some(2));
    }

    #[test]
    fn test_reset_clears_history() {
        let mut history = HistoryBuffer::new();
        history.add(7);
        history.add(8);
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
        history.add(9);
        assert_eq!(history.get(0), Some(9));
        assert_eq!(history.get(1), None);
    }
}
