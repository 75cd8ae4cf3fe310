//! Digit Buffer - Fixed-length per-slot code storage
//!
//! Holds the entered verification code as an ordered sequence of slots,
//! each empty or exactly one decimal digit. All operations are pure
//! transformations: they return a new buffer and never mutate in place,
//! so the buffer can live inside a `Signal` and be replaced wholesale.
//!
//! # Example
//!
//! ```ignore
//! use otp_entry::buffer::CodeBuffer;
//!
//! let buf = CodeBuffer::new(4);
//! let buf = buf.set_slot(0, "7").unwrap();
//! assert_eq!(buf.slot(0), Some('7'));
//! assert!(!buf.is_complete());
//! ```

/// Fixed-length sequence of digit slots.
///
/// The length is fixed for the lifetime of a configuration; only slot
/// contents change. Empty slots are `None`, filled slots hold one ASCII
/// decimal digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBuffer {
    slots: Vec<Option<char>>,
}

impl CodeBuffer {
    /// Create an all-empty buffer with `len` slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the buffer has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Content of slot `index`, or `None` for an empty or out-of-range slot.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Snapshot of all slots in order.
    pub fn slots(&self) -> Vec<Option<char>> {
        self.slots.clone()
    }

    /// Overwrite slot `index` with raw input text.
    ///
    /// Accepts the empty string (clears the slot) or exactly one decimal
    /// digit. Multi-character input, non-digit input, and out-of-range
    /// indices are rejected: `None`, no new buffer.
    pub fn set_slot(&self, index: usize, raw: &str) -> Option<Self> {
        if index >= self.slots.len() {
            return None;
        }

        let value = match raw.chars().count() {
            0 => None,
            1 => {
                let ch = raw.chars().next()?;
                if !ch.is_ascii_digit() {
                    return None;
                }
                Some(ch)
            }
            _ => return None,
        };

        let mut slots = self.slots.clone();
        slots[index] = value;
        Some(Self { slots })
    }

    /// Apply pasted text: keep only the digits, truncate to the buffer
    /// length, left-fill from slot 0 and empty the rest.
    ///
    /// Returns the new buffer and the number of digits placed. Text with
    /// no digits at all is a no-op (`k == 0`, buffer unchanged).
    pub fn apply_paste(&self, raw: &str) -> (Self, usize) {
        let digits: Vec<char> = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.slots.len())
            .collect();

        if digits.is_empty() {
            return (self.clone(), 0);
        }

        let placed = digits.len();
        let mut slots = vec![None; self.slots.len()];
        for (i, d) in digits.into_iter().enumerate() {
            slots[i] = Some(d);
        }
        (Self { slots }, placed)
    }

    /// True iff every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Concatenation of the slot contents in order.
    ///
    /// Meaningful only when [`is_complete`](Self::is_complete) is true;
    /// empty slots are skipped.
    pub fn joined(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// A buffer of the same length with every slot empty.
    pub fn cleared(&self) -> Self {
        Self::new(self.slots.len())
    }

    /// Re-sync the buffer to a new configured length: keep the first
    /// `min(n, len)` slots, pad the remainder with empties.
    pub fn resized(&self, n: usize) -> Self {
        let mut slots = self.slots.clone();
        slots.truncate(n);
        slots.resize(n, None);
        Self { slots }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_empty() {
        let buf = CodeBuffer::new(4);
        assert_eq!(buf.len(), 4);
        assert!(!buf.is_complete());
        for i in 0..4 {
            assert_eq!(buf.slot(i), None);
        }
    }

    #[test]
    fn test_set_slot_accepts_digits() {
        let buf = CodeBuffer::new(4);
        for d in '0'..='9' {
            let next = buf.set_slot(1, &d.to_string()).unwrap();
            assert_eq!(next.slot(1), Some(d));
            // Other slots untouched
            assert_eq!(next.slot(0), None);
            assert_eq!(next.slot(2), None);
            assert_eq!(next.slot(3), None);
        }
    }

    #[test]
    fn test_set_slot_empty_clears() {
        let buf = CodeBuffer::new(4).set_slot(2, "5").unwrap();
        let cleared = buf.set_slot(2, "").unwrap();
        assert_eq!(cleared.slot(2), None);
    }

    #[test]
    fn test_set_slot_rejects_invalid() {
        let buf = CodeBuffer::new(4).set_slot(0, "9").unwrap();

        assert!(buf.set_slot(0, "a").is_none());
        assert!(buf.set_slot(0, "12").is_none());
        assert!(buf.set_slot(0, " ").is_none());
        assert!(buf.set_slot(0, "٣").is_none()); // non-ASCII digit
        assert!(buf.set_slot(4, "1").is_none()); // out of range

        // Rejection never mutates
        assert_eq!(buf.slot(0), Some('9'));
    }

    #[test]
    fn test_apply_paste_strips_and_truncates() {
        let buf = CodeBuffer::new(4);
        let (next, placed) = buf.apply_paste("ab12cd34ef56");
        assert_eq!(placed, 4);
        assert_eq!(next.slots(), vec![Some('1'), Some('2'), Some('3'), Some('4')]);
    }

    #[test]
    fn test_apply_paste_partial_leaves_rest_empty() {
        let buf = CodeBuffer::new(4).set_slot(3, "9").unwrap();
        let (next, placed) = buf.apply_paste("5");
        assert_eq!(placed, 1);
        // Paste replaces the whole buffer, not just a prefix
        assert_eq!(next.slots(), vec![Some('5'), None, None, None]);
    }

    #[test]
    fn test_apply_paste_no_digits_is_noop() {
        let buf = CodeBuffer::new(4).set_slot(0, "7").unwrap();
        let (next, placed) = buf.apply_paste("hello!");
        assert_eq!(placed, 0);
        assert_eq!(next, buf);
    }

    #[test]
    fn test_apply_paste_extraction_idempotent() {
        let empty = CodeBuffer::new(4);
        let (once, _) = empty.apply_paste("a1b2c3d4e5");
        let (twice, _) = empty.apply_paste(&once.joined());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_complete_and_joined() {
        let mut buf = CodeBuffer::new(4);
        for (i, d) in ["1", "2", "3", "4"].iter().enumerate() {
            assert!(!buf.is_complete());
            buf = buf.set_slot(i, d).unwrap();
        }
        assert!(buf.is_complete());
        assert_eq!(buf.joined(), "1234");
    }

    #[test]
    fn test_cleared() {
        let buf = CodeBuffer::new(4).apply_paste("1234").0;
        assert!(buf.is_complete());
        let cleared = buf.cleared();
        assert_eq!(cleared, CodeBuffer::new(4));
    }

    #[test]
    fn test_resized_keeps_prefix() {
        let buf = CodeBuffer::new(4).apply_paste("1234").0;

        let shorter = buf.resized(2);
        assert_eq!(shorter.slots(), vec![Some('1'), Some('2')]);

        let longer = buf.resized(6);
        assert_eq!(longer.len(), 6);
        assert_eq!(longer.slot(3), Some('4'));
        assert_eq!(longer.slot(4), None);
        assert_eq!(longer.slot(5), None);
    }
}
