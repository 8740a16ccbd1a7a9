//! Forward iteration and the bidirectional editing cursor.

use std::iter::FusedIterator;

use crate::{Digit, DigitRing, RingError, RingResult};

/// Borrowing iterator over a ring's digits, most significant first
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    ring: &'a DigitRing,
    slot: Option<usize>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ring: &'a DigitRing) -> Self {
        Self {
            ring,
            slot: ring.head_slot(),
            remaining: ring.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.slot?;
        self.slot = Some(self.ring.next_slot(slot));
        self.remaining -= 1;

        Some(self.ring.digit_in(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// A position between two digits of a ring, able to walk in both directions and to
/// edit around the digit it returned last.
///
/// The cursor does not borrow the ring. Each call takes the ring it walks, and fails with
/// [`RingError::ConcurrentModification`] if that is not the ring the cursor was created
/// from, or if the ring was structurally changed by anything other than this cursor since
/// the cursor last looked at it. A clone counts as a different ring.
///
/// # Examples
/// ```
/// use digitring::{DigitRing, Radix};
///
/// let mut ring = DigitRing::from_digits(Radix::Hexadecimal, &[1, 2, 3]).unwrap();
/// let mut cursor = ring.cursor();
///
/// while let Some(digit) = cursor.next(&ring).unwrap() {
///     if digit == 2 {
///         cursor.remove(&mut ring).unwrap();
///     }
/// }
/// assert_eq!(ring, [1, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Index of the digit `next` would return
    position: usize,
    /// Index of the digit returned by the last `next`/`previous`, cleared by edits
    last_returned: Option<usize>,
    expected_mod_count: u64,
    ring_id: u64,
}

impl DigitRing {
    /// Cursor positioned before the first digit
    pub fn cursor(&self) -> Cursor {
        Cursor {
            position: 0,
            last_returned: None,
            expected_mod_count: self.mod_count(),
            ring_id: self.id(),
        }
    }

    /// Cursor positioned before the digit at `index`. `index == len` is allowed
    pub fn cursor_at(&self, index: usize) -> RingResult<Cursor> {
        if index > self.len() {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(Cursor {
            position: index,
            ..self.cursor()
        })
    }
}

impl Cursor {
    pub fn has_next(&self, ring: &DigitRing) -> bool {
        self.position < ring.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    pub fn next_index(&self) -> usize {
        self.position
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns the digit after the cursor and steps over it, `None` at the end
    pub fn next(&mut self, ring: &DigitRing) -> RingResult<Option<Digit>> {
        self.check(ring)?;

        if !self.has_next(ring) {
            return Ok(None);
        }

        let digit = ring.get(self.position)?;
        self.last_returned = Some(self.position);
        self.position += 1;

        Ok(Some(digit))
    }

    /// Returns the digit before the cursor and steps back over it, `None` at the start
    pub fn previous(&mut self, ring: &DigitRing) -> RingResult<Option<Digit>> {
        self.check(ring)?;

        if !self.has_previous() {
            return Ok(None);
        }

        self.position -= 1;
        self.last_returned = Some(self.position);

        ring.get(self.position).map(Some)
    }

    /// Removes the digit returned last
    pub fn remove(&mut self, ring: &mut DigitRing) -> RingResult<Digit> {
        self.check(ring)?;

        let index = self.last_returned.ok_or(RingError::IllegalIteratorState)?;
        let digit = ring.remove(index)?;

        if index < self.position {
            self.position -= 1;
        }
        self.last_returned = None;
        self.expected_mod_count = ring.mod_count();

        Ok(digit)
    }

    /// Replaces the digit returned last, returning the old value
    pub fn set(&mut self, ring: &mut DigitRing, digit: Digit) -> RingResult<Digit> {
        self.check(ring)?;

        let index = self.last_returned.ok_or(RingError::IllegalIteratorState)?;
        ring.set(index, digit)
    }

    /// Inserts `digit` at the cursor. A following `next` is unaffected, a following
    /// `previous` returns the new digit
    pub fn insert(&mut self, ring: &mut DigitRing, digit: Digit) -> RingResult<()> {
        self.check(ring)?;

        ring.insert(self.position, digit)?;
        self.position += 1;
        self.last_returned = None;
        self.expected_mod_count = ring.mod_count();

        Ok(())
    }

    fn check(&self, ring: &DigitRing) -> RingResult<()> {
        if ring.id() == self.ring_id && ring.mod_count() == self.expected_mod_count {
            Ok(())
        } else {
            Err(RingError::ConcurrentModification)
        }
    }
}
