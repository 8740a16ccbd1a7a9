use log::trace;

use crate::{Digit, DigitRing, RingError, RingResult};

// Searching, bulk edits, sublists and in-place reordering
impl DigitRing {
    pub fn contains(&self, digit: Digit) -> bool {
        self.iter().any(|d| d == digit)
    }

    pub fn contains_all<I>(&self, digits: I) -> bool
    where
        I: IntoIterator<Item = Digit>,
    {
        digits.into_iter().all(|d| self.contains(d))
    }

    /// Position of the first occurrence of `digit`
    pub fn index_of(&self, digit: Digit) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    /// Position of the last occurrence of `digit`
    pub fn last_index_of(&self, digit: Digit) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter(|&(_, d)| d == digit)
            .map(|(i, _)| i)
            .last()
    }

    /// Removes the first occurrence of `digit`, returning whether there was one
    pub fn remove_value(&mut self, digit: Digit) -> bool {
        match self.index_of(digit) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Removes every digit matching `pred`, returning whether anything was removed
    pub fn remove_if<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(Digit) -> bool,
    {
        self.drain_where(pred)
    }

    /// Keeps only the digits matching `pred`, returning whether anything was removed
    pub fn retain<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(Digit) -> bool,
    {
        self.drain_where(|d| !pred(d))
    }

    /// Appends every digit of `digits`. Nothing is appended if any digit is invalid
    pub fn append_all<I>(&mut self, digits: I) -> RingResult<bool>
    where
        I: IntoIterator<Item = Digit>,
    {
        let digits = self.validated(digits)?;

        for &digit in &digits {
            self.push_unchecked(digit);
        }

        Ok(!digits.is_empty())
    }

    /// Inserts every digit of `digits` in order starting at `index`. Nothing is inserted
    /// if the index or any digit is invalid
    pub fn insert_all<I>(&mut self, index: usize, digits: I) -> RingResult<bool>
    where
        I: IntoIterator<Item = Digit>,
    {
        if index > self.len() {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let digits = self.validated(digits)?;

        for (offset, &digit) in digits.iter().enumerate() {
            self.insert(index + offset, digit)?;
        }

        Ok(!digits.is_empty())
    }

    /// Independent copy of the digits in `[from, to)`, in the same radix
    pub fn sublist(&self, from: usize, to: usize) -> RingResult<DigitRing> {
        if to > self.len() {
            return Err(RingError::IndexOutOfRange {
                index: to,
                len: self.len(),
            });
        }
        if from > to {
            return Err(RingError::IndexOutOfRange {
                index: from,
                len: self.len(),
            });
        }

        let mut result = DigitRing::with_config(self.config());
        result.replace_contents(self.radix(), self.iter().skip(from).take(to - from));

        Ok(result)
    }

    /// Exchanges two digits. Returns false and does nothing if either index is invalid
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len() || j >= self.len() {
            return false;
        }
        if i == j {
            return true;
        }

        let (a, b) = (self.slot_at(i), self.slot_at(j));
        let (da, db) = (self.digit_in(a), self.digit_in(b));
        self.set_digit_in(a, db);
        self.set_digit_in(b, da);

        true
    }

    pub fn sort_ascending(&mut self) {
        self.counting_sort(false);
    }

    pub fn sort_descending(&mut self) {
        self.counting_sort(true);
    }

    /// Rotates the window one node forward: the old head becomes the tail
    pub fn shift_left(&mut self) {
        if self.len() <= 1 {
            return;
        }

        let old_head = self.slot_at(0);
        let head = self.next_slot(old_head);
        trace!("shifting ring of {} digits left", self.len());

        self.set_window(head, old_head);
    }

    /// Rotates the window one node backward: the old tail becomes the head
    pub fn shift_right(&mut self) {
        if self.len() <= 1 {
            return;
        }

        let tail = self.tail_slot();
        let before_tail = self.slot_at(self.len() - 2);
        trace!("shifting ring of {} digits right", self.len());

        self.set_window(tail, before_tail);
    }

    /// Unlinks every node `doomed` picks, visiting each original node exactly once
    fn drain_where<F>(&mut self, mut doomed: F) -> bool
    where
        F: FnMut(Digit) -> bool,
    {
        let Some(head) = self.head_slot() else {
            return false;
        };

        let mut prev = self.tail_slot();
        let mut current = head;
        let mut remaining = self.len();
        let mut modified = false;

        while remaining > 0 && !self.is_empty() {
            let next = self.next_slot(current);

            if doomed(self.digit_in(current)) {
                self.unlink(prev, current);
                modified = true;
            } else {
                prev = current;
            }

            current = next;
            remaining -= 1;
        }

        modified
    }

    /// Rewrites digit values in traversal order. Links are never touched and the only
    /// extra storage is one counter per digit of the radix
    fn counting_sort(&mut self, descending: bool) {
        if self.len() <= 1 {
            return;
        }

        let mut counts = vec![0usize; self.radix().value() as usize];
        for digit in self.iter() {
            counts[digit as usize] += 1;
        }

        let top = counts.len() - 1;
        let mut slot = self.slot_at(0);
        for i in 0..=top {
            let digit = if descending { top - i } else { i };

            for _ in 0..counts[digit] {
                self.set_digit_in(slot, digit as Digit);
                slot = self.next_slot(slot);
            }
        }
    }

    fn validated<I>(&self, digits: I) -> RingResult<Vec<Digit>>
    where
        I: IntoIterator<Item = Digit>,
    {
        digits
            .into_iter()
            .map(|d| self.radix().check_digit(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use crate::Radix;

    use super::*;

    fn hex(digits: &[Digit]) -> DigitRing {
        DigitRing::from_digits(Radix::Hexadecimal, digits).unwrap()
    }

    #[test]
    fn search() {
        let ring = hex(&[1, 2, 3, 2, 1]);

        assert!(ring.contains(3));
        assert!(!ring.contains(4));
        assert!(ring.contains_all([1, 2, 3]));
        assert!(!ring.contains_all([1, 4]));
        assert_eq!(ring.index_of(2), Some(1));
        assert_eq!(ring.last_index_of(2), Some(3));
        assert_eq!(ring.index_of(9), None);
        assert_eq!(ring.last_index_of(9), None);

        assert!(!DigitRing::new().contains(0));
    }

    #[test]
    fn remove_value() {
        let mut ring = hex(&[1, 2, 3, 2]);

        assert!(ring.remove_value(2));
        assert_eq!(ring, [1, 3, 2]);
        assert!(!ring.remove_value(7));
        ring.assert_invariants();
    }

    #[test]
    fn remove_if_and_retain() {
        let mut ring = hex(&[1, 2, 3, 4, 5, 6]);

        assert!(ring.remove_if(|d| d % 2 == 0));
        assert_eq!(ring, [1, 3, 5]);
        assert_eq!(ring.first(), Some(1));
        assert_eq!(ring.last(), Some(5));
        ring.assert_invariants();

        assert!(!ring.remove_if(|d| d > 9));
        assert!(ring.retain(|d| d == 3));
        assert_eq!(ring, [3]);
        ring.assert_invariants();
    }

    #[test]
    fn remove_if_everything() {
        let mut ring = hex(&[7, 7, 7]);

        assert!(ring.remove_if(|d| d == 7));
        assert!(ring.is_empty());
        ring.assert_invariants();

        assert!(!ring.retain(|_| false));
    }

    #[test]
    fn remove_if_head_and_tail() {
        let mut ring = hex(&[0, 1, 0, 1, 0]);

        assert!(ring.remove_if(|d| d == 0));
        assert_eq!(ring, [1, 1]);
        ring.assert_invariants();
    }

    #[test]
    fn bulk_append_is_atomic() {
        let mut ring = DigitRing::from_digits(Radix::Binary, &[1]).unwrap();

        assert!(matches!(
            ring.append_all([0, 1, 2]),
            Err(RingError::InvalidDigit { digit: 2, .. })
        ));
        assert_eq!(ring, [1]);

        assert!(ring.append_all([0, 1]).unwrap());
        assert!(!ring.append_all([]).unwrap());
        assert_eq!(ring, [1, 0, 1]);
    }

    #[test]
    fn bulk_insert() {
        let mut ring = hex(&[1, 5]);

        assert!(ring.insert_all(1, [2, 3, 4]).unwrap());
        assert_eq!(ring, [1, 2, 3, 4, 5]);
        assert!(ring.insert_all(0, [0]).unwrap());
        assert!(ring.insert_all(6, [6]).unwrap());
        assert_eq!(ring, [0, 1, 2, 3, 4, 5, 6]);

        assert!(ring.insert_all(8, [1]).is_err());
        assert!(ring.insert_all(0, [1, 16]).is_err());
        assert_eq!(ring.len(), 7);
        ring.assert_invariants();
    }

    #[test]
    fn sublist() {
        let ring = hex(&[1, 2, 3, 4]);
        let mut sub = ring.sublist(1, 3).unwrap();

        assert_eq!(sub, [2, 3]);
        assert_eq!(sub.radix(), Radix::Hexadecimal);
        sub.set(0, 9).unwrap();
        assert_eq!(ring, [1, 2, 3, 4]);

        assert!(ring.sublist(2, 2).unwrap().is_empty());
        assert_eq!(ring.sublist(0, 4).unwrap(), ring);
        assert!(matches!(
            ring.sublist(0, 5),
            Err(RingError::IndexOutOfRange { index: 5, len: 4 })
        ));
        assert!(matches!(
            ring.sublist(3, 2),
            Err(RingError::IndexOutOfRange { index: 3, len: 4 })
        ));
    }

    #[test]
    fn swap() {
        let mut ring = hex(&[1, 2, 3]);

        assert!(ring.swap(0, 2));
        assert_eq!(ring, [3, 2, 1]);
        assert!(ring.swap(1, 1));
        assert!(!ring.swap(0, 3));
        assert!(!ring.swap(5, 0));
        assert_eq!(ring, [3, 2, 1]);
    }

    #[test]
    fn sort() {
        let mut ring = hex(&[0xB, 3, 0, 0xF, 3, 7]);

        ring.sort_ascending();
        assert_eq!(ring, [0, 3, 3, 7, 0xB, 0xF]);
        ring.sort_descending();
        assert_eq!(ring, [0xF, 0xB, 7, 3, 3, 0]);
        ring.assert_invariants();

        let mut single = hex(&[4]);
        single.sort_descending();
        assert_eq!(single, [4]);
    }

    #[test]
    fn sort_random() {
        let rng = &mut thread_rng();
        let digits: Vec<Digit> = (0..500).map(|_| rng.gen_range(0..16)).collect();

        let mut ring = hex(&digits);
        let mut expected = digits.clone();
        expected.sort_unstable();

        ring.sort_ascending();
        assert_eq!(ring, expected);

        expected.reverse();
        ring.sort_descending();
        assert_eq!(ring, expected);
    }

    #[test]
    fn sort_keeps_links() {
        let mut ring = hex(&[9, 1, 8, 2, 7]);
        ring.remove(1).unwrap();
        ring.push(0).unwrap();
        ring.shift_left();

        let slots = |r: &DigitRing| {
            let head = r.head_slot().unwrap();
            (0..r.len())
                .scan(head, |slot, _| {
                    let current = *slot;
                    *slot = r.next_slot(current);
                    Some(current)
                })
                .collect::<Vec<_>>()
        };
        let before = slots(&ring);

        ring.sort_ascending();

        assert_eq!(slots(&ring), before);
        assert_eq!(ring, [0, 2, 7, 8, 9]);
        ring.assert_invariants();
    }

    #[test]
    fn shift() {
        let mut ring = hex(&[1, 2, 3, 4]);

        ring.shift_left();
        assert_eq!(ring, [2, 3, 4, 1]);
        assert_eq!(ring.len(), 4);
        ring.assert_invariants();

        ring.shift_right();
        ring.shift_right();
        assert_eq!(ring, [4, 1, 2, 3]);
        ring.assert_invariants();

        ring.insert(0, 9).unwrap();
        ring.shift_left();
        assert_eq!(ring, [4, 1, 2, 3, 9]);
        ring.assert_invariants();
    }

    #[test]
    fn shift_small() {
        let mut single = hex(&[5]);
        single.shift_left();
        single.shift_right();
        assert_eq!(single, [5]);

        let mut empty = DigitRing::new();
        empty.shift_left();
        empty.shift_right();
        assert!(empty.is_empty());

        let mut pair = hex(&[1, 2]);
        pair.shift_right();
        assert_eq!(pair, [2, 1]);
        pair.assert_invariants();
    }

    #[test]
    fn shift_round_trip() {
        let mut ring = hex(&[1, 2, 3, 4, 5]);

        for _ in 0..ring.len() {
            ring.shift_left();
        }
        assert_eq!(ring, [1, 2, 3, 4, 5]);

        for _ in 0..3 {
            ring.shift_right();
        }
        for _ in 0..3 {
            ring.shift_left();
        }
        assert_eq!(ring, [1, 2, 3, 4, 5]);
    }
}
