//! Arbitrary precision, non-negative numbers stored as a circular singly linked list of
//! digits.
//!
//! A [`DigitRing`] is both a mutable list of digits (indexed access, insertion, removal,
//! iteration, sublists, sorting, rotation) and a number in a given [`Radix`] that can be
//! converted to and from a big integer, parsed from and formatted as decimal text,
//! switched to its other radix, and combined with another digit source by bitwise AND.
//!
//! # Examples
//! ```
//! use digitring::{DigitRing, Radix};
//!
//! let ring: DigitRing = "255".parse().unwrap();
//! assert_eq!(ring.radix(), Radix::Hexadecimal);
//! assert_eq!(ring.to_string(), "FF");
//!
//! let binary = ring.change_base();
//! assert_eq!(binary.to_string(), "11111111");
//! assert_eq!(binary.to_decimal_string(), "255");
//! ```

// Lets the `ring!` expansion name this crate from inside it
extern crate self as digitring;

use std::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

pub mod consts;
pub mod cursor;
pub mod error;
pub mod io;
mod list;
mod macros;
pub mod number;
pub mod radix;
pub mod random;
pub mod traits;
pub mod utils;

pub use cursor::{Cursor, Iter};
pub use digitring_macro::ring;
pub use error::{RingError, RingResult};
pub use radix::{Radix, RingConfig};
pub use traits::{DigitSource, RadixDigits};

/// One positional symbol, always in `[0, radix)` for the ring holding it
pub type Digit = u8;

#[derive(Clone, Copy, Debug)]
struct Node {
    digit: Digit,
    /// Slot of the successor. A single node links to itself
    next: usize,
}

/// A number stored most significant digit first in a circular linked list.
///
/// Nodes live in a slot arena and link to each other by slot index, so the cycle from
/// the tail back to the head needs no shared ownership. Freed slots are recycled through
/// a free list. Index 0 is the head, index `len - 1` the tail, and the tail always links
/// back to the head.
pub struct DigitRing {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    radix: Radix,
    config: RingConfig,
    /// Bumped on every structural change, checked by cursors
    mod_count: u64,
    /// Unique per ring and per clone, so a cursor only accepts the ring it came from
    id: u64,
}

static NEXT_RING_ID: AtomicU64 = AtomicU64::new(0);

fn next_ring_id() -> u64 {
    NEXT_RING_ID.fetch_add(1, Ordering::Relaxed)
}

impl DigitRing {
    /// Empty ring in the default main radix
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    /// Empty ring in `config`'s main radix
    pub fn with_config(config: RingConfig) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            radix: config.main(),
            config,
            mod_count: 0,
            id: next_ring_id(),
        }
    }

    /// Empty ring in `radix`. The radix pair is the default one if it contains `radix`,
    /// otherwise `radix` is paired with the default additional radix
    pub fn with_radix(radix: Radix) -> Self {
        let mut ring = Self::with_config(RingConfig::default().anchored(radix));
        ring.radix = radix;
        ring
    }

    /// Builds a ring holding `digits` in order, most significant first
    pub fn from_digits(radix: Radix, digits: &[Digit]) -> RingResult<Self> {
        for &digit in digits {
            radix.check_digit(digit)?;
        }

        Ok(Self::__from_validated_unchecked(radix, digits))
    }

    /// Expansion target of [`ring!`], which checks every digit at compile time.
    ///
    /// Digits are only checked by `debug_assert!`. Calling this with a digit outside
    /// `[0, radix)` leaves a ring whose number view and display are wrong, use
    /// [`from_digits`](Self::from_digits) instead.
    #[doc(hidden)]
    pub fn __from_validated_unchecked(radix: Radix, digits: &[Digit]) -> Self {
        let mut ring = Self::with_radix(radix);

        for &digit in digits {
            debug_assert!(radix.is_valid_digit(digit));
            ring.push_unchecked(digit);
        }

        ring
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn config(&self) -> RingConfig {
        self.config
    }

    /// Most significant digit, O(1)
    pub fn first(&self) -> Option<Digit> {
        self.head.map(|slot| self.nodes[slot].digit)
    }

    /// Least significant digit, O(1)
    pub fn last(&self) -> Option<Digit> {
        self.tail.map(|slot| self.nodes[slot].digit)
    }

    pub fn get(&self, index: usize) -> RingResult<Digit> {
        self.check_index(index)?;

        Ok(self.nodes[self.slot_at(index)].digit)
    }

    /// Replaces the digit at `index`, returning the previous one
    pub fn set(&mut self, index: usize, digit: Digit) -> RingResult<Digit> {
        self.radix.check_digit(digit)?;
        self.check_index(index)?;

        let slot = self.slot_at(index);
        Ok(std::mem::replace(&mut self.nodes[slot].digit, digit))
    }

    /// Inserts `digit` so that it ends up at `index`. `index == len` appends.
    pub fn insert(&mut self, index: usize, digit: Digit) -> RingResult<()> {
        if index > self.len {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.radix.check_digit(digit)?;

        match (self.head, self.tail) {
            (Some(head), Some(tail)) if index == 0 => {
                let slot = self.alloc(digit, head);
                self.nodes[tail].next = slot;
                self.head = Some(slot);
            }
            (Some(_), Some(_)) if index < self.len => {
                let prev = self.slot_at(index - 1);
                let slot = self.alloc(digit, self.nodes[prev].next);
                self.nodes[prev].next = slot;
            }
            _ => {
                self.push_unchecked(digit);
                return Ok(());
            }
        }

        self.len += 1;
        self.mod_count += 1;

        Ok(())
    }

    /// Appends `digit` as the new least significant digit
    pub fn push(&mut self, digit: Digit) -> RingResult<()> {
        self.radix.check_digit(digit)?;
        self.push_unchecked(digit);

        Ok(())
    }

    /// Removes and returns the digit at `index`
    pub fn remove(&mut self, index: usize) -> RingResult<Digit> {
        self.check_index(index)?;

        let prev = match index {
            0 => self.tail_slot(),
            _ => self.slot_at(index - 1),
        };
        let slot = self.nodes[prev].next;

        Ok(self.unlink(prev, slot))
    }

    /// Drops every node and returns to the empty state, keeping radix and config
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.mod_count += 1;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn to_vec(&self) -> Vec<Digit> {
        self.iter().collect()
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn head_slot(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn digit_in(&self, slot: usize) -> Digit {
        self.nodes[slot].digit
    }

    pub(crate) fn set_digit_in(&mut self, slot: usize, digit: Digit) {
        self.nodes[slot].digit = digit;
    }

    pub(crate) fn next_slot(&self, slot: usize) -> usize {
        self.nodes[slot].next
    }

    pub(crate) fn check_index(&self, index: usize) -> RingResult<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(RingError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Slot holding position `index`. Caller guarantees `index < len`
    pub(crate) fn slot_at(&self, index: usize) -> usize {
        let mut slot = self.head_slot_unchecked();
        for _ in 0..index {
            slot = self.nodes[slot].next;
        }
        slot
    }

    /// Replaces radix, config and every digit at once
    pub(crate) fn replace_contents(&mut self, radix: Radix, digits: impl IntoIterator<Item = Digit>) {
        self.clear();
        self.config = self.config.anchored(radix);
        self.radix = radix;

        for digit in digits {
            debug_assert!(radix.is_valid_digit(digit));
            self.push_unchecked(digit);
        }
    }

    pub(crate) fn push_unchecked(&mut self, digit: Digit) {
        match self.tail {
            None => {
                let slot = self.alloc(digit, 0);
                self.nodes[slot].next = slot;
                self.head = Some(slot);
                self.tail = Some(slot);
            }
            Some(tail) => {
                let slot = self.alloc(digit, self.head_slot_unchecked());
                self.nodes[tail].next = slot;
                self.tail = Some(slot);
            }
        }

        self.len += 1;
        self.mod_count += 1;
    }

    /// Unlinks `slot`, whose predecessor is `prev`, and returns its digit
    pub(crate) fn unlink(&mut self, prev: usize, slot: usize) -> Digit {
        let digit = self.nodes[slot].digit;

        if self.len == 1 {
            self.clear();
            return digit;
        }

        let next = self.nodes[slot].next;
        self.nodes[prev].next = next;

        if self.head == Some(slot) {
            self.head = Some(next);
        }
        if self.tail == Some(slot) {
            self.tail = Some(prev);
        }

        self.free.push(slot);
        self.len -= 1;
        self.mod_count += 1;

        digit
    }

    /// Moves the head/tail window. Both slots must be linked, `tail.next == head`
    pub(crate) fn set_window(&mut self, head: usize, tail: usize) {
        debug_assert_eq!(self.nodes[tail].next, head);

        self.head = Some(head);
        self.tail = Some(tail);
        self.mod_count += 1;
    }

    pub(crate) fn tail_slot(&self) -> usize {
        self.tail.unwrap_or_default()
    }

    fn head_slot_unchecked(&self) -> usize {
        self.head.unwrap_or_default()
    }

    fn alloc(&mut self, digit: Digit, next: usize) -> usize {
        let node = Node { digit, next };

        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Panics if the ring's bookkeeping disagrees with its linkage
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0, "empty ring with non-zero length"),
            (Some(head), Some(tail)) => {
                assert!(self.len > 0, "ring with nodes but zero length");
                assert_eq!(self.nodes[tail].next, head, "tail does not link to head");

                let mut slot = head;
                for step in 1..=self.len {
                    assert!(self.radix.is_valid_digit(self.nodes[slot].digit));
                    slot = self.nodes[slot].next;

                    if step < self.len {
                        assert_ne!(slot, head, "ring closed after {} of {} nodes", step, self.len);
                    }
                }
                assert_eq!(slot, head, "ring does not close after {} nodes", self.len);
            }
            _ => panic!("exactly one of head and tail is set"),
        }
    }
}

impl Clone for DigitRing {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            radix: self.radix,
            config: self.config,
            mod_count: self.mod_count,
            id: next_ring_id(),
        }
    }
}

impl Default for DigitRing {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for DigitRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitRing")
            .field("radix", &self.radix.value())
            .field("digits", &self.to_vec())
            .finish()
    }
}

/// Rings are equal when they hold the same digit sequence, whatever their radix
impl PartialEq for DigitRing {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitRing {}

impl Hash for DigitRing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for digit in self.iter() {
            state.write_u8(digit);
        }
    }
}

impl<'a> IntoIterator for &'a DigitRing {
    type Item = Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

macros::impl_digit_eq!([Digit], Vec<Digit>, &[Digit]);
macros::impl_digit_eq!(const N => [Digit; N]);
