//! Traits for things that can stand in for a ring in number-domain operations.

use malachite::Natural;

use crate::{consts::MAIN_RADIX, number::fold_digits, Digit, DigitRing, Radix, RingResult};

/// Anything that reads as a sequence of digits, most significant first, in a stated
/// radix. [`DigitRing::combine`] and [`DigitRing::cmp_value`] accept any implementer.
pub trait DigitSource {
    fn radix(&self) -> Radix;

    fn digits(&self) -> impl Iterator<Item = Digit> + '_;

    /// Value of the digits in `self.radix()`. Fails on the first digit that is out of
    /// range for the radix
    fn magnitude(&self) -> RingResult<Natural> {
        let radix = self.radix();
        let digits = self
            .digits()
            .map(|d| radix.check_digit(d))
            .collect::<RingResult<Vec<_>>>()?;

        Ok(fold_digits(radix, digits))
    }
}

impl DigitSource for DigitRing {
    fn radix(&self) -> Radix {
        DigitRing::radix(self)
    }

    fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.iter()
    }

    // Digits were validated on the way in
    fn magnitude(&self) -> RingResult<Natural> {
        Ok(self.to_natural())
    }
}

/// A borrowed digit slice tagged with the radix it is written in
#[derive(Clone, Copy, Debug)]
pub struct RadixDigits<'a> {
    radix: Radix,
    digits: &'a [Digit],
}

impl<'a> RadixDigits<'a> {
    pub fn new(radix: Radix, digits: &'a [Digit]) -> Self {
        Self { radix, digits }
    }
}

impl DigitSource for RadixDigits<'_> {
    fn radix(&self) -> Radix {
        self.radix
    }

    fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }
}

/// Bare digit sequences carry no radix, they are read in the main radix
impl DigitSource for [Digit] {
    fn radix(&self) -> Radix {
        MAIN_RADIX
    }

    fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.iter().copied()
    }
}

impl DigitSource for Vec<Digit> {
    fn radix(&self) -> Radix {
        MAIN_RADIX
    }

    fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.iter().copied()
    }
}
