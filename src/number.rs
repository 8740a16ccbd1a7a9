//! The ring read as a number: big integer conversion, decimal text, base change and the
//! bitwise combination of two digit sources.
//!
//! Every operation here goes through the big integer value and builds a fresh digit
//! sequence from it, so the result never shares nodes with its inputs.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;
use malachite::{Integer, Natural};

use crate::{
    traits::DigitSource,
    utils::{digit_to_symbol, symbol_to_digit},
    Digit, DigitRing, Radix, RingError, RingResult,
};

/// Folds digits, most significant first, into their value in `radix`.
///
/// Digits are packed into `u64` chunks first so the big integer only sees one
/// multiply-add per chunk instead of one per digit
pub(crate) fn fold_digits<I>(radix: Radix, digits: I) -> Natural
where
    I: IntoIterator<Item = Digit>,
{
    let (width, scale) = radix.chunk();
    let base = radix.value() as u64;
    let scale = Natural::from(scale);

    let mut value = Natural::from(0u32);
    let mut chunk = 0u64;
    let mut filled = 0u32;

    for digit in digits {
        chunk = chunk * base + digit as u64;
        filled += 1;

        if filled == width {
            value = value * &scale + Natural::from(chunk);
            chunk = 0;
            filled = 0;
        }
    }

    if filled > 0 {
        value = value * Natural::from(base.pow(filled)) + Natural::from(chunk);
    }

    value
}

/// Digits of `value` in `radix`, most significant first. Zero is the single digit 0
pub(crate) fn natural_to_digits(value: &Natural, radix: Radix) -> Vec<Digit> {
    radix
        .format(value)
        .chars()
        .filter_map(|c| symbol_to_digit(c, radix))
        .collect()
}

/// Parses trimmed, unsigned base-10 text
fn parse_decimal_text(text: &str) -> RingResult<Natural> {
    let trimmed = text.trim();
    let is_decimal = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());

    if !is_decimal {
        return Err(RingError::InvalidFormat(text.to_string()));
    }

    trimmed
        .parse::<Natural>()
        .map_err(|_| RingError::InvalidFormat(text.to_string()))
}

impl DigitRing {
    /// Value of the digits in the ring's radix. The empty ring is zero
    pub fn to_natural(&self) -> Natural {
        fold_digits(self.radix(), self.iter())
    }

    pub fn to_integer(&self) -> Integer {
        Integer::from(self.to_natural())
    }

    pub fn from_natural(value: &Natural, radix: Radix) -> Self {
        let mut ring = Self::with_radix(radix);
        ring.assign_natural(value, radix);
        ring
    }

    /// Fails with [`RingError::NegativeValue`] for negative values
    pub fn from_integer(value: &Integer, radix: Radix) -> RingResult<Self> {
        let mut ring = Self::with_radix(radix);
        ring.assign_integer(value, radix)?;
        Ok(ring)
    }

    /// Replaces every digit and the radix with `value` written in `radix`
    pub fn assign_natural(&mut self, value: &Natural, radix: Radix) {
        self.replace_contents(radix, natural_to_digits(value, radix));
    }

    /// Like [`assign_natural`](Self::assign_natural), leaving the ring untouched if
    /// `value` is negative
    pub fn assign_integer(&mut self, value: &Integer, radix: Radix) -> RingResult<()> {
        let value = Natural::try_from(value.clone()).map_err(|_| RingError::NegativeValue)?;
        self.assign_natural(&value, radix);

        Ok(())
    }

    /// Replaces the contents with the value of decimal `text`, keeping the current radix.
    /// Surrounding whitespace is ignored
    pub fn parse_decimal(&mut self, text: &str) -> RingResult<()> {
        let value = parse_decimal_text(text)?;
        debug!(
            "parsed {} decimal digits into base {}",
            text.trim().len(),
            self.radix()
        );
        self.assign_natural(&value, self.radix());

        Ok(())
    }

    /// Ring in the main radix holding the value of decimal `text`
    pub fn from_decimal(text: &str) -> RingResult<Self> {
        let mut ring = Self::new();
        ring.parse_decimal(text)?;
        Ok(ring)
    }

    /// Like [`from_decimal`](Self::from_decimal) but yields an empty ring instead of an
    /// error when `text` is empty or not a valid decimal number
    pub fn from_decimal_lossy(text: &str) -> Self {
        let mut ring = Self::new();

        if let Err(e) = ring.parse_decimal(text) {
            debug!("leaving ring empty: {}", e);
        }

        ring
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_natural().to_string()
    }

    /// Each digit as its uppercase symbol in the ring's radix, leading zeros included.
    /// The empty ring gives the empty string
    pub fn to_display_string(&self) -> RingResult<String> {
        self.iter()
            .map(|digit| {
                digit_to_symbol(digit, self.radix()).ok_or(RingError::InvalidDigit {
                    digit,
                    radix: self.radix(),
                })
            })
            .collect()
    }

    /// The same value written in the other radix of the ring's pair. `self` is untouched
    pub fn change_base(&self) -> DigitRing {
        let target = self.config().other(self.radix());
        debug!("changing base {} -> {}", self.radix(), target);

        let mut ring = DigitRing::with_config(self.config());
        ring.assign_natural(&self.to_natural(), target);
        ring
    }

    /// Bitwise AND of this value and `other`'s, written in this ring's radix
    pub fn combine<S>(&self, other: &S) -> RingResult<DigitRing>
    where
        S: DigitSource + ?Sized,
    {
        let value = self.to_natural() & other.magnitude()?;

        let mut ring = DigitRing::with_config(self.config());
        ring.assign_natural(&value, self.radix());
        debug!(
            "combined {} digits with a base {} source into {} digits",
            self.len(),
            other.radix(),
            ring.len()
        );

        Ok(ring)
    }

    /// Compares numeric values, unlike `==` which compares digit sequences
    pub fn cmp_value<S>(&self, other: &S) -> RingResult<Ordering>
    where
        S: DigitSource + ?Sized,
    {
        Ok(self.to_natural().cmp(&other.magnitude()?))
    }
}

impl FromStr for DigitRing {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl Display for DigitRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            let symbol = digit_to_symbol(digit, self.radix()).ok_or(fmt::Error)?;
            write!(f, "{}", symbol)?;
        }

        Ok(())
    }
}
