//! The supported radixes and the main/additional pair a ring toggles between.

use std::fmt::{self, Display, Formatter};

use malachite::Natural;

use crate::{
    consts::{
        ADDITIONAL_RADIX, BIN_CHUNK_DIGITS, BIN_CHUNK_SCALE, DEC_CHUNK_DIGITS, DEC_CHUNK_SCALE,
        HEX_CHUNK_DIGITS, HEX_CHUNK_SCALE, MAIN_RADIX, OCT_CHUNK_DIGITS, OCT_CHUNK_SCALE,
    },
    Digit, RingError, RingResult,
};

/// A numeral system a ring can store its digits in.
///
/// Only the bases with a native formatting path are supported, which keeps every
/// conversion a single call into the big integer library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// Numeric value of the radix, e.g. 16 for hexadecimal
    pub const fn value(self) -> u8 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_value(value: u32) -> RingResult<Self> {
        match value {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            _ => Err(RingError::InvalidArgument(format!(
                "unsupported radix {}, expected one of 2, 8, 10, 16",
                value
            ))),
        }
    }

    pub fn is_valid_digit(self, digit: Digit) -> bool {
        digit < self.value()
    }

    pub fn check_digit(self, digit: Digit) -> RingResult<Digit> {
        if self.is_valid_digit(digit) {
            Ok(digit)
        } else {
            Err(RingError::InvalidDigit { digit, radix: self })
        }
    }

    /// How many digits fit in one `u64` chunk, and the scale of a full chunk
    pub(crate) const fn chunk(self) -> (u32, u64) {
        match self {
            Radix::Binary => (BIN_CHUNK_DIGITS, BIN_CHUNK_SCALE),
            Radix::Octal => (OCT_CHUNK_DIGITS, OCT_CHUNK_SCALE),
            Radix::Decimal => (DEC_CHUNK_DIGITS, DEC_CHUNK_SCALE),
            Radix::Hexadecimal => (HEX_CHUNK_DIGITS, HEX_CHUNK_SCALE),
        }
    }

    /// Positional notation of `value` in this radix, lowercase, no prefix
    pub(crate) fn format(self, value: &Natural) -> String {
        match self {
            Radix::Binary => format!("{:b}", value),
            Radix::Octal => format!("{:o}", value),
            Radix::Decimal => value.to_string(),
            Radix::Hexadecimal => format!("{:x}", value),
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u32> for Radix {
    type Error = RingError;

    fn try_from(value: u32) -> RingResult<Self> {
        Self::from_value(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.value() as u32
    }
}

/// The two radixes `change_base` toggles a ring between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingConfig {
    main: Radix,
    additional: Radix,
}

impl RingConfig {
    pub fn new(main: Radix, additional: Radix) -> RingResult<Self> {
        if main == additional {
            return Err(RingError::InvalidArgument(format!(
                "main and additional radix are both {}",
                main
            )));
        }

        Ok(Self { main, additional })
    }

    pub fn main(&self) -> Radix {
        self.main
    }

    pub fn additional(&self) -> Radix {
        self.additional
    }

    pub fn contains(&self, radix: Radix) -> bool {
        radix == self.main || radix == self.additional
    }

    /// The member of the pair that is not `radix`. A radix outside the pair maps to main.
    pub fn other(&self, radix: Radix) -> Radix {
        if radix == self.main {
            self.additional
        } else {
            self.main
        }
    }

    /// Returns a pair containing `radix`, keeping `self` when it already does
    pub(crate) fn anchored(self, radix: Radix) -> Self {
        if self.contains(radix) {
            self
        } else if radix == ADDITIONAL_RADIX {
            Self {
                main: MAIN_RADIX,
                additional: radix,
            }
        } else {
            Self {
                main: radix,
                additional: ADDITIONAL_RADIX,
            }
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            main: MAIN_RADIX,
            additional: ADDITIONAL_RADIX,
        }
    }
}
