//! Radix constants shared by the ring and the number view.

use crate::Radix;

/// Radix a freshly constructed ring starts in.
pub const MAIN_RADIX: Radix = Radix::Hexadecimal;

/// Radix `change_base` switches to from [`MAIN_RADIX`].
pub const ADDITIONAL_RADIX: Radix = Radix::Binary;

/// Number of digits packed into one `u64` before it is folded into the big integer. These
/// are the lower ends of the significand exponent ranges, so `radix ^ CHUNK_DIGITS` always
/// fits in a `u64`.
pub const BIN_CHUNK_DIGITS: u32 = 63;
pub const OCT_CHUNK_DIGITS: u32 = 20;
pub const DEC_CHUNK_DIGITS: u32 = 18;
pub const HEX_CHUNK_DIGITS: u32 = 15;

/// `radix ^ CHUNK_DIGITS`, the scale a whole chunk shifts the accumulator by.
pub const BIN_CHUNK_SCALE: u64 = 1 << BIN_CHUNK_DIGITS;
pub const OCT_CHUNK_SCALE: u64 = 8u64.pow(OCT_CHUNK_DIGITS);
pub const DEC_CHUNK_SCALE: u64 = 10u64.pow(DEC_CHUNK_DIGITS);
pub const HEX_CHUNK_SCALE: u64 = 16u64.pow(HEX_CHUNK_DIGITS);
