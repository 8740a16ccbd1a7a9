use crate::{Digit, Radix};

/// Uppercase alphanumeric symbol for `digit`, or `None` if it is not a digit of `radix`
pub fn digit_to_symbol(digit: Digit, radix: Radix) -> Option<char> {
    char::from_digit(digit as u32, radix.into()).map(|c| c.to_ascii_uppercase())
}

/// Value of an alphanumeric symbol in `radix`, accepting either case
pub fn symbol_to_digit(symbol: char, radix: Radix) -> Option<Digit> {
    symbol.to_digit(radix.into()).map(|d| d as Digit)
}
