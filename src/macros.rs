// Generates symmetric `PartialEq` impls between `DigitRing` and plain digit sequences.
// Comparison is by length and digit order only, radix is ignored
macro_rules! impl_digit_eq {
    ( const $n:ident => $( $t:ty ),* ) => {
        $(
            impl<const $n: usize> PartialEq<$t> for DigitRing {
                fn eq(&self, other: &$t) -> bool {
                    self.len() == other.len() && self.iter().eq(other.iter().copied())
                }
            }

            impl<const $n: usize> PartialEq<DigitRing> for $t {
                fn eq(&self, other: &DigitRing) -> bool {
                    other == self
                }
            }
        )*
    };
    ( $( $t:ty ),* ) => {
        $(
            impl PartialEq<$t> for DigitRing {
                fn eq(&self, other: &$t) -> bool {
                    self.len() == other.len() && self.iter().eq(other.iter().copied())
                }
            }

            impl PartialEq<DigitRing> for $t {
                fn eq(&self, other: &DigitRing) -> bool {
                    other == self
                }
            }
        )*
    };
}

pub(crate) use impl_digit_eq;
