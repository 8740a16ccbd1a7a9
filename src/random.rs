use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use crate::{Digit, DigitRing, Radix};

/// Distribution over rings of a fixed radix and length with uniformly random digits.
///
/// In canonical mode the leading digit is never zero (unless the ring has a single digit),
/// so the sampled ring is exactly what parsing its own value would produce.
///
/// # Examples
/// ```
/// use digitring::{random::RandomDigits, Radix};
/// use rand::{distributions::Distribution, thread_rng};
///
/// let ring = RandomDigits::new(Radix::Decimal, 20).canonical().sample(&mut thread_rng());
/// assert_eq!(ring.len(), 20);
/// assert_ne!(ring.first(), Some(0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RandomDigits {
    radix: Radix,
    len: usize,
    canonical: bool,
}

impl RandomDigits {
    pub fn new(radix: Radix, len: usize) -> Self {
        Self {
            radix,
            len,
            canonical: false,
        }
    }

    pub fn canonical(self) -> Self {
        Self {
            canonical: true,
            ..self
        }
    }
}

impl Distribution<DigitRing> for RandomDigits {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DigitRing {
        let any_digit: Uniform<Digit> = Uniform::new(0, self.radix.value());
        let leading_digit: Uniform<Digit> = Uniform::new(1, self.radix.value());

        let mut ring = DigitRing::with_radix(self.radix);

        for i in 0..self.len {
            let digit = if self.canonical && i == 0 && self.len > 1 {
                leading_digit.sample(rng)
            } else {
                any_digit.sample(rng)
            };

            ring.push_unchecked(digit);
        }

        ring
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, iter::from_fn};

    use rand::thread_rng;

    use super::*;

    #[test]
    fn sample_shape() {
        let rng = &mut thread_rng();

        for radix in Radix::ALL {
            let ring = RandomDigits::new(radix, 50).sample(rng);

            assert_eq!(ring.len(), 50);
            assert_eq!(ring.radix(), radix);
            assert!(ring.iter().all(|d| radix.is_valid_digit(d)));
            ring.assert_invariants();
        }

        assert!(RandomDigits::new(Radix::Binary, 0).sample(rng).is_empty());
    }

    #[test]
    fn canonical_has_no_leading_zero() {
        let rng = &mut thread_rng();
        let dist = RandomDigits::new(Radix::Binary, 8).canonical();

        for ring in from_fn(|| Some(dist.sample(rng))).take(200) {
            assert_eq!(ring.first(), Some(1));
        }
    }

    // Probabilistic: each hex digit should show up about 1/16 of the time. Very unlikely
    // to fail, rerun if it does
    #[test]
    fn digits_are_uniform() {
        let ring = RandomDigits::new(Radix::Hexadecimal, 16_000).sample(&mut thread_rng());
        let mut freq: HashMap<Digit, u64> = HashMap::new();

        for digit in ring.iter() {
            *freq.entry(digit).or_default() += 1;
        }

        assert_eq!(freq.len(), 16);
        for (digit, count) in freq {
            assert!(
                count.abs_diff(1000) < 200,
                "digit {} appeared {} times",
                digit,
                count
            );
        }
    }
}
